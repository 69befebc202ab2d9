//! Tests for the `viol` facade re-exports.

use rstest::rstest;
use viol::prelude::*;

#[rstest]
fn test_core_items_at_root() {
	let attributes = attrs! { "class" => "a b", "hidden" => true }.unwrap();
	let element = Element::with("section", "x", attributes).unwrap();
	assert_eq!(
		viol::render(&element),
		r#"<section class="a b" hidden="hidden">x</section>"#
	);
}

#[cfg(feature = "html")]
#[rstest]
fn test_tags_and_layout() {
	use viol::tags::{h1, main};

	let mut settings = HtmlSettings::default();
	settings.layout.stylesheets.clear();
	settings.layout.scripts.clear();

	let content = main().child_builder(h1().child("Title")).build().unwrap();
	let page = BasicLayout::new(content).title("Test");
	let html = page.render_with_settings(&settings).unwrap();

	assert!(html.starts_with("<!DOCTYPE html>"));
	assert!(html.contains("<title>Test</title>"));
	assert!(html.contains("<main><h1>Title</h1></main>"));
}

#[cfg(feature = "http")]
#[rstest]
fn test_http_fragment_response() {
	use viol::tags::p;

	let response = render_html(&p().child("ok").build().unwrap());
	assert_eq!(response.status(), 200);
	assert_eq!(response.body().as_ref(), b"<p>ok</p>");
}
