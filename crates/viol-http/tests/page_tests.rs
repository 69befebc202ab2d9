//! Fragment and full-page responses as a host framework would see them.

use http::header::{HeaderMap, HeaderName, HeaderValue};
use rstest::rstest;
use scraper::{Html, Selector};
use viol_core::HxBinding;
use viol_html::BasicLayout;
use viol_html::tags::{button, div, li, ul};
use viol_http::{HxResponse, render_html, render_page};

fn htmx_headers(boosted: bool) -> HeaderMap {
	let mut headers = HeaderMap::new();
	headers.insert(HeaderName::from_static("hx-request"), HeaderValue::from_static("true"));
	if boosted {
		headers.insert(HeaderName::from_static("hx-boosted"), HeaderValue::from_static("true"));
	}
	headers
}

fn todo_list() -> viol_core::Element {
	ul()
		.id("todos")
		.child_builder(li().child("write tests"))
		.child_builder(li().child("ship"))
		.build()
		.unwrap()
}

#[rstest]
#[case::plain_navigation(None, true)]
#[case::boosted_navigation(Some(true), true)]
#[case::htmx_swap(Some(false), false)]
fn test_fragment_or_document(#[case] htmx: Option<bool>, #[case] full_document: bool) {
	let headers = htmx.map(htmx_headers).unwrap_or_default();
	let response = render_page(&headers, todo_list(), BasicLayout::default().title("Todos")).unwrap();
	let body = std::str::from_utf8(response.body()).unwrap();

	assert_eq!(body.starts_with("<!DOCTYPE html>"), full_document);
	let doc = Html::parse_document(body);
	let items = Selector::parse("ul#todos > li").unwrap();
	assert_eq!(doc.select(&items).count(), 2);
}

#[rstest]
fn test_full_document_loads_htmx() {
	let response = render_page(&HeaderMap::new(), todo_list(), BasicLayout::default()).unwrap();
	let doc = Html::parse_document(std::str::from_utf8(response.body()).unwrap());
	let htmx = Selector::parse(r#"head > script[src$="htmx.min.js"]"#).unwrap();
	assert_eq!(doc.select(&htmx).count(), 1);
}

#[rstest]
fn test_bound_button_in_response() {
	let add = button()
		.id("add")
		.child("Add")
		.bind(HxBinding::post("/todos").target("#todos").swap("beforeend").trigger("click"))
		.build()
		.unwrap();
	let wrapper = div().child(add).build().unwrap();

	let response = render_html(&wrapper);
	let doc = Html::parse_fragment(std::str::from_utf8(response.body()).unwrap());
	let selector = Selector::parse("button#add").unwrap();
	let parsed = doc.select(&selector).next().unwrap();
	assert_eq!(parsed.value().attr("hx-post"), Some("/todos"));
	assert_eq!(parsed.value().attr("hx-trigger"), Some("click from:#add"));
	assert_eq!(parsed.value().attr("hx-target"), Some("#todos"));
	assert_eq!(parsed.value().attr("hx-swap"), Some("beforeend"));
}

#[rstest]
fn test_response_headers_applied_to_response() {
	let mut response = render_html("saved");
	HxResponse::new()
		.trigger(r#"{"todoAdded": {"id": 3}}"#)
		.reswap("none")
		.apply(response.headers_mut())
		.unwrap();

	assert_eq!(response.headers()["hx-trigger"], r#"{"todoAdded": {"id": 3}}"#);
	assert_eq!(response.headers()["hx-reswap"], "none");
	assert_eq!(response.headers()["content-type"], "text/html; charset=utf-8");
}
