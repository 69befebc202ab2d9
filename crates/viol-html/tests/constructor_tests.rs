//! Generated constructors checked against an HTML parser.

use rstest::rstest;
use scraper::{Html, Selector};
use viol_core::{HtmlError, HxBinding, TrustedHtml, render};
use viol_html::tags::{b, br, button, del, form, img, input, label, li, option, p, select, table, td, tr, ul};
use viol_html::vocabulary::ELEMENTS;
use viol_html::{BasicLayout, ElementBuilder, HtmlSettings};

#[rstest]
fn test_every_table_entry_has_a_working_constructor() {
	for spec in ELEMENTS {
		let element = ElementBuilder::for_spec(spec).build().unwrap();
		assert_eq!(element.tag(), spec.tag);
		assert_eq!(element.is_void(), spec.is_void);
		let html = render(&element);
		if spec.is_void {
			assert_eq!(html, format!("<{} />", spec.tag));
		} else {
			assert_eq!(html, format!("<{0}></{0}>", spec.tag));
		}
	}
}

#[rstest]
fn test_void_constructors_reject_children() {
	for spec in ELEMENTS.iter().filter(|spec| spec.is_void) {
		let err = ElementBuilder::for_spec(spec).child("x").build().unwrap_err();
		assert_eq!(
			err,
			HtmlError::VoidElementChildren {
				tag: spec.tag.to_string()
			}
		);
	}
}

#[rstest]
fn test_paragraph_with_bold() {
	let para = p()
		.child(("a ", b().child("bold").build().unwrap(), " c"))
		.build()
		.unwrap();
	assert_eq!(render(&para), "<p>a <b>bold</b> c</p>");
}

#[rstest]
fn test_img_and_br() {
	let image = img().attr("src", "a.jpg").attr("alt", "x").build().unwrap();
	assert_eq!(render(&image), r#"<img src="a.jpg" alt="x" />"#);
	assert_eq!(render(&br().build().unwrap()), "<br />");
}

#[rstest]
fn test_del_constructor() {
	let removed = del().attr("datetime", "2024-01-01").child("old").build().unwrap();
	assert_eq!(render(&removed), r#"<del datetime="2024-01-01">old</del>"#);
}

#[rstest]
fn test_form_round_trip() {
	let search = form()
		.id("search")
		.attr("action", "/search")
		.attr("method", "get")
		.child_builder(label().attr("for", "q").child("Query"))
		.child_builder(
			input()
				.id("q")
				.attr("name", "q")
				.attr("type", "search")
				.bool_attr("required", true)
				.bool_attr("disabled", false),
		)
		.child_builder(
			select()
				.attr("name", "sort")
				.child_builder(option().attr("value", "new").bool_attr("selected", true).child("Newest"))
				.child_builder(option().attr("value", "top").child("Top")),
		)
		.child_builder(button().attr("type", "submit").child("Go"))
		.bind(HxBinding::get("/search").trigger("submit").target("#results"))
		.build()
		.unwrap();

	let doc = Html::parse_fragment(&render(&search));
	let form_sel = Selector::parse("form#search").unwrap();
	let parsed = doc.select(&form_sel).next().unwrap();
	assert_eq!(parsed.value().attr("hx-get"), Some("/search"));
	assert_eq!(parsed.value().attr("hx-trigger"), Some("submit from:#search"));
	assert_eq!(parsed.value().attr("hx-target"), Some("#results"));

	let input_sel = Selector::parse("input#q").unwrap();
	let field = doc.select(&input_sel).next().unwrap();
	assert_eq!(field.value().attr("required"), Some("required"));
	assert_eq!(field.value().attr("disabled"), None);

	let selected_sel = Selector::parse("option[selected]").unwrap();
	let selected: Vec<String> = doc.select(&selected_sel).map(|o| o.text().collect()).collect();
	assert_eq!(selected, vec!["Newest"]);
}

#[rstest]
fn test_table_structure() {
	let rows: Vec<_> = [("a", "1"), ("b", "2")]
		.into_iter()
		.map(|(key, value)| {
			tr().child_builder(td().child(key))
				.child_builder(td().child(value))
				.build()
				.unwrap()
		})
		.collect();
	let grid = table().class("table").child(rows).build().unwrap();
	assert_eq!(
		render(&grid),
		r#"<table class="table"><tr><td>a</td><td>1</td></tr><tr><td>b</td><td>2</td></tr></table>"#
	);
}

#[rstest]
fn test_hyperscript_and_style_shortcuts() {
	let item = li()
		.hyperscript("on click toggle .done")
		.style("cursor: pointer")
		.child("task")
		.build()
		.unwrap();
	let list = ul().child(item).build().unwrap();
	assert_eq!(
		render(&list),
		r#"<ul><li _="on click toggle .done" style="cursor: pointer">task</li></ul>"#
	);
}

#[rstest]
fn test_layout_document_parses() {
	let mut settings = HtmlSettings::default();
	settings.layout.title = "Default".to_string();
	let page = BasicLayout::new(p().child("Hello").build().unwrap())
		.extra_body(TrustedHtml::new("<script>init()</script>"));
	let html = page.render_with_settings(&settings).unwrap();

	let doc = Html::parse_document(&html);
	let title = Selector::parse("head > title").unwrap();
	assert_eq!(doc.select(&title).next().unwrap().inner_html(), "Default");
	let scripts = Selector::parse("head > script[src]").unwrap();
	assert_eq!(doc.select(&scripts).count(), 3);
	let body = Selector::parse("body > p").unwrap();
	assert_eq!(doc.select(&body).next().unwrap().inner_html(), "Hello");
	let trailing = Selector::parse("body > script").unwrap();
	assert_eq!(doc.select(&trailing).next().unwrap().inner_html(), "init()");
}
