//! Full-document page layout.

use viol_core::{Element, HtmlResult, IntoNodes, Node, render_with};

use crate::settings::{HtmlSettings, html_settings};
use crate::tags::{body, head, html, link, meta, script, title};

/// A complete HTML document around some body content.
///
/// Renders `<!DOCTYPE html>` followed by `<html lang>` with a `<head>` holding
/// the charset and viewport meta tags, the title, the configured stylesheets
/// and scripts and any extra head nodes, and a `<body>` holding the body nodes
/// followed by any extra body nodes.
///
/// Asset URLs and defaults come from [`LayoutSettings`](crate::settings::LayoutSettings).
///
/// ```
/// use viol_html::layout::BasicLayout;
/// use viol_html::settings::{HtmlSettings, LayoutSettings};
/// use viol_html::tags::h1;
///
/// let mut settings = HtmlSettings::default();
/// settings.layout.stylesheets.clear();
/// settings.layout.scripts = vec!["/htmx.js".to_string()];
///
/// let page = BasicLayout::new(h1().child("Hi").build().unwrap()).title("Home");
/// assert_eq!(
///     page.render_with_settings(&settings).unwrap(),
///     concat!(
///         "<!DOCTYPE html><html lang=\"en\"><head>",
///         "<meta charset=\"utf-8\" />",
///         "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />",
///         "<title>Home</title>",
///         "<script src=\"/htmx.js\"></script>",
///         "</head><body><h1>Hi</h1></body></html>",
///     )
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasicLayout {
	title: Option<String>,
	lang: Option<String>,
	extra_head: Vec<Node>,
	body: Vec<Node>,
	extra_body: Vec<Node>,
}

impl BasicLayout {
	/// Creates a layout around `body`.
	pub fn new(body: impl IntoNodes) -> Self {
		Self {
			body: body.collect_nodes(),
			..Self::default()
		}
	}

	/// Sets the document title. Defaults to the configured title.
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	/// Sets the `lang` attribute. Defaults to the configured language.
	pub fn lang(mut self, lang: impl Into<String>) -> Self {
		self.lang = Some(lang.into());
		self
	}

	/// Appends nodes to the body content.
	pub fn append_body(mut self, nodes: impl IntoNodes) -> Self {
		nodes.into_nodes(&mut self.body);
		self
	}

	/// Appends nodes to the end of `<head>`.
	pub fn extra_head(mut self, nodes: impl IntoNodes) -> Self {
		nodes.into_nodes(&mut self.extra_head);
		self
	}

	/// Appends nodes to the end of `<body>`, after the body content.
	pub fn extra_body(mut self, nodes: impl IntoNodes) -> Self {
		nodes.into_nodes(&mut self.extra_body);
		self
	}

	/// The body content.
	pub fn body(&self) -> &[Node] {
		&self.body
	}

	/// Builds the `<html>` element using the installed settings.
	pub fn to_element(&self) -> HtmlResult<Element> {
		self.to_element_with_settings(html_settings())
	}

	/// Builds the `<html>` element using explicit settings.
	pub fn to_element_with_settings(&self, settings: &HtmlSettings) -> HtmlResult<Element> {
		let layout = &settings.layout;

		let mut head_builder = head()
			.child_builder(meta().attr("charset", layout.charset.as_str()))
			.child_builder(
				meta()
					.attr("name", "viewport")
					.attr("content", layout.viewport.as_str()),
			)
			.child_builder(title().child(self.title.as_deref().unwrap_or(&layout.title)));
		for href in &layout.stylesheets {
			head_builder = head_builder.child_builder(link().attr("rel", "stylesheet").attr("href", href));
		}
		for src in &layout.scripts {
			head_builder = head_builder.child_builder(script().attr("src", src));
		}
		let head_element = head_builder.child(self.extra_head.clone()).build()?;

		let body_element = body()
			.child(self.body.clone())
			.child(self.extra_body.clone())
			.build()?;

		html()
			.attr("lang", self.lang.as_deref().unwrap_or(&layout.lang))
			.child((head_element, body_element))
			.build()
	}

	/// Renders the full document using the installed settings.
	pub fn render(&self) -> HtmlResult<String> {
		self.render_with_settings(html_settings())
	}

	/// Renders the full document using explicit settings.
	pub fn render_with_settings(&self, settings: &HtmlSettings) -> HtmlResult<String> {
		let document = self.to_element_with_settings(settings)?;
		let mut out = String::from("<!DOCTYPE html>");
		if settings.render.pretty {
			out.push('\n');
		}
		out.push_str(&render_with(&document, &settings.render));
		Ok(out)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::settings::LayoutSettings;
	use crate::tags::{div, p};
	use rstest::rstest;
	use viol_core::{RenderOptions, TrustedHtml};

	fn bare_settings() -> HtmlSettings {
		let mut layout = LayoutSettings::default();
		layout.stylesheets.clear();
		layout.scripts.clear();
		HtmlSettings::default().with_layout(layout)
	}

	#[rstest]
	fn test_defaults_from_settings() {
		let html = BasicLayout::new(()).render_with_settings(&bare_settings()).unwrap();
		assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\"><head>"));
		assert!(html.contains("<title>Viol</title>"));
		assert!(html.ends_with("<body></body></html>"));
	}

	#[rstest]
	fn test_assets_in_order() {
		let html = BasicLayout::new(()).render_with_settings(&HtmlSettings::default()).unwrap();
		let css = html.find(r#"<link rel="stylesheet" href="/viol/static/css/bootstrap.min.css" />"#).unwrap();
		let htmx = html.find(r#"<script src="/viol/static/js/htmx.min.js"></script>"#).unwrap();
		let hyperscript = html.find(r#"<script src="/viol/static/js/_hyperscript.min.js"></script>"#).unwrap();
		assert!(css < htmx);
		assert!(htmx < hyperscript);
	}

	#[rstest]
	fn test_extra_content_placement() {
		let layout = BasicLayout::new(p().child("content").build().unwrap())
			.lang("fr")
			.title("Accueil")
			.extra_head(TrustedHtml::new(r#"<meta name="description" content="x">"#))
			.extra_body(div().id("modal").build().unwrap());
		let html = layout.render_with_settings(&bare_settings()).unwrap();
		assert!(html.contains(r#"<html lang="fr">"#));
		assert!(html.contains(r#"<title>Accueil</title><meta name="description" content="x"></head>"#));
		assert!(html.ends_with(r#"<body><p>content</p><div id="modal"></div></body></html>"#));
	}

	#[rstest]
	fn test_title_is_escaped() {
		let html = BasicLayout::new(())
			.title("A & B <C>")
			.render_with_settings(&bare_settings())
			.unwrap();
		assert!(html.contains("<title>A &amp; B &lt;C&gt;</title>"));
	}

	#[rstest]
	fn test_pretty_document() {
		let settings = bare_settings().with_render(RenderOptions::pretty());
		let html = BasicLayout::new(div().build().unwrap())
			.title("T")
			.render_with_settings(&settings)
			.unwrap();
		assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">\n  <head>\n    <meta charset=\"utf-8\" />"));
		assert!(html.contains("\n    <title>T</title>\n  </head>"));
		assert!(html.ends_with("<body>\n    <div></div>\n  </body>\n</html>"));
	}
}
