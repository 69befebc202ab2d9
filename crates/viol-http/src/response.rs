//! Rendering shortcut functions
//!
//! Turn rendered trees into `http::Response<Bytes>` values the host framework can send.

use bytes::Bytes;
use http::header::{CONTENT_TYPE, HeaderMap, HeaderValue, VARY};
use http::{Response, StatusCode};
use viol_core::{IntoNodes, Renderable, render, render_with};
use viol_html::BasicLayout;
use viol_html::settings::{HtmlSettings, html_settings};

use crate::error::HttpResult;
use crate::htmx::HxRequest;

const TEXT_HTML: &str = "text/html; charset=utf-8";

/// Render a value as HTML and return an HTTP 200 response
///
/// Plain text is escaped; use [`TrustedHtml`](viol_core::TrustedHtml) for
/// markup that is already safe.
///
/// # Examples
///
/// ```
/// use viol_http::render_html;
/// use viol_html::tags::h1;
///
/// let response = render_html(&h1().child("Hello").build().unwrap());
/// assert_eq!(response.headers()["content-type"], "text/html; charset=utf-8");
/// assert_eq!(response.body().as_ref(), b"<h1>Hello</h1>");
/// ```
pub fn render_html<R: Renderable + ?Sized>(value: &R) -> Response<Bytes> {
	html_response(StatusCode::OK, render(value))
}

/// Render a value as HTML with an explicit status code
pub fn render_html_with_status<R: Renderable + ?Sized>(value: &R, status: StatusCode) -> Response<Bytes> {
	html_response(status, render(value))
}

/// Wrap an already rendered HTML string in a response
pub fn html_response(status: StatusCode, html: String) -> Response<Bytes> {
	let mut response = Response::new(Bytes::from(html));
	*response.status_mut() = status;
	response
		.headers_mut()
		.insert(CONTENT_TYPE, HeaderValue::from_static(TEXT_HTML));
	response
}

/// Render `content` as a fragment or as a full page depending on the request
///
/// htmx requests that swap part of the page (`HX-Request` without
/// `HX-Boosted`) get `content` alone. Every other request gets `content`
/// appended to the body of `layout` and rendered as a full document. The
/// response varies on `HX-Request` so caches keep the two apart.
///
/// Both branches follow the installed [`HtmlSettings`].
///
/// # Errors
///
/// Returns an error if the layout document cannot be built.
pub fn render_page(
	headers: &HeaderMap,
	content: impl IntoNodes,
	layout: BasicLayout,
) -> HttpResult<Response<Bytes>> {
	render_page_with_settings(headers, content, layout, html_settings())
}

/// [`render_page`] with explicit settings.
pub fn render_page_with_settings(
	headers: &HeaderMap,
	content: impl IntoNodes,
	layout: BasicLayout,
	settings: &HtmlSettings,
) -> HttpResult<Response<Bytes>> {
	let request = HxRequest::from_headers(headers);
	let nodes = content.collect_nodes();

	let html = if request.wants_fragment() {
		tracing::debug!(hx_target = ?request.target, "rendering fragment for htmx request");
		render_with(&nodes, &settings.render)
	} else {
		layout.append_body(nodes).render_with_settings(settings)?
	};

	let mut response = html_response(StatusCode::OK, html);
	response
		.headers_mut()
		.insert(VARY, HeaderValue::from_static("HX-Request"));
	Ok(response)
}
