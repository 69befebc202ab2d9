//! # viol-http
//!
//! The boundary with the host web framework. Rendered trees become
//! `http::Response<Bytes>` values, htmx request headers are read to decide
//! between a fragment and a full page, and htmx response headers are built
//! with [`HxResponse`]. Routing, sessions and the server loop belong to the
//! host framework.
//!
//! ## Example
//!
//! ```
//! use http::HeaderMap;
//! use viol_html::BasicLayout;
//! use viol_html::tags::p;
//! use viol_http::render_page;
//!
//! let mut headers = HeaderMap::new();
//! headers.insert("hx-request", "true".parse().unwrap());
//!
//! let response = render_page(&headers, p().child("partial").build().unwrap(), BasicLayout::default()).unwrap();
//! assert_eq!(response.body().as_ref(), b"<p>partial</p>");
//! ```

pub mod error;
pub mod htmx;
pub mod response;

pub use error::{HttpError, HttpResult};
pub use htmx::{HxRequest, HxResponse};
pub use response::{html_response, render_html, render_html_with_status, render_page, render_page_with_settings};
