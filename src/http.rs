//! Host framework boundary
//!
//! This module provides access to viol-http: rendering trees into
//! `http::Response<Bytes>`, reading htmx request headers, and setting htmx
//! response headers.
//!
//! ## Example
//!
//! ```
//! use viol::http::{HxResponse, render_html};
//! use viol::tags::p;
//!
//! let mut response = render_html(&p().child("Saved").build().unwrap());
//! HxResponse::new().trigger("saved").apply(response.headers_mut()).unwrap();
//!
//! assert_eq!(response.headers()["hx-trigger"], "saved");
//! assert_eq!(response.body().as_ref(), b"<p>Saved</p>");
//! ```

pub use viol_http::*;
