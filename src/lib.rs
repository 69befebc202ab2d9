//! # Viol
//!
//! Component-based HTML building for htmx-driven web applications.
//!
//! Pages are trees of elements built in Rust. Each element carries its
//! attributes, its children and any htmx requests it fires, and the whole tree
//! renders to escaped markup in one pass.
//!
//! ## Feature Flags
//!
//! The element tree, attribute store and renderer are always available; with
//! `default-features = false` nothing else is compiled.
//!
//! - `html` - Generated per-tag constructors, the element vocabulary, settings and [`html::BasicLayout`]
//! - `http` - `http::Response` helpers and htmx request/response headers
//! - `full` (default) - Everything above
//!
//! ## Quick Example
//!
//! ```
//! # #[cfg(feature = "html")]
//! # {
//! use viol::prelude::*;
//! use viol::tags::{button, div};
//!
//! let panel = div()
//!     .id("panel")
//!     .child_builder(
//!         button()
//!             .id("refresh")
//!             .class("btn btn-primary")
//!             .child("Refresh")
//!             .bind(HxBinding::get("/panel").trigger("click").target("#panel")),
//!     )
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     render(&panel),
//!     concat!(
//!         r##"<div id="panel"><button id="refresh" class="btn btn-primary" "##,
//!         r##"hx-get="/panel" hx-trigger="click from:#refresh" hx-target="#panel">"##,
//!         "Refresh</button></div>",
//!     )
//! );
//! # }
//! ```

#[cfg(feature = "html")]
pub mod html;
#[cfg(feature = "http")]
pub mod http;

// Re-export the element tree and renderer
pub use viol_core::{
	AttrValue, Attributes, ClassList, Element, ElementKind, HtmlError, HtmlResult, HxBinding,
	HxMethod, IntoNodes, Node, RenderOptions, Renderable, TrustedHtml, attrs, escape, render,
	render_with,
};

// Re-export the generated constructors at the root
#[cfg(feature = "html")]
pub use viol_html::{BasicLayout, ElementBuilder, tags};

/// Commonly used items.
///
/// ```
/// use viol::prelude::*;
///
/// let element = Element::with("p", "hello", Attributes::new()).unwrap();
/// assert_eq!(render(&element), "<p>hello</p>");
/// ```
pub mod prelude {
	pub use crate::{
		AttrValue, Attributes, ClassList, Element, HtmlError, HtmlResult, HxBinding, HxMethod,
		IntoNodes, Node, RenderOptions, Renderable, TrustedHtml, attrs, render, render_with,
	};

	#[cfg(feature = "html")]
	pub use crate::html::{
		AttributePolicy, BasicLayout, ElementBuilder, HtmlSettings, html_settings,
		init_html_settings,
	};

	#[cfg(feature = "http")]
	pub use crate::http::{HttpError, HxRequest, HxResponse, render_html, render_page};
}
