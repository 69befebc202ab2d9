//! # viol-core
//!
//! Attribute store, element tree and HTML renderer.
//!
//! Trees are plain data: an [`Element`] owns its [`Attributes`], its children
//! and any htmx [`HxBinding`]s. [`render`] turns any [`Renderable`] value into
//! a `String`; plain text is escaped and only [`TrustedHtml`] bypasses escaping.
//!
//! ## Example
//!
//! ```
//! use viol_core::{Element, HxBinding, attrs, render};
//!
//! let mut button = Element::with("button", "Load", attrs! { "class" => "btn" }.unwrap()).unwrap();
//! button.set_id("load");
//! button.bind(HxBinding::get("/items").trigger("click").target("#list"));
//!
//! assert_eq!(
//!     render(&button),
//!     r##"<button class="btn" id="load" hx-get="/items" hx-trigger="click from:#load" hx-target="#list">Load</button>"##
//! );
//! ```

pub mod attrs;
pub mod element;
pub mod error;
pub mod escape;
pub mod events;
pub mod markup;
pub mod render;

pub use attrs::{AttrValue, Attributes, ClassList};
pub use element::{Element, ElementKind, IntoNodes, Node};
pub use error::{HtmlError, HtmlResult};
pub use events::{HxBinding, HxMethod};
pub use markup::TrustedHtml;
pub use render::{RenderOptions, Renderable, render, render_with};
