//! # viol-html
//!
//! The HTML element vocabulary and everything built on top of it:
//!
//! - [`vocabulary`]: the static element table and lookups.
//! - [`tags`]: one constructor per tag, generated from the table.
//! - [`builder`]: the fluent [`ElementBuilder`] those constructors return.
//! - [`settings`]: attribute policy, render options and layout assets.
//! - [`layout`]: [`BasicLayout`], a full document around some content.
//!
//! ## Example
//!
//! ```
//! use viol_html::tags::{a, li, ul};
//!
//! let menu = ul()
//!     .class("nav")
//!     .child_builder(li().child_builder(a().attr("href", "/").child("Home")))
//!     .child_builder(li().child_builder(a().attr("href", "/about").child("About")))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     menu.render(),
//!     r#"<ul class="nav"><li><a href="/">Home</a></li><li><a href="/about">About</a></li></ul>"#
//! );
//! ```

pub mod builder;
pub mod layout;
pub mod settings;
pub mod vocabulary;

pub use builder::ElementBuilder;
pub use layout::BasicLayout;
pub use settings::{
	AttributePolicy, HtmlSettings, LayoutSettings, SettingsError, html_settings, init_html_settings,
};
pub use vocabulary::{ElementSpec, GLOBAL_ATTRS, spec_for, tags};
