//! Element vocabulary, generated constructors, settings and page layout
//!
//! This module provides access to viol-html. Every HTML element has a
//! constructor in [`tags`] that returns an [`ElementBuilder`]; the builder
//! checks attributes against the element's vocabulary entry according to the
//! installed [`AttributePolicy`].
//!
//! ## Example
//!
//! ```
//! use viol::html::tags::{input, label};
//!
//! let field = label()
//!     .child("Name ")
//!     .child_builder(input().attr("name", "name").bool_attr("required", true))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     field.render(),
//!     r#"<label>Name <input name="name" required="required" /></label>"#
//! );
//! ```

pub use viol_html::*;
