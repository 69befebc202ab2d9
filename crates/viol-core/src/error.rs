//! Error types for element construction and attribute handling.
//!
//! Every variant is a usage error: it is returned at the point where a tree
//! is built or mutated, never at render time.

use thiserror::Error;

/// Errors raised while building or mutating an element tree.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HtmlError {
	/// The tag name is empty or contains characters not allowed in a tag name.
	#[error("Invalid tag name: {0:?}")]
	InvalidTagName(String),

	/// The attribute name is empty or contains characters not allowed in an attribute name.
	#[error("Invalid attribute name: {0:?}")]
	InvalidAttributeName(String),

	/// A void element was given children.
	#[error("Element <{tag}> is a void element and cannot have children")]
	VoidElementChildren {
		/// Tag of the void element.
		tag: String,
	},

	/// The value cannot be stored on this attribute.
	#[error("Unsupported value for attribute '{name}': {reason}")]
	UnsupportedValue {
		/// Attribute name.
		name: String,
		/// Why the value was refused.
		reason: String,
	},

	/// The vocabulary does not permit this attribute on this element.
	#[error("Attribute '{name}' is not allowed on <{tag}>")]
	AttributeNotAllowed {
		/// Element tag.
		tag: String,
		/// Attribute name.
		name: String,
	},
}

/// Result type alias for tree construction.
pub type HtmlResult<T> = Result<T, HtmlError>;
