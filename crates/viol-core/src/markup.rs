//! Explicitly trusted markup.

use std::fmt;

/// A string of HTML that is written to the output verbatim.
///
/// Plain strings are always escaped when rendered. Wrapping a string in
/// `TrustedHtml` is the only way to bypass escaping, so callers must make
/// sure the content is already safe.
///
/// ```
/// use viol_core::{TrustedHtml, render};
///
/// assert_eq!(render("<b>"), "&lt;b&gt;");
/// assert_eq!(render(&TrustedHtml::new("<b>")), "<b>");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TrustedHtml(String);

impl TrustedHtml {
	/// Marks `html` as trusted.
	pub fn new(html: impl Into<String>) -> Self {
		Self(html.into())
	}

	/// The wrapped markup.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Unwraps the markup.
	pub fn into_string(self) -> String {
		self.0
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl fmt::Display for TrustedHtml {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for TrustedHtml {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
