//! Error types for the HTTP boundary.

use thiserror::Error;
use viol_core::HtmlError;

/// Errors raised while turning rendered HTML into a response.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum HttpError {
	/// Building the page tree failed.
	#[error(transparent)]
	Html(#[from] HtmlError),

	/// A header value contains characters not allowed in HTTP headers.
	#[error("Invalid value for header {name}: {source}")]
	InvalidHeaderValue {
		name: &'static str,
		#[source]
		source: http::header::InvalidHeaderValue,
	},
}

/// Result type alias for the HTTP boundary.
pub type HttpResult<T> = Result<T, HttpError>;
