//! htmx request and response headers.
//!
//! Reference: <https://htmx.org/reference/#headers>

use http::header::{HeaderMap, HeaderName, HeaderValue};

use crate::error::{HttpError, HttpResult};

pub const HX_REQUEST: &str = "hx-request";
pub const HX_BOOSTED: &str = "hx-boosted";
pub const HX_TARGET: &str = "hx-target";
pub const HX_TRIGGER: &str = "hx-trigger";
pub const HX_TRIGGER_NAME: &str = "hx-trigger-name";
pub const HX_CURRENT_URL: &str = "hx-current-url";

pub const HX_REDIRECT: &str = "hx-redirect";
pub const HX_REFRESH: &str = "hx-refresh";
pub const HX_RETARGET: &str = "hx-retarget";
pub const HX_RESWAP: &str = "hx-reswap";
pub const HX_PUSH_URL: &str = "hx-push-url";

/// What the htmx client said about a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HxRequest {
	/// `HX-Request: true` was sent
	pub is_htmx: bool,
	/// The request comes from an `hx-boost`ed link or form
	pub boosted: bool,
	/// Id of the target element
	pub target: Option<String>,
	/// Id of the triggering element
	pub trigger: Option<String>,
	/// Name of the triggering element
	pub trigger_name: Option<String>,
	/// URL of the browser when the request was made
	pub current_url: Option<String>,
}

impl HxRequest {
	/// Reads the htmx request headers. Missing or non-UTF-8 headers are treated as absent.
	pub fn from_headers(headers: &HeaderMap) -> Self {
		Self {
			is_htmx: flag(headers, HX_REQUEST),
			boosted: flag(headers, HX_BOOSTED),
			target: text(headers, HX_TARGET),
			trigger: text(headers, HX_TRIGGER),
			trigger_name: text(headers, HX_TRIGGER_NAME),
			current_url: text(headers, HX_CURRENT_URL),
		}
	}

	/// Returns `true` when the client will swap the response into part of the
	/// page, so a fragment is expected rather than a full document.
	pub fn wants_fragment(&self) -> bool {
		self.is_htmx && !self.boosted
	}
}

fn text(headers: &HeaderMap, name: &str) -> Option<String> {
	headers
		.get(name)
		.and_then(|value| value.to_str().ok())
		.map(str::to_string)
}

fn flag(headers: &HeaderMap, name: &str) -> bool {
	text(headers, name).is_some_and(|value| value.eq_ignore_ascii_case("true"))
}

/// Builder for htmx response headers.
///
/// ```
/// use viol_http::HxResponse;
///
/// let headers = HxResponse::new()
///     .trigger("itemSaved")
///     .retarget("#list")
///     .reswap("beforeend")
///     .to_headers()
///     .unwrap();
/// assert_eq!(headers["hx-trigger"], "itemSaved");
/// assert_eq!(headers["hx-retarget"], "#list");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HxResponse {
	redirect: Option<String>,
	refresh: bool,
	trigger: Option<String>,
	retarget: Option<String>,
	reswap: Option<String>,
	push_url: Option<String>,
}

impl HxResponse {
	pub fn new() -> Self {
		Self::default()
	}

	/// Client-side redirect to `url` (`HX-Redirect`).
	pub fn redirect(mut self, url: impl Into<String>) -> Self {
		self.redirect = Some(url.into());
		self
	}

	/// Full page refresh (`HX-Refresh: true`).
	pub fn refresh(mut self) -> Self {
		self.refresh = true;
		self
	}

	/// Client-side events to trigger (`HX-Trigger`): an event name or a JSON object.
	pub fn trigger(mut self, events: impl Into<String>) -> Self {
		self.trigger = Some(events.into());
		self
	}

	/// CSS selector replacing the target of the swap (`HX-Retarget`).
	pub fn retarget(mut self, selector: impl Into<String>) -> Self {
		self.retarget = Some(selector.into());
		self
	}

	/// Swap strategy overriding `hx-swap` (`HX-Reswap`).
	pub fn reswap(mut self, swap: impl Into<String>) -> Self {
		self.reswap = Some(swap.into());
		self
	}

	/// URL pushed onto the browser history (`HX-Push-Url`).
	pub fn push_url(mut self, url: impl Into<String>) -> Self {
		self.push_url = Some(url.into());
		self
	}

	/// Returns `true` when no header would be written.
	pub fn is_empty(&self) -> bool {
		*self == Self::default()
	}

	/// Writes the headers into `headers`, replacing existing values.
	///
	/// Every value is validated before the first insert; on error `headers`
	/// is left untouched.
	///
	/// # Errors
	///
	/// [`HttpError::InvalidHeaderValue`] if a value cannot be sent in a header.
	pub fn apply(&self, headers: &mut HeaderMap) -> HttpResult<()> {
		let refresh = self.refresh.then_some("true");
		let entries = [
			(HX_REDIRECT, self.redirect.as_deref()),
			(HX_REFRESH, refresh),
			(HX_TRIGGER, self.trigger.as_deref()),
			(HX_RETARGET, self.retarget.as_deref()),
			(HX_RESWAP, self.reswap.as_deref()),
			(HX_PUSH_URL, self.push_url.as_deref()),
		];
		let validated = entries
			.into_iter()
			.filter_map(|(name, value)| value.map(|value| (name, value)))
			.map(|(name, value)| {
				HeaderValue::from_str(value)
					.map(|header_value| (HeaderName::from_static(name), header_value))
					.map_err(|source| HttpError::InvalidHeaderValue { name, source })
			})
			.collect::<HttpResult<Vec<_>>>()?;
		for (name, value) in validated {
			headers.insert(name, value);
		}
		Ok(())
	}

	/// Collects the headers into a new map.
	pub fn to_headers(&self) -> HttpResult<HeaderMap> {
		let mut headers = HeaderMap::new();
		self.apply(&mut headers)?;
		Ok(headers)
	}
}
