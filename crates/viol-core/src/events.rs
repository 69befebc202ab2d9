//! htmx interaction bindings.
//!
//! An [`HxBinding`] is declarative request metadata (method, URL, trigger,
//! target, ...) that serializes to ordinary `hx-*` attributes. The library
//! never interprets these values; it only writes them out.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::attrs::Attributes;

/// Matches the selector of every `from:<selector>` modifier in a trigger.
static FROM_SELECTOR: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"from:[#\w]+").expect("trigger selector pattern is valid"));

/// HTTP method of an htmx request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HxMethod {
	#[default]
	Get,
	Post,
	Put,
	Patch,
	Delete,
}

impl HxMethod {
	/// Lower-case method name as used in `hx-<method>`.
	pub fn as_str(self) -> &'static str {
		match self {
			HxMethod::Get => "get",
			HxMethod::Post => "post",
			HxMethod::Put => "put",
			HxMethod::Patch => "patch",
			HxMethod::Delete => "delete",
		}
	}

	/// The attribute that carries the request URL for this method.
	pub fn attr_name(self) -> &'static str {
		match self {
			HxMethod::Get => "hx-get",
			HxMethod::Post => "hx-post",
			HxMethod::Put => "hx-put",
			HxMethod::Patch => "hx-patch",
			HxMethod::Delete => "hx-delete",
		}
	}
}

impl fmt::Display for HxMethod {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error returned when parsing an unknown method name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown htmx method: {0:?}")]
pub struct UnknownMethod(pub String);

impl FromStr for HxMethod {
	type Err = UnknownMethod;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"get" => Ok(HxMethod::Get),
			"post" => Ok(HxMethod::Post),
			"put" => Ok(HxMethod::Put),
			"patch" => Ok(HxMethod::Patch),
			"delete" => Ok(HxMethod::Delete),
			_ => Err(UnknownMethod(s.to_string())),
		}
	}
}

/// Declarative htmx request metadata.
///
/// ```
/// use viol_core::events::{HxBinding, HxMethod};
///
/// let binding = HxBinding::new(HxMethod::Get, "/api/data")
///     .trigger("click")
///     .target("#result");
/// assert_eq!(
///     binding.to_attributes().to_string(),
///     r##"hx-get="/api/data" hx-trigger="click" hx-target="#result""##
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HxBinding {
	pub method: HxMethod,
	#[serde(alias = "rule")]
	pub url: Option<String>,
	pub trigger: Option<String>,
	pub target: Option<String>,
	pub swap: Option<String>,
	pub include: Option<String>,
	pub sync: Option<String>,
	pub confirm: Option<String>,
	pub vals: Option<String>,
}

impl HxBinding {
	pub fn new(method: HxMethod, url: impl Into<String>) -> Self {
		Self {
			method,
			url: Some(url.into()),
			..Self::default()
		}
	}

	pub fn get(url: impl Into<String>) -> Self {
		Self::new(HxMethod::Get, url)
	}

	pub fn post(url: impl Into<String>) -> Self {
		Self::new(HxMethod::Post, url)
	}

	pub fn put(url: impl Into<String>) -> Self {
		Self::new(HxMethod::Put, url)
	}

	pub fn patch(url: impl Into<String>) -> Self {
		Self::new(HxMethod::Patch, url)
	}

	pub fn delete(url: impl Into<String>) -> Self {
		Self::new(HxMethod::Delete, url)
	}

	pub fn trigger(mut self, trigger: impl Into<String>) -> Self {
		self.trigger = Some(trigger.into());
		self
	}

	pub fn target(mut self, target: impl Into<String>) -> Self {
		self.target = Some(target.into());
		self
	}

	pub fn swap(mut self, swap: impl Into<String>) -> Self {
		self.swap = Some(swap.into());
		self
	}

	pub fn include(mut self, include: impl Into<String>) -> Self {
		self.include = Some(include.into());
		self
	}

	pub fn sync(mut self, sync: impl Into<String>) -> Self {
		self.sync = Some(sync.into());
		self
	}

	pub fn confirm(mut self, confirm: impl Into<String>) -> Self {
		self.confirm = Some(confirm.into());
		self
	}

	pub fn vals(mut self, vals: impl Into<String>) -> Self {
		self.vals = Some(vals.into());
		self
	}

	/// Changes the method. The URL moves to the new `hx-<method>` attribute.
	pub fn set_method(&mut self, method: HxMethod) {
		self.method = method;
	}

	/// Changes the URL, keeping the method.
	pub fn set_url(&mut self, url: impl Into<String>) {
		self.url = Some(url.into());
	}

	/// Re-points the trigger at the element with the given id.
	///
	/// Every `from:<selector>` modifier becomes `from:#<id>`; when the trigger
	/// has none, ` from:#<id>` is appended. A binding without a trigger is
	/// left untouched.
	pub fn bind_to(&mut self, id: &str) {
		let Some(trigger) = self.trigger.as_deref() else {
			return;
		};
		let replacement = format!("from:#{id}");
		let rewritten = if FROM_SELECTOR.is_match(trigger) {
			FROM_SELECTOR
				.replace_all(trigger, regex::NoExpand(&replacement))
				.into_owned()
		} else if trigger.is_empty() {
			replacement
		} else {
			format!("{trigger} {replacement}")
		};
		self.trigger = Some(rewritten);
	}

	/// Serializes the binding to `hx-*` attributes, in a fixed order, skipping
	/// absent and empty fields.
	pub fn to_attributes(&self) -> Attributes {
		let mut attrs = Attributes::new();
		let fields = [
			(self.method.attr_name(), &self.url),
			("hx-trigger", &self.trigger),
			("hx-target", &self.target),
			("hx-swap", &self.swap),
			("hx-include", &self.include),
			("hx-sync", &self.sync),
			("hx-confirm", &self.confirm),
			("hx-vals", &self.vals),
		];
		for (name, value) in fields {
			if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
				attrs.insert_text(name, value);
			}
		}
		attrs
	}

	/// Renders the binding as a standalone `<div hx-...></div>`.
	pub fn to_standalone(&self) -> String {
		let mut out = String::from("<div");
		self.to_attributes().write_to(&mut out);
		out.push_str("></div>");
		out
	}
}
