//! Settings for element construction, rendering and the page layout.
//!
//! Settings can be built in code, loaded from a TOML or JSON document, or read
//! from environment variables, then installed once for the process with
//! [`init_html_settings`]. Code that runs before installation, or in a process
//! that never installs anything, sees [`HtmlSettings::default`].
//!
//! ```toml
//! attribute_policy = "reject"
//!
//! [render]
//! pretty = true
//!
//! [layout]
//! title = "Dashboard"
//! scripts = ["/static/htmx.min.js"]
//! ```

use std::path::Path;
use std::str::FromStr;
use std::sync::{LazyLock, OnceLock};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use viol_core::RenderOptions;

/// Environment variable overriding [`HtmlSettings::attribute_policy`].
pub const ENV_ATTRIBUTE_POLICY: &str = "VIOL_ATTRIBUTE_POLICY";

/// Environment variable overriding [`RenderOptions::pretty`].
pub const ENV_PRETTY: &str = "VIOL_PRETTY";

/// Errors raised while loading or installing settings.
#[derive(Debug, Error)]
pub enum SettingsError {
	/// The settings file could not be read.
	#[error("Failed to read {path}: {source}")]
	Io {
		path: String,
		#[source]
		source: std::io::Error,
	},

	/// The TOML document is malformed or has the wrong shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// The JSON document is malformed or has the wrong shape.
	#[error("JSON parse error: {0}")]
	Json(#[from] serde_json::Error),

	/// The file extension is neither `.toml` nor `.json`.
	#[error("Unsupported settings format: {0} (supported formats: .toml, .json)")]
	UnsupportedFormat(String),

	/// An environment variable holds a value that cannot be parsed.
	#[error("Invalid value for {name}: {value:?}")]
	InvalidEnv { name: &'static str, value: String },

	/// [`init_html_settings`] was called more than once.
	#[error("HTML settings are already initialized")]
	AlreadyInitialized,
}

/// What happens when an attribute is not permitted on an element by the vocabulary table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributePolicy {
	/// Accept silently.
	Allow,
	/// Accept and log a warning.
	#[default]
	Warn,
	/// Refuse with [`HtmlError::AttributeNotAllowed`](viol_core::HtmlError::AttributeNotAllowed).
	Reject,
}

impl FromStr for AttributePolicy {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"allow" => Ok(AttributePolicy::Allow),
			"warn" => Ok(AttributePolicy::Warn),
			"reject" => Ok(AttributePolicy::Reject),
			other => Err(other.to_string()),
		}
	}
}

/// Settings for the whole HTML layer.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlSettings {
	/// Attribute validation policy for the generated constructors
	pub attribute_policy: AttributePolicy,

	/// Output formatting
	pub render: RenderOptions,

	/// Page layout assets and defaults
	pub layout: LayoutSettings,
}

/// Defaults and asset URLs for [`BasicLayout`](crate::layout::BasicLayout).
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
	/// Default document title
	pub title: String,
	/// Value of the `lang` attribute on `<html>`
	pub lang: String,
	/// Value of `<meta charset>`
	pub charset: String,
	/// Value of `<meta name="viewport">`
	pub viewport: String,
	/// Stylesheet URLs, emitted as `<link rel="stylesheet">` in order
	pub stylesheets: Vec<String>,
	/// Script URLs, emitted as `<script src>` in order
	pub scripts: Vec<String>,
}

impl Default for LayoutSettings {
	fn default() -> Self {
		Self {
			title: "Viol".to_string(),
			lang: "en".to_string(),
			charset: "utf-8".to_string(),
			viewport: "width=device-width, initial-scale=1".to_string(),
			stylesheets: vec!["/viol/static/css/bootstrap.min.css".to_string()],
			scripts: vec![
				"/viol/static/js/htmx.min.js".to_string(),
				"/viol/static/js/_hyperscript.min.js".to_string(),
				"/viol/static/js/bootstrap.bundle.min.js".to_string(),
			],
		}
	}
}

impl HtmlSettings {
	/// Create new settings with defaults
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the attribute validation policy.
	pub fn with_attribute_policy(mut self, policy: AttributePolicy) -> Self {
		self.attribute_policy = policy;
		self
	}

	/// Sets the output formatting options.
	pub fn with_render(mut self, render: RenderOptions) -> Self {
		self.render = render;
		self
	}

	/// Sets the layout settings.
	pub fn with_layout(mut self, layout: LayoutSettings) -> Self {
		self.layout = layout;
		self
	}

	/// Parses settings from a TOML document. Missing keys take their defaults.
	pub fn from_toml(document: &str) -> Result<Self, SettingsError> {
		Ok(toml::from_str(document)?)
	}

	/// Parses settings from a JSON document. Missing keys take their defaults.
	pub fn from_json(document: &str) -> Result<Self, SettingsError> {
		Ok(serde_json::from_str(document)?)
	}

	/// Loads settings from a `.toml` or `.json` file.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let path = path.as_ref();
		let contents = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
			path: path.display().to_string(),
			source,
		})?;

		match path.extension().and_then(|ext| ext.to_str()) {
			Some("toml") => Self::from_toml(&contents),
			Some("json") => Self::from_json(&contents),
			_ => Err(SettingsError::UnsupportedFormat(path.display().to_string())),
		}
	}

	/// Defaults with environment overrides applied.
	pub fn from_env() -> Result<Self, SettingsError> {
		Self::default().with_env_overrides()
	}

	/// Applies `VIOL_ATTRIBUTE_POLICY` and `VIOL_PRETTY` on top of these settings.
	pub fn with_env_overrides(mut self) -> Result<Self, SettingsError> {
		if let Ok(value) = std::env::var(ENV_ATTRIBUTE_POLICY) {
			self.attribute_policy = value.parse().map_err(|_| SettingsError::InvalidEnv {
				name: ENV_ATTRIBUTE_POLICY,
				value: value.clone(),
			})?;
		}

		if let Ok(value) = std::env::var(ENV_PRETTY) {
			self.render.pretty = match value.trim().to_ascii_lowercase().as_str() {
				"1" | "true" | "yes" | "on" => true,
				"0" | "false" | "no" | "off" | "" => false,
				_ => {
					return Err(SettingsError::InvalidEnv {
						name: ENV_PRETTY,
						value,
					});
				}
			};
		}

		Ok(self)
	}
}

static HTML_SETTINGS: OnceLock<HtmlSettings> = OnceLock::new();
static DEFAULT_SETTINGS: LazyLock<HtmlSettings> = LazyLock::new(HtmlSettings::default);

/// Installs the process-wide settings.
///
/// Must be called at most once, before any element is built that should see
/// the settings.
///
/// # Errors
///
/// [`SettingsError::AlreadyInitialized`] if settings were already installed.
pub fn init_html_settings(settings: HtmlSettings) -> Result<(), SettingsError> {
	HTML_SETTINGS
		.set(settings)
		.map_err(|_| SettingsError::AlreadyInitialized)?;
	tracing::debug!("HTML settings initialized");
	Ok(())
}

/// The installed settings, or the defaults when none were installed.
pub fn html_settings() -> &'static HtmlSettings {
	HTML_SETTINGS.get().unwrap_or(&DEFAULT_SETTINGS)
}
