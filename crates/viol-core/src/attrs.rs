//! Attribute store for a single element.
//!
//! [`Attributes`] is an ordered, case-insensitive map from attribute name to an
//! [`AttrValue`]. Names are lower-cased on the way in, so `ID`, `Id` and `id`
//! address the same entry. Three rules are applied when values are stored:
//!
//! - `class` always holds a [`ClassList`]: an ordered, de-duplicated set of tokens,
//!   whether it was assigned a space-separated string or a sequence of tokens.
//! - Token sequences are only accepted for `class`.
//! - Text assigned to a known boolean attribute (`disabled`, `checked`, ...) is
//!   coerced to a flag, so `disabled="false"` can never reach the output.
//!
//! ## Example
//!
//! ```
//! use viol_core::attrs::Attributes;
//!
//! let mut attrs = Attributes::new();
//! attrs.set("ID", "main").unwrap();
//! attrs.set("class", "btn btn-primary btn").unwrap();
//! attrs.set("disabled", true).unwrap();
//! attrs.append_class("active");
//!
//! assert_eq!(
//!     attrs.to_string(),
//!     r#"id="main" class="btn btn-primary active" disabled="disabled""#
//! );
//! ```

use std::fmt;

use indexmap::{IndexMap, IndexSet};

use crate::error::{HtmlError, HtmlResult};
use crate::escape::{escape_attr, is_boolean_attr, is_boolean_attr_truthy, is_valid_attr_name};

/// Name of the hyperscript attribute.
pub const HYPERSCRIPT_ATTR: &str = "_";

/// Ordered, de-duplicated `class` tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
	tokens: IndexSet<String>,
}

impl ClassList {
	/// Creates an empty class list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses a space-separated class string.
	pub fn parse(classes: &str) -> Self {
		let mut list = Self::new();
		list.insert(classes);
		list
	}

	/// Builds a class list from a sequence of tokens.
	///
	/// Tokens containing whitespace are split, so `["a b", "c"]` yields `a b c`.
	pub fn from_tokens<I, S>(tokens: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut list = Self::new();
		for token in tokens {
			list.insert(token.as_ref());
		}
		list
	}

	/// Adds every whitespace-separated token in `token` that is not already present.
	///
	/// Returns `true` if at least one token was added.
	pub fn insert(&mut self, token: &str) -> bool {
		let mut added = false;
		for part in token.split_whitespace() {
			added |= self.tokens.insert(part.to_string());
		}
		added
	}

	/// Removes every whitespace-separated token in `token`, keeping the order of the rest.
	///
	/// Returns `true` if at least one token was removed.
	pub fn remove(&mut self, token: &str) -> bool {
		let mut removed = false;
		for part in token.split_whitespace() {
			removed |= self.tokens.shift_remove(part);
		}
		removed
	}

	/// Returns `true` if the token is present.
	pub fn contains(&self, token: &str) -> bool {
		self.tokens.contains(token)
	}

	/// Number of tokens.
	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	/// Returns `true` when there are no tokens.
	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	/// Iterates the tokens in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.tokens.iter().map(String::as_str)
	}
}

impl fmt::Display for ClassList {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, token) in self.tokens.iter().enumerate() {
			if i > 0 {
				f.write_str(" ")?;
			}
			f.write_str(token)?;
		}
		Ok(())
	}
}

impl<'a> IntoIterator for &'a ClassList {
	type Item = &'a String;
	type IntoIter = indexmap::set::Iter<'a, String>;

	fn into_iter(self) -> Self::IntoIter {
		self.tokens.iter()
	}
}

/// A stored attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
	/// A plain string value.
	Text(String),
	/// A boolean attribute: present when `true`, omitted when `false`.
	Flag(bool),
	/// Class tokens. Only ever stored under `class`.
	Tokens(ClassList),
}

impl AttrValue {
	/// Returns the text value, if this is [`AttrValue::Text`].
	pub fn as_text(&self) -> Option<&str> {
		match self {
			AttrValue::Text(text) => Some(text),
			_ => None,
		}
	}

	/// Returns the flag, if this is [`AttrValue::Flag`].
	pub fn as_flag(&self) -> Option<bool> {
		match self {
			AttrValue::Flag(flag) => Some(*flag),
			_ => None,
		}
	}

	/// Returns the class tokens, if this is [`AttrValue::Tokens`].
	pub fn as_tokens(&self) -> Option<&ClassList> {
		match self {
			AttrValue::Tokens(tokens) => Some(tokens),
			_ => None,
		}
	}

	/// Converts a JSON value into an attribute value for `name`.
	///
	/// `null` yields `Ok(None)`: the attribute is skipped. Numbers are
	/// stringified. Arrays of strings are accepted for `class` only; objects
	/// and arrays holding anything other than strings are refused.
	pub fn from_json(name: &str, value: &serde_json::Value) -> HtmlResult<Option<Self>> {
		use serde_json::Value;

		let converted = match value {
			Value::Null => return Ok(None),
			Value::Bool(flag) => AttrValue::Flag(*flag),
			Value::Number(number) => AttrValue::Text(number.to_string()),
			Value::String(text) => AttrValue::Text(text.clone()),
			Value::Array(items) => {
				let mut tokens = Vec::with_capacity(items.len());
				for item in items {
					match item {
						Value::String(token) => tokens.push(token.as_str()),
						other => {
							return Err(HtmlError::UnsupportedValue {
								name: name.to_string(),
								reason: format!("array item must be a string, got {}", json_kind(other)),
							});
						}
					}
				}
				AttrValue::Tokens(ClassList::from_tokens(tokens))
			}
			Value::Object(_) => {
				return Err(HtmlError::UnsupportedValue {
					name: name.to_string(),
					reason: "nested mappings cannot be attribute values".to_string(),
				});
			}
		};
		Ok(Some(converted))
	}
}

fn json_kind(value: &serde_json::Value) -> &'static str {
	match value {
		serde_json::Value::Null => "null",
		serde_json::Value::Bool(_) => "bool",
		serde_json::Value::Number(_) => "number",
		serde_json::Value::String(_) => "string",
		serde_json::Value::Array(_) => "array",
		serde_json::Value::Object(_) => "object",
	}
}

impl From<&str> for AttrValue {
	fn from(value: &str) -> Self {
		AttrValue::Text(value.to_string())
	}
}

impl From<String> for AttrValue {
	fn from(value: String) -> Self {
		AttrValue::Text(value)
	}
}

impl From<&String> for AttrValue {
	fn from(value: &String) -> Self {
		AttrValue::Text(value.clone())
	}
}

impl From<bool> for AttrValue {
	fn from(value: bool) -> Self {
		AttrValue::Flag(value)
	}
}

impl From<ClassList> for AttrValue {
	fn from(value: ClassList) -> Self {
		AttrValue::Tokens(value)
	}
}

impl From<Vec<String>> for AttrValue {
	fn from(value: Vec<String>) -> Self {
		AttrValue::Tokens(ClassList::from_tokens(value))
	}
}

impl From<Vec<&str>> for AttrValue {
	fn from(value: Vec<&str>) -> Self {
		AttrValue::Tokens(ClassList::from_tokens(value))
	}
}

impl From<&[&str]> for AttrValue {
	fn from(value: &[&str]) -> Self {
		AttrValue::Tokens(ClassList::from_tokens(value))
	}
}

impl<const N: usize> From<[&str; N]> for AttrValue {
	fn from(value: [&str; N]) -> Self {
		AttrValue::Tokens(ClassList::from_tokens(value))
	}
}

/// `None` is stored as an unset flag and never rendered.
impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
	fn from(value: Option<T>) -> Self {
		match value {
			Some(value) => value.into(),
			None => AttrValue::Flag(false),
		}
	}
}

macro_rules! impl_from_number {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for AttrValue {
				fn from(value: $ty) -> Self {
					AttrValue::Text(value.to_string())
				}
			}
		)*
	};
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Case-insensitive, insertion-ordered attribute map for one element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
	entries: IndexMap<String, AttrValue>,
}

impl Attributes {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a store from `(name, value)` pairs, failing on the first invalid pair.
	pub fn try_from_pairs<I, K, V>(pairs: I) -> HtmlResult<Self>
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: Into<AttrValue>,
	{
		let mut attrs = Self::new();
		for (name, value) in pairs {
			attrs.set(name, value)?;
		}
		Ok(attrs)
	}

	/// Builds a store from a JSON object.
	///
	/// `null` members are skipped. See [`AttrValue::from_json`] for the accepted shapes.
	pub fn from_json(value: &serde_json::Value) -> HtmlResult<Self> {
		let serde_json::Value::Object(map) = value else {
			return Err(HtmlError::UnsupportedValue {
				name: String::new(),
				reason: format!("expected a JSON object, got {}", json_kind(value)),
			});
		};

		let mut attrs = Self::new();
		for (name, value) in map {
			if let Some(value) = AttrValue::from_json(name, value)? {
				attrs.set(name, value)?;
			}
		}
		Ok(attrs)
	}

	/// Looks up an attribute. Returns `None` when it is not set.
	pub fn get(&self, name: &str) -> Option<&AttrValue> {
		if name.bytes().any(|b| b.is_ascii_uppercase()) {
			self.entries.get(&name.to_ascii_lowercase())
		} else {
			self.entries.get(name)
		}
	}

	/// Looks up a text attribute. Flags and class tokens yield `None`.
	pub fn get_text(&self, name: &str) -> Option<&str> {
		self.get(name).and_then(AttrValue::as_text)
	}

	/// Returns `true` if the attribute is set (even to a false flag).
	pub fn contains(&self, name: &str) -> bool {
		self.get(name).is_some()
	}

	/// Sets an attribute, replacing any previous value.
	///
	/// # Errors
	///
	/// - [`HtmlError::InvalidAttributeName`] if the name cannot appear in markup.
	/// - [`HtmlError::UnsupportedValue`] for a token sequence on anything but
	///   `class`, or `true` on `class`.
	pub fn set(&mut self, name: impl AsRef<str>, value: impl Into<AttrValue>) -> HtmlResult<()> {
		let name = normalize_name(name.as_ref())?;
		let value = coerce(&name, value.into())?;
		self.entries.insert(name, value);
		Ok(())
	}

	/// Chaining form of [`set`](Self::set).
	pub fn with(mut self, name: impl AsRef<str>, value: impl Into<AttrValue>) -> HtmlResult<Self> {
		self.set(name, value)?;
		Ok(self)
	}

	/// Removes an attribute, returning its value if it was set.
	pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
		self.entries.shift_remove(&name.to_ascii_lowercase())
	}

	/// Appends class tokens. Tokens already present are left where they are.
	pub fn append_class(&mut self, token: &str) {
		self.extend_class([token]);
	}

	/// Removes class tokens. Missing tokens are ignored.
	pub fn remove_class(&mut self, token: &str) {
		if let Some(AttrValue::Tokens(list)) = self.entries.get_mut("class") {
			list.remove(token);
		}
	}

	/// Returns `true` if the class token is present.
	pub fn has_class(&self, token: &str) -> bool {
		self.class_list().is_some_and(|list| list.contains(token))
	}

	/// The class tokens, if `class` has been set.
	pub fn class_list(&self) -> Option<&ClassList> {
		self.entries.get("class").and_then(AttrValue::as_tokens)
	}

	fn extend_class<'a>(&mut self, tokens: impl IntoIterator<Item = &'a str>) {
		match self.entries.get_mut("class") {
			Some(AttrValue::Tokens(list)) => {
				for token in tokens {
					list.insert(token);
				}
			}
			_ => {
				self.entries
					.insert("class".to_string(), AttrValue::Tokens(ClassList::from_tokens(tokens)));
			}
		}
	}

	/// The `id` attribute.
	pub fn id(&self) -> Option<&str> {
		self.get_text("id")
	}

	/// Sets the `id` attribute.
	pub fn set_id(&mut self, id: impl Into<String>) {
		self.entries.insert("id".to_string(), AttrValue::Text(id.into()));
	}

	/// The `style` attribute.
	pub fn style(&self) -> Option<&str> {
		self.get_text("style")
	}

	/// Sets the `style` attribute.
	pub fn set_style(&mut self, style: impl Into<String>) {
		self.entries
			.insert("style".to_string(), AttrValue::Text(style.into()));
	}

	/// The hyperscript (`_`) attribute.
	pub fn hyperscript(&self) -> Option<&str> {
		self.get_text(HYPERSCRIPT_ATTR)
	}

	/// Stores a text value under a name known to be valid and lower-cased.
	pub(crate) fn insert_text(&mut self, name: &'static str, value: impl Into<String>) {
		self.entries.insert(name.to_string(), AttrValue::Text(value.into()));
	}

	/// Sets the hyperscript (`_`) attribute.
	pub fn set_hyperscript(&mut self, script: impl Into<String>) {
		self.entries
			.insert(HYPERSCRIPT_ATTR.to_string(), AttrValue::Text(script.into()));
	}

	/// Copies every entry of `other` into `self`.
	///
	/// Later values replace earlier ones, except `class`, whose tokens are unioned.
	pub fn merge(&mut self, other: Attributes) {
		for (name, value) in other.entries {
			match value {
				AttrValue::Tokens(tokens) if name == "class" => self.extend_class(tokens.iter()),
				value => {
					self.entries.insert(name, value);
				}
			}
		}
	}

	/// Number of stored entries, including false flags and empty class lists.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` when nothing is stored.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates `(name, value)` pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
		self.entries.iter().map(|(name, value)| (name.as_str(), value))
	}

	/// Returns `true` if serializing would produce no output.
	pub fn renders_empty(&self) -> bool {
		self.entries.values().all(|value| match value {
			AttrValue::Text(_) => false,
			AttrValue::Flag(flag) => !flag,
			AttrValue::Tokens(tokens) => tokens.is_empty(),
		})
	}

	/// Appends the serialized attribute fragment to `out`.
	///
	/// Each rendered attribute is preceded by a single space, so the result
	/// can be written straight after a tag name.
	pub fn write_to(&self, out: &mut String) {
		for (name, value) in &self.entries {
			match value {
				AttrValue::Text(text) => {
					out.push(' ');
					out.push_str(name);
					out.push_str("=\"");
					out.push_str(&escape_attr(text));
					out.push('"');
				}
				AttrValue::Flag(true) => {
					out.push(' ');
					out.push_str(name);
					out.push_str("=\"");
					out.push_str(name);
					out.push('"');
				}
				AttrValue::Flag(false) => {}
				AttrValue::Tokens(tokens) => {
					if tokens.is_empty() {
						continue;
					}
					out.push(' ');
					out.push_str(name);
					out.push_str("=\"");
					out.push_str(&escape_attr(&tokens.to_string()));
					out.push('"');
				}
			}
		}
	}
}

/// Serializes the attributes as `name="value"` pairs separated by single spaces.
impl fmt::Display for Attributes {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut out = String::new();
		self.write_to(&mut out);
		f.write_str(out.trim_start())
	}
}

fn normalize_name(name: &str) -> HtmlResult<String> {
	if !is_valid_attr_name(name) {
		return Err(HtmlError::InvalidAttributeName(name.to_string()));
	}
	Ok(name.to_ascii_lowercase())
}

fn coerce(name: &str, value: AttrValue) -> HtmlResult<AttrValue> {
	if name == "class" {
		return match value {
			AttrValue::Text(text) => Ok(AttrValue::Tokens(ClassList::parse(&text))),
			AttrValue::Tokens(tokens) => Ok(AttrValue::Tokens(tokens)),
			AttrValue::Flag(false) => Ok(AttrValue::Tokens(ClassList::new())),
			AttrValue::Flag(true) => Err(HtmlError::UnsupportedValue {
				name: name.to_string(),
				reason: "class cannot be a boolean".to_string(),
			}),
		};
	}

	match value {
		AttrValue::Tokens(_) => Err(HtmlError::UnsupportedValue {
			name: name.to_string(),
			reason: "token sequences are only accepted for class".to_string(),
		}),
		AttrValue::Text(text) if is_boolean_attr(name) => {
			Ok(AttrValue::Flag(is_boolean_attr_truthy(&text)))
		}
		value => Ok(value),
	}
}

/// Builds an [`Attributes`] from `name => value` pairs.
///
/// Evaluates to `HtmlResult<Attributes>`.
///
/// ```
/// use viol_core::attrs;
///
/// let attrs = attrs! { "src" => "a.jpg", "alt" => "x", "hidden" => false }.unwrap();
/// assert_eq!(attrs.to_string(), r#"src="a.jpg" alt="x""#);
/// ```
#[macro_export]
macro_rules! attrs {
	() => {
		::core::result::Result::<$crate::attrs::Attributes, $crate::error::HtmlError>::Ok(
			$crate::attrs::Attributes::new(),
		)
	};
	($($name:expr => $value:expr),+ $(,)?) => {
		(|| -> $crate::error::HtmlResult<$crate::attrs::Attributes> {
			let mut attrs = $crate::attrs::Attributes::new();
			$( attrs.set($name, $value)?; )+
			Ok(attrs)
		})()
	};
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_names_are_case_insensitive() {
		let mut attrs = Attributes::new();
		attrs.set("Data-Role", "nav").unwrap();
		assert_eq!(attrs.get_text("data-role"), Some("nav"));
		assert_eq!(attrs.get_text("DATA-ROLE"), Some("nav"));

		attrs.set("DATA-role", "menu").unwrap();
		assert_eq!(attrs.len(), 1);
		assert_eq!(attrs.to_string(), r#"data-role="menu""#);
	}

	#[rstest]
	fn test_missing_attribute_is_none() {
		let attrs = Attributes::new();
		assert_eq!(attrs.get("title"), None);
		assert_eq!(attrs.id(), None);
		assert!(attrs.class_list().is_none());
	}

	#[rstest]
	fn test_class_string_is_tokenized_and_deduplicated() {
		let mut attrs = Attributes::new();
		attrs.set("class", "  btn btn-primary   btn ").unwrap();
		let tokens: Vec<&str> = attrs.class_list().unwrap().iter().collect();
		assert_eq!(tokens, vec!["btn", "btn-primary"]);
	}

	#[rstest]
	fn test_class_set_replaces() {
		let mut attrs = Attributes::new();
		attrs.set("class", "a b").unwrap();
		attrs.set("class", vec!["c"]).unwrap();
		assert_eq!(attrs.to_string(), r#"class="c""#);
	}

	#[rstest]
	fn test_append_and_remove_class() {
		let mut attrs = Attributes::new();
		attrs.append_class("a");
		attrs.append_class("b");
		attrs.append_class("a");
		assert_eq!(attrs.class_list().unwrap().len(), 2);

		attrs.remove_class("missing");
		attrs.remove_class("a");
		assert_eq!(attrs.to_string(), r#"class="b""#);
		assert!(attrs.has_class("b"));
		assert!(!attrs.has_class("a"));
	}

	#[rstest]
	fn test_remove_class_without_class_attribute_is_noop() {
		let mut attrs = Attributes::new();
		attrs.remove_class("x");
		assert!(attrs.is_empty());
	}

	#[rstest]
	fn test_empty_class_is_omitted() {
		let mut attrs = Attributes::new();
		attrs.append_class("only");
		attrs.remove_class("only");
		attrs.set("id", "x").unwrap();
		assert_eq!(attrs.to_string(), r#"id="x""#);
	}

	#[rstest]
	fn test_boolean_flags() {
		let mut attrs = Attributes::new();
		attrs.set("disabled", true).unwrap();
		attrs.set("checked", false).unwrap();
		assert_eq!(attrs.to_string(), r#"disabled="disabled""#);
	}

	#[rstest]
	#[case("false", "")]
	#[case("0", "")]
	#[case("", "")]
	#[case("true", r#"required="required""#)]
	#[case("yes", r#"required="required""#)]
	fn test_text_on_boolean_attribute_is_coerced(#[case] value: &str, #[case] expected: &str) {
		let mut attrs = Attributes::new();
		attrs.set("required", value).unwrap();
		assert_eq!(attrs.to_string(), expected);
	}

	#[rstest]
	fn test_tokens_rejected_outside_class() {
		let mut attrs = Attributes::new();
		let err = attrs.set("rel", vec!["a", "b"]).unwrap_err();
		assert!(matches!(err, HtmlError::UnsupportedValue { ref name, .. } if name == "rel"));
	}

	#[rstest]
	fn test_true_class_rejected() {
		let mut attrs = Attributes::new();
		assert!(attrs.set("class", true).is_err());
	}

	#[rstest]
	#[case("")]
	#[case("on click")]
	#[case("a\"b")]
	#[case("x>")]
	fn test_invalid_names_rejected(#[case] name: &str) {
		let mut attrs = Attributes::new();
		assert_eq!(
			attrs.set(name, "v"),
			Err(HtmlError::InvalidAttributeName(name.to_string()))
		);
	}

	#[rstest]
	fn test_values_are_escaped() {
		let attrs = Attributes::new()
			.with("title", r#"Tom & "Jerry" <3"#)
			.unwrap();
		assert_eq!(
			attrs.to_string(),
			r#"title="Tom &amp; &quot;Jerry&quot; &lt;3""#
		);
	}

	#[rstest]
	fn test_insertion_order_preserved_after_replace() {
		let mut attrs = Attributes::new();
		attrs.set("src", "a.jpg").unwrap();
		attrs.set("alt", "x").unwrap();
		attrs.set("src", "b.jpg").unwrap();
		assert_eq!(attrs.to_string(), r#"src="b.jpg" alt="x""#);
	}

	#[rstest]
	fn test_numbers_and_options() {
		let mut attrs = Attributes::new();
		attrs.set("width", 640).unwrap();
		attrs.set("media", None::<&str>).unwrap();
		attrs.set("lang", Some("en")).unwrap();
		assert_eq!(attrs.to_string(), r#"width="640" lang="en""#);
	}

	#[rstest]
	fn test_shortcut_accessors() {
		let mut attrs = Attributes::new();
		attrs.set_id("main");
		attrs.set_style("color: red");
		attrs.set_hyperscript("on click toggle .open");
		assert_eq!(attrs.id(), Some("main"));
		assert_eq!(attrs.style(), Some("color: red"));
		assert_eq!(attrs.hyperscript(), Some("on click toggle .open"));
		assert_eq!(
			attrs.to_string(),
			r#"id="main" style="color: red" _="on click toggle .open""#
		);
	}

	#[rstest]
	fn test_merge_unions_classes() {
		let mut base = attrs! { "class" => "a b", "id" => "x" }.unwrap();
		let extra = attrs! { "class" => "b c", "id" => "y" }.unwrap();
		base.merge(extra);
		assert_eq!(base.to_string(), r#"class="a b c" id="y""#);
	}

	#[rstest]
	fn test_append_class_after_false_class_keeps_position() {
		let mut attrs = Attributes::new();
		attrs.set("class", false).unwrap();
		attrs.set("id", "x").unwrap();
		attrs.append_class("a b");
		assert_eq!(attrs.to_string(), r#"class="a b" id="x""#);
	}

	#[rstest]
	fn test_merge_class_into_store_without_class() {
		let mut base = attrs! { "id" => "x" }.unwrap();
		base.merge(attrs! { "class" => "b a b" }.unwrap());
		assert_eq!(base.to_string(), r#"id="x" class="b a""#);
	}

	#[rstest]
	fn test_from_json() {
		let attrs = Attributes::from_json(&json!({
			"id": "main",
			"class": ["a", "b", "a"],
			"hidden": true,
			"tabindex": 3,
			"title": null,
		}))
		.unwrap();
		assert_eq!(
			attrs.to_string(),
			r#"id="main" class="a b" hidden="hidden" tabindex="3""#
		);
	}

	#[rstest]
	fn test_from_json_rejects_nested_mapping() {
		let err = Attributes::from_json(&json!({ "hx-vals": { "a": 1 } })).unwrap_err();
		assert!(matches!(err, HtmlError::UnsupportedValue { ref name, .. } if name == "hx-vals"));
	}

	#[rstest]
	fn test_from_json_rejects_non_string_tokens() {
		let err = Attributes::from_json(&json!({ "class": ["a", 1] })).unwrap_err();
		assert!(matches!(err, HtmlError::UnsupportedValue { .. }));
	}

	#[rstest]
	fn test_attrs_macro_propagates_errors() {
		let result = attrs! { "ok" => "1", "bad name" => "2" };
		assert!(matches!(result, Err(HtmlError::InvalidAttributeName(_))));
	}

	#[rstest]
	fn test_renders_empty() {
		let attrs = attrs! { "hidden" => false }.unwrap();
		assert!(attrs.renders_empty());
		assert_eq!(attrs.to_string(), "");
	}
}
