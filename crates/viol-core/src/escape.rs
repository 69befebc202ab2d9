//! Escaping and name-validation helpers shared by the attribute store and the renderer.

use std::borrow::Cow;

/// Escapes HTML special characters for use inside a double-quoted attribute value.
///
/// This function replaces the following characters:
/// - `&` → `&amp;`
/// - `<` → `&lt;`
/// - `>` → `&gt;`
/// - `"` → `&quot;`
/// - `'` → `&#x27;`
///
/// Returns a borrowed reference if no escaping is needed,
/// or an owned string if any characters were escaped.
pub fn escape_attr(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

/// Escapes text content: `&`, `<` and `>` only.
pub fn escape_text(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

/// HTML boolean attributes.
///
/// The presence of the attribute alone makes it active, regardless of its value:
/// - `<button disabled="">` is disabled
/// - `<button disabled="false">` is STILL disabled
/// - `<button>` is NOT disabled (attribute absent)
pub const BOOLEAN_ATTRS: &[&str] = &[
	"allowfullscreen",
	"async",
	"autofocus",
	"autoplay",
	"checked",
	"controls",
	"default",
	"defer",
	"disabled",
	"formnovalidate",
	"hidden",
	"inert",
	"ismap",
	"itemscope",
	"loop",
	"multiple",
	"muted",
	"nomodule",
	"novalidate",
	"open",
	"playsinline",
	"readonly",
	"required",
	"reversed",
	"selected",
	"truespeed",
];

/// Returns `true` if `name` (already lower-cased) is an HTML boolean attribute.
pub fn is_boolean_attr(name: &str) -> bool {
	BOOLEAN_ATTRS.contains(&name)
}

/// Checks if a textual boolean attribute value should result in the attribute being set.
///
/// Returns `false` for empty strings, "false" or "0".
pub fn is_boolean_attr_truthy(value: &str) -> bool {
	!value.is_empty() && value != "false" && value != "0"
}

/// Returns `true` if `name` can be written as a tag name without breaking markup.
///
/// Accepts standard tags, custom elements (`my-widget`) and camel-cased SVG
/// tags (`clipPath`).
pub fn is_valid_tag_name(name: &str) -> bool {
	let mut chars = name.chars();
	match chars.next() {
		Some(first) if first.is_ascii_alphabetic() => {}
		_ => return false,
	}
	chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'))
}

/// Returns `true` if `name` can be written as an attribute name without breaking markup.
pub fn is_valid_attr_name(name: &str) -> bool {
	!name.is_empty()
		&& !name.chars().any(|c| {
			c.is_whitespace()
				|| c.is_control()
				|| matches!(c, '"' | '\'' | '<' | '>' | '/' | '=' | '`')
		})
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_escape_attr_no_special_chars() {
		assert_eq!(escape_attr("Hello World"), Cow::Borrowed("Hello World"));
	}

	#[rstest]
	fn test_escape_attr_quotes() {
		assert_eq!(
			escape_attr("\"test\" 'value'"),
			Cow::<str>::Owned("&quot;test&quot; &#x27;value&#x27;".to_string())
		);
	}

	#[rstest]
	fn test_escape_text_leaves_quotes() {
		assert_eq!(escape_text("say \"hi\""), Cow::Borrowed("say \"hi\""));
		assert_eq!(escape_text("a < b & c > d"), "a &lt; b &amp; c &gt; d");
	}

	#[rstest]
	#[case("true", true)]
	#[case("1", true)]
	#[case("disabled", true)]
	#[case("", false)]
	#[case("false", false)]
	#[case("0", false)]
	fn test_is_boolean_attr_truthy(#[case] value: &str, #[case] expected: bool) {
		assert_eq!(is_boolean_attr_truthy(value), expected);
	}

	#[rstest]
	#[case("div", true)]
	#[case("h1", true)]
	#[case("my-widget", true)]
	#[case("clipPath", true)]
	#[case("", false)]
	#[case("1div", false)]
	#[case("di v", false)]
	#[case("div>", false)]
	fn test_is_valid_tag_name(#[case] name: &str, #[case] expected: bool) {
		assert_eq!(is_valid_tag_name(name), expected);
	}

	#[rstest]
	#[case("class", true)]
	#[case("data-user-id", true)]
	#[case("hx-get", true)]
	#[case("_", true)]
	#[case("@click", true)]
	#[case("", false)]
	#[case("a b", false)]
	#[case("a=b", false)]
	#[case("x\"", false)]
	fn test_is_valid_attr_name(#[case] name: &str, #[case] expected: bool) {
		assert_eq!(is_valid_attr_name(name), expected);
	}
}
