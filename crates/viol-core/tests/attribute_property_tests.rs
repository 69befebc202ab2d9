//! Property-based tests for the attribute store.

use proptest::prelude::*;
use proptest::proptest;
use scraper::{Html, Selector};
use viol_core::{Attributes, ClassList, Element, render};

proptest! {
	/// Property: setting class from a string or from its tokens gives the same output
	#[test]
	fn prop_class_string_equals_tokens(
		tokens in prop::collection::vec(r"[a-z][a-z0-9-]{0,8}", 0..8)
	) {
		let mut from_string = Attributes::new();
		from_string.set("class", tokens.join(" ")).unwrap();

		let mut from_tokens = Attributes::new();
		from_tokens.set("class", tokens.clone()).unwrap();

		prop_assert_eq!(from_string.to_string(), from_tokens.to_string());
	}

	/// Property: class tokens are unique and keep first-seen order
	#[test]
	fn prop_class_tokens_deduplicated_in_order(
		tokens in prop::collection::vec(r"[a-c]{1,2}", 0..12)
	) {
		let list = ClassList::from_tokens(&tokens);
		let mut expected: Vec<&str> = Vec::new();
		for token in &tokens {
			if !expected.contains(&token.as_str()) {
				expected.push(token);
			}
		}
		prop_assert_eq!(list.iter().collect::<Vec<_>>(), expected);
	}

	/// Property: appending an existing token never changes the output
	#[test]
	fn prop_append_existing_is_noop(
		tokens in prop::collection::vec(r"[a-z]{1,6}", 1..6),
		pick in 0usize..6
	) {
		let mut attrs = Attributes::new();
		attrs.set("class", tokens.clone()).unwrap();
		let before = attrs.to_string();
		attrs.append_class(&tokens[pick % tokens.len()]);
		prop_assert_eq!(attrs.to_string(), before);
	}

	/// Property: any printable value survives escaping and re-parsing
	#[test]
	fn prop_attribute_value_round_trip(
		name in r"data-[a-z]{1,10}",
		value in r"[ -~]{0,40}"
	) {
		let mut attrs = Attributes::new();
		attrs.set(&name, value.as_str()).unwrap();
		let div = Element::with("div", (), attrs).unwrap();

		let doc = Html::parse_fragment(&render(&div));
		let selector = Selector::parse("div").unwrap();
		let parsed = doc.select(&selector).next().unwrap();
		prop_assert_eq!(parsed.value().attr(&name), Some(value.as_str()));
	}

	/// Property: any printable text survives escaping and re-parsing
	#[test]
	fn prop_text_round_trip(text in r"[ -~]{1,40}") {
		let p = Element::with("p", text.as_str(), Attributes::new()).unwrap();

		let doc = Html::parse_fragment(&render(&p));
		let selector = Selector::parse("p").unwrap();
		let parsed = doc.select(&selector).next().unwrap();
		prop_assert_eq!(parsed.text().collect::<String>(), text);
	}

	/// Property: names differing only in case address one entry
	#[test]
	fn prop_names_case_insensitive(name in r"[a-zA-Z]{1,12}") {
		let mut attrs = Attributes::new();
		attrs.set(&name, "x").unwrap();
		prop_assert!(attrs.contains(&name.to_ascii_uppercase()));
		prop_assert!(attrs.contains(&name.to_ascii_lowercase()));
		prop_assert_eq!(attrs.len(), 1);
	}
}
