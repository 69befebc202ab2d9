//! Serialization of element trees to HTML strings.
//!
//! Rendering is a recursive string-building walk. It never fails: every tree
//! that could be constructed can be written out.

use serde::{Deserialize, Serialize};

use crate::element::{Element, Node};
use crate::escape::escape_text;
use crate::markup::TrustedHtml;

/// Elements whose content is whitespace-sensitive. Pretty printing never adds
/// whitespace inside them, at any depth.
const PRESERVE_WHITESPACE: &[&str] = &["pre", "textarea", "script", "style", "title"];

/// Phrasing elements. A child list containing any of these is kept on one line.
const INLINE_TAGS: &[&str] = &[
	"a", "abbr", "b", "bdi", "bdo", "br", "button", "cite", "code", "data", "dfn", "em", "i",
	"img", "input", "kbd", "label", "mark", "meter", "output", "progress", "q", "s", "samp",
	"select", "small", "span", "strong", "sub", "sup", "time", "u", "var", "wbr",
];

/// Output formatting options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
	/// Put block-level child elements on their own indented lines.
	pub pretty: bool,
	/// Spaces per indentation level when `pretty` is set.
	pub indent: usize,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			pretty: false,
			indent: 2,
		}
	}
}

impl RenderOptions {
	pub fn pretty() -> Self {
		Self {
			pretty: true,
			..Self::default()
		}
	}
}

/// Something that can be written out as HTML.
pub trait Renderable {
	/// Appends the markup to `out`.
	fn render_into(&self, out: &mut String, options: &RenderOptions);
}

/// Renders a value to an HTML string.
///
/// Plain strings are escaped; [`TrustedHtml`] is written verbatim.
pub fn render<R: Renderable + ?Sized>(value: &R) -> String {
	render_with(value, &RenderOptions::default())
}

/// Renders a value with explicit formatting options.
pub fn render_with<R: Renderable + ?Sized>(value: &R, options: &RenderOptions) -> String {
	let mut out = String::new();
	value.render_into(&mut out, options);
	out
}

impl Renderable for str {
	fn render_into(&self, out: &mut String, _options: &RenderOptions) {
		out.push_str(&escape_text(self));
	}
}

impl Renderable for String {
	fn render_into(&self, out: &mut String, options: &RenderOptions) {
		self.as_str().render_into(out, options);
	}
}

impl Renderable for TrustedHtml {
	fn render_into(&self, out: &mut String, _options: &RenderOptions) {
		out.push_str(self.as_str());
	}
}

impl Renderable for Element {
	fn render_into(&self, out: &mut String, options: &RenderOptions) {
		Writer { out, options }.element(self, 0, false);
	}
}

impl Renderable for Node {
	fn render_into(&self, out: &mut String, options: &RenderOptions) {
		Writer { out, options }.node(self, 0, false);
	}
}

impl<T: Renderable> Renderable for [T] {
	fn render_into(&self, out: &mut String, options: &RenderOptions) {
		for item in self {
			item.render_into(out, options);
		}
	}
}

impl<T: Renderable> Renderable for Vec<T> {
	fn render_into(&self, out: &mut String, options: &RenderOptions) {
		self.as_slice().render_into(out, options);
	}
}

impl<T: Renderable> Renderable for Option<T> {
	fn render_into(&self, out: &mut String, options: &RenderOptions) {
		if let Some(value) = self {
			value.render_into(out, options);
		}
	}
}

impl<T: Renderable + ?Sized> Renderable for &T {
	fn render_into(&self, out: &mut String, options: &RenderOptions) {
		(**self).render_into(out, options);
	}
}

struct Writer<'a> {
	out: &'a mut String,
	options: &'a RenderOptions,
}

impl Writer<'_> {
	fn node(&mut self, node: &Node, depth: usize, preserve: bool) {
		match node {
			Node::Text(text) => self.out.push_str(&escape_text(text)),
			Node::Raw(html) => self.out.push_str(html.as_str()),
			Node::Element(element) => self.element(element, depth, preserve),
		}
	}

	fn element(&mut self, element: &Element, depth: usize, preserve: bool) {
		let tag = element.tag();
		self.out.push('<');
		self.out.push_str(tag);

		let mut bindings = element.bindings().iter();
		match bindings.next() {
			Some(first) => {
				let mut attrs = element.attrs().clone();
				attrs.merge(first.to_attributes());
				attrs.write_to(self.out);
			}
			None => element.attrs().write_to(self.out),
		}

		if element.is_void() {
			self.out.push_str(" />");
		} else {
			self.out.push('>');
			let preserve = preserve || PRESERVE_WHITESPACE.iter().any(|name| name.eq_ignore_ascii_case(tag));
			let block = self.options.pretty && !preserve && is_block_content(element.children());
			for child in element.children() {
				if block {
					self.newline(depth + 1);
				}
				self.node(child, depth + 1, preserve);
			}
			if block {
				self.newline(depth);
			}
			self.out.push_str("</");
			self.out.push_str(tag);
			self.out.push('>');
		}

		for binding in bindings {
			self.out.push_str(&binding.to_standalone());
		}
	}

	fn newline(&mut self, depth: usize) {
		self.out.push('\n');
		for _ in 0..depth * self.options.indent {
			self.out.push(' ');
		}
	}
}

/// Children are laid out one per line only when every child is a block-level
/// element; any text, raw markup or phrasing element keeps them inline.
fn is_block_content(children: &[Node]) -> bool {
	!children.is_empty()
		&& children.iter().all(|child| match child {
			Node::Element(element) => !INLINE_TAGS.contains(&element.tag().to_ascii_lowercase().as_str()),
			_ => false,
		})
}
