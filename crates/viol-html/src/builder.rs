//! Fluent element builder returned by the generated constructors.
//!
//! Errors are deferred: the first failing step is remembered and returned by
//! [`ElementBuilder::build`], so a chain reads top to bottom without `?` on
//! every call.
//!
//! ## Example
//!
//! ```
//! use viol_html::tags::button;
//! use viol_core::HxBinding;
//!
//! let save = button()
//!     .id("save")
//!     .class("btn btn-primary")
//!     .attr("type", "submit")
//!     .child("Save")
//!     .bind(HxBinding::post("/save").trigger("click"))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     save.render(),
//!     r##"<button id="save" class="btn btn-primary" type="submit" hx-post="/save" hx-trigger="click from:#save">Save</button>"##
//! );
//! ```

use viol_core::{AttrValue, Attributes, Element, HtmlError, HtmlResult, HxBinding, IntoNodes, Node};

use crate::settings::{AttributePolicy, html_settings};
use crate::vocabulary::{ElementSpec, spec_for};

/// Most elements are built with a handful of children
const TYPICAL_CHILD_COUNT: usize = 4;

/// Fluent builder for one [`Element`].
#[derive(Debug, Clone)]
pub struct ElementBuilder {
	tag: String,
	spec: Option<&'static ElementSpec>,
	attrs: Attributes,
	children: Vec<Node>,
	bindings: Vec<HxBinding>,
	policy: Option<AttributePolicy>,
	error: Option<HtmlError>,
}

impl ElementBuilder {
	/// Builder for a tag from the vocabulary table.
	pub fn for_spec(spec: &'static ElementSpec) -> Self {
		Self {
			tag: spec.tag.to_string(),
			spec: Some(spec),
			attrs: Attributes::new(),
			children: Vec::with_capacity(TYPICAL_CHILD_COUNT),
			bindings: Vec::new(),
			policy: None,
			error: None,
		}
	}

	/// Builder for any tag.
	///
	/// Tags found in the vocabulary are validated like the generated
	/// constructors; other tags (custom elements, SVG children) are not.
	pub fn new(tag: impl Into<String>) -> Self {
		let tag = tag.into();
		match spec_for(&tag) {
			Some(spec) if spec.tag == tag => Self::for_spec(spec),
			spec => Self {
				tag,
				spec,
				attrs: Attributes::new(),
				children: Vec::with_capacity(TYPICAL_CHILD_COUNT),
				bindings: Vec::new(),
				policy: None,
				error: None,
			},
		}
	}

	/// The vocabulary entry for this tag, if any.
	pub fn spec(&self) -> Option<&'static ElementSpec> {
		self.spec
	}

	/// Overrides the process-wide attribute policy for this element.
	pub fn policy(mut self, policy: AttributePolicy) -> Self {
		self.policy = Some(policy);
		self
	}

	/// Sets an attribute, replacing any previous value.
	pub fn attr(mut self, name: &str, value: impl Into<AttrValue>) -> Self {
		if let Err(err) = self.attrs.set(name, value) {
			self.fail(err);
		}
		self
	}

	/// Sets several attributes at once. `class` tokens are added to the existing ones.
	pub fn attrs(mut self, attrs: Attributes) -> Self {
		self.attrs.merge(attrs);
		self
	}

	/// Sets or clears a boolean attribute.
	pub fn bool_attr(self, name: &str, value: bool) -> Self {
		self.attr(name, value)
	}

	/// Sets the id attribute.
	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.attrs.set_id(id);
		self
	}

	/// Adds class tokens. Use space-separated values for multiple classes.
	pub fn class(mut self, class: &str) -> Self {
		self.attrs.append_class(class);
		self
	}

	/// Sets the style attribute.
	pub fn style(mut self, style: impl Into<String>) -> Self {
		self.attrs.set_style(style);
		self
	}

	/// Sets the hyperscript (`_`) attribute.
	pub fn hyperscript(mut self, script: impl Into<String>) -> Self {
		self.attrs.set_hyperscript(script);
		self
	}

	/// Appends children: text, trusted HTML, elements, or any sequence of them.
	pub fn child(mut self, children: impl IntoNodes) -> Self {
		children.into_nodes(&mut self.children);
		self
	}

	/// Appends a child that is itself still being built.
	pub fn child_builder(mut self, child: ElementBuilder) -> Self {
		match child.build() {
			Ok(element) => self.children.push(Node::Element(element)),
			Err(err) => self.fail(err),
		}
		self
	}

	/// Attaches an htmx binding.
	///
	/// Bindings are attached when the element is built, after the id, so the
	/// trigger is re-pointed at the final id.
	pub fn bind(mut self, binding: HxBinding) -> Self {
		self.bindings.push(binding);
		self
	}

	/// Finishes the element.
	///
	/// # Errors
	///
	/// - the first error recorded by an earlier step;
	/// - [`HtmlError::InvalidTagName`] for a tag that cannot be written;
	/// - [`HtmlError::VoidElementChildren`] when a void tag was given children;
	/// - [`HtmlError::AttributeNotAllowed`] under [`AttributePolicy::Reject`].
	pub fn build(self) -> HtmlResult<Element> {
		if let Some(err) = self.error {
			return Err(err);
		}

		let policy = self
			.policy
			.unwrap_or_else(|| html_settings().attribute_policy);
		if let Some(spec) = self.spec {
			check_attributes(spec, &self.attrs, policy)?;
		}

		let kind = self.spec.map(ElementSpec::kind).unwrap_or_default();
		let mut element = Element::with_kind(self.tag, kind)?;
		*element.attrs_mut() = self.attrs;
		element.extend_children(self.children)?;
		for binding in self.bindings {
			element.bind(binding);
		}
		Ok(element)
	}

	fn fail(&mut self, err: HtmlError) {
		if self.error.is_none() {
			self.error = Some(err);
		}
	}
}

impl TryFrom<ElementBuilder> for Element {
	type Error = HtmlError;

	fn try_from(builder: ElementBuilder) -> Result<Self, Self::Error> {
		builder.build()
	}
}

/// Validates attribute names against the vocabulary entry under `policy`.
pub fn check_attributes(
	spec: &ElementSpec,
	attrs: &Attributes,
	policy: AttributePolicy,
) -> HtmlResult<()> {
	if policy == AttributePolicy::Allow {
		return Ok(());
	}

	for (name, _) in attrs.iter() {
		if spec.permits_attribute(name) {
			continue;
		}
		match policy {
			AttributePolicy::Reject => {
				return Err(HtmlError::AttributeNotAllowed {
					tag: spec.tag.to_string(),
					name: name.to_string(),
				});
			}
			_ => {
				tracing::warn!("Attribute '{}' is not permitted on <{}>", name, spec.tag);
			}
		}
	}
	Ok(())
}
