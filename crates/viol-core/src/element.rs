//! Element tree.
//!
//! An [`Element`] exclusively owns its [`Attributes`], its ordered children and
//! its htmx bindings. Inserting a child moves it into the parent; sharing a
//! subtree between parents takes an explicit `clone()`.

use std::fmt;

use crate::attrs::{AttrValue, Attributes};
use crate::error::{HtmlError, HtmlResult};
use crate::escape::is_valid_tag_name;
use crate::events::HxBinding;
use crate::markup::TrustedHtml;

/// Whether an element may hold children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ElementKind {
	#[default]
	Normal,
	/// Self-closing; the child list is always empty.
	Void,
}

/// A child of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	/// Text content, escaped on render.
	Text(String),
	/// Markup written verbatim.
	Raw(TrustedHtml),
	/// A nested element.
	Element(Element),
}

impl Node {
	/// Returns the element, if this node is one.
	pub fn as_element(&self) -> Option<&Element> {
		match self {
			Node::Element(element) => Some(element),
			_ => None,
		}
	}
}

impl From<&str> for Node {
	fn from(text: &str) -> Self {
		Node::Text(text.to_string())
	}
}

impl From<String> for Node {
	fn from(text: String) -> Self {
		Node::Text(text)
	}
}

impl From<TrustedHtml> for Node {
	fn from(html: TrustedHtml) -> Self {
		Node::Raw(html)
	}
}

impl From<Element> for Node {
	fn from(element: Element) -> Self {
		Node::Element(element)
	}
}

/// Values that can be flattened into a child list.
///
/// Implemented for single nodes (text, trusted HTML, elements), sequences,
/// `Option` and tuples, so a children argument can be one child or an ordered
/// mix of them.
pub trait IntoNodes {
	/// Appends the nodes, in order, to `out`.
	fn into_nodes(self, out: &mut Vec<Node>);

	/// Collects the nodes into a new vector.
	fn collect_nodes(self) -> Vec<Node>
	where
		Self: Sized,
	{
		let mut nodes = Vec::new();
		self.into_nodes(&mut nodes);
		nodes
	}
}

impl IntoNodes for Node {
	fn into_nodes(self, out: &mut Vec<Node>) {
		out.push(self);
	}
}

impl IntoNodes for Element {
	fn into_nodes(self, out: &mut Vec<Node>) {
		out.push(Node::Element(self));
	}
}

impl IntoNodes for TrustedHtml {
	fn into_nodes(self, out: &mut Vec<Node>) {
		out.push(Node::Raw(self));
	}
}

impl IntoNodes for &str {
	fn into_nodes(self, out: &mut Vec<Node>) {
		out.push(Node::Text(self.to_string()));
	}
}

impl IntoNodes for String {
	fn into_nodes(self, out: &mut Vec<Node>) {
		out.push(Node::Text(self));
	}
}

impl IntoNodes for &String {
	fn into_nodes(self, out: &mut Vec<Node>) {
		out.push(Node::Text(self.clone()));
	}
}

impl IntoNodes for () {
	fn into_nodes(self, _out: &mut Vec<Node>) {}
}

impl<T: IntoNodes> IntoNodes for Option<T> {
	fn into_nodes(self, out: &mut Vec<Node>) {
		if let Some(value) = self {
			value.into_nodes(out);
		}
	}
}

impl<T: IntoNodes> IntoNodes for Vec<T> {
	fn into_nodes(self, out: &mut Vec<Node>) {
		for item in self {
			item.into_nodes(out);
		}
	}
}

impl<T: IntoNodes, const N: usize> IntoNodes for [T; N] {
	fn into_nodes(self, out: &mut Vec<Node>) {
		for item in self {
			item.into_nodes(out);
		}
	}
}

macro_rules! impl_into_nodes_for_tuple {
	($($name:ident),+) => {
		impl<$($name: IntoNodes),+> IntoNodes for ($($name,)+) {
			#[allow(non_snake_case)]
			fn into_nodes(self, out: &mut Vec<Node>) {
				let ($($name,)+) = self;
				$( $name.into_nodes(out); )+
			}
		}
	};
}

impl_into_nodes_for_tuple!(A);
impl_into_nodes_for_tuple!(A, B);
impl_into_nodes_for_tuple!(A, B, C);
impl_into_nodes_for_tuple!(A, B, C, D);
impl_into_nodes_for_tuple!(A, B, C, D, E);
impl_into_nodes_for_tuple!(A, B, C, D, E, F);
impl_into_nodes_for_tuple!(A, B, C, D, E, F, G);
impl_into_nodes_for_tuple!(A, B, C, D, E, F, G, H);

/// One HTML element: tag, attributes, ordered children and htmx bindings.
///
/// ```
/// use viol_core::{Element, attrs, render};
///
/// let bold = Element::with("b", "bold", attrs! {}.unwrap()).unwrap();
/// let p = Element::with("p", ("a ", bold, " c"), attrs! {}.unwrap()).unwrap();
/// assert_eq!(render(&p), "<p>a <b>bold</b> c</p>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
	tag: String,
	kind: ElementKind,
	attrs: Attributes,
	children: Vec<Node>,
	bindings: Vec<HxBinding>,
}

impl Element {
	/// Creates an empty normal element.
	///
	/// # Errors
	///
	/// [`HtmlError::InvalidTagName`] if `tag` cannot be written as a tag name.
	pub fn new(tag: impl Into<String>) -> HtmlResult<Self> {
		Self::with_kind(tag, ElementKind::Normal)
	}

	/// Creates an empty void element.
	pub fn void(tag: impl Into<String>) -> HtmlResult<Self> {
		Self::with_kind(tag, ElementKind::Void)
	}

	/// Creates an empty element of the given kind.
	pub fn with_kind(tag: impl Into<String>, kind: ElementKind) -> HtmlResult<Self> {
		let tag = tag.into();
		if !is_valid_tag_name(&tag) {
			return Err(HtmlError::InvalidTagName(tag));
		}
		Ok(Self {
			tag,
			kind,
			attrs: Attributes::new(),
			children: Vec::new(),
			bindings: Vec::new(),
		})
	}

	/// Creates a normal element with children and attributes.
	pub fn with(tag: impl Into<String>, children: impl IntoNodes, attrs: Attributes) -> HtmlResult<Self> {
		let mut element = Self::new(tag)?;
		element.attrs = attrs;
		children.into_nodes(&mut element.children);
		Ok(element)
	}

	/// Creates a void element with attributes.
	pub fn void_with(tag: impl Into<String>, attrs: Attributes) -> HtmlResult<Self> {
		let mut element = Self::void(tag)?;
		element.attrs = attrs;
		Ok(element)
	}

	pub fn tag(&self) -> &str {
		&self.tag
	}

	pub fn kind(&self) -> ElementKind {
		self.kind
	}

	pub fn is_void(&self) -> bool {
		self.kind == ElementKind::Void
	}

	pub fn attrs(&self) -> &Attributes {
		&self.attrs
	}

	pub fn attrs_mut(&mut self) -> &mut Attributes {
		&mut self.attrs
	}

	/// Looks up an attribute, case-insensitively.
	pub fn attr(&self, name: &str) -> Option<&AttrValue> {
		self.attrs.get(name)
	}

	/// Sets an attribute. See [`Attributes::set`].
	pub fn set_attr(&mut self, name: impl AsRef<str>, value: impl Into<AttrValue>) -> HtmlResult<()> {
		self.attrs.set(name, value)
	}

	/// Chaining form of [`set_attr`](Self::set_attr).
	pub fn with_attr(mut self, name: impl AsRef<str>, value: impl Into<AttrValue>) -> HtmlResult<Self> {
		self.attrs.set(name, value)?;
		Ok(self)
	}

	pub fn id(&self) -> Option<&str> {
		self.attrs.id()
	}

	pub fn set_id(&mut self, id: impl Into<String>) {
		self.attrs.set_id(id);
	}

	pub fn add_class(&mut self, token: &str) {
		self.attrs.append_class(token);
	}

	pub fn remove_class(&mut self, token: &str) {
		self.attrs.remove_class(token);
	}

	pub fn has_class(&self, token: &str) -> bool {
		self.attrs.has_class(token)
	}

	pub fn style(&self) -> Option<&str> {
		self.attrs.style()
	}

	pub fn set_style(&mut self, style: impl Into<String>) {
		self.attrs.set_style(style);
	}

	pub fn hyperscript(&self) -> Option<&str> {
		self.attrs.hyperscript()
	}

	pub fn set_hyperscript(&mut self, script: impl Into<String>) {
		self.attrs.set_hyperscript(script);
	}

	pub fn children(&self) -> &[Node] {
		&self.children
	}

	/// Appends one child.
	///
	/// # Errors
	///
	/// [`HtmlError::VoidElementChildren`] on a void element.
	pub fn push_child(&mut self, child: impl Into<Node>) -> HtmlResult<()> {
		self.ensure_accepts_children()?;
		self.children.push(child.into());
		Ok(())
	}

	/// Appends every node in `children`.
	///
	/// Appending nothing to a void element is allowed.
	pub fn extend_children(&mut self, children: impl IntoNodes) -> HtmlResult<()> {
		let nodes = children.collect_nodes();
		if nodes.is_empty() {
			return Ok(());
		}
		self.ensure_accepts_children()?;
		self.children.extend(nodes);
		Ok(())
	}

	/// Chaining form of [`extend_children`](Self::extend_children).
	pub fn child(mut self, children: impl IntoNodes) -> HtmlResult<Self> {
		self.extend_children(children)?;
		Ok(self)
	}

	/// Inserts a child at `index`, shifting later children right.
	///
	/// `index` is clamped to the number of children.
	pub fn insert_child(&mut self, index: usize, child: impl Into<Node>) -> HtmlResult<()> {
		self.ensure_accepts_children()?;
		let index = index.min(self.children.len());
		self.children.insert(index, child.into());
		Ok(())
	}

	/// Removes and returns the child at `index`.
	pub fn remove_child(&mut self, index: usize) -> Option<Node> {
		(index < self.children.len()).then(|| self.children.remove(index))
	}

	/// Removes every child and returns them.
	pub fn take_children(&mut self) -> Vec<Node> {
		std::mem::take(&mut self.children)
	}

	/// Attaches an htmx binding.
	///
	/// If the element already has an `id`, the binding's trigger is re-pointed
	/// at it (see [`HxBinding::bind_to`]). Set the id before binding.
	pub fn bind(&mut self, mut binding: HxBinding) {
		match self.attrs.id() {
			Some(id) => binding.bind_to(id),
			None if binding.trigger.is_some() => {
				tracing::debug!(
					tag = %self.tag,
					"binding attached to element without id; trigger left unchanged"
				);
			}
			None => {}
		}
		self.bindings.push(binding);
	}

	/// Chaining form of [`bind`](Self::bind).
	pub fn with_binding(mut self, binding: HxBinding) -> Self {
		self.bind(binding);
		self
	}

	pub fn bindings(&self) -> &[HxBinding] {
		&self.bindings
	}

	/// Removes every binding and returns them.
	pub fn take_bindings(&mut self) -> Vec<HxBinding> {
		std::mem::take(&mut self.bindings)
	}

	/// Renders this element to a string.
	pub fn render(&self) -> String {
		crate::render::render(self)
	}

	fn ensure_accepts_children(&self) -> HtmlResult<()> {
		if self.is_void() {
			return Err(HtmlError::VoidElementChildren {
				tag: self.tag.clone(),
			});
		}
		Ok(())
	}
}

impl fmt::Display for Element {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render())
	}
}

impl fmt::Display for Node {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&crate::render::render(self))
	}
}
