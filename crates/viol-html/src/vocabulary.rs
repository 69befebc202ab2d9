//! HTML element vocabulary.
//!
//! A static, table-driven description of the HTML element set, modelled on the
//! WHATWG element index: for every tag its description, content categories,
//! permitted parents and children, permitted attributes, DOM interface and
//! whether it is a void element.
//!
//! The `vocabulary!` invocation at the bottom of this file expands into the
//! table itself ([`ELEMENTS`]) and into one constructor per tag in [`tags`], so
//! the two can never drift apart. The table is reference data: it drives
//! advisory attribute validation and void detection, nothing more.

use std::collections::HashMap;
use std::sync::LazyLock;

use viol_core::ElementKind;

/// Marker in [`ElementSpec::attributes`]: the global attributes are permitted.
pub const GLOBALS: &str = "globals";

/// Marker in [`ElementSpec::attributes`]: any attribute is permitted.
pub const ANY_ATTRIBUTE: &str = "*";

/// Global HTML attributes, permitted on every element whose entry lists [`GLOBALS`].
///
/// Based on: <https://html.spec.whatwg.org/multipage/dom.html#global-attributes>
pub static GLOBAL_ATTRS: &[&str] = &[
	"accesskey",
	"autocapitalize",
	"autocorrect",
	"autofocus",
	"class",
	"contenteditable",
	"dir",
	"draggable",
	"enterkeyhint",
	"hidden",
	"id",
	"inert",
	"inputmode",
	"is",
	"itemid",
	"itemprop",
	"itemref",
	"itemscope",
	"itemtype",
	"lang",
	"nonce",
	"popover",
	"role",
	"slot",
	"spellcheck",
	"style",
	"tabindex",
	"title",
	"translate",
	"writingsuggestions",
];

/// Attribute name prefixes accepted on every element.
const ACCEPTED_PREFIXES: &[&str] = &["data-", "aria-", "hx-"];

/// Event handler content attributes, sorted.
pub const EVENT_HANDLER_ATTRS: &[&str] = &[
	"onabort",
	"onafterprint",
	"onauxclick",
	"onbeforeinput",
	"onbeforematch",
	"onbeforeprint",
	"onbeforetoggle",
	"onbeforeunload",
	"onblur",
	"oncancel",
	"oncanplay",
	"oncanplaythrough",
	"onchange",
	"onclick",
	"onclose",
	"oncontextlost",
	"oncontextmenu",
	"oncontextrestored",
	"oncopy",
	"oncuechange",
	"oncut",
	"ondblclick",
	"ondrag",
	"ondragend",
	"ondragenter",
	"ondragleave",
	"ondragover",
	"ondragstart",
	"ondrop",
	"ondurationchange",
	"onemptied",
	"onended",
	"onerror",
	"onfocus",
	"onformdata",
	"onhashchange",
	"oninput",
	"oninvalid",
	"onkeydown",
	"onkeypress",
	"onkeyup",
	"onlanguagechange",
	"onload",
	"onloadeddata",
	"onloadedmetadata",
	"onloadstart",
	"onmessage",
	"onmessageerror",
	"onoffline",
	"ononline",
	"onpagehide",
	"onpagereveal",
	"onpageshow",
	"onpageswap",
	"onpaste",
	"onpause",
	"onplay",
	"onplaying",
	"onpopstate",
	"onprogress",
	"onratechange",
	"onrejectionhandled",
	"onreset",
	"onresize",
	"onscroll",
	"onscrollend",
	"onsecuritypolicyviolation",
	"onseeked",
	"onseeking",
	"onselect",
	"onslotchange",
	"onstalled",
	"onstorage",
	"onsubmit",
	"onsuspend",
	"ontimeupdate",
	"ontoggle",
	"onunhandledrejection",
	"onunload",
	"onvolumechange",
	"onwaiting",
	"onwheel",
];

/// Returns `true` for attributes that are accepted on every element regardless
/// of the table: `data-*`, `aria-*`, `hx-*`, event handlers ([`EVENT_HANDLER_ATTRS`])
/// and the hyperscript attribute `_`.
pub fn is_always_accepted(name: &str) -> bool {
	name == viol_core::attrs::HYPERSCRIPT_ATTR
		|| EVENT_HANDLER_ATTRS.binary_search(&name).is_ok()
		|| ACCEPTED_PREFIXES
			.iter()
			.any(|prefix| name.len() > prefix.len() && name.starts_with(prefix))
}

/// Returns `true` if `name` is a global attribute.
pub fn is_global_attribute(name: &str) -> bool {
	GLOBAL_ATTRS.contains(&name)
}

/// One row of the vocabulary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSpec {
	/// Element tag name
	pub tag: &'static str,
	/// Short human-readable description
	pub description: &'static str,
	/// Content categories the element belongs to (`flow`, `phrasing`, ...)
	pub categories: &'static [&'static str],
	/// Where the element may appear: categories or parent tags
	pub parents: &'static [&'static str],
	/// What the element may contain: categories, tags, `text` or `transparent`.
	/// Empty means nothing.
	pub children: &'static [&'static str],
	/// Element-specific attributes, plus the [`GLOBALS`] or [`ANY_ATTRIBUTE`] markers
	pub attributes: &'static [&'static str],
	/// DOM interface name
	pub interface: &'static str,
	/// Whether this is a void element (no children, self-closing)
	pub is_void: bool,
}

impl ElementSpec {
	/// The element kind constructors for this tag produce.
	pub fn kind(&self) -> ElementKind {
		if self.is_void {
			ElementKind::Void
		} else {
			ElementKind::Normal
		}
	}

	/// Returns `true` if the element belongs to the content category.
	pub fn has_category(&self, category: &str) -> bool {
		self.categories.contains(&category)
	}

	/// Returns `true` if the table permits `name` (lower-cased) on this element.
	pub fn permits_attribute(&self, name: &str) -> bool {
		if is_always_accepted(name) || self.attributes.contains(&ANY_ATTRIBUTE) {
			return true;
		}
		if name == GLOBALS || name == ANY_ATTRIBUTE {
			return false;
		}
		self.attributes.contains(&name)
			|| (self.attributes.contains(&GLOBALS) && is_global_attribute(name))
	}

	/// Element-specific attributes, without the markers.
	pub fn specific_attributes(&self) -> impl Iterator<Item = &'static str> {
		self.attributes
			.iter()
			.copied()
			.filter(|name| *name != GLOBALS && *name != ANY_ATTRIBUTE)
	}
}

static INDEX: LazyLock<HashMap<&'static str, &'static ElementSpec>> =
	LazyLock::new(|| ELEMENTS.iter().map(|spec| (spec.tag, *spec)).collect());

/// Looks up a tag in the vocabulary. Lookup is case-insensitive.
pub fn spec_for(tag: &str) -> Option<&'static ElementSpec> {
	if tag.bytes().any(|b| b.is_ascii_uppercase()) {
		INDEX.get(tag.to_ascii_lowercase().as_str()).copied()
	} else {
		INDEX.get(tag).copied()
	}
}

/// Returns `true` if the vocabulary marks `tag` as a void element.
pub fn is_void_tag(tag: &str) -> bool {
	spec_for(tag).is_some_and(|spec| spec.is_void)
}

macro_rules! vocabulary {
	(@void) => {
		false
	};
	(@void void) => {
		true
	};
	($(
		$name:ident $(@$void:ident)? {
			$description:literal, $interface:ident,
			categories: [$($category:literal),* $(,)?],
			parents: [$($parent:literal),* $(,)?],
			children: [$($child:literal),* $(,)?],
			attrs: [$($attr:literal),* $(,)?] $(,)?
		}
	)*) => {
		#[allow(non_upper_case_globals)]
		mod specs {
			use super::ElementSpec;
			$(
				pub(super) static $name: ElementSpec = ElementSpec {
					tag: stringify!($name),
					description: $description,
					categories: &[$($category),*],
					parents: &[$($parent),*],
					children: &[$($child),*],
					attributes: &[$($attr),*],
					interface: stringify!($interface),
					is_void: vocabulary!(@void $($void)?),
				};
			)*
		}

		/// Every element in the vocabulary, in table order.
		pub static ELEMENTS: &[&ElementSpec] = &[$(&specs::$name),*];

		/// One constructor per tag in the vocabulary.
		///
		/// Each returns an [`ElementBuilder`](crate::builder::ElementBuilder)
		/// bound to the tag's table entry.
		///
		/// ```
		/// use viol_html::tags::{b, p};
		///
		/// let para = p().child(("a ", b().child("bold").build().unwrap(), " c")).build().unwrap();
		/// assert_eq!(para.render(), "<p>a <b>bold</b> c</p>");
		/// ```
		pub mod tags {
			use crate::builder::ElementBuilder;
			$(
				#[doc = concat!("`<", stringify!($name), ">`: ", $description, ".")]
				pub fn $name() -> ElementBuilder {
					ElementBuilder::for_spec(&super::specs::$name)
				}
			)*
		}
	};
}

vocabulary! {
	a {
		"Hyperlink", HTMLAnchorElement,
		categories: ["flow", "phrasing", "interactive", "palpable"],
		parents: ["phrasing"],
		children: ["transparent"],
		attrs: ["globals", "href", "target", "download", "ping", "rel", "hreflang", "type", "referrerpolicy"],
	}
	abbr {
		"Abbreviation", HTMLElement,
		categories: ["flow", "phrasing", "palpable"],
		parents: ["phrasing"],
		children: ["phrasing"],
		attrs: ["globals"],
	}
	address {
		"Contact information for a page or article element", HTMLElement,
		categories: ["flow", "palpable"],
		parents: ["flow"],
		children: ["flow"],
		attrs: ["globals"],
	}
	area @void {
		"Hyperlink or dead area on an image map", HTMLAreaElement,
		categories: ["flow", "phrasing"],
		parents: ["phrasing"],
		children: [],
		attrs: ["globals", "alt", "coords", "shape", "href", "target", "download", "ping", "rel", "referrerpolicy"],
	}
	article {
		"Self-contained syndicatable or reusable composition", HTMLElement,
		categories: ["flow", "sectioning", "palpable"],
		parents: ["flow"],
		children: ["flow"],
		attrs: ["globals"],
	}
	aside {
		"Sidebar for tangentially related content", HTMLElement,
		categories: ["flow", "sectioning", "palpable"],
		parents: ["flow"],
		children: ["flow"],
		attrs: ["globals"],
	}
	audio {
		"Audio player", HTMLAudioElement,
		categories: ["flow", "phrasing", "embedded", "interactive", "palpable"],
		parents: ["phrasing"],
		children: ["source", "track", "transparent"],
		attrs: ["globals", "src", "crossorigin", "preload", "autoplay", "loop", "muted", "controls"],
	}
	b {
		"Keywords", HTMLElement,
		categories: ["flow", "phrasing", "palpable"],
		parents: ["phrasing"],
		children: ["phrasing"],
		attrs: ["globals"],
	}
	base @void {
		"Base URL and default target for hyperlinks and forms", HTMLBaseElement,
		categories: ["metadata"],
		parents: ["head"],
		children: [],
		attrs: ["globals", "href", "target"],
	}
	bdi {
		"Text directionality isolation", HTMLElement,
		categories: ["flow", "phrasing", "palpable"],
		parents: ["phrasing"],
		children: ["phrasing"],
		attrs: ["globals"],
	}
	bdo {
		"Text directionality formatting", HTMLElement,
		categories: ["flow", "phrasing", "palpable"],
		parents: ["phrasing"],
		children: ["phrasing"],
		attrs: ["globals"],
	}
	blockquote {
		"A section quoted from another source", HTMLQuoteElement,
		categories: ["flow", "palpable"],
		parents: ["flow"],
		children: ["flow"],
		attrs: ["globals", "cite"],
	}
	body {
		"Document body", HTMLBodyElement,
		categories: [],
		parents: ["html"],
		children: ["flow"],
		attrs: ["globals"],
	}
	br @void {
		"Line break, e.g. in poem or postal address", HTMLBRElement,
		categories: ["flow", "phrasing"],
		parents: ["phrasing"],
		children: [],
		attrs: ["globals"],
	}
	button {
		"Button control", HTMLButtonElement,
		categories: ["flow", "phrasing", "interactive", "listed", "labelable", "submittable", "form-associated", "palpable"],
		parents: ["phrasing"],
		children: ["phrasing"],
		attrs: [
			"globals", "command", "commandfor", "disabled", "form", "formaction", "formenctype", "formmethod",
			"formnovalidate", "formtarget", "name", "popovertarget", "popovertargetaction", "type", "value",
		],
	}
	canvas {
		"Scriptable bitmap canvas", HTMLCanvasElement,
		categories: ["flow", "phrasing", "embedded", "palpable"],
		parents: ["phrasing"],
		children: ["transparent"],
		attrs: ["globals", "width", "height"],
	}
	caption {
		"Table caption", HTMLTableCaptionElement,
		categories: [],
		parents: ["table"],
		children: ["flow"],
		attrs: ["globals"],
	}
	cite {
		"Title of a work", HTMLElement,
		categories: ["flow", "phrasing", "palpable"],
		parents: ["phrasing"],
		children: ["phrasing"],
		attrs: ["globals"],
	}
	code {
		"Computer code", HTMLElement,
		categories: ["flow", "phrasing", "palpable"],
		parents: ["phrasing"],
		children: ["phrasing"],
		attrs: ["globals"],
	}
	col @void {
		"Table column", HTMLTableColElement,
		categories: [],
		parents: ["colgroup"],
		children: [],
		attrs: ["globals", "span"],
	}
	colgroup {
		"Group of columns in a table", HTMLTableColElement,
		categories: [],
		parents: ["table"],
		children: ["col", "template"],
		attrs: ["globals", "span"],
	}
	data {
		"Machine-readable equivalent", HTMLDataElement,
		categories: ["flow", "phrasing", "palpable"],
		parents: ["phrasing"],
		children: ["phrasing"],
		attrs: ["globals", "value"],
	}
	datalist {
		"Container for options for combo box control", HTMLDataListElement,
		categories: ["flow", "phrasing"],
		parents: ["phrasing"],
		children: ["phrasing", "option", "script-supporting"],
		attrs: ["globals"],
	}
	dd {
		"Content for corresponding dt element(s)", HTMLElement,
		categories: [],
		parents: ["dl", "div"],
		children: ["flow"],
		attrs: ["globals"],
	}
	del {
		"A removal from the document", HTMLModElement,
		categories: ["flow", "phrasing"],
		parents: ["phrasing"],
		children: ["transparent"],
		attrs: ["globals", "cite", "datetime"],
	}
	details {
		"Disclosure control for hiding details", HTMLDetailsElement,
		categories: ["flow", "interactive", "palpable"],
		parents: ["flow"],
		children: ["summary", "flow"],
		attrs: ["globals", "name", "open"],
	}
	dfn {
		"Defining instance", HTMLElement,
		categories: ["flow", "phrasing", "palpable"],
		parents: ["phrasing"],
		children: ["phrasing"],
		attrs: ["globals"],
	}
	dialog {
		"Dialog box or window", HTMLDialogElement,
		categories: ["flow"],
		parents: ["flow"],
		children: ["flow"],
		attrs: ["globals", "closedby", "open"],
	}
	div {
		"Generic flow container, or container for name-value groups in dl elements", HTMLDivElement,
		categories: ["flow", "palpable"],
		parents: ["flow", "dl"],
		children: ["flow"],
		attrs: ["globals"],
	}
	dl {
		"Association list consisting of zero or more name-value groups", HTMLDListElement,
		categories: ["flow", "palpable"],
		parents: ["flow"],
		children: ["dt", "dd", "div", "script-supporting"],
		attrs: ["globals"],
	}
	dt {
		"Legend for corresponding dd element(s)", HTMLElement,
		categories: [],
		parents: ["dl", "div"],
		children: ["flow"],
		attrs: ["globals"],
	}
	em {
		"Stress emphasis", HTMLElement,
		categories: ["flow", "phrasing", "palpable"],
		parents: ["phrasing"],
		children: ["phrasing"],
		attrs: ["globals"],
	}
	embed @void {
		"Plugin", HTMLEmbedElement,
		categories: ["flow", "phrasing", "embedded", "interactive", "palpable"],
		parents: ["phrasing"],
		children: [],
		attrs: ["globals", "src", "type", "width", "height"],
	}
	fieldset {
		"Group of form controls", HTMLFieldSetElement,
		categories: ["flow", "listed", "form-associated", "palpable"],
		parents: ["flow"],
		children: ["legend", "flow"],
		attrs: ["globals", "disabled", "form", "name"],
	}
	figcaption {
		"Caption for figure", HTMLElement,
		categories: [],
		parents: ["figure"],
		children: ["flow"],
		attrs: ["globals"],
	}
	figure {
		"Figure with optional caption", HTMLElement,
		categories: ["flow", "palpable"],
		parents: ["flow"],
		children: ["figcaption", "flow"],
		attrs: ["globals"],
	}
	footer {
		"Footer for a page or section", HTMLElement,
		categories: ["flow", "palpable"],
		parents: ["flow"],
		children: ["flow"],
		attrs: ["globals"],
	}
	form {
		"User-submittable form", HTMLFormElement,
		categories: ["flow", "palpable"],
		parents: ["flow"],
		children: ["flow"],
		attrs: [
			"globals", "accept-charset", "action", "autocomplete", "enctype", "method", "name", "novalidate",
			"rel", "target",
		],
	}
	h1 {
		"Heading", HTMLHeadingElement,
		categories: ["flow", "heading", "palpable"],
		parents: ["legend", "summary", "flow"],
		children: ["phrasing"],
		attrs: ["globals"],
	}
	h2 {
		"Heading", HTMLHeadingElement,
		categories: ["flow", "heading", "palpable"],
		parents: ["legend", "summary", "flow"],
		children: ["phrasing"],
		attrs: ["globals"],
	}
	h3 {
		"Heading", HTMLHeadingElement,
		categories: ["flow", "heading", "palpable"],
		parents: ["legend", "summary", "flow"],
		children: ["phrasing"],
		attrs: ["globals"],
	}
	h4 {
		"Heading", HTMLHeadingElement,
		categories: ["flow", "heading", "palpable"],
		parents: ["legend", "summary", "flow"],
		children: ["phrasing"],
		attrs: ["globals"],
	}
	h5 {
		"Heading", HTMLHeadingElement,
		categories: ["flow", "heading", "palpable"],
		parents: ["legend", "summary", "flow"],
		children: ["phrasing"],
		attrs: ["globals"],
	}
	h6 {
		"Heading", HTMLHeadingElement,
		categories: ["flow", "heading", "palpable"],
		parents: ["legend", "summary", "flow"],
		children: ["phrasing"],
		attrs: ["globals"],
	}
	head {
		"Container for document metadata", HTMLHeadElement,
		categories: [],
		parents: ["html"],
		children: ["metadata"],
		attrs: ["globals"],
	}
	header {
		"Introductory or navigational aids for a page or section", HTMLElement,
		categories: ["flow", "palpable"],
		parents: ["flow"],
		children: ["flow"],
		attrs: ["globals"],
	}
	hgroup {
		"Heading container", HTMLElement,
		categories: ["flow", "palpable"],
		parents: ["legend", "summary", "flow"],
		children: ["h1", "h2", "h3", "h4", "h5", "h6", "p", "script-supporting"],
		attrs: ["globals"],
	}
	hr @void {
		"Thematic break", HTMLHRElement,
		categories: ["flow"],
		parents: ["flow"],
		children: [],
		attrs: ["globals"],
	}
	html {
		"Root element", HTMLHtmlElement,
		categories: [],
		parents: [],
		children: ["head", "body"],
		attrs: ["globals"],
	}
	i {
		"Alternate voice", HTMLElement,
		categories: ["flow", "phrasing", "palpable"],
		parents: ["phrasing"],
		children: ["phrasing"],
		attrs: ["globals"],
	}
	iframe {
		"Child navigable", HTMLIFrameElement,
		categories: ["flow", "phrasing", "embedded", "interactive", "palpable"],
		parents: ["phrasing"],
		children: [],
		attrs: [
			"globals", "src", "srcdoc", "name", "sandbox", "allow", "allowfullscreen", "width", "height",
			"referrerpolicy", "loading",
		],
	}
	img @void {
		"Image", HTMLImageElement,
		categories: ["flow", "phrasing", "embedded", "interactive", "form-associated", "palpable"],
		parents: ["phrasing", "picture"],
		children: [],
		attrs: [
			"globals", "alt", "src", "srcset", "sizes", "crossorigin", "usemap", "ismap", "width", "height",
			"referrerpolicy", "decoding", "loading", "fetchpriority",
		],
	}
	input @void {
		"Form control", HTMLInputElement,
		categories: [
			"flow", "phrasing", "interactive", "listed", "labelable", "submittable", "resettable",
			"form-associated", "palpable",
		],
		parents: ["phrasing"],
		children: [],
		attrs: [
			"globals", "accept", "alpha", "alt", "autocomplete", "checked", "colorspace", "dirname", "disabled",
			"form", "formaction", "formenctype", "formmethod", "formnovalidate", "formtarget", "height", "list",
			"max", "maxlength", "min", "minlength", "multiple", "name", "pattern", "placeholder",
			"popovertarget", "popovertargetaction", "readonly", "required", "size", "src", "step", "type",
			"value", "width",
		],
	}
	ins {
		"An addition to the document", HTMLModElement,
		categories: ["flow", "phrasing", "palpable"],
		parents: ["phrasing"],
		children: ["transparent"],
		attrs: ["globals", "cite", "datetime"],
	}
	kbd {
		"User input", HTMLElement,
		categories: ["flow", "phrasing", "palpable"],
		parents: ["phrasing"],
		children: ["phrasing"],
		attrs: ["globals"],
	}
	label {
		"Caption for a form control", HTMLLabelElement,
		categories: ["flow", "phrasing", "interactive", "palpable"],
		parents: ["phrasing"],
		children: ["phrasing"],
		attrs: ["globals", "for"],
	}
	legend {
		"Caption for fieldset", HTMLLegendElement,
		categories: [],
		parents: ["fieldset"],
		children: ["phrasing", "heading"],
		attrs: ["globals"],
	}
	li {
		"List item", HTMLLIElement,
		categories: [],
		parents: ["ol", "ul", "menu"],
		children: ["flow"],
		attrs: ["globals", "value"],
	}
	link @void {
		"Link metadata", HTMLLinkElement,
		categories: ["metadata", "flow", "phrasing"],
		parents: ["head", "noscript", "phrasing"],
		children: [],
		attrs: [
			"globals", "href", "crossorigin", "rel", "as", "media", "hreflang", "type", "sizes", "imagesrcset",
			"imagesizes", "referrerpolicy", "integrity", "blocking", "color", "disabled", "fetchpriority",
		],
	}
	main {
		"Container for the dominant contents of the document", HTMLElement,
		categories: ["flow", "palpable"],
		parents: ["flow"],
		children: ["flow"],
		attrs: ["globals"],
	}
	map {
		"Image map", HTMLMapElement,
		categories: ["flow", "phrasing", "palpable"],
		parents: ["phrasing"],
		children: ["transparent", "area"],
		attrs: ["globals", "name"],
	}
	mark {
		"Highlight", HTMLElement,
		categories: ["flow", "phrasing", "palpable"],
		parents: ["phrasing"],
		children: ["phrasing"],
		attrs: ["globals"],
	}
	math {
		"MathML root", MathMLElement,
		categories: ["flow", "phrasing", "embedded", "palpable"],
		parents: ["phrasing"],
		children: ["mathml"],
		attrs: ["*"],
	}
	menu {
		"Menu of commands", HTMLMenuElement,
		categories: ["flow", "palpable"],
		parents: ["flow"],
		children: ["li", "script-supporting"],
		attrs: ["globals"],
	}
	meta @void {
		"Text metadata", HTMLMetaElement,
		categories: ["metadata", "flow", "phrasing"],
		parents: ["head", "noscript", "phrasing"],
		children: [],
		attrs: ["globals", "name", "http-equiv", "content", "charset", "media"],
	}
	meter {
		"Gauge", HTMLMeterElement,
		categories: ["flow", "phrasing", "labelable", "palpable"],
		parents: ["phrasing"],
		children: ["phrasing"],
		attrs: ["globals", "value", "min", "max", "low", "high", "optimum"],
	}
	nav {
		"Section with navigational links", HTMLElement,
		categories: ["flow", "sectioning", "palpable"],
		parents: ["flow"],
		children: ["flow"],
		attrs: ["globals"],
	}
	noscript {
		"Fallback content for script", HTMLElement,
		categories: ["metadata", "flow", "phrasing"],
		parents: ["head", "phrasing"],
		children: ["transparent"],
		attrs: ["globals"],
	}
	object {
		"Image, child navigable, or plugin", HTMLObjectElement,
		categories: ["flow", "phrasing", "embedded", "interactive", "listed", "form-associated", "palpable"],
		parents: ["phrasing"],
		children: ["transparent"],
		attrs: ["globals", "data", "type", "name", "form", "width", "height"],
	}
	ol {
		"Ordered list", HTMLOListElement,
		categories: ["flow", "palpable"],
		parents: ["flow"],
		children: ["li", "script-supporting"],
		attrs: ["globals", "reversed", "start", "type"],
	}
	optgroup {
		"Group of options in a list box", HTMLOptGroupElement,
		categories: [],
		parents: ["select"],
		children: ["option", "script-supporting"],
		attrs: ["globals", "disabled", "label"],
	}
	option {
		"Option in a list box or combo box control", HTMLOptionElement,
		categories: [],
		parents: ["select", "datalist", "optgroup"],
		children: ["text"],
		attrs: ["globals", "disabled", "label", "selected", "value"],
	}
	output {
		"Calculated output value", HTMLOutputElement,
		categories: ["flow", "phrasing", "listed", "labelable", "resettable", "form-associated", "palpable"],
		parents: ["phrasing"],
		children: ["phrasing"],
		attrs: ["globals", "for", "form", "name"],
	}
	p {
		"Paragraph", HTMLParagraphElement,
		categories: ["flow", "palpable"],
		parents: ["flow"],
		children: ["phrasing"],
		attrs: ["globals"],
	}
	picture {
		"Image", HTMLPictureElement,
		categories: ["flow", "phrasing", "embedded", "palpable"],
		parents: ["phrasing"],
		children: ["source", "img", "script-supporting"],
		attrs: ["globals"],
	}
	pre {
		"Block of preformatted text", HTMLPreElement,
		categories: ["flow", "palpable"],
		parents: ["flow"],
		children: ["phrasing"],
		attrs: ["globals"],
	}
	progress {
		"Progress bar", HTMLProgressElement,
		categories: ["flow", "phrasing", "labelable", "palpable"],
		parents: ["phrasing"],
		children: ["phrasing"],
		attrs: ["globals", "value", "max"],
	}
	q {
		"Quotation", HTMLQuoteElement,
		categories: ["flow", "phrasing", "palpable"],
		parents: ["phrasing"],
		children: ["phrasing"],
		attrs: ["globals", "cite"],
	}
	rp {
		"Parenthesis for ruby annotation text", HTMLElement,
		categories: [],
		parents: ["ruby"],
		children: ["text"],
		attrs: ["globals"],
	}
	rt {
		"Ruby annotation text", HTMLElement,
		categories: [],
		parents: ["ruby"],
		children: ["phrasing"],
		attrs: ["globals"],
	}
	ruby {
		"Ruby annotation(s)", HTMLElement,
		categories: ["flow", "phrasing", "palpable"],
		parents: ["phrasing"],
		children: ["phrasing", "rt", "rp"],
		attrs: ["globals"],
	}
	s {
		"Inaccurate text", HTMLElement,
		categories: ["flow", "phrasing", "palpable"],
		parents: ["phrasing"],
		children: ["phrasing"],
		attrs: ["globals"],
	}
	samp {
		"Computer output", HTMLElement,
		categories: ["flow", "phrasing", "palpable"],
		parents: ["phrasing"],
		children: ["phrasing"],
		attrs: ["globals"],
	}
	script {
		"Embedded script", HTMLScriptElement,
		categories: ["metadata", "flow", "phrasing", "script-supporting"],
		parents: ["head", "phrasing", "script-supporting"],
		children: ["text"],
		attrs: [
			"globals", "src", "type", "nomodule", "async", "defer", "crossorigin", "integrity",
			"referrerpolicy", "blocking", "fetchpriority",
		],
	}
	search {
		"Container for search controls", HTMLElement,
		categories: ["flow", "palpable"],
		parents: ["flow"],
		children: ["flow"],
		attrs: ["globals"],
	}
	section {
		"Generic document or application section", HTMLElement,
		categories: ["flow", "sectioning", "palpable"],
		parents: ["flow"],
		children: ["flow"],
		attrs: ["globals"],
	}
	select {
		"List box control", HTMLSelectElement,
		categories: [
			"flow", "phrasing", "interactive", "listed", "labelable", "submittable", "resettable",
			"form-associated", "palpable",
		],
		parents: ["phrasing"],
		children: ["option", "optgroup", "script-supporting"],
		attrs: ["globals", "autocomplete", "disabled", "form", "multiple", "name", "required", "size"],
	}
	slot {
		"Shadow tree slot", HTMLSlotElement,
		categories: ["flow", "phrasing"],
		parents: ["phrasing"],
		children: ["transparent"],
		attrs: ["globals", "name"],
	}
	small {
		"Side comment", HTMLElement,
		categories: ["flow", "phrasing", "palpable"],
		parents: ["phrasing"],
		children: ["phrasing"],
		attrs: ["globals"],
	}
	source @void {
		"Image source for img or media source for video or audio", HTMLSourceElement,
		categories: [],
		parents: ["picture", "video", "audio"],
		children: [],
		attrs: ["globals", "type", "media", "src", "srcset", "sizes", "width", "height"],
	}
	span {
		"Generic phrasing container", HTMLSpanElement,
		categories: ["flow", "phrasing", "palpable"],
		parents: ["phrasing"],
		children: ["phrasing"],
		attrs: ["globals"],
	}
	strong {
		"Importance", HTMLElement,
		categories: ["flow", "phrasing", "palpable"],
		parents: ["phrasing"],
		children: ["phrasing"],
		attrs: ["globals"],
	}
	style {
		"Embedded styling information", HTMLStyleElement,
		categories: ["metadata"],
		parents: ["head", "noscript"],
		children: ["text"],
		attrs: ["globals", "media", "blocking"],
	}
	sub {
		"Subscript", HTMLElement,
		categories: ["flow", "phrasing", "palpable"],
		parents: ["phrasing"],
		children: ["phrasing"],
		attrs: ["globals"],
	}
	summary {
		"Caption for details", HTMLElement,
		categories: [],
		parents: ["details"],
		children: ["phrasing", "heading"],
		attrs: ["globals"],
	}
	sup {
		"Superscript", HTMLElement,
		categories: ["flow", "phrasing", "palpable"],
		parents: ["phrasing"],
		children: ["phrasing"],
		attrs: ["globals"],
	}
	svg {
		"SVG root", SVGSVGElement,
		categories: ["flow", "phrasing", "embedded", "palpable"],
		parents: ["phrasing"],
		children: ["svg"],
		attrs: ["*"],
	}
	table {
		"Table", HTMLTableElement,
		categories: ["flow", "palpable"],
		parents: ["flow"],
		children: ["caption", "colgroup", "thead", "tbody", "tfoot", "tr", "script-supporting"],
		attrs: ["globals"],
	}
	tbody {
		"Group of rows in a table", HTMLTableSectionElement,
		categories: [],
		parents: ["table"],
		children: ["tr", "script-supporting"],
		attrs: ["globals"],
	}
	td {
		"Table cell", HTMLTableCellElement,
		categories: [],
		parents: ["tr"],
		children: ["flow"],
		attrs: ["globals", "colspan", "rowspan", "headers"],
	}
	template {
		"Template", HTMLTemplateElement,
		categories: ["metadata", "flow", "phrasing", "script-supporting"],
		parents: ["metadata", "phrasing", "script-supporting", "colgroup"],
		children: ["flow"],
		attrs: [
			"globals", "shadowrootmode", "shadowrootdelegatesfocus", "shadowrootclonable",
			"shadowrootserializable",
		],
	}
	textarea {
		"Multiline text controls", HTMLTextAreaElement,
		categories: [
			"flow", "phrasing", "interactive", "listed", "labelable", "submittable", "resettable",
			"form-associated", "palpable",
		],
		parents: ["phrasing"],
		children: ["text"],
		attrs: [
			"globals", "autocomplete", "cols", "dirname", "disabled", "form", "maxlength", "minlength", "name",
			"placeholder", "readonly", "required", "rows", "wrap",
		],
	}
	tfoot {
		"Group of footer rows in a table", HTMLTableSectionElement,
		categories: [],
		parents: ["table"],
		children: ["tr", "script-supporting"],
		attrs: ["globals"],
	}
	th {
		"Table header cell", HTMLTableCellElement,
		categories: ["interactive"],
		parents: ["tr"],
		children: ["flow"],
		attrs: ["globals", "colspan", "rowspan", "headers", "scope", "abbr"],
	}
	thead {
		"Group of heading rows in a table", HTMLTableSectionElement,
		categories: [],
		parents: ["table"],
		children: ["tr", "script-supporting"],
		attrs: ["globals"],
	}
	time {
		"Machine-readable equivalent of date- or time-related data", HTMLTimeElement,
		categories: ["flow", "phrasing", "palpable"],
		parents: ["phrasing"],
		children: ["phrasing"],
		attrs: ["globals", "datetime"],
	}
	title {
		"Document title", HTMLTitleElement,
		categories: ["metadata"],
		parents: ["head"],
		children: ["text"],
		attrs: ["globals"],
	}
	tr {
		"Table row", HTMLTableRowElement,
		categories: [],
		parents: ["table", "thead", "tbody", "tfoot"],
		children: ["th", "td", "script-supporting"],
		attrs: ["globals"],
	}
	track @void {
		"Timed text track", HTMLTrackElement,
		categories: [],
		parents: ["audio", "video"],
		children: [],
		attrs: ["globals", "default", "kind", "label", "src", "srclang"],
	}
	u {
		"Unarticulated annotation", HTMLElement,
		categories: ["flow", "phrasing", "palpable"],
		parents: ["phrasing"],
		children: ["phrasing"],
		attrs: ["globals"],
	}
	ul {
		"List", HTMLUListElement,
		categories: ["flow", "palpable"],
		parents: ["flow"],
		children: ["li", "script-supporting"],
		attrs: ["globals"],
	}
	var {
		"Variable", HTMLElement,
		categories: ["flow", "phrasing", "palpable"],
		parents: ["phrasing"],
		children: ["phrasing"],
		attrs: ["globals"],
	}
	video {
		"Video player", HTMLVideoElement,
		categories: ["flow", "phrasing", "embedded", "interactive", "palpable"],
		parents: ["phrasing"],
		children: ["source", "track", "transparent"],
		attrs: [
			"globals", "src", "crossorigin", "poster", "preload", "autoplay", "playsinline", "loop", "muted",
			"controls", "width", "height",
		],
	}
	wbr @void {
		"Line breaking opportunity", HTMLElement,
		categories: ["flow", "phrasing"],
		parents: ["phrasing"],
		children: [],
		attrs: ["globals"],
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("area")]
	#[case("base")]
	#[case("br")]
	#[case("col")]
	#[case("embed")]
	#[case("hr")]
	#[case("img")]
	#[case("input")]
	#[case("link")]
	#[case("meta")]
	#[case("source")]
	#[case("track")]
	#[case("wbr")]
	fn test_void_elements(#[case] tag: &str) {
		assert!(is_void_tag(tag));
		assert_eq!(spec_for(tag).unwrap().kind(), ElementKind::Void);
	}

	#[rstest]
	#[case("div")]
	#[case("iframe")]
	#[case("template")]
	#[case("textarea")]
	#[case("script")]
	fn test_non_void_elements(#[case] tag: &str) {
		assert!(!is_void_tag(tag));
	}

	#[rstest]
	fn test_unknown_tag() {
		assert_eq!(spec_for("blink"), None);
		assert!(!is_void_tag("blink"));
	}

	#[rstest]
	fn test_lookup_is_case_insensitive() {
		assert_eq!(spec_for("IMG").map(|spec| spec.tag), Some("img"));
	}

	#[rstest]
	fn test_table_is_consistent() {
		let mut seen = std::collections::HashSet::new();
		for spec in ELEMENTS {
			assert!(seen.insert(spec.tag), "duplicate entry for {}", spec.tag);
			assert!(!spec.description.is_empty());
			assert!(!spec.interface.is_empty());
			if spec.is_void {
				assert!(spec.children.is_empty(), "void <{}> lists children", spec.tag);
			}
		}
		assert_eq!(INDEX.len(), ELEMENTS.len());
	}

	#[rstest]
	fn test_event_handler_table_is_sorted() {
		assert!(EVENT_HANDLER_ATTRS.windows(2).all(|pair| pair[0] < pair[1]));
		assert!(EVENT_HANDLER_ATTRS.iter().all(|name| name.starts_with("on")));
	}

	#[rstest]
	fn test_img_spec_row() {
		let img = spec_for("img").unwrap();
		assert_eq!(img.interface, "HTMLImageElement");
		assert!(img.has_category("embedded"));
		assert!(img.specific_attributes().any(|name| name == "srcset"));
		assert!(!img.specific_attributes().any(|name| name == GLOBALS));
	}

	#[rstest]
	#[case("img", "src", true)]
	#[case("img", "title", true)]
	#[case("img", "href", false)]
	#[case("a", "href", true)]
	#[case("div", "data-id", true)]
	#[case("div", "aria-label", true)]
	#[case("div", "hx-get", true)]
	#[case("div", "onclick", true)]
	#[case("form", "onsubmit", true)]
	#[case("div", "on", false)]
	#[case("div", "one", false)]
	#[case("div", "only", false)]
	#[case("div", "onion", false)]
	#[case("div", "_", true)]
	#[case("div", "role", true)]
	#[case("div", "globals", false)]
	#[case("div", "data-", false)]
	#[case("div", "src", false)]
	#[case("svg", "viewbox", true)]
	#[case("math", "display", true)]
	fn test_permits_attribute(#[case] tag: &str, #[case] attr: &str, #[case] expected: bool) {
		assert_eq!(spec_for(tag).unwrap().permits_attribute(attr), expected);
	}
}
