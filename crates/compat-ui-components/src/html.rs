//! Minimal HTML element builder used by the markup renderers
//!
//! Attribute values and text children are escaped; [`Element::raw`] children
//! (tag bodies, pre-rendered fragments) are emitted verbatim. The root
//! attributes always render in the order `id`, `class`, `style`, then the
//! rest in insertion order, so output is stable.

use compat_ui_core::escape::{escape_attr, escape_html};

const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
	Element(Element),
	Text(String),
	Raw(String),
}

/// An HTML element under construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
	tag: String,
	id: Option<String>,
	classes: Vec<String>,
	styles: Vec<String>,
	attrs: Vec<(String, String)>,
	children: Vec<Node>,
}

impl Element {
	/// Starts an element
	pub fn new(tag: impl Into<String>) -> Self {
		Self {
			tag: tag.into(),
			id: None,
			classes: Vec::new(),
			styles: Vec::new(),
			attrs: Vec::new(),
			children: Vec::new(),
		}
	}

	/// Sets the id; empty ids are ignored
	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.set_id(id);
		self
	}

	/// Sets the id in place
	pub fn set_id(&mut self, id: impl Into<String>) {
		let id = id.into();
		if !id.is_empty() {
			self.id = Some(id);
		}
	}

	/// Appends a CSS class; blank values are ignored
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.add_class(class);
		self
	}

	/// Appends a CSS class in place
	pub fn add_class(&mut self, class: impl Into<String>) {
		let class = class.into();
		let class = class.trim();
		if !class.is_empty() {
			self.classes.push(class.to_string());
		}
	}

	/// Appends a CSS class when `condition` holds
	pub fn class_if(self, condition: bool, class: &str) -> Self {
		if condition { self.class(class) } else { self }
	}

	/// Appends a `property: value` declaration
	pub fn style(mut self, property: &str, value: &str) -> Self {
		self.add_style(property, value);
		self
	}

	/// Appends a `property: value` declaration in place
	pub fn add_style(&mut self, property: &str, value: &str) {
		self.styles.push(format!("{property}: {value}"));
	}

	/// Appends a declaration block verbatim (e.g. a caller's `style` attribute)
	pub fn raw_style(mut self, declarations: &str) -> Self {
		self.add_raw_style(declarations);
		self
	}

	/// Appends a declaration block verbatim in place
	pub fn add_raw_style(&mut self, declarations: &str) {
		let declarations = declarations.trim();
		if !declarations.is_empty() {
			self.styles.push(declarations.to_string());
		}
	}

	/// Sets an attribute
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.add_attr(name, value);
		self
	}

	/// Sets an attribute in place, replacing an earlier value of the same name
	pub fn add_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
		let name = name.into();
		let value = value.into();
		match self.attrs.iter_mut().find(|(n, _)| n.eq_ignore_ascii_case(&name)) {
			Some(existing) => existing.1 = value,
			None => self.attrs.push((name, value)),
		}
	}

	/// Sets an attribute only when no value of that name is present yet
	pub fn add_attr_if_absent(&mut self, name: &str, value: &str) {
		if !self.has_attr(name) {
			self.attrs.push((name.to_string(), value.to_string()));
		}
	}

	/// Returns `true` when the attribute has been set
	pub fn has_attr(&self, name: &str) -> bool {
		self.attrs.iter().any(|(n, _)| n.eq_ignore_ascii_case(name))
	}

	/// Sets an attribute when a value is present
	pub fn attr_opt(self, name: &str, value: Option<&str>) -> Self {
		match value {
			Some(value) => self.attr(name, value),
			None => self,
		}
	}

	/// Sets a valueless boolean attribute (`checked`, `disabled`) when `on`
	pub fn flag(self, name: &str, on: bool) -> Self {
		if on { self.attr(name, name) } else { self }
	}

	/// Appends a child element
	pub fn child(mut self, child: Element) -> Self {
		self.children.push(Node::Element(child));
		self
	}

	/// Appends a child element in place
	pub fn push_child(&mut self, child: Element) {
		self.children.push(Node::Element(child));
	}

	/// Appends escaped text
	pub fn text(mut self, text: impl Into<String>) -> Self {
		self.children.push(Node::Text(text.into()));
		self
	}

	/// Appends markup verbatim
	pub fn raw(mut self, markup: impl Into<String>) -> Self {
		self.push_raw(markup);
		self
	}

	/// Appends markup verbatim in place
	pub fn push_raw(&mut self, markup: impl Into<String>) {
		self.children.push(Node::Raw(markup.into()));
	}

	/// Renders the element to a string
	pub fn render(&self) -> String {
		let mut output = String::new();
		self.render_into(&mut output);
		output
	}

	/// Renders the element, appending to `output`
	pub fn render_into(&self, output: &mut String) {
		output.push('<');
		output.push_str(&self.tag);

		if let Some(id) = &self.id {
			push_attr(output, "id", id);
		}
		if !self.classes.is_empty() {
			push_attr(output, "class", &self.classes.join(" "));
		}
		if !self.styles.is_empty() {
			push_attr(output, "style", &self.styles.join("; "));
		}
		for (name, value) in &self.attrs {
			push_attr(output, name, value);
		}

		if VOID_ELEMENTS.contains(&self.tag.as_str()) {
			output.push_str(" />");
			return;
		}

		output.push('>');
		for child in &self.children {
			match child {
				Node::Element(element) => element.render_into(output),
				Node::Text(text) => output.push_str(&escape_html(text)),
				Node::Raw(markup) => output.push_str(markup),
			}
		}
		output.push_str("</");
		output.push_str(&self.tag);
		output.push('>');
	}
}

fn push_attr(output: &mut String, name: &str, value: &str) {
	output.push(' ');
	output.push_str(name);
	output.push_str("=\"");
	output.push_str(&escape_attr(value));
	output.push('"');
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_attribute_order_and_escaping() {
		let html = Element::new("div")
			.attr("data-name", "a\"b")
			.class("bx-grid")
			.style("height", "400px")
			.raw_style("border: 1px solid gray")
			.id("grid_1")
			.text("<x>")
			.render();
		assert_eq!(
			html,
			r#"<div id="grid_1" class="bx-grid" style="height: 400px; border: 1px solid gray" data-name="a&quot;b">&lt;x&gt;</div>"#
		);
	}

	#[rstest]
	fn test_void_element() {
		let html = Element::new("input")
			.attr("type", "checkbox")
			.class("bx-grid-select-all")
			.render();
		assert_eq!(html, r#"<input class="bx-grid-select-all" type="checkbox" />"#);
	}

	#[rstest]
	fn test_raw_children_are_verbatim() {
		let html = Element::new("section")
			.raw("<strong>bold</strong>")
			.child(Element::new("span").text("x"))
			.render();
		assert_eq!(html, "<section><strong>bold</strong><span>x</span></section>");
	}

	#[rstest]
	fn test_attributes_render_once() {
		let mut element = Element::new("div").attr("data-name", "first");
		element.add_attr_if_absent("data-name", "ignored");
		element.add_attr_if_absent("data-extra", "kept");
		element.add_attr("DATA-NAME", "second");
		assert_eq!(
			element.render(),
			r#"<div data-name="second" data-extra="kept"></div>"#
		);
	}

	#[rstest]
	fn test_blank_values_are_skipped() {
		let html = Element::new("div").id("").class("  ").raw_style(" ").render();
		assert_eq!(html, "<div></div>");
	}
}
