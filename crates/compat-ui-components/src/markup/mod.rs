//! HTML rendering of closed frames
//!
//! Each renderer builds an [`Element`] tree from a fully populated frame.
//! Attributes with a declared [`Mapping`] are applied generically by
//! [`decorate`]; everything else is the tag renderer's concern.

pub mod ajax_import;
pub mod div;
pub mod grid;
pub mod grid_update;
pub mod layout;
pub mod pod;

use crate::frame::ComponentFrame;
use crate::html::Element;
use crate::tags::TagKind;
use compat_ui_conf::UiSettings;
use compat_ui_core::{AttributeSpec, Mapping, Result, ValidatedAttributes};

/// Renders the markup of a closed frame
///
/// Child tags (`gridcolumn`, `gridrow`, `layoutarea`) and `ajaxproxy` have
/// no markup of their own and render as an empty string.
pub fn render(frame: &ComponentFrame, settings: &UiSettings) -> Result<String> {
	match frame.tag {
		TagKind::Grid => grid::render(frame),
		TagKind::GridUpdate => Ok(grid_update::render(frame)),
		TagKind::Layout => Ok(layout::render(frame)),
		TagKind::Pod => Ok(pod::render(frame)),
		TagKind::Div => Ok(div::render(frame)),
		TagKind::AjaxImport => ajax_import::render(frame, settings),
		TagKind::GridColumn | TagKind::GridRow | TagKind::LayoutArea | TagKind::AjaxProxy => {
			Ok(String::new())
		}
	}
}

/// Applies every declared mapping of `specs` to `element`
///
/// Mapped attributes are applied in declaration order, then caller `data-*`
/// attributes, then the caller's `class` and `style` so they come last.
pub fn decorate(element: &mut Element, specs: &[AttributeSpec], attributes: &ValidatedAttributes) {
	for spec in specs {
		let Some(value) = attributes.get(spec.name) else {
			continue;
		};
		match spec.mapping {
			Mapping::None => {}
			Mapping::Style(property) => element.add_style(property, value),
			Mapping::Data(name) => element.add_attr(name, value),
			Mapping::Flag { class, data } => {
				if value == "true" {
					element.add_class(class);
				}
				if let Some(name) = data {
					element.add_attr(name, value);
				}
			}
			Mapping::StyleFlag { property, value: css } => {
				if value == "true" {
					element.add_style(property, css);
				}
			}
			Mapping::ClassPrefix(prefix) => element.add_class(format!("{prefix}{value}")),
		}
	}
	for (name, value) in attributes.passthrough() {
		element.add_attr_if_absent(name, value);
	}
	if let Some(class) = attributes.get("class") {
		element.add_class(class);
	}
	if let Some(style) = attributes.get("style") {
		element.add_raw_style(style);
	}
}

/// Root element of a container: `bx-<kind>` first, then the mapped attributes
pub(crate) fn root(tag: &str, base_class: &str, frame: &ComponentFrame) -> Element {
	let mut element = Element::new(tag).id(frame.id.as_str()).class(base_class);
	decorate(&mut element, frame.tag.attributes(), &frame.attributes);
	element
}

/// Loading placeholder for remotely sourced content
pub(crate) fn source_placeholder(source: &str) -> String {
	let comment = source.replace("--", "- -");
	let placeholder = Element::new("div")
		.class("bx-source-loading")
		.text("Loading content...");
	format!("<!-- Content loaded from: {comment} -->{}", placeholder.render())
}

#[cfg(test)]
mod tests {
	use super::*;
	use compat_ui_core::{RawAttributes, validate_all};
	use rstest::rstest;

	const SPECS: &[AttributeSpec] = &[
		AttributeSpec::optional("type").class_prefix("bx-layout-"),
		AttributeSpec::optional("class"),
		AttributeSpec::optional("style"),
		AttributeSpec::optional("height").style("height"),
		AttributeSpec::optional("bold").style_flag("font-weight", "bold"),
		AttributeSpec::optional("sortable").flag("bx-sortable", Some("data-sortable")),
		AttributeSpec::optional("name").data("data-name"),
	];

	fn decorated(pairs: &[(&str, &str)]) -> String {
		let raw: RawAttributes = pairs.iter().copied().collect();
		let attributes = validate_all("Test", SPECS, &raw).unwrap();
		let mut element = Element::new("div").class("bx-test");
		decorate(&mut element, SPECS, &attributes);
		element.render()
	}

	#[rstest]
	fn test_caller_class_and_style_come_last() {
		let html = decorated(&[
			("style", "color: red;"),
			("class", "mine"),
			("type", "tab"),
			("height", "10px"),
			("bold", "true"),
		]);
		assert_eq!(
			html,
			"<div class=\"bx-test bx-layout-tab mine\" style=\"height: 10px; font-weight: bold; color: red;\"></div>"
		);
	}

	#[rstest]
	#[case("true", "class=\"bx-test bx-sortable\" data-sortable=\"true\"")]
	#[case("false", "class=\"bx-test\" data-sortable=\"false\"")]
	fn test_flag_mapping(#[case] value: &str, #[case] expected: &str) {
		assert!(decorated(&[("sortable", value)]).contains(expected));
	}

	#[rstest]
	fn test_data_passthrough() {
		let html = decorated(&[("name", "g"), ("data-role", "main")]);
		assert!(html.contains("data-name=\"g\" data-role=\"main\""));
	}

	#[rstest]
	fn test_declared_mapping_wins_over_passthrough() {
		let html = decorated(&[
			("name", "g"),
			("data-name", "other"),
			("sortable", "true"),
			("data-sortable", "no"),
		]);
		assert_eq!(html.matches("data-name=").count(), 1);
		assert_eq!(html.matches("data-sortable=").count(), 1);
		assert!(html.contains("data-name=\"g\""));
		assert!(html.contains("data-sortable=\"true\""));
	}

	#[rstest]
	fn test_source_placeholder() {
		let html = source_placeholder("/api/pod-content");
		assert!(html.starts_with("<!-- Content loaded from: /api/pod-content -->"));
		assert!(html.contains("<div class=\"bx-source-loading\">Loading content...</div>"));
	}
}
