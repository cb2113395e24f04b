//! Layout markup for the five layout kinds

use super::{root, source_placeholder};
use crate::frame::{ComponentFrame, LayoutArea};
use crate::html::Element;
use crate::tags::BORDER_POSITIONS;

/// Renders a layout frame with its registered areas
///
/// Tabs and accordion panels follow registration order; border areas are
/// ordered by position (top, left, center, right, bottom).
pub fn render(frame: &ComponentFrame) -> String {
	let kind = frame.attributes.get("type").unwrap_or_default();
	let areas: Vec<&LayoutArea> = frame.areas().collect();

	let mut layout = root("div", "bx-layout", frame).attr("data-layout-type", kind);
	match kind {
		"tab" => render_tabs(&mut layout, &areas),
		"accordion" => {
			for area in &areas {
				layout.push_child(accordion_panel(area));
			}
		}
		"border" => {
			for position in BORDER_POSITIONS {
				for area in areas.iter().filter(|a| border_position(a) == *position) {
					layout.push_child(border_area(area, position));
				}
			}
		}
		_ => {
			for area in &areas {
				let mut item = area_element(area, "bx-box-item");
				if let Some(size) = area.attributes.get("size") {
					item.add_style("flex-basis", size);
				}
				layout.push_child(item);
			}
		}
	}
	layout.push_raw(frame.body.as_str());
	layout.render()
}

fn border_position(area: &LayoutArea) -> &str {
	area.position().unwrap_or("center")
}

/// Index of the initially active tab: the first `selected` area, else the first
fn active_tab(areas: &[&LayoutArea]) -> usize {
	areas
		.iter()
		.position(|area| area.attributes.flag("selected"))
		.unwrap_or(0)
}

fn render_tabs(layout: &mut Element, areas: &[&LayoutArea]) {
	let active = active_tab(areas);
	let mut headers = Element::new("ul")
		.class("bx-tab-headers")
		.attr("role", "tablist");
	let mut panels = Element::new("div").class("bx-tab-panels");

	for (index, area) in areas.iter().enumerate() {
		let is_active = index == active;
		let title = area
			.title()
			.map_or_else(|| format!("Tab {}", index + 1), str::to_string);
		headers.push_child(
			Element::new("li")
				.class("bx-tab-header")
				.class_if(is_active, "active")
				.class_if(area.attributes.flag("disabled"), "disabled")
				.attr("data-target", area.id.as_str())
				.attr("role", "tab")
				.attr("aria-selected", if is_active { "true" } else { "false" })
				.text(title),
		);
		let mut panel = area_element(area, "bx-tab-panel");
		if is_active {
			panel.add_class("active");
		}
		panel.add_attr("role", "tabpanel");
		panels.push_child(panel);
	}

	layout.push_child(headers);
	layout.push_child(panels);
}

fn accordion_panel(area: &LayoutArea) -> Element {
	let collapsed = area.attributes.flag("initcollapsed");
	let mut panel = Element::new("div")
		.id(area.id.as_str())
		.class("bx-accordion-panel")
		.class_if(collapsed, "collapsed");
	if let Some(collapsible) = area.attributes.get("collapsible") {
		panel.add_attr("data-collapsible", collapsible);
	}

	let header = Element::new("div")
		.class("bx-accordion-header")
		.attr("aria-expanded", if collapsed { "false" } else { "true" })
		.text(area.title().unwrap_or_default());
	// the panel carries the area id
	let content = area_element(area, "bx-accordion-content").id(format!("{}_content", area.id));

	panel.child(header).child(content)
}

fn border_area(area: &LayoutArea, position: &str) -> Element {
	let mut element = area_element(area, "bx-border-area");
	element.add_class(format!("bx-border-{position}"));
	if let Some(size) = area.attributes.get("size") {
		let property = match position {
			"top" | "bottom" => "height",
			"left" | "right" => "width",
			_ => "flex-basis",
		};
		element.add_style(property, size);
	}
	for (attribute, data) in [
		("minsize", "data-min-size"),
		("maxsize", "data-max-size"),
		("splitter", "data-splitter"),
		("collapsible", "data-collapsible"),
	] {
		if let Some(value) = area.attributes.get(attribute) {
			element.add_attr(data, value);
		}
	}
	element
}

/// Element carrying an area's own id, classes, styles and content
fn area_element(area: &LayoutArea, base_class: &str) -> Element {
	let attributes = &area.attributes;
	let mut element = Element::new("div").id(area.id.as_str()).class(base_class);
	if let Some(align) = attributes.get("align") {
		element.add_style("text-align", align);
	}
	if let Some(overflow) = attributes.get("overflow") {
		element.add_style("overflow", overflow);
	}
	if let Some(name) = attributes.get("name") {
		element.add_attr("data-name", name);
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

	match attributes.get("source") {
		Some(source) => {
			element.add_attr("data-source", source);
			element.push_raw(source_placeholder(source));
		}
		None => element.push_raw(area.content.as_str()),
	}
	element
}
