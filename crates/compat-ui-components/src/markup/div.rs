//! Div markup: a plain or bind-driven content container

use super::decorate;
use crate::frame::ComponentFrame;
use crate::html::Element;

/// Renders a div frame as its configured `tagName`
pub fn render(frame: &ComponentFrame) -> String {
	let attributes = &frame.attributes;
	let tag = attributes.get("tagName").unwrap_or("div");
	let bound = attributes.contains("bind");
	let on_load = bound && attributes.flag_or("bindOnLoad", true);

	let mut element = Element::new(tag)
		.id(frame.id.as_str())
		.class("bx-div")
		.class_if(bound, "bx-div-bind")
		.class_if(on_load, "bx-bind-on-load");
	decorate(&mut element, frame.tag.attributes(), attributes);

	if bound {
		element.add_attr("data-bind-on-load", if on_load { "true" } else { "false" });
		if on_load {
			element.push_child(
				Element::new("div")
					.class("bx-bind-loading")
					.text("Loading..."),
			);
		}
	} else {
		element.push_raw(frame.body.as_str());
	}
	element.render()
}
