//! Grid-update markup: the form carrying pending grid changes

use crate::frame::ComponentFrame;
use crate::html::Element;

/// Renders the update form
///
/// URL mode targets `url` with the configured method; database mode keeps
/// the form as a local container only, the script posts the payload itself.
pub fn render(frame: &ComponentFrame) -> String {
	let attributes = &frame.attributes;
	let grid = attributes.get("grid").unwrap_or_default();

	let mut form = Element::new("form")
		.id(frame.id.as_str())
		.class("bx-grid-update")
		.attr("data-grid", grid);
	if let Some(url) = attributes.get("url") {
		form.add_attr("method", attributes.get("method").unwrap_or("POST"));
		form.add_attr("action", url);
	}

	form.child(hidden("gridName", grid))
		.child(hidden("gridData", "[]"))
		.raw(frame.body.as_str())
		.render()
}

fn hidden(name: &str, value: &str) -> Element {
	Element::new("input")
		.attr("type", "hidden")
		.attr("name", name)
		.attr("value", value)
}
