//! Pod markup: optional title bar over a body

use super::{root, source_placeholder};
use crate::frame::ComponentFrame;
use crate::html::Element;

/// Renders a pod frame
///
/// The header block is only emitted for a non-blank `title`. With a
/// `source`, the body is replaced by a loading placeholder.
pub fn render(frame: &ComponentFrame) -> String {
	let attributes = &frame.attributes;
	let mut pod = root("div", "bx-pod", frame);

	if let Some(title) = attributes.get("title") {
		let mut header = Element::new("div").class("bx-pod-header");
		if let Some(style) = attributes.get("headerStyle") {
			header.add_raw_style(style);
		}
		pod.push_child(header.child(Element::new("h3").class("bx-pod-title").text(title)));
	}

	let mut body = Element::new("div").class("bx-pod-body");
	if let Some(style) = attributes.get("bodyStyle") {
		body.add_raw_style(style);
	}
	match attributes.get("source") {
		Some(source) => body.push_raw(source_placeholder(source)),
		None => body.push_raw(frame.body.as_str()),
	}
	pod.child(body).render()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tags::TagKind;
	use compat_ui_core::{RawAttributes, validate_all};
	use rstest::rstest;

	fn pod(pairs: &[(&str, &str)], body: &str) -> ComponentFrame {
		let raw: RawAttributes = pairs.iter().copied().collect();
		let attributes = validate_all("Pod", TagKind::Pod.attributes(), &raw).unwrap();
		let mut frame = ComponentFrame::open(TagKind::Pod, "pod_1", attributes);
		frame.body.push_str(body);
		frame
	}

	#[rstest]
	fn test_titled_pod() {
		let html = render(&pod(&[("title", "My Pod Title")], "Pod content here"));
		assert_eq!(
			html,
			"<div id=\"pod_1\" class=\"bx-pod\"><div class=\"bx-pod-header\"><h3 class=\"bx-pod-title\">My Pod Title</h3></div><div class=\"bx-pod-body\">Pod content here</div></div>"
		);
	}

	#[rstest]
	fn test_untitled_pod_has_no_header() {
		let html = render(&pod(&[], "Content without title"));
		assert!(!html.contains("bx-pod-header"));
		assert!(html.contains("Content without title"));
	}

	#[rstest]
	fn test_styles_and_sizes() {
		let html = render(&pod(
			&[
				("title", "Styled Pod"),
				("height", "200px"),
				("width", "300px"),
				("overflow", "hidden"),
				("headerStyle", "font-weight: bold;"),
				("bodyStyle", "background-color: lightblue;"),
				("style", "border: 1px solid black;"),
				("class", "my-custom-class"),
				("name", "myPodName"),
			],
			"",
		));
		assert!(html.contains("class=\"bx-pod my-custom-class\""));
		assert!(html.contains(
			"style=\"height: 200px; width: 300px; overflow: hidden; border: 1px solid black;\""
		));
		assert!(html.contains("data-name=\"myPodName\""));
		assert!(html.contains("<div class=\"bx-pod-header\" style=\"font-weight: bold;\">"));
		assert!(html.contains("<div class=\"bx-pod-body\" style=\"background-color: lightblue;\">"));
	}

	#[rstest]
	fn test_sourced_pod_shows_placeholder() {
		let html = render(&pod(&[("title", "AJAX Pod"), ("source", "/api/pod-content")], "inline"));
		assert!(html.contains("data-source=\"/api/pod-content\""));
		assert!(html.contains("<!-- Content loaded from: /api/pod-content -->"));
		assert!(html.contains("bx-source-loading"));
		assert!(html.contains("Loading content..."));
		assert!(!html.contains("inline"));
	}
}
