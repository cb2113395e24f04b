//! Pod behavior: loading remote body content

use super::{component_script, write_fire_helper, write_resolve_helper, write_source_loader};
use crate::frame::ComponentFrame;

/// Emits the script block of a pod with a `source`; `None` when there is nothing to load
pub fn pod_script(frame: &ComponentFrame) -> Option<String> {
	frame.attributes.get("source")?;
	let on_bind_error = frame.attributes.get("onBindError");

	Some(component_script(&frame.id, "pod", |w| {
		write_resolve_helper(w);
		write_fire_helper(w, "pod");
		write_source_loader(w, on_bind_error);
		w.line("const body = pod.querySelector('.bx-pod-body');")
			.line("const sourceUrl = pod.dataset.source;")
			.open("if (body && sourceUrl) {")
			.line("loadSource(body, sourceUrl);")
			.close("}")
			.line("pod.bxPod = { reload: function() { loadSource(body, sourceUrl); } };");
	}))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tags::TagKind;
	use compat_ui_core::{RawAttributes, validate_all};
	use rstest::rstest;

	fn frame(pairs: &[(&str, &str)]) -> ComponentFrame {
		let raw: RawAttributes = pairs.iter().copied().collect();
		let attributes = validate_all("Pod", TagKind::Pod.attributes(), &raw).unwrap();
		ComponentFrame::open(TagKind::Pod, "pod_1", attributes)
	}

	#[rstest]
	fn test_source_pod_fetches() {
		let script = pod_script(&frame(&[("source", "/api/content"), ("onBindError", "handleError")]))
			.unwrap();
		assert!(script.contains("fetch(sourceUrl)"));
		assert!(script.contains("'handleError'"));
		assert!(script.contains("getElementById('pod_1')"));
	}

	#[rstest]
	fn test_static_pod_has_no_script() {
		assert!(pod_script(&frame(&[("title", "Static")])).is_none());
	}
}
