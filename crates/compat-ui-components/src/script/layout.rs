//! Layout behavior: tab switching, accordion toggling, remote area content

use super::events::{LAYOUT_ACCORDION_TOGGLE, LAYOUT_TAB_CHANGE};
use super::{
	ScriptWriter, component_script, write_fire_helper, write_handler_call, write_resolve_helper,
	write_source_loader,
};
use crate::frame::ComponentFrame;

/// Emits the script block of a rendered layout
pub fn layout_script(frame: &ComponentFrame) -> String {
	let kind = frame.attributes.get("type").unwrap_or_default();
	let on_change = frame.attributes.get("onChange");
	let has_sources = frame
		.areas()
		.any(|area| area.attributes.contains("source"));
	let on_bind_error = frame
		.areas()
		.find_map(|area| area.attributes.get("onBindError"));

	component_script(&frame.id, "layout", |w| {
		write_resolve_helper(w);
		write_fire_helper(w, "layout");
		match kind {
			"tab" => write_tabs(w, on_change),
			"accordion" => write_accordion(w, on_change),
			_ => {}
		}
		if has_sources {
			write_source_loader(w, on_bind_error);
			// pods and nested layouts load their own sources
			w.open("layout.querySelectorAll('[data-source]').forEach(function(container) {")
				.open("if (container.classList.contains('bx-pod') || container.parentElement.closest('.bx-layout') !== layout) {")
				.line("return;")
				.close("}")
				.line("loadSource(container, container.dataset.source);")
				.close("});");
		}
		w.line("layout.bxLayout = { type: layout.dataset.layoutType };");
	})
}

fn write_tabs(w: &mut ScriptWriter, on_change: Option<&str>) {
	w.open("function activateTab(header) {")
		.line("const target = header.dataset.target;")
		.open("layout.querySelectorAll(':scope > .bx-tab-headers > .bx-tab-header').forEach(function(other) {")
		.line("other.classList.toggle('active', other === header);")
		.line("other.setAttribute('aria-selected', other === header ? 'true' : 'false');")
		.close("});")
		.open("layout.querySelectorAll(':scope > .bx-tab-panels > .bx-tab-panel').forEach(function(panel) {")
		.line("panel.classList.toggle('active', panel.id === target);")
		.close("});")
		.line(format!(
			"fire('{LAYOUT_TAB_CHANGE}', {{ layout: layout.id, tab: target }});"
		))
		.call(|w| write_handler_call(w, on_change, "target"))
		.close("}")
		.open("layout.addEventListener('click', function(event) {")
		.line("const header = event.target.closest('.bx-tab-header');")
		.open("if (!header || header.closest('.bx-layout') !== layout) {")
		.line("return;")
		.close("}")
		.open("if (header.classList.contains('disabled') || header.classList.contains('active')) {")
		.line("return;")
		.close("}")
		.line("activateTab(header);")
		.close("});");
}

fn write_accordion(w: &mut ScriptWriter, on_change: Option<&str>) {
	w.open("layout.addEventListener('click', function(event) {")
		.line("const header = event.target.closest('.bx-accordion-header');")
		.open("if (!header || header.closest('.bx-layout') !== layout) {")
		.line("return;")
		.close("}")
		.line("const panel = header.closest('.bx-accordion-panel');")
		.open("if (!panel || panel.dataset.collapsible === 'false') {")
		.line("return;")
		.close("}")
		.line("const collapsed = panel.classList.toggle('collapsed');")
		.line("header.setAttribute('aria-expanded', collapsed ? 'false' : 'true');")
		.line(format!(
			"fire('{LAYOUT_ACCORDION_TOGGLE}', {{ layout: layout.id, panel: panel.id, collapsed: collapsed }});"
		))
		.call(|w| write_handler_call(w, on_change, "panel.id, collapsed"))
		.close("});");
}
