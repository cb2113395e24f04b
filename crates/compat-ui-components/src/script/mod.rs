//! Client script emission
//!
//! Every interactive tag gets one self-executing `<script>` block. Blocks
//! defer to `DOMContentLoaded` while the document is still loading and mark
//! their root element once initialized, so running the same block twice is
//! harmless.

pub mod ajax_import;
pub mod ajax_proxy;
pub mod bind;
pub mod div;
pub mod grid;
pub mod grid_update;
pub mod layout;
pub mod pod;

use crate::frame::ComponentFrame;
use crate::markup;
use crate::tags::TagKind;
use compat_ui_conf::UiSettings;
use compat_ui_core::Result;
use compat_ui_core::escape::escape_js;

/// Emits the script block of a closed frame, if the tag has behavior
pub fn emit(frame: &ComponentFrame, settings: &UiSettings) -> Result<Option<String>> {
	let script = match frame.tag {
		TagKind::Grid => Some(grid::grid_script(frame)),
		TagKind::GridUpdate => Some(grid_update::grid_update_script(
			frame,
			&settings.grid_update_endpoint,
		)),
		TagKind::Layout => Some(layout::layout_script(frame)),
		TagKind::Pod => pod::pod_script(frame),
		TagKind::Div => div::div_script(frame, &settings.proxy_endpoint),
		TagKind::AjaxProxy => Some(ajax_proxy::ajax_proxy_script(frame, &settings.proxy_endpoint)?),
		TagKind::AjaxImport => {
			let attributes = &frame.attributes;
			let params = attributes
				.get("params")
				.map(ajax_import::parse_params)
				.unwrap_or_default();
			Some(ajax_import::ajax_import_script(
				markup::ajax_import::css_src(attributes, settings),
				markup::ajax_import::script_src(attributes, settings),
				&settings.version,
				&params,
			))
		}
		TagKind::GridColumn | TagKind::GridRow | TagKind::LayoutArea => None,
	};
	Ok(script)
}

/// Event names dispatched by the emitted script
pub mod events {
	pub const GRID_CELL_EDIT: &str = "gridCellEdit";
	pub const GRID_SORT: &str = "gridSort";
	pub const GRID_PAGE_CHANGE: &str = "gridPageChange";
	pub const GRID_ROW_DELETE: &str = "gridRowDelete";
	pub const GRID_ROW_ADD: &str = "gridRowAdd";
	pub const GRID_UPDATE_SUCCESS: &str = "gridUpdateSuccess";
	pub const GRID_UPDATE_ERROR: &str = "gridUpdateError";
	pub const BIND_SUCCESS: &str = "bindSuccess";
	pub const BIND_ERROR: &str = "bindError";
	pub const LAYOUT_TAB_CHANGE: &str = "layoutTabChange";
	pub const LAYOUT_ACCORDION_TOGGLE: &str = "layoutAccordionToggle";
}

const INDENT: &str = "    ";

/// Line-oriented JavaScript writer with block indentation
#[derive(Debug, Default)]
pub struct ScriptWriter {
	buffer: String,
	depth: usize,
}

impl ScriptWriter {
	/// Creates an empty writer
	pub fn new() -> Self {
		Self::default()
	}

	/// Writes one line at the current depth
	pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
		let text = text.as_ref();
		if !text.is_empty() {
			for _ in 0..self.depth {
				self.buffer.push_str(INDENT);
			}
			self.buffer.push_str(text);
		}
		self.buffer.push('\n');
		self
	}

	/// Writes a line and indents what follows
	pub fn open(&mut self, text: impl AsRef<str>) -> &mut Self {
		self.line(text);
		self.depth += 1;
		self
	}

	/// Dedents and writes a closing line
	pub fn close(&mut self, text: impl AsRef<str>) -> &mut Self {
		self.depth = self.depth.saturating_sub(1);
		self.line(text)
	}

	/// Dedents, writes a line, and indents again (`} else {`)
	pub fn reopen(&mut self, text: impl AsRef<str>) -> &mut Self {
		self.depth = self.depth.saturating_sub(1);
		self.open(text)
	}

	/// Runs `f` at the current depth, keeping a call chain going
	pub fn call(&mut self, f: impl FnOnce(&mut Self)) -> &mut Self {
		f(self);
		self
	}

	/// Runs `f` one level deeper
	pub fn indented(&mut self, f: impl FnOnce(&mut Self)) -> &mut Self {
		self.depth += 1;
		f(self);
		self.depth = self.depth.saturating_sub(1);
		self
	}

	/// Writes every line of a multi-line block at the current depth
	///
	/// The block's own leading indentation is kept relative to the current
	/// depth, so static snippets can be written as indented raw strings.
	pub fn block(&mut self, block: &str) -> &mut Self {
		for line in block.lines() {
			self.line(line);
		}
		self
	}

	/// Returns the written script
	pub fn finish(self) -> String {
		self.buffer
	}
}

/// Wraps script text in a `<script type="text/javascript">` element
pub fn script_block(body: &str) -> String {
	format!("<script type=\"text/javascript\">\n{body}</script>\n")
}

/// Quotes and escapes a value as a single-quoted JavaScript string literal
pub fn js_string(value: &str) -> String {
	format!("'{}'", escape_js(value))
}

/// Writes `init()` invocation guarded on the document ready state
pub fn write_dom_ready(w: &mut ScriptWriter, init: &str) {
	w.open("if (document.readyState === 'loading') {")
		.line(format!("document.addEventListener('DOMContentLoaded', {init});"))
		.reopen("} else {")
		.line(format!("{init}();"))
		.close("}");
}

/// Emits the standard component script around `body`
///
/// `body` runs inside `init()` with `var_name` bound to the element with id
/// `element_id`, after the re-initialization guard.
pub fn component_script(
	element_id: &str,
	var_name: &str,
	body: impl FnOnce(&mut ScriptWriter),
) -> String {
	let mut w = ScriptWriter::new();
	w.open("(function() {");
	w.open("function init() {");
	w.line(format!(
		"const {var_name} = document.getElementById({});",
		js_string(element_id)
	));
	w.open(format!(
		"if (!{var_name} || {var_name}.dataset.bxInitialized === 'true') {{"
	))
	.line("return;")
	.close("}");
	w.line(format!("{var_name}.dataset.bxInitialized = 'true';"));
	w.line("");
	body(&mut w);
	w.close("}");
	write_dom_ready(&mut w, "init");
	w.close("})();");
	script_block(&w.finish())
}

/// Writes `resolve(path)`, which looks a dotted name up on `window`
pub fn write_resolve_helper(w: &mut ScriptWriter) {
	w.open("function resolve(path) {")
		.open("return path.split('.').reduce(function(scope, key) {")
		.line("return scope == null ? undefined : scope[key];")
		.close("}, window);")
		.close("}");
}

/// Writes `fire(name, detail)`, which dispatches a bubbling `CustomEvent` on `target`
pub fn write_fire_helper(w: &mut ScriptWriter, target: &str) {
	w.open("function fire(name, detail) {")
		.line("const event = new CustomEvent(name, { bubbles: true, cancelable: true, detail: detail });")
		.line(format!("{target}.dispatchEvent(event);"))
		.line("return event;")
		.close("}");
}

/// Writes a call to a user handler resolved by name, skipped when undefined
pub fn write_handler_call(w: &mut ScriptWriter, handler: Option<&str>, args: &str) {
	if let Some(handler) = handler {
		w.open("{")
			.line(format!("const handler = resolve({});", js_string(handler)))
			.open("if (typeof handler === 'function') {")
			.line(format!("handler({args});"))
			.close("}")
			.close("}");
	}
}

/// Writes content-type aware response parsing as `parseResponse(response)`
pub fn write_parse_response(w: &mut ScriptWriter) {
	w.open("function parseResponse(response) {")
		.line("const contentType = response.headers.get('content-type') || '';")
		.open("if (contentType.includes('application/json')) {")
		.line("return response.json();")
		.close("}")
		.line("return response.text();")
		.close("}");
}

/// Writes `loadSource(container, sourceUrl)`, which fetches remote markup into `container`
///
/// Needs `fire` and `resolve` in scope.
pub fn write_source_loader(w: &mut ScriptWriter, on_error: Option<&str>) {
	w.open("function loadSource(container, sourceUrl) {")
		.line("fetch(sourceUrl)")
		.indented(|w| {
			w.open(".then(function(response) {")
				.open("if (!response.ok) {")
				.line("throw new Error('HTTP ' + response.status + ': ' + response.statusText);")
				.close("}")
				.line("return response.text();")
				.close("})")
				.open(".then(function(content) {")
				.line("container.innerHTML = content;")
				.line(format!(
					"fire('{}', {{ source: sourceUrl }});",
					events::BIND_SUCCESS
				))
				.close("})")
				.open(".catch(function(error) {")
				.line("const message = document.createElement('div');")
				.line("message.className = 'bx-error';")
				.line("message.textContent = 'Error loading content: ' + error.message;")
				.line("container.replaceChildren(message);")
				.line(format!(
					"fire('{}', {{ source: sourceUrl, message: error.message }});",
					events::BIND_ERROR
				))
				.call(|w| write_handler_call(w, on_error, "error.message, error"))
				.close("});");
		})
		.close("}");
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_writer_indents_blocks() {
		let mut w = ScriptWriter::new();
		w.open("if (x) {").line("y();").close("}");
		assert_eq!(w.finish(), "if (x) {\n    y();\n}\n");
	}

	#[rstest]
	fn test_dom_ready_guard() {
		let mut w = ScriptWriter::new();
		write_dom_ready(&mut w, "init");
		assert_eq!(
			w.finish(),
			"if (document.readyState === 'loading') {\n    document.addEventListener('DOMContentLoaded', init);\n} else {\n    init();\n}\n"
		);
	}

	#[rstest]
	fn test_component_script_guards_reinitialization() {
		let script = component_script("grid_1", "grid", |w| {
			w.line("grid.classList.add('ready');");
		});
		assert!(script.starts_with("<script type=\"text/javascript\">\n(function() {"));
		assert!(script.contains("const grid = document.getElementById('grid_1');"));
		assert!(script.contains("grid.dataset.bxInitialized === 'true'"));
		assert!(script.contains("        grid.classList.add('ready');"));
		assert!(script.ends_with("})();\n</script>\n"));
	}

	#[rstest]
	fn test_js_string_escapes() {
		assert_eq!(js_string("it's"), r"'it\'s'");
	}

	#[rstest]
	fn test_handler_call_skipped_without_handler() {
		let mut w = ScriptWriter::new();
		write_handler_call(&mut w, None, "x");
		assert_eq!(w.finish(), "");
	}
}
