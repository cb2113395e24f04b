//! Grid-update behavior: change tracking and persistence requests
//!
//! The script listens for edit, delete and add events on the named grid,
//! keeps the pending changes in memory and sends them either as JSON to the
//! grid-update endpoint (database mode) or as the form's `FormData` to a URL.

use super::events::{
	GRID_CELL_EDIT, GRID_ROW_ADD, GRID_ROW_DELETE, GRID_UPDATE_ERROR, GRID_UPDATE_SUCCESS,
};
use super::{
	ScriptWriter, js_string, script_block, write_dom_ready, write_handler_call,
	write_parse_response, write_resolve_helper,
};
use crate::frame::ComponentFrame;

/// Emits the script block of a grid-update form
pub fn grid_update_script(frame: &ComponentFrame, endpoint: &str) -> String {
	let attributes = &frame.attributes;
	let grid = attributes.get("grid").unwrap_or_default();
	let database_mode = attributes.contains("dataSource") && attributes.contains("tableName");

	let mut w = ScriptWriter::new();
	w.open("(function() {");
	w.line(format!("const gridName = {};", js_string(grid)));
	w.line(format!(
		"const updateForm = document.getElementById({});",
		js_string(&frame.id)
	));
	w.open("if (!updateForm || updateForm.dataset.bxInitialized === 'true') {")
		.line("return;")
		.close("}");
	w.line("updateForm.dataset.bxInitialized = 'true';");
	w.line("const modifiedCells = new Map();");
	w.line("const deletedRows = new Set();");
	w.line("let newRows = [];");
	w.line("");

	write_resolve_helper(&mut w);
	write_parse_response(&mut w);
	w.open("function findGrid() {")
		.line("return document.querySelector('.bx-grid[data-name=\"' + gridName + '\"]');")
		.close("}")
		.open("function fire(name, detail) {")
		.line("const target = findGrid() || updateForm;")
		.line("const event = new CustomEvent(name, { bubbles: true, detail: detail });")
		.line("target.dispatchEvent(event);")
		.close("}")
		.open("function collectChanges() {")
		.open("return {")
		.line("modified: Array.from(modifiedCells.values()),")
		.line("deleted: Array.from(deletedRows),")
		.line("added: newRows")
		.close("};")
		.close("}");

	write_tracking(&mut w);
	if database_mode {
		write_update_database(&mut w, frame, endpoint);
	} else {
		write_update_via_url(&mut w, frame);
	}
	write_perform_update(
		&mut w,
		if database_mode { "updateDatabase" } else { "updateViaURL" },
		attributes.get("onSuccess"),
		attributes.get("onError"),
	);

	w.open("updateForm.addEventListener('submit', function(event) {")
		.line("event.preventDefault();")
		.line("performUpdate();")
		.close("});");
	w.open(format!(
		"window[{}] = function() {{",
		js_string(&format!("updateGrid_{grid}"))
	))
	.line("return performUpdate();")
	.close("};");
	write_dom_ready(&mut w, "attach");
	w.close("})();");

	script_block(&w.finish())
}

fn write_tracking(w: &mut ScriptWriter) {
	w.open("function attach() {")
		.line("const grid = findGrid();")
		.open("if (!grid || grid.dataset.bxUpdateAttached === 'true') {")
		.line("return;")
		.close("}")
		.line("grid.dataset.bxUpdateAttached = 'true';")
		.open(format!("grid.addEventListener('{GRID_CELL_EDIT}', function(event) {{"))
		.line("const detail = event.detail;")
		.line("modifiedCells.set(detail.row + ':' + detail.column, detail);")
		.close("});")
		.open(format!("grid.addEventListener('{GRID_ROW_DELETE}', function(event) {{"))
		.line("deletedRows.add(event.detail.row);")
		.close("});")
		.open(format!("grid.addEventListener('{GRID_ROW_ADD}', function(event) {{"))
		.line("newRows.push(event.detail.data);")
		.close("});")
		.close("}");
}

fn write_update_database(w: &mut ScriptWriter, frame: &ComponentFrame, endpoint: &str) {
	let attributes = &frame.attributes;
	w.open("async function updateDatabase() {")
		.open("const payload = {")
		.line("gridName: gridName,");
	for (key, attribute) in [
		("dataSource", "dataSource"),
		("tableName", "tableName"),
		("tableOwner", "tableOwner"),
		("tableQualifier", "tableQualifier"),
	] {
		if let Some(value) = attributes.get(attribute) {
			w.line(format!("{key}: {},", js_string(value)));
		}
	}
	w.line(format!("keyOnly: {},", attributes.flag("keyOnly")))
		.line("changes: collectChanges()")
		.close("};");
	if let Some(username) = attributes.get("username") {
		w.line(format!("payload.username = {};", js_string(username)));
	}
	if let Some(password) = attributes.get("password") {
		w.line(format!("payload.password = {};", js_string(password)));
	}
	w.open(format!("const response = await fetch({}, {{", js_string(endpoint)))
		.line("method: 'POST',")
		.line("headers: { 'Content-Type': 'application/json', 'X-Requested-With': 'XMLHttpRequest' },")
		.line("body: JSON.stringify(payload)")
		.close("});")
		.call(write_status_check)
		.line("return parseResponse(response);")
		.close("}");
}

fn write_update_via_url(w: &mut ScriptWriter, frame: &ComponentFrame) {
	let attributes = &frame.attributes;
	let url = js_string(attributes.get("url").unwrap_or_default());
	let method = attributes.get("method").unwrap_or("POST");

	w.open("async function updateViaURL() {")
		.line("updateForm.querySelector('[name=\"gridData\"]').value = JSON.stringify(collectChanges());")
		.line("const formData = new FormData(updateForm);");
	if method == "GET" {
		w.line(format!("const target = new URL({url}, window.location.href);"))
			.open("formData.forEach(function(value, key) {")
			.line("target.searchParams.set(key, value);")
			.close("});")
			.open("const response = await fetch(target.toString(), {")
			.line("method: 'GET',")
			.line("headers: { 'X-Requested-With': 'XMLHttpRequest' }")
			.close("});");
	} else {
		w.open(format!("const response = await fetch({url}, {{"))
			.line(format!("method: '{method}',"))
			.line("body: formData,")
			.line("headers: { 'X-Requested-With': 'XMLHttpRequest' }")
			.close("});");
	}
	w.call(write_status_check)
		.line("return parseResponse(response);")
		.close("}");
}

fn write_status_check(w: &mut ScriptWriter) {
	w.open("if (!response.ok) {")
		.line("throw new Error('HTTP ' + response.status + ': ' + response.statusText);")
		.close("}");
}

fn write_perform_update(
	w: &mut ScriptWriter,
	update: &str,
	on_success: Option<&str>,
	on_error: Option<&str>,
) {
	w.open("async function performUpdate() {")
		.open("try {")
		.line(format!("const result = await {update}();"))
		.line("modifiedCells.clear();")
		.line("deletedRows.clear();")
		.line("newRows = [];")
		.line(format!(
			"fire('{GRID_UPDATE_SUCCESS}', {{ grid: gridName, result: result }});"
		))
		.call(|w| write_handler_call(w, on_success, "result"))
		.line("return result;")
		.reopen("} catch (error) {")
		.line(format!(
			"fire('{GRID_UPDATE_ERROR}', {{ grid: gridName, message: error.message }});"
		))
		.call(|w| write_handler_call(w, on_error, "error.message, error"))
		.close("}")
		.close("}");
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tags::TagKind;
	use compat_ui_core::{RawAttributes, validate_all};
	use rstest::rstest;

	fn frame(pairs: &[(&str, &str)]) -> ComponentFrame {
		let raw: RawAttributes = pairs.iter().copied().collect();
		let attributes =
			validate_all("GridUpdate", TagKind::GridUpdate.attributes(), &raw).unwrap();
		ComponentFrame::open(TagKind::GridUpdate, "gridupdate_1", attributes)
	}

	#[rstest]
	fn test_database_mode() {
		let script = grid_update_script(
			&frame(&[
				("grid", "authGrid"),
				("dataSource", "secureDB"),
				("tableName", "products"),
				("tableOwner", "inventory"),
				("username", "dbuser"),
				("password", "dbpass"),
				("keyOnly", "true"),
			]),
			"/bx-compat-ui/gridupdate",
		);
		for needle in [
			"async function updateDatabase()",
			"fetch('/bx-compat-ui/gridupdate', {",
			"'Content-Type': 'application/json'",
			"JSON.stringify(payload)",
			"payload.username = 'dbuser';",
			"payload.password = 'dbpass';",
			"keyOnly: true",
			"tableOwner: 'inventory'",
			"tableName: 'products'",
			"modifiedCells.clear()",
			"deletedRows.clear()",
			"newRows = []",
			"window['updateGrid_authGrid'] = function()",
		] {
			assert!(script.contains(needle), "missing {needle}");
		}
		assert!(!script.contains("updateViaURL"));
	}

	#[rstest]
	fn test_url_mode() {
		let script = grid_update_script(
			&frame(&[
				("grid", "urlGrid"),
				("url", "/api/update-grid"),
				("method", "PUT"),
				("onSuccess", "mySuccess"),
				("onError", "myError"),
			]),
			"/bx-compat-ui/gridupdate",
		);
		assert!(script.contains("async function updateViaURL()"));
		assert!(script.contains("new FormData(updateForm)"));
		assert!(script.contains("method: 'PUT'"));
		assert!(script.contains("gridUpdateSuccess"));
		assert!(script.contains("gridUpdateError"));
		assert!(script.contains("resolve('mySuccess')"));
		assert!(script.contains("resolve('myError')"));
		assert!(script.contains("response.json()"));
		assert!(script.contains("response.text()"));
		assert!(!script.contains("updateDatabase"));
	}

	#[rstest]
	fn test_get_moves_form_data_into_query_string() {
		let script = grid_update_script(
			&frame(&[("grid", "g"), ("url", "/api/save"), ("method", "GET")]),
			"/bx-compat-ui/gridupdate",
		);
		assert!(script.contains("target.searchParams.set(key, value);"));
		assert!(!script.contains("body: formData"));
	}
}
