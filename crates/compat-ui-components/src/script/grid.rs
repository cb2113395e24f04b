//! Grid behavior: sorting, paging, inline editing and selection

use super::events::{GRID_CELL_EDIT, GRID_PAGE_CHANGE, GRID_ROW_ADD, GRID_ROW_DELETE, GRID_SORT};
use super::{
	ScriptWriter, component_script, js_string, write_fire_helper, write_handler_call,
	write_resolve_helper,
};
use crate::frame::ComponentFrame;

/// Emits the script block of a rendered grid
pub fn grid_script(frame: &ComponentFrame) -> String {
	let attributes = &frame.attributes;
	let name = js_string(attributes.get("name").unwrap_or_default());
	let multi = attributes.get("selectMode") == Some("multi");
	let on_load = attributes.get("onLoad");
	let on_edit = attributes.get("onEdit");
	let on_sort = attributes.get("onSort");
	let on_change = attributes.get("onChange");

	component_script(&frame.id, "grid", |w| {
		w.line("const tbody = grid.querySelector('.bx-grid-body');");
		write_resolve_helper(w);
		write_fire_helper(w, "grid");
		write_cell_text(w);
		write_sort_column(w, &name, on_sort);
		write_go_to_page(w, &name);
		write_toggle_select_all(w, &name, on_change);
		write_row_operations(w, &name);
		write_click_wiring(w);
		write_inline_editing(w, &name, on_edit);
		if multi {
			w.line("const selectAll = grid.querySelector('.bx-grid-select-all');");
			w.open("if (selectAll) {")
				.open("selectAll.addEventListener('change', function() {")
				.line("toggleSelectAll(selectAll.checked);")
				.close("});")
				.close("}");
		}
		if on_change.is_some() {
			w.open("grid.addEventListener('change', function(event) {")
				.open("if (event.target.closest('.bx-grid-select-cell')) {")
				.call(|w| write_handler_call(w, on_change, "grid, selectedRows()"))
				.close("}")
				.close("});");
		}
		w.line("grid.bxGrid = { sortColumn: sortColumn, goToPage: goToPage, toggleSelectAll: toggleSelectAll, selectedRows: selectedRows, deleteRow: deleteRow, addRow: addRow };");
		write_handler_call(w, on_load, "grid");
	})
}

fn write_cell_text(w: &mut ScriptWriter) {
	w.open("function cellText(row, column) {")
		.line("const cell = row.querySelector('.bx-grid-cell[data-column=\"' + column + '\"]');")
		.line("return cell ? cell.textContent.trim() : '';")
		.close("}");
}

fn write_sort_column(w: &mut ScriptWriter, name: &str, on_sort: Option<&str>) {
	w.open("function sortColumn(column) {")
		.line("const header = grid.querySelector('.bx-grid-column-header[data-column=\"' + column + '\"]');")
		.line("const direction = header && header.dataset.sortDirection === 'asc' ? 'desc' : 'asc';")
		.open("grid.querySelectorAll('.bx-grid-column-header').forEach(function(th) {")
		.line("delete th.dataset.sortDirection;")
		.close("});")
		.open("if (header) {")
		.line("header.dataset.sortDirection = direction;")
		.close("}")
		.line("const rows = Array.from(tbody.querySelectorAll('.bx-grid-row'));")
		.open("rows.sort(function(a, b) {")
		.line("const x = cellText(a, column);")
		.line("const y = cellText(b, column);")
		.line("const nx = parseFloat(x);")
		.line("const ny = parseFloat(y);")
		.line("const order = !isNaN(nx) && !isNaN(ny) ? nx - ny : x.localeCompare(y);")
		.line("return direction === 'asc' ? order : -order;")
		.close("});")
		.open("rows.forEach(function(row) {")
		.line("tbody.appendChild(row);")
		.close("});")
		.line(format!(
			"fire('{GRID_SORT}', {{ grid: {name}, column: column, direction: direction }});"
		))
		.call(|w| write_handler_call(w, on_sort, "column, direction"))
		.close("}");
}

fn write_go_to_page(w: &mut ScriptWriter, name: &str) {
	w.open("function goToPage(page) {")
		.line(format!(
			"const event = fire('{GRID_PAGE_CHANGE}', {{ grid: {name}, page: page }});"
		))
		.open("if (event.defaultPrevented) {")
		.line("return;")
		.close("}")
		.line("const url = new URL(window.location.href);")
		.line("url.searchParams.set('page', page);")
		.line("window.location.href = url.toString();")
		.close("}");
}

fn write_toggle_select_all(w: &mut ScriptWriter, name: &str, on_change: Option<&str>) {
	w.open("function selectedRows() {")
		.open("return Array.from(grid.querySelectorAll('.bx-grid-select-cell input:checked')).map(function(input) {")
		.line("return input.value;")
		.close("});")
		.close("}")
		.open("function toggleSelectAll(checked) {")
		.open("grid.querySelectorAll('.bx-grid-select-cell input').forEach(function(input) {")
		.line("input.checked = checked;")
		.close("});")
		.line(format!(
			"grid.dataset.selection = JSON.stringify({{ grid: {name}, rows: selectedRows() }});"
		))
		.call(|w| write_handler_call(w, on_change, "grid, selectedRows()"))
		.close("}");
}

fn write_row_operations(w: &mut ScriptWriter, name: &str) {
	w.open("function deleteRow(index) {")
		.line("const row = tbody.querySelector('.bx-grid-row[data-row=\"' + index + '\"]');")
		.open("if (row) {")
		.line("row.remove();")
		.line(format!(
			"fire('{GRID_ROW_DELETE}', {{ grid: {name}, row: String(index) }});"
		))
		.close("}")
		.close("}")
		.open("function addRow(data) {")
		.line(format!(
			"fire('{GRID_ROW_ADD}', {{ grid: {name}, data: data }});"
		))
		.close("}");
}

fn write_click_wiring(w: &mut ScriptWriter) {
	w.open("grid.addEventListener('click', function(event) {")
		.line("const header = event.target.closest('.bx-grid-column-header.bx-grid-sortable');")
		.open("if (header) {")
		.line("sortColumn(header.dataset.column);")
		.line("return;")
		.close("}")
		.line("const button = event.target.closest('.bx-grid-page-btn');")
		.open("if (button && !button.disabled) {")
		.line("goToPage(parseInt(button.dataset.page, 10));")
		.close("}")
		.close("});");
}

fn write_inline_editing(w: &mut ScriptWriter, name: &str, on_edit: Option<&str>) {
	w.open("grid.addEventListener('dblclick', function(event) {")
		.line("const cell = event.target.closest('.bx-grid-cell[data-editable=\"true\"]');")
		.open("if (!cell || cell.isContentEditable) {")
		.line("return;")
		.close("}")
		.line("const oldValue = cell.textContent;")
		.line("cell.contentEditable = 'true';")
		.line("cell.focus();")
		.open("cell.addEventListener('blur', function() {")
		.line("cell.contentEditable = 'false';")
		.line("const newValue = cell.textContent;")
		.open("if (newValue === oldValue) {")
		.line("return;")
		.close("}")
		.line("const row = cell.closest('.bx-grid-row');")
		.line(format!(
			"fire('{GRID_CELL_EDIT}', {{ grid: {name}, row: row ? row.dataset.row : null, column: cell.dataset.column, oldValue: oldValue, newValue: newValue }});"
		))
		.call(|w| write_handler_call(w, on_edit, "cell.dataset.column, oldValue, newValue"))
		.close("}, { once: true });")
		.close("});");
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tags::TagKind;
	use compat_ui_core::{RawAttributes, validate_all};
	use rstest::rstest;

	fn frame(pairs: &[(&str, &str)]) -> ComponentFrame {
		let raw: RawAttributes = pairs.iter().copied().collect();
		let attributes = validate_all("Grid", TagKind::Grid.attributes(), &raw).unwrap();
		ComponentFrame::open(TagKind::Grid, "grid_1", attributes)
	}

	#[rstest]
	fn test_grid_script_wires_behaviors() {
		let script = grid_script(&frame(&[
			("name", "eventGrid"),
			("onLoad", "gridLoaded"),
			("onEdit", "cellEdited"),
			("onSort", "columnSorted"),
		]));
		for needle in [
			"addEventListener('click'",
			"function sortColumn(column)",
			"function goToPage(page)",
			"function toggleSelectAll(checked)",
			"gridCellEdit",
			"gridSort",
			"gridPageChange",
			"new CustomEvent",
			"dispatchEvent",
			"'gridLoaded'",
			"'cellEdited'",
			"'columnSorted'",
		] {
			assert!(script.contains(needle), "missing {needle}");
		}
	}

	#[rstest]
	#[case("single")]
	#[case("none")]
	fn test_select_all_wired_only_for_multi(#[case] mode: &str) {
		let script = grid_script(&frame(&[("name", "g"), ("selectMode", mode)]));
		assert!(!script.contains("bx-grid-select-all"));
		assert!(!script.contains("checkbox"));
		assert!(!script.contains("bx-grid-select-header"));
	}

	#[rstest]
	fn test_multi_wires_select_all() {
		let script = grid_script(&frame(&[("name", "g"), ("selectMode", "multi")]));
		assert!(script.contains("grid.querySelector('.bx-grid-select-all')"));
	}
}
