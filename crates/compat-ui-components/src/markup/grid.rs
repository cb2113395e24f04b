//! Grid markup: header, body rows, selection column and pagination controls

use super::root;
use crate::frame::{ComponentFrame, GridColumn};
use crate::html::Element;
use crate::query::{Row, cell, cell_text};
use compat_ui_core::{Pagination, Result, ValidatedAttributes, paginate};
use serde_json::Value;
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SelectMode {
	None,
	Single,
	Multi,
}

impl SelectMode {
	fn from_attributes(attributes: &ValidatedAttributes) -> Self {
		match attributes.get("selectMode") {
			Some("single") => Self::Single,
			Some("multi") => Self::Multi,
			_ => Self::None,
		}
	}
}

/// Renders a grid frame
///
/// Query rows render before rows registered with `gridrow`. When no column
/// was registered the query's column list is used.
pub fn render(frame: &ComponentFrame) -> Result<String> {
	let attributes = &frame.attributes;
	let mode = SelectMode::from_attributes(attributes);
	let grid_sortable = attributes.flag("sortable");
	let grid_editable = attributes.flag("editable");
	let columns = columns(frame);

	let rows: Vec<&Row> = frame
		.query
		.iter()
		.flat_map(|query| query.rows.iter())
		.chain(frame.rows())
		.collect();
	let has_source = frame.query.is_some() || frame.rows().next().is_some();

	let pagination = match attributes.integer("pageSize") {
		Some(page_size) if has_source => {
			let page = attributes.integer("page").unwrap_or(1);
			Some(paginate(rows.len(), to_i64(page), to_i64(page_size))?)
		}
		_ => None,
	};
	let (visible, first_row) = match &pagination {
		Some(p) => (p.window(&rows), p.start_row),
		None => (rows.as_slice(), 1),
	};

	let mut table = Element::new("table").class("bx-grid-table");
	if attributes.flag_or("showHeaders", true) {
		table.push_child(header(attributes, &columns, mode, grid_sortable));
	}
	let mut body = Element::new("tbody").class("bx-grid-body");
	for (offset, row) in visible.iter().enumerate() {
		body.push_child(body_row(row, first_row + offset, &columns, mode, grid_editable));
	}
	table.push_child(body);

	let mut grid = root("div", "bx-grid", frame).child(table);
	if let Some(pagination) = &pagination {
		grid.push_child(pagination_controls(pagination));
	}
	Ok(grid.render())
}

fn to_i64(value: u64) -> i64 {
	i64::try_from(value).unwrap_or(i64::MAX)
}

fn columns(frame: &ComponentFrame) -> Vec<Cow<'_, GridColumn>> {
	let registered: Vec<_> = frame.columns().map(Cow::Borrowed).collect();
	if !registered.is_empty() {
		return registered;
	}
	frame
		.query
		.iter()
		.flat_map(|query| query.columns.iter())
		.map(|name| {
			Cow::Owned(GridColumn {
				name: name.clone(),
				attributes: ValidatedAttributes::default(),
			})
		})
		.collect()
}

fn header(
	attributes: &ValidatedAttributes,
	columns: &[Cow<'_, GridColumn>],
	mode: SelectMode,
	grid_sortable: bool,
) -> Element {
	let mut thead = Element::new("thead").class("bx-grid-header");
	if let Some(color) = attributes.get("headerBgColor") {
		thead.add_style("background-color", color);
	}
	if let Some(color) = attributes.get("headerTextColor") {
		thead.add_style("color", color);
	}

	let mut tr = Element::new("tr");
	match mode {
		SelectMode::None => {}
		SelectMode::Single => tr.push_child(Element::new("th").class("bx-grid-select-header")),
		SelectMode::Multi => tr.push_child(
			Element::new("th").class("bx-grid-select-header").child(
				Element::new("input")
					.attr("type", "checkbox")
					.class("bx-grid-select-all")
					.attr("aria-label", "Select all rows"),
			),
		),
	}

	for column in columns {
		let sortable = column.attributes.flag_or("sortable", grid_sortable);
		let mut th = Element::new("th")
			.class("bx-grid-column-header")
			.class_if(sortable, "bx-grid-sortable")
			.attr("data-column", column.name.as_str());
		if let Some(width) = column.attributes.get("width") {
			th.add_style("width", width);
		}
		if let Some(align) = column.attributes.get("headerAlign") {
			th.add_style("text-align", align);
		}
		if !column.is_displayed() {
			th.add_style("display", "none");
		}
		th = th.text(column.header());
		if sortable {
			th.push_child(Element::new("span").class("bx-grid-sort-indicator"));
		}
		tr.push_child(th);
	}
	thead.child(tr)
}

fn body_row(
	row: &Row,
	number: usize,
	columns: &[Cow<'_, GridColumn>],
	mode: SelectMode,
	grid_editable: bool,
) -> Element {
	let number = number.to_string();
	let mut tr = Element::new("tr")
		.class("bx-grid-row")
		.attr("data-row", number.as_str());

	let input_type = match mode {
		SelectMode::None => None,
		SelectMode::Single => Some("radio"),
		SelectMode::Multi => Some("checkbox"),
	};
	if let Some(input_type) = input_type {
		let mut input = Element::new("input")
			.attr("type", input_type)
			.attr("value", number.as_str());
		if mode == SelectMode::Single {
			input.add_attr("name", "bx-grid-selection");
		}
		tr.push_child(Element::new("td").class("bx-grid-select-cell").child(input));
	}

	for column in columns {
		tr.push_child(data_cell(row, column, grid_editable));
	}
	tr
}

fn data_cell(row: &Row, column: &GridColumn, grid_editable: bool) -> Element {
	let attributes = &column.attributes;
	let editable = attributes.flag_or("editable", grid_editable);
	let value = cell(row, &column.name);
	let text = display_text(attributes, cell_text(value));

	let mut td = Element::new("td")
		.class("bx-grid-cell")
		.attr("data-column", column.name.as_str());
	if let Some(align) = attributes.get("dataAlign") {
		td.add_style("text-align", align);
	}
	if !column.is_displayed() {
		td.add_style("display", "none");
	}
	if editable {
		td.add_attr("data-editable", "true");
	}
	match attributes.get("type") {
		Some("string") | None => {}
		Some(kind) => td.add_attr("data-type", kind),
	}
	for (attribute, data) in [
		("numberFormat", "data-number-format"),
		("dateFormat", "data-date-format"),
	] {
		if let Some(format) = attributes.get(attribute) {
			td.add_attr(data, format);
		}
	}

	let content = if attributes.get("type") == Some("image") && !text.is_empty() {
		Element::new("img").attr("src", text.as_str()).attr("alt", "").render()
	} else {
		compat_ui_core::escape::escape_html(&text).into_owned()
	};

	match attributes.get("href") {
		Some(href) => td.child(
			Element::new("a")
				.attr("href", fill_placeholders(href, row))
				.attr_opt("target", attributes.get("target"))
				.raw(content),
		),
		None => td.raw(content),
	}
}

/// Maps a stored value to its display label via `values` / `valuesDisplay`
fn display_text(attributes: &ValidatedAttributes, text: String) -> String {
	let (Some(values), Some(labels)) = (attributes.get("values"), attributes.get("valuesDisplay"))
	else {
		return text;
	};
	let delimiter = attributes.get("valuesDelimiter").unwrap_or(",");
	let label = values
		.split(delimiter)
		.map(str::trim)
		.zip(labels.split(delimiter).map(str::trim))
		.find(|(value, _)| *value == text)
		.map(|(_, label)| label.to_string());
	label.unwrap_or(text)
}

/// Replaces `{column}` placeholders with the row's cell text
fn fill_placeholders(template: &str, row: &Row) -> String {
	let mut output = String::with_capacity(template.len());
	let mut rest = template;
	while let Some(open) = rest.find('{') {
		let Some(close) = rest[open..].find('}') else {
			break;
		};
		output.push_str(&rest[..open]);
		let name = &rest[open + 1..open + close];
		match cell(row, name) {
			Some(Value::Null) | None => output.push_str(&rest[open..=open + close]),
			value => output.push_str(&cell_text(value)),
		}
		rest = &rest[open + close + 1..];
	}
	output.push_str(rest);
	output
}

fn pagination_controls(pagination: &Pagination) -> Element {
	let summary = if pagination.is_empty() {
		format!("Showing 0 of {}", pagination.total_row_count)
	} else {
		format!(
			"Showing {}-{} of {}",
			pagination.start_row, pagination.end_row, pagination.total_row_count
		)
	};

	let page = pagination.page;
	let mut controls = Element::new("div")
		.class("bx-grid-pagination")
		.child(Element::new("span").class("bx-grid-page-info").text(summary))
		.child(page_button(
			"Previous",
			page.saturating_sub(1).max(1),
			!pagination.has_previous(),
			false,
		));
	let mut previous = 0;
	for number in page_numbers(page, pagination.total_pages) {
		if number > previous + 1 {
			controls.push_child(
				Element::new("span")
					.class("bx-grid-page-ellipsis")
					.text("..."),
			);
		}
		controls.push_child(page_button(&number.to_string(), number, false, number == page));
		previous = number;
	}
	controls.child(page_button(
		"Next",
		page.saturating_add(1),
		!pagination.has_next(),
		false,
	))
}

/// Pages on either side of the current one that get a numbered button
const PAGE_NEIGHBORS: usize = 2;

/// First page, last page and the pages around `page`, ascending
fn page_numbers(page: usize, total_pages: usize) -> Vec<usize> {
	let low = page.saturating_sub(PAGE_NEIGHBORS).max(1);
	let high = page.saturating_add(PAGE_NEIGHBORS).min(total_pages);
	let mut numbers = Vec::with_capacity(2 * PAGE_NEIGHBORS + 3);
	if total_pages > 0 {
		numbers.push(1);
	}
	numbers.extend((low..=high).filter(|n| *n > 1 && *n < total_pages));
	if total_pages > 1 {
		numbers.push(total_pages);
	}
	numbers
}

fn page_button(label: &str, target: usize, disabled: bool, active: bool) -> Element {
	Element::new("button")
		.attr("type", "button")
		.class("bx-grid-page-btn")
		.class_if(active, "active")
		.attr("data-page", target.to_string())
		.flag("disabled", disabled)
		.text(label)
}
