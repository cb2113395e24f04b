//! Tabular data sources and the query-to-grid conversion

use compat_ui_core::{Result, UiError, paginate};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One record, keyed by column name in column order
pub type Row = IndexMap<String, Value>;

/// An ordered set of records with a declared column list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Query {
	/// Column names in display order
	pub columns: Vec<String>,
	/// Records in source order
	pub rows: Vec<Row>,
}

impl Query {
	/// Creates an empty query with the given columns
	pub fn new<I, S>(columns: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			columns: columns.into_iter().map(Into::into).collect(),
			rows: Vec::new(),
		}
	}

	/// Appends a record, adding any column the query does not know yet
	pub fn push_row(&mut self, row: Row) {
		for key in row.keys() {
			if !self.columns.iter().any(|c| c.eq_ignore_ascii_case(key)) {
				self.columns.push(key.clone());
			}
		}
		self.rows.push(row);
	}

	/// Builder form of [`Query::push_row`]
	pub fn with_row(mut self, row: Row) -> Self {
		self.push_row(row);
		self
	}

	/// Number of records
	pub fn len(&self) -> usize {
		self.rows.len()
	}

	/// Returns `true` when there are no records
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}
}

/// Looks up a column value, falling back to a case-insensitive match
pub fn cell<'a>(row: &'a Row, column: &str) -> Option<&'a Value> {
	row.get(column).or_else(|| {
		row.iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(column))
			.map(|(_, value)| value)
	})
}

/// Display text of a cell value
pub fn cell_text(value: Option<&Value>) -> String {
	match value {
		None | Some(Value::Null) => String::new(),
		Some(Value::String(s)) => s.clone(),
		Some(Value::Bool(b)) => b.to_string(),
		Some(Value::Number(n)) => n.to_string(),
		Some(other) => other.to_string(),
	}
}

/// Paged view of a query, as returned to the host
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridQueryResult {
	#[serde(rename = "TOTALROWCOUNT")]
	pub total_row_count: usize,
	#[serde(rename = "PAGE")]
	pub page: usize,
	#[serde(rename = "PAGESIZE")]
	pub page_size: usize,
	#[serde(rename = "TOTALPAGES")]
	pub total_pages: usize,
	#[serde(rename = "STARTROW")]
	pub start_row: usize,
	#[serde(rename = "ENDROW")]
	pub end_row: usize,
	/// The records of the requested page
	#[serde(rename = "ROWS")]
	pub rows: Query,
}

/// Slices one page out of a query for grid display
///
/// Every argument is required; a page past the end yields an empty `ROWS`.
///
/// # Examples
///
/// ```
/// use compat_ui_components::query::{Query, Row, query_convert_for_grid};
/// use serde_json::json;
///
/// let mut query = Query::new(["id"]);
/// for id in 1..=10 {
/// 	let mut row = Row::new();
/// 	row.insert("id".into(), json!(id));
/// 	query.push_row(row);
/// }
///
/// let page = query_convert_for_grid(Some(&query), Some(2), Some(3)).unwrap();
/// assert_eq!((page.start_row, page.end_row, page.total_pages), (4, 6, 4));
/// assert_eq!(page.rows.len(), 3);
/// ```
pub fn query_convert_for_grid(
	query: Option<&Query>,
	page: Option<i64>,
	page_size: Option<i64>,
) -> Result<GridQueryResult> {
	const FUNCTION: &str = "QueryConvertForGrid";

	let query = query.ok_or_else(|| UiError::missing_argument(FUNCTION, "query"))?;
	let page = page.ok_or_else(|| UiError::missing_argument(FUNCTION, "page"))?;
	let page_size = page_size.ok_or_else(|| UiError::missing_argument(FUNCTION, "pageSize"))?;

	let pagination = paginate(query.len(), page, page_size)?;

	Ok(GridQueryResult {
		total_row_count: pagination.total_row_count,
		page: pagination.page,
		page_size: pagination.page_size,
		total_pages: pagination.total_pages,
		start_row: pagination.start_row,
		end_row: pagination.end_row,
		rows: Query {
			columns: query.columns.clone(),
			rows: pagination.window(&query.rows).to_vec(),
		},
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};
	use serde_json::json;

	#[fixture]
	fn people() -> Query {
		let mut query = Query::new(["id", "name", "email"]);
		for (id, name) in [(1, "John Doe"), (2, "Jane Smith"), (3, "Bob Johnson")] {
			let mut row = Row::new();
			row.insert("id".into(), json!(id));
			row.insert("name".into(), json!(name));
			row.insert("email".into(), json!(format!("{}@example.com", id)));
			query.push_row(row);
		}
		query
	}

	#[rstest]
	fn test_basic_conversion(people: Query) {
		let result = query_convert_for_grid(Some(&people), Some(1), Some(2)).unwrap();
		assert_eq!(result.total_row_count, 3);
		assert_eq!(result.page, 1);
		assert_eq!(result.page_size, 2);
		assert_eq!(result.total_pages, 2);
		assert_eq!(result.rows.len(), 2);
	}

	#[rstest]
	fn test_serializes_uppercase_keys(people: Query) {
		let result = query_convert_for_grid(Some(&people), Some(2), Some(2)).unwrap();
		let value = serde_json::to_value(&result).unwrap();
		assert_eq!(value["TOTALROWCOUNT"], json!(3));
		assert_eq!(value["STARTROW"], json!(3));
		assert_eq!(value["ENDROW"], json!(3));
		assert_eq!(value["ROWS"]["rows"][0]["name"], json!("Bob Johnson"));
	}

	#[rstest]
	#[case(None, Some(1), Some(10), "query")]
	#[case(Some(()), None, Some(10), "page")]
	#[case(Some(()), Some(1), None, "pageSize")]
	fn test_missing_arguments(
		people: Query,
		#[case] query: Option<()>,
		#[case] page: Option<i64>,
		#[case] page_size: Option<i64>,
		#[case] argument: &str,
	) {
		let err = query_convert_for_grid(query.map(|_| &people), page, page_size).unwrap_err();
		assert_eq!(
			err,
			UiError::missing_argument("QueryConvertForGrid", argument)
		);
	}

	#[rstest]
	fn test_push_row_extends_columns() {
		let mut row = Row::new();
		row.insert("extra".into(), json!(true));
		let query = Query::new(["id"]).with_row(row);
		assert_eq!(query.columns, vec!["id".to_string(), "extra".to_string()]);
	}

	#[rstest]
	fn test_cell_lookup_ignores_case() {
		let mut row = Row::new();
		row.insert("Name".into(), json!("Ada"));
		assert_eq!(cell_text(cell(&row, "name")), "Ada");
		assert_eq!(cell_text(cell(&row, "missing")), "");
	}
}
