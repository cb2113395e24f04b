//! Pagination arithmetic shared by the grid renderer and query conversion

use crate::error::{Result, UiError};
use serde::Serialize;

/// Row-range and page-count metadata for one page
///
/// Rows are 1-indexed. A page past the end yields an empty window:
/// `start_row` is reported as computed and `end_row == start_row - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
	/// Number of rows in the source
	pub total_row_count: usize,
	/// Requested page (1-indexed, never clamped)
	pub page: usize,
	/// Rows per page
	pub page_size: usize,
	/// `ceil(total_row_count / page_size)`
	pub total_pages: usize,
	/// First row of the window (1-indexed)
	pub start_row: usize,
	/// Last row of the window (1-indexed, inclusive)
	pub end_row: usize,
}

impl Pagination {
	/// Number of rows in the window
	pub fn len(&self) -> usize {
		self.end_row + 1 - self.start_row
	}

	/// Returns `true` when the window holds no rows
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns `true` when a page precedes this one
	pub fn has_previous(&self) -> bool {
		self.page > 1 && self.total_pages > 0
	}

	/// Returns `true` when a page follows this one
	pub fn has_next(&self) -> bool {
		self.page < self.total_pages
	}

	/// Returns `true` when the requested page lies past the last row
	pub fn is_out_of_range(&self) -> bool {
		self.total_row_count > 0 && self.start_row > self.total_row_count
	}

	/// Slices the window out of the full row set
	pub fn window<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
		let start = (self.start_row - 1).min(rows.len());
		let end = self.end_row.min(rows.len()).max(start);
		&rows[start..end]
	}
}

/// Computes the window for `page` of a `total_row_count` row source
///
/// Fails with [`UiError::InvalidArgument`] when `page` or `page_size` is
/// below 1.
///
/// # Examples
///
/// ```
/// use compat_ui_core::pagination::paginate;
///
/// let p = paginate(10, 2, 3).unwrap();
/// assert_eq!((p.start_row, p.end_row, p.total_pages), (4, 6, 4));
///
/// let past_end = paginate(10, 9, 3).unwrap();
/// assert!(past_end.is_empty());
/// ```
pub fn paginate(total_row_count: usize, page: i64, page_size: i64) -> Result<Pagination> {
	if page_size < 1 {
		return Err(UiError::InvalidArgument(format!(
			"pageSize must be at least 1, got {page_size}"
		)));
	}
	if page < 1 {
		return Err(UiError::InvalidArgument(format!(
			"page must be at least 1, got {page}"
		)));
	}

	let page = usize::try_from(page)
		.map_err(|_| UiError::InvalidArgument(format!("page {page} is out of range")))?;
	let page_size = usize::try_from(page_size)
		.map_err(|_| UiError::InvalidArgument(format!("pageSize {page_size} is out of range")))?;

	let total_pages = if total_row_count == 0 {
		0
	} else {
		total_row_count.div_ceil(page_size)
	};
	let start_row = (page - 1).saturating_mul(page_size).saturating_add(1);
	let end_row = start_row
		.saturating_add(page_size - 1)
		.min(total_row_count)
		.max(start_row - 1);

	Ok(Pagination {
		total_row_count,
		page,
		page_size,
		total_pages,
		start_row,
		end_row,
	})
}
