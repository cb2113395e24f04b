//! Component frames: the per-instance state of an open tag

use crate::query::{Query, Row};
use crate::tags::TagKind;
use compat_ui_core::ValidatedAttributes;

/// Container kind used for child lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
	/// Accepts grid columns and grid rows
	Grid,
	/// Accepts layout areas
	Layout,
	/// Accepts no children
	None,
}

/// A grid column registered with its grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridColumn {
	/// Column name, matched against row keys
	pub name: String,
	/// Validated column attributes
	pub attributes: ValidatedAttributes,
}

impl GridColumn {
	/// Header text; the column name when no header is given
	pub fn header(&self) -> &str {
		self.attributes.get("header").unwrap_or(&self.name)
	}

	/// Whether the column is rendered at all
	pub fn is_displayed(&self) -> bool {
		self.attributes.flag_or("display", true)
	}
}

/// A layout area registered with its layout, body included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutArea {
	/// Element id, given or generated
	pub id: String,
	/// Registration position within the layout
	pub index: usize,
	/// Validated area attributes
	pub attributes: ValidatedAttributes,
	/// Rendered body of the area
	pub content: String,
}

impl LayoutArea {
	/// Tab or panel title
	pub fn title(&self) -> Option<&str> {
		self.attributes.get("title")
	}

	/// Border position
	pub fn position(&self) -> Option<&str> {
		self.attributes.get("position")
	}
}

/// A child registered into a container frame
#[derive(Debug, Clone, PartialEq)]
pub enum ChildDescriptor {
	Column(GridColumn),
	Row(Row),
	Area(LayoutArea),
}

/// One open tag instance
///
/// Opened on tag start, populated while the body executes, consumed by the
/// renderer on tag end.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentFrame {
	/// The tag this frame belongs to
	pub tag: TagKind,
	/// Element id (empty for tags without an addressable root)
	pub id: String,
	/// Validated attributes
	pub attributes: ValidatedAttributes,
	/// Registered children, in registration order
	pub children: Vec<ChildDescriptor>,
	/// Body output collected while the frame was innermost
	pub body: String,
	/// Whether the host declared a body for this invocation
	pub has_body: bool,
	/// Tabular data supplied with a `grid` tag
	pub query: Option<Query>,
	/// Record supplied with a `gridrow` tag
	pub row: Option<Row>,
}

impl ComponentFrame {
	/// Opens a frame for a validated tag
	pub fn open(tag: TagKind, id: impl Into<String>, attributes: ValidatedAttributes) -> Self {
		Self {
			tag,
			id: id.into(),
			attributes,
			children: Vec::new(),
			body: String::new(),
			has_body: false,
			query: None,
			row: None,
		}
	}

	/// Attaches a query
	pub fn with_query(mut self, query: Query) -> Self {
		self.query = Some(query);
		self
	}

	/// Container kind of this frame
	pub fn kind(&self) -> FrameKind {
		match self.tag {
			TagKind::Grid => FrameKind::Grid,
			TagKind::Layout => FrameKind::Layout,
			_ => FrameKind::None,
		}
	}

	/// Appends a child
	pub fn register(&mut self, child: ChildDescriptor) {
		self.children.push(child);
	}

	/// Registered grid columns
	pub fn columns(&self) -> impl Iterator<Item = &GridColumn> {
		self.children.iter().filter_map(|child| match child {
			ChildDescriptor::Column(column) => Some(column),
			_ => None,
		})
	}

	/// Registered grid rows
	pub fn rows(&self) -> impl Iterator<Item = &Row> {
		self.children.iter().filter_map(|child| match child {
			ChildDescriptor::Row(row) => Some(row),
			_ => None,
		})
	}

	/// Registered layout areas
	pub fn areas(&self) -> impl Iterator<Item = &LayoutArea> {
		self.children.iter().filter_map(|child| match child {
			ChildDescriptor::Area(area) => Some(area),
			_ => None,
		})
	}

	/// Number of registered layout areas
	pub fn area_count(&self) -> usize {
		self.areas().count()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(TagKind::Grid, FrameKind::Grid)]
	#[case(TagKind::Layout, FrameKind::Layout)]
	#[case(TagKind::Pod, FrameKind::None)]
	#[case(TagKind::LayoutArea, FrameKind::None)]
	fn test_frame_kind(#[case] tag: TagKind, #[case] kind: FrameKind) {
		let frame = ComponentFrame::open(tag, "x", ValidatedAttributes::default());
		assert_eq!(frame.kind(), kind);
	}

	#[rstest]
	fn test_children_keep_registration_order() {
		let mut frame = ComponentFrame::open(TagKind::Grid, "grid_1", ValidatedAttributes::default());
		for name in ["b", "a", "c"] {
			frame.register(ChildDescriptor::Column(GridColumn {
				name: name.into(),
				attributes: ValidatedAttributes::default(),
			}));
		}
		frame.register(ChildDescriptor::Row(Row::new()));

		let names: Vec<_> = frame.columns().map(|c| c.name.as_str()).collect();
		assert_eq!(names, vec!["b", "a", "c"]);
		assert_eq!(frame.rows().count(), 1);
		assert_eq!(frame.area_count(), 0);
	}

	#[rstest]
	fn test_column_header_defaults_to_name() {
		let column = GridColumn {
			name: "username".into(),
			attributes: ValidatedAttributes::default(),
		};
		assert_eq!(column.header(), "username");
		assert!(column.is_displayed());
	}
}
