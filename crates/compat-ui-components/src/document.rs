//! The tag engine: start/end callbacks driving one rendered document
//!
//! A host template engine reports each tag invocation to a [`Document`]:
//! [`Document::on_start`] validates and opens a frame, body output goes
//! through [`Document::write`], and [`Document::on_end`] renders the frame
//! and appends the fragment to the enclosing frame or the document.
//!
//! # Examples
//!
//! ```
//! use compat_ui_components::document::{Document, TagInvocation};
//! use compat_ui_conf::UiSettings;
//!
//! let mut document = Document::new(UiSettings::default());
//! document
//! 	.on_start(TagInvocation::new("grid").attribute("name", "myGrid").with_body())
//! 	.unwrap();
//! document
//! 	.on_start(TagInvocation::new("gridcolumn").attribute("name", "id"))
//! 	.unwrap();
//! document.on_end("gridcolumn").unwrap();
//! document.on_end("grid").unwrap();
//!
//! let html = document.finish().unwrap();
//! assert!(html.contains("data-name=\"myGrid\""));
//! assert!(html.contains("data-column=\"id\""));
//! ```

use crate::context::ComponentContext;
use crate::frame::{ChildDescriptor, ComponentFrame, FrameKind, GridColumn, LayoutArea};
use crate::functions;
use crate::markup;
use crate::query::{Query, Row};
use crate::script;
use crate::tags::{BORDER_POSITIONS, TagKind};
use compat_ui_conf::{IdStrategy, UiSettings};
use compat_ui_core::{
	IdGenerator, RandomIdGenerator, RawAttributes, Result, SequentialIdGenerator, UiError,
	ValidatedAttributes, validate_all,
};
use tracing::{debug, warn};

/// Typed values a host passes alongside string attributes
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
	/// Data source of a `grid`
	Query(Query),
	/// Record of a `gridrow`
	Row(Row),
}

/// One tag start as reported by the host
#[derive(Debug, Clone, PartialEq)]
pub struct TagInvocation {
	name: String,
	attributes: RawAttributes,
	has_body: bool,
	payload: Option<Payload>,
}

impl TagInvocation {
	/// Starts an invocation of `name` (`grid-column`, `GridColumn` and `gridcolumn` are equal)
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			attributes: RawAttributes::new(),
			has_body: false,
			payload: None,
		}
	}

	/// Adds one attribute
	pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attributes.insert(name, value);
		self
	}

	/// Replaces the attribute map
	pub fn attributes(mut self, attributes: RawAttributes) -> Self {
		self.attributes = attributes;
		self
	}

	/// Declares that the tag has a body
	pub fn with_body(mut self) -> Self {
		self.has_body = true;
		self
	}

	/// Attaches a grid data source
	pub fn query(mut self, query: Query) -> Self {
		self.payload = Some(Payload::Query(query));
		self
	}

	/// Attaches a grid row record
	pub fn row(mut self, row: Row) -> Self {
		self.payload = Some(Payload::Row(row));
		self
	}
}

/// One document render: its own frame stack, id generator and output
#[derive(Debug)]
pub struct Document {
	settings: UiSettings,
	ids: Box<dyn IdGenerator>,
	context: ComponentContext,
	output: String,
}

impl Document {
	/// Creates a document using the id strategy from `settings`
	pub fn new(settings: UiSettings) -> Self {
		let ids: Box<dyn IdGenerator> = match settings.id_strategy {
			IdStrategy::Sequential => Box::new(SequentialIdGenerator::new()),
			IdStrategy::Random => Box::new(RandomIdGenerator),
		};
		Self::with_id_generator(settings, ids)
	}

	/// Creates a document with an explicit id generator
	pub fn with_id_generator(settings: UiSettings, ids: Box<dyn IdGenerator>) -> Self {
		Self {
			settings,
			ids,
			context: ComponentContext::new(),
			output: String::new(),
		}
	}

	/// Settings this document renders with
	pub fn settings(&self) -> &UiSettings {
		&self.settings
	}

	/// Output produced so far by closed top-level tags
	pub fn output(&self) -> &str {
		&self.output
	}

	/// Validates a tag start and opens its frame
	///
	/// Nothing is pushed when validation fails.
	pub fn on_start(&mut self, invocation: TagInvocation) -> Result<()> {
		let kind = TagKind::parse(&invocation.name)?;
		let tag = kind.display_name();
		// nesting is reported before any attribute error
		if kind.required_parent().is_some() {
			self.context.parent_of(kind)?;
		}
		let mut attributes = validate_all(tag, kind.attributes(), &invocation.attributes)?;

		if kind == TagKind::LayoutArea {
			let parent = self.context.parent_of(kind)?;
			check_border_position(parent, &attributes)?;
		}
		check_start(kind, &mut attributes)?;

		let id = match kind.id_prefix() {
			Some(prefix) => match attributes.get("id") {
				Some(id) => id.to_string(),
				None => self.ids.next_id(prefix),
			},
			None => String::new(),
		};

		let mut frame = ComponentFrame::open(kind, id, attributes);
		frame.has_body = invocation.has_body;
		match (kind, invocation.payload) {
			(TagKind::Grid, Some(Payload::Query(query))) => frame.query = Some(query),
			(TagKind::GridRow, Some(Payload::Row(row))) => frame.row = Some(row),
			(TagKind::GridRow, _) => return Err(UiError::missing_attribute(tag, "data")),
			(_, Some(_)) => warn!(tag, "ignoring payload the tag does not accept"),
			(_, None) => {}
		}

		self.context.push(frame);
		Ok(())
	}

	/// Appends body output to the innermost open frame, or to the document
	pub fn write(&mut self, text: &str) {
		match self.context.current_mut() {
			Some(frame) => frame.body.push_str(text),
			None => self.output.push_str(text),
		}
	}

	/// Closes the innermost frame and renders it
	///
	/// Child tags register with their parent instead of producing output.
	pub fn on_end(&mut self, name: &str) -> Result<()> {
		let kind = TagKind::parse(name)?;
		match self.context.current() {
			Some(frame) if frame.tag == kind => {}
			Some(frame) => {
				return Err(UiError::UnbalancedTag {
					expected: frame.tag.display_name().to_string(),
					found: kind.display_name().to_string(),
				});
			}
			None => {
				return Err(UiError::UnbalancedTag {
					expected: "(none)".to_string(),
					found: kind.display_name().to_string(),
				});
			}
		}
		let Some(frame) = self.context.pop() else {
			return Ok(());
		};

		check_end(&frame)?;
		if discards_body(&frame) && !frame.body.trim().is_empty() {
			warn!(
				tag = kind.display_name(),
				id = %frame.id,
				bytes = frame.body.len(),
				"discarding body output"
			);
		}

		match kind {
			TagKind::GridColumn => {
				let parent = self.context.parent_of(kind)?;
				let name = frame.attributes.get("name").unwrap_or_default().to_string();
				parent.register(ChildDescriptor::Column(GridColumn {
					name,
					attributes: frame.attributes,
				}));
				Ok(())
			}
			TagKind::GridRow => {
				let parent = self.context.parent_of(kind)?;
				if let Some(row) = frame.row {
					parent.register(ChildDescriptor::Row(row));
				}
				Ok(())
			}
			TagKind::LayoutArea => {
				let parent = self.context.parent_of(kind)?;
				let index = parent.area_count();
				parent.register(ChildDescriptor::Area(LayoutArea {
					id: frame.id,
					index,
					attributes: frame.attributes,
					content: frame.body,
				}));
				Ok(())
			}
			_ => {
				let mut fragment = markup::render(&frame, &self.settings)?;
				if let Some(script) = script::emit(&frame, &self.settings)? {
					fragment.push_str(&script);
				}
				debug!(tag = kind.display_name(), id = %frame.id, bytes = fragment.len(), "rendered fragment");
				self.write(&fragment);
				Ok(())
			}
		}
	}

	/// Appends a script that calls `function_name` once the page is ready
	pub fn ajax_on_load(&mut self, function_name: &str) -> Result<()> {
		let script = functions::ajax_on_load(function_name)?;
		debug!(function = function_name.trim(), bytes = script.len(), "rendered on-load script");
		self.write(&script);
		Ok(())
	}

	/// Returns the rendered document
	///
	/// Fails with [`UiError::UnclosedTags`] while any frame is still open.
	pub fn finish(self) -> Result<String> {
		if !self.context.is_empty() {
			return Err(UiError::UnclosedTags(self.context.open_tags()));
		}
		Ok(self.output)
	}
}

/// Border layouts only accept the five border positions
fn check_border_position(parent: &ComponentFrame, attributes: &ValidatedAttributes) -> Result<()> {
	debug_assert_eq!(parent.kind(), FrameKind::Layout);
	if parent.attributes.get("type") != Some("border") {
		return Ok(());
	}
	match attributes.get("position") {
		Some(position) if !BORDER_POSITIONS.contains(&position) => Err(UiError::invalid_value(
			TagKind::LayoutArea.display_name(),
			"position",
			BORDER_POSITIONS,
		)),
		_ => Ok(()),
	}
}

/// Cross-attribute rules checked when a tag starts
fn check_start(kind: TagKind, attributes: &mut ValidatedAttributes) -> Result<()> {
	let tag = kind.display_name();
	match kind {
		TagKind::Grid => {
			if attributes.flag("multirowselect") {
				attributes.set("selectMode", "multi");
			}
		}
		TagKind::GridUpdate => {
			let database = attributes.contains("dataSource") && attributes.contains("tableName");
			if !database && !attributes.contains("url") {
				return Err(UiError::MissingAttributeGroup {
					tag: tag.to_string(),
					message: "GridUpdate requires either dataSource+tableName for database updates or url for HTTP updates".to_string(),
				});
			}
		}
		TagKind::AjaxProxy => {
			if !attributes.contains("cfc") && !attributes.contains("bind") {
				return Err(UiError::MissingAttributeGroup {
					tag: tag.to_string(),
					message: "Either cfc or bind attribute is required for AjaxProxy".to_string(),
				});
			}
			script::ajax_proxy::class_name(attributes)?;
			script::ajax_proxy::method_names(attributes)?;
		}
		TagKind::AjaxImport => {
			markup::ajax_import::requested_tags(attributes)?;
		}
		_ => {}
	}
	Ok(())
}

/// Rules that depend on the collected body
fn check_end(frame: &ComponentFrame) -> Result<()> {
	if frame.tag == TagKind::Div
		&& frame.attributes.contains("bind")
		&& !frame.body.trim().is_empty()
	{
		return Err(UiError::ConflictingAttributes {
			tag: TagKind::Div.display_name().to_string(),
			message: "cannot have body content when the bind attribute is specified".to_string(),
		});
	}
	Ok(())
}

/// Whether the tag's renderer ignores body output
fn discards_body(frame: &ComponentFrame) -> bool {
	match frame.tag {
		TagKind::Grid
		| TagKind::GridColumn
		| TagKind::GridRow
		| TagKind::AjaxProxy
		| TagKind::AjaxImport => true,
		TagKind::Pod | TagKind::LayoutArea => frame.attributes.contains("source"),
		TagKind::Layout | TagKind::GridUpdate | TagKind::Div => false,
	}
}
