//! The component context stack
//!
//! One stack per document render. Child tags look up the *nearest* open frame
//! of the kind they need; an inner container shadows an outer one.

use crate::frame::{ComponentFrame, FrameKind};
use crate::tags::TagKind;
use compat_ui_core::{Result, UiError};

/// Stack of open frames, innermost last
#[derive(Debug, Default)]
pub struct ComponentContext {
	frames: Vec<ComponentFrame>,
}

impl ComponentContext {
	/// Creates an empty stack
	pub fn new() -> Self {
		Self::default()
	}

	/// Pushes a frame
	pub fn push(&mut self, frame: ComponentFrame) {
		tracing::debug!(tag = %frame.tag, id = %frame.id, depth = self.frames.len() + 1, "frame opened");
		self.frames.push(frame);
	}

	/// Pops the innermost frame
	pub fn pop(&mut self) -> Option<ComponentFrame> {
		let frame = self.frames.pop()?;
		tracing::debug!(tag = %frame.tag, id = %frame.id, depth = self.frames.len(), "frame closed");
		Some(frame)
	}

	/// Number of open frames
	pub fn depth(&self) -> usize {
		self.frames.len()
	}

	/// Returns `true` when no frame is open
	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}

	/// Innermost frame
	pub fn current(&self) -> Option<&ComponentFrame> {
		self.frames.last()
	}

	/// Innermost frame, mutably
	pub fn current_mut(&mut self) -> Option<&mut ComponentFrame> {
		self.frames.last_mut()
	}

	/// Nearest open frame of the given kind
	pub fn nearest(&self, kind: FrameKind) -> Option<&ComponentFrame> {
		self.frames.iter().rev().find(|frame| frame.kind() == kind)
	}

	/// Nearest open frame of the given kind, mutably
	pub fn nearest_mut(&mut self, kind: FrameKind) -> Option<&mut ComponentFrame> {
		self.frames.iter_mut().rev().find(|frame| frame.kind() == kind)
	}

	/// Nearest frame able to host `child`, or the nesting error
	///
	/// # Examples
	///
	/// ```
	/// use compat_ui_components::context::ComponentContext;
	/// use compat_ui_components::tags::TagKind;
	///
	/// let mut context = ComponentContext::new();
	/// let err = context.parent_of(TagKind::GridColumn).unwrap_err();
	/// assert_eq!(
	/// 	err.to_string(),
	/// 	"GridColumn component must be used within a Grid component"
	/// );
	/// ```
	pub fn parent_of(&mut self, child: TagKind) -> Result<&mut ComponentFrame> {
		let (parent, kind) = match child.required_parent() {
			Some(TagKind::Grid) => (TagKind::Grid, FrameKind::Grid),
			Some(TagKind::Layout) => (TagKind::Layout, FrameKind::Layout),
			_ => {
				return Err(UiError::InvalidArgument(format!(
					"{child} is not a child tag"
				)));
			}
		};
		self.nearest_mut(kind).ok_or_else(|| {
			UiError::nesting(child.display_name(), parent.display_name())
		})
	}

	/// Display names of the open tags, outermost first
	pub fn open_tags(&self) -> Vec<String> {
		self.frames
			.iter()
			.map(|frame| frame.tag.display_name().to_string())
			.collect()
	}
}
