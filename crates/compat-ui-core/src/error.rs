//! Error types for compat-ui
//!
//! Every failure is raised synchronously while a tag is validated, before any
//! markup for that tag is produced. The display text of each variant is part
//! of the public contract: hosts surface it verbatim to template authors.

use thiserror::Error;

/// Error type for tag validation and rendering
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
	/// A required attribute was absent or blank
	#[error("{attribute} attribute is required for {tag}")]
	MissingRequiredAttribute {
		/// Display name of the tag (e.g. `Grid`)
		tag: String,
		/// Attribute name as declared
		attribute: String,
	},

	/// An attribute value was outside its enumerated set
	#[error("{attribute} attribute must be one of: {}", .allowed.join(", "))]
	InvalidAttributeValue {
		/// Display name of the tag
		tag: String,
		/// Attribute name as declared
		attribute: String,
		/// The allowed values, in declaration order
		allowed: Vec<String>,
	},

	/// An attribute value could not be read as the declared type
	#[error("{attribute} attribute of {tag} must be {expected}")]
	InvalidAttributeType {
		/// Display name of the tag
		tag: String,
		/// Attribute name as declared
		attribute: String,
		/// Human readable description of the expected shape
		expected: String,
	},

	/// A child tag was used without a live parent frame
	#[error("{child} component must be used within a {parent} component")]
	InvalidNesting {
		/// Display name of the child tag
		child: String,
		/// Display name of the required parent tag
		parent: String,
	},

	/// Two inputs were supplied that cannot be combined
	#[error("{tag} {message}")]
	ConflictingAttributes {
		/// Display name of the tag
		tag: String,
		/// Description of the conflict
		message: String,
	},

	/// None of an either/or attribute group was supplied
	#[error("{message}")]
	MissingAttributeGroup {
		/// Display name of the tag
		tag: String,
		/// Full description of the acceptable combinations
		message: String,
	},

	/// A utility function was called without a required argument
	#[error("{argument} parameter is required for {function}")]
	MissingArgument {
		/// Function name (e.g. `QueryConvertForGrid`)
		function: String,
		/// Argument name
		argument: String,
	},

	/// An argument was present but unusable
	#[error("{0}")]
	InvalidArgument(String),

	/// The host invoked a tag this crate does not know
	#[error("Unknown tag: {0}")]
	UnknownTag(String),

	/// The host closed a tag other than the innermost open one
	#[error("Tag {found} was closed while {expected} is still open")]
	UnbalancedTag {
		/// Innermost open tag
		expected: String,
		/// Tag the host tried to close
		found: String,
	},

	/// The document finished with frames still open
	#[error("Document finished with unclosed tags: {}", .0.join(", "))]
	UnclosedTags(Vec<String>),
}

impl UiError {
	/// Builds an [`UiError::InvalidAttributeValue`] from a static allowed list
	pub fn invalid_value(tag: &str, attribute: &str, allowed: &[&str]) -> Self {
		Self::InvalidAttributeValue {
			tag: tag.to_string(),
			attribute: attribute.to_string(),
			allowed: allowed.iter().map(|v| (*v).to_string()).collect(),
		}
	}

	/// Builds an [`UiError::MissingRequiredAttribute`]
	pub fn missing_attribute(tag: &str, attribute: &str) -> Self {
		Self::MissingRequiredAttribute {
			tag: tag.to_string(),
			attribute: attribute.to_string(),
		}
	}

	/// Builds an [`UiError::InvalidNesting`]
	pub fn nesting(child: &str, parent: &str) -> Self {
		Self::InvalidNesting {
			child: child.to_string(),
			parent: parent.to_string(),
		}
	}

	/// Builds an [`UiError::MissingArgument`]
	pub fn missing_argument(function: &str, argument: &str) -> Self {
		Self::MissingArgument {
			function: function.to_string(),
			argument: argument.to_string(),
		}
	}
}

/// Result type for compat-ui operations
pub type Result<T> = std::result::Result<T, UiError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_missing_attribute_message() {
		let err = UiError::missing_attribute("Grid", "name");
		assert_eq!(err.to_string(), "name attribute is required for Grid");
	}

	#[rstest]
	fn test_invalid_value_lists_allowed_set() {
		let err = UiError::invalid_value("Grid", "selectMode", &["none", "single", "multi"]);
		assert_eq!(
			err.to_string(),
			"selectMode attribute must be one of: none, single, multi"
		);
	}

	#[rstest]
	fn test_nesting_message() {
		let err = UiError::nesting("GridColumn", "Grid");
		assert_eq!(
			err.to_string(),
			"GridColumn component must be used within a Grid component"
		);
	}

	#[rstest]
	fn test_missing_argument_message() {
		let err = UiError::missing_argument("AjaxLink", "url");
		assert_eq!(err.to_string(), "url parameter is required for AjaxLink");
	}

	#[rstest]
	fn test_unclosed_tags_message() {
		let err = UiError::UnclosedTags(vec!["Grid".into(), "Layout".into()]);
		assert_eq!(
			err.to_string(),
			"Document finished with unclosed tags: Grid, Layout"
		);
	}
}
