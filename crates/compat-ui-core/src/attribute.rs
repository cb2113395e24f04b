//! Attribute specifications and validation
//!
//! Each tag declares a static table of [`AttributeSpec`]s. A spec carries both
//! the validation rule (required flag, enumerated values, value type) and the
//! rendering transform applied to the validated value ([`Mapping`]), so the
//! renderer never has to dispatch on attribute names at runtime.
//!
//! Attribute *names* are matched case-insensitively, as template authors write
//! `selectMode`, `selectmode` and `SELECTMODE` interchangeably. Attribute
//! *values* are matched exactly.

use crate::error::{Result, UiError};
use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

static IDENTIFIER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("IDENTIFIER_REGEX: invalid regex pattern")
});

// Dotted member paths such as `app.handlers.onSort`.
static HANDLER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*(\.[A-Za-z_$][A-Za-z0-9_$]*)*$")
		.expect("HANDLER_REGEX: invalid regex pattern")
});

/// Returns `true` when `name` is a plain JavaScript identifier
///
/// # Examples
///
/// ```
/// use compat_ui_core::attribute::is_js_identifier;
///
/// assert!(is_js_identifier("_init_app_$"));
/// assert!(!is_js_identifier("123func"));
/// assert!(!is_js_identifier("my-function"));
/// ```
pub fn is_js_identifier(name: &str) -> bool {
	IDENTIFIER_REGEX.is_match(name)
}

/// Returns `true` when `name` is an identifier or a dotted member path
pub fn is_handler_name(name: &str) -> bool {
	HANDLER_REGEX.is_match(name)
}

/// Shape an attribute value must have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
	/// Any string
	Text,
	/// `true`/`false` (also `yes`/`no`, `1`/`0`), normalized to `true`/`false`
	Boolean,
	/// An integer greater than zero
	PositiveInteger,
	/// A plain JavaScript identifier
	Identifier,
	/// A JavaScript identifier or dotted member path naming a function
	Handler,
}

impl ValueType {
	fn expectation(&self) -> &'static str {
		match self {
			Self::Text => "text",
			Self::Boolean => "a boolean (true or false)",
			Self::PositiveInteger => "a positive integer",
			Self::Identifier => "a valid JavaScript identifier",
			Self::Handler => "a valid JavaScript function name",
		}
	}

	fn normalize(&self, value: &str) -> Option<String> {
		match self {
			Self::Text => Some(value.to_string()),
			Self::Boolean => match value.to_ascii_lowercase().as_str() {
				"true" | "yes" | "1" => Some("true".to_string()),
				"false" | "no" | "0" => Some("false".to_string()),
				_ => None,
			},
			Self::PositiveInteger => value
				.parse::<u64>()
				.ok()
				.filter(|n| *n >= 1)
				.map(|n| n.to_string()),
			Self::Identifier => is_js_identifier(value).then(|| value.to_string()),
			Self::Handler => is_handler_name(value).then(|| value.to_string()),
		}
	}
}

/// How a validated attribute surfaces on the rendered root element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mapping {
	/// Not rendered generically; the tag renderer consumes it directly
	None,
	/// Rendered as an inline style declaration, value verbatim
	Style(&'static str),
	/// Rendered as a `data-*` attribute, value verbatim
	Data(&'static str),
	/// Boolean: adds `class` when true, and always renders `data` when given
	Flag {
		/// CSS class added when the flag is true
		class: &'static str,
		/// Optional `data-*` attribute carrying the normalized value
		data: Option<&'static str>,
	},
	/// Boolean: adds a fixed style declaration when true
	StyleFlag {
		/// CSS property
		property: &'static str,
		/// CSS value
		value: &'static str,
	},
	/// Adds `<prefix><value>` as a CSS class
	ClassPrefix(&'static str),
}

/// Declaration of a single tag attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSpec {
	/// Canonical attribute name
	pub name: &'static str,
	/// Whether the attribute must be present and non-blank
	pub required: bool,
	/// Enumerated values, matched exactly
	pub allowed: Option<&'static [&'static str]>,
	/// Value shape
	pub value_type: ValueType,
	/// Value used when the attribute is absent
	pub default: Option<&'static str>,
	/// Rendering transform
	pub mapping: Mapping,
}

impl AttributeSpec {
	/// Declares an optional text attribute
	pub const fn optional(name: &'static str) -> Self {
		Self {
			name,
			required: false,
			allowed: None,
			value_type: ValueType::Text,
			default: None,
			mapping: Mapping::None,
		}
	}

	/// Declares a required text attribute
	pub const fn required(name: &'static str) -> Self {
		Self {
			required: true,
			..Self::optional(name)
		}
	}

	/// Restricts the value to an enumerated set
	pub const fn one_of(self, allowed: &'static [&'static str]) -> Self {
		Self {
			allowed: Some(allowed),
			..self
		}
	}

	/// Declares the value as a boolean
	pub const fn boolean(self) -> Self {
		Self {
			value_type: ValueType::Boolean,
			..self
		}
	}

	/// Declares the value as a positive integer
	pub const fn positive_integer(self) -> Self {
		Self {
			value_type: ValueType::PositiveInteger,
			..self
		}
	}

	/// Declares the value as a JavaScript identifier
	pub const fn identifier(self) -> Self {
		Self {
			value_type: ValueType::Identifier,
			..self
		}
	}

	/// Declares the value as a JavaScript function reference
	pub const fn handler(self) -> Self {
		Self {
			value_type: ValueType::Handler,
			..self
		}
	}

	/// Sets the default value
	pub const fn default_value(self, value: &'static str) -> Self {
		Self {
			default: Some(value),
			..self
		}
	}

	/// Renders the value as an inline style property
	pub const fn style(self, property: &'static str) -> Self {
		Self {
			mapping: Mapping::Style(property),
			..self
		}
	}

	/// Renders the value as a `data-*` attribute
	pub const fn data(self, attribute: &'static str) -> Self {
		Self {
			mapping: Mapping::Data(attribute),
			..self
		}
	}

	/// Renders a boolean as a CSS class plus an optional `data-*` attribute
	pub const fn flag(self, class: &'static str, data: Option<&'static str>) -> Self {
		Self {
			value_type: ValueType::Boolean,
			mapping: Mapping::Flag { class, data },
			..self
		}
	}

	/// Renders a boolean as a fixed style declaration
	pub const fn style_flag(self, property: &'static str, value: &'static str) -> Self {
		Self {
			value_type: ValueType::Boolean,
			mapping: Mapping::StyleFlag { property, value },
			..self
		}
	}

	/// Renders the value as a prefixed CSS class
	pub const fn class_prefix(self, prefix: &'static str) -> Self {
		Self {
			mapping: Mapping::ClassPrefix(prefix),
			..self
		}
	}
}

/// Outcome of validating one attribute: the trimmed (or defaulted) value
pub type ValidationResult = Result<Option<String>>;

/// Validates a single attribute value against its spec
///
/// Blank optional values are treated as absent, so the default applies and no
/// enumerated check runs.
///
/// # Examples
///
/// ```
/// use compat_ui_core::attribute::{AttributeSpec, validate};
///
/// const SELECT_MODE: AttributeSpec =
/// 	AttributeSpec::optional("selectMode").one_of(&["none", "single", "multi"]);
///
/// assert_eq!(validate(&SELECT_MODE, Some(" multi "), "Grid").unwrap(), Some("multi".into()));
/// assert!(validate(&SELECT_MODE, Some("Multi"), "Grid").is_err());
/// assert_eq!(validate(&SELECT_MODE, None, "Grid").unwrap(), None);
/// ```
pub fn validate(spec: &AttributeSpec, raw: Option<&str>, tag: &str) -> ValidationResult {
	let value = raw.map(str::trim).filter(|v| !v.is_empty());

	let Some(value) = value else {
		if spec.required {
			return Err(UiError::missing_attribute(tag, spec.name));
		}
		return Ok(spec.default.map(str::to_string));
	};

	if let Some(allowed) = spec.allowed {
		if !allowed.contains(&value) {
			return Err(UiError::invalid_value(tag, spec.name, allowed));
		}
	}

	let normalized =
		spec.value_type
			.normalize(value)
			.ok_or_else(|| UiError::InvalidAttributeType {
				tag: tag.to_string(),
				attribute: spec.name.to_string(),
				expected: spec.value_type.expectation().to_string(),
			})?;

	tracing::trace!(tag, attribute = spec.name, value = %normalized, "attribute accepted");
	Ok(Some(normalized))
}

/// Raw attribute map as supplied by the host, with case-insensitive lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawAttributes {
	// lowercased name -> (name as written, value)
	entries: IndexMap<String, (String, String)>,
}

impl RawAttributes {
	/// Creates an empty attribute map
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts an attribute, replacing any earlier value with the same name
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
		let name = name.into();
		self.entries
			.insert(name.to_ascii_lowercase(), (name, value.into()));
	}

	/// Looks up a value by name, ignoring ASCII case
	pub fn get(&self, name: &str) -> Option<&str> {
		self.entries
			.get(&name.to_ascii_lowercase())
			.map(|(_, value)| value.as_str())
	}

	/// Iterates `(name as written, value)` pairs in insertion order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries
			.values()
			.map(|(name, value)| (name.as_str(), value.as_str()))
	}

	/// Number of attributes
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` when no attribute was supplied
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl<K, V> FromIterator<(K, V)> for RawAttributes
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut attributes = Self::new();
		for (name, value) in iter {
			attributes.insert(name, value);
		}
		attributes
	}
}

/// Attribute values that passed validation, keyed by canonical name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedAttributes {
	values: IndexMap<&'static str, String>,
	passthrough: Vec<(String, String)>,
}

impl ValidatedAttributes {
	/// Returns the value of an attribute
	pub fn get(&self, name: &str) -> Option<&str> {
		self.values.get(name).map(String::as_str)
	}

	/// Returns `true` when the attribute holds a value
	pub fn contains(&self, name: &str) -> bool {
		self.values.contains_key(name)
	}

	/// Reads a boolean attribute; absent reads as `false`
	pub fn flag(&self, name: &str) -> bool {
		self.get(name) == Some("true")
	}

	/// Reads a boolean attribute with an explicit fallback
	pub fn flag_or(&self, name: &str, fallback: bool) -> bool {
		self.get(name).map_or(fallback, |v| v == "true")
	}

	/// Reads a positive integer attribute
	pub fn integer(&self, name: &str) -> Option<u64> {
		self.get(name).and_then(|v| v.parse().ok())
	}

	/// Validated values in declaration order
	pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
		self.values.iter().map(|(name, value)| (*name, value.as_str()))
	}

	/// `data-*` attributes supplied by the caller, as written
	pub fn passthrough(&self) -> &[(String, String)] {
		&self.passthrough
	}

	/// Sets a value directly, bypassing validation
	///
	/// Used by renderers for attribute aliases (e.g. `multirowselect`).
	pub fn set(&mut self, name: &'static str, value: impl Into<String>) {
		self.values.insert(name, value.into());
	}
}

/// Validates every declared attribute of a tag, in declaration order
///
/// The first failure is returned; nothing is partially accepted. Caller
/// supplied `data-*` attributes are kept for passthrough rendering and any
/// other undeclared attribute is ignored.
pub fn validate_all(
	tag: &str,
	specs: &[AttributeSpec],
	raw: &RawAttributes,
) -> Result<ValidatedAttributes> {
	let mut validated = ValidatedAttributes::default();

	for spec in specs {
		if let Some(value) = validate(spec, raw.get(spec.name), tag)? {
			validated.values.insert(spec.name, value);
		}
	}

	for (name, value) in raw.iter() {
		if specs.iter().any(|spec| spec.name.eq_ignore_ascii_case(name)) {
			continue;
		}
		if name.len() > 5 && name.get(..5).is_some_and(|p| p.eq_ignore_ascii_case("data-")) {
			validated
				.passthrough
				.push((name.to_ascii_lowercase(), value.to_string()));
		} else {
			tracing::warn!(tag, attribute = name, "ignoring undeclared attribute");
		}
	}

	Ok(validated)
}
