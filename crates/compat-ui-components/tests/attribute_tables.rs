//! Enumerated attributes of every tag table reject values outside their set

use compat_ui_components::TagKind;
use compat_ui_core::{AttributeSpec, RawAttributes, UiError, validate_all};
use proptest::prelude::*;
use rstest::rstest;

const TAGS: &[TagKind] = &[
	TagKind::Grid,
	TagKind::GridColumn,
	TagKind::GridRow,
	TagKind::GridUpdate,
	TagKind::Layout,
	TagKind::LayoutArea,
	TagKind::Pod,
	TagKind::Div,
	TagKind::AjaxProxy,
	TagKind::AjaxImport,
];

/// Every (tag, enumerated attribute) pair
fn enumerated() -> Vec<(TagKind, &'static AttributeSpec)> {
	TAGS.iter()
		.flat_map(|tag| {
			tag.attributes()
				.iter()
				.filter(|spec| spec.allowed.is_some())
				.map(move |spec| (*tag, spec))
		})
		.collect()
}

/// Valid values for every required attribute of `tag`
fn required_attributes(tag: TagKind) -> RawAttributes {
	tag.attributes()
		.iter()
		.filter(|spec| spec.required)
		.map(|spec| {
			let value = spec
				.allowed
				.and_then(|allowed| allowed.first().copied())
				.unwrap_or("value");
			(spec.name, value)
		})
		.collect()
}

fn assert_rejected(tag: TagKind, spec: &AttributeSpec, value: &str) {
	// Arrange
	let mut raw = required_attributes(tag);
	raw.insert(spec.name, value);
	let allowed = spec.allowed.unwrap_or_default();

	// Act
	let err = validate_all(tag.display_name(), tag.attributes(), &raw).unwrap_err();

	// Assert
	assert_eq!(
		err,
		UiError::invalid_value(tag.display_name(), spec.name, allowed),
		"{tag}.{} accepted {value:?}",
		spec.name
	);
	assert_eq!(
		err.to_string(),
		format!("{} attribute must be one of: {}", spec.name, allowed.join(", "))
	);
}

#[rstest]
fn test_every_table_declares_enumerations() {
	let pairs = enumerated();
	for expected in [
		(TagKind::Grid, "selectMode"),
		(TagKind::GridColumn, "dataAlign"),
		(TagKind::GridColumn, "headerAlign"),
		(TagKind::GridColumn, "type"),
		(TagKind::GridUpdate, "method"),
		(TagKind::Layout, "type"),
		(TagKind::LayoutArea, "overflow"),
		(TagKind::Pod, "overflow"),
		(TagKind::Div, "tagName"),
	] {
		assert!(
			pairs.iter().any(|(tag, spec)| (*tag, spec.name) == expected),
			"{expected:?} is not enumerated"
		);
	}
}

#[rstest]
fn test_required_attributes_alone_are_valid() {
	for tag in TAGS {
		let raw = required_attributes(*tag);
		assert!(
			validate_all(tag.display_name(), tag.attributes(), &raw).is_ok(),
			"{tag} rejects its minimal attributes"
		);
	}
}

#[rstest]
fn test_allowed_values_are_accepted() {
	for (tag, spec) in enumerated() {
		for value in spec.allowed.unwrap_or_default() {
			let mut raw = required_attributes(tag);
			raw.insert(spec.name, *value);
			let validated = validate_all(tag.display_name(), tag.attributes(), &raw).unwrap();
			assert_eq!(validated.get(spec.name), Some(*value));
		}
	}
}

proptest! {
	#[test]
	fn test_values_outside_the_set_are_rejected(
		index in 0usize..64,
		value in "[a-zA-Z][a-zA-Z0-9_-]{0,15}",
	) {
		let pairs = enumerated();
		let (tag, spec) = pairs[index % pairs.len()];
		prop_assume!(!spec.allowed.unwrap_or_default().contains(&value.as_str()));
		assert_rejected(tag, spec, &value);
	}
}
