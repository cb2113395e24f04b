//! Ajax-import markup: stylesheet and script includes for the requested bundles

use crate::frame::ComponentFrame;
use crate::html::Element;
use crate::tags::IMPORT_TAGS;
use compat_ui_conf::UiSettings;
use compat_ui_core::{Result, UiError, ValidatedAttributes};

/// Bundles without a stylesheet
const SCRIPT_ONLY: &[&str] = &["ajaxproxy"];

/// Requested bundles; every bundle when `tags` is absent or blank
///
/// Names are matched case-insensitively and duplicates are dropped.
pub fn requested_tags(attributes: &ValidatedAttributes) -> Result<Vec<&'static str>> {
	let Some(raw) = attributes.get("tags") else {
		return Ok(IMPORT_TAGS.to_vec());
	};
	let mut tags = Vec::new();
	for name in raw.split(',').map(str::trim).filter(|n| !n.is_empty()) {
		let tag = IMPORT_TAGS
			.iter()
			.find(|known| known.eq_ignore_ascii_case(name))
			.ok_or_else(|| UiError::invalid_value("AjaxImport", "tags", IMPORT_TAGS))?;
		if !tags.contains(tag) {
			tags.push(*tag);
		}
	}
	if tags.is_empty() {
		return Ok(IMPORT_TAGS.to_vec());
	}
	Ok(tags)
}

/// Stylesheet root: the `cssSrc` attribute, else the configured default
pub fn css_src<'a>(attributes: &'a ValidatedAttributes, settings: &'a UiSettings) -> &'a str {
	attributes
		.get("cssSrc")
		.unwrap_or(settings.css_src.as_str())
		.trim_end_matches('/')
}

/// Script root: the `scriptSrc` attribute, else the configured default
pub fn script_src<'a>(attributes: &'a ValidatedAttributes, settings: &'a UiSettings) -> &'a str {
	attributes
		.get("scriptSrc")
		.unwrap_or(settings.script_src.as_str())
		.trim_end_matches('/')
}

/// Renders the `<link>` and `<script src>` includes
pub fn render(frame: &ComponentFrame, settings: &UiSettings) -> Result<String> {
	let attributes = &frame.attributes;
	let tags = requested_tags(attributes)?;
	let css = css_src(attributes, settings);
	let js = script_src(attributes, settings);

	let mut output = String::new();
	let stylesheets = std::iter::once("ajax-core")
		.chain(tags.iter().copied().filter(|tag| !SCRIPT_ONLY.contains(tag)));
	for bundle in stylesheets {
		Element::new("link")
			.attr("rel", "stylesheet")
			.attr("type", "text/css")
			.attr("href", format!("{css}/boxlang-{bundle}.css"))
			.render_into(&mut output);
		output.push('\n');
	}
	for bundle in std::iter::once("ajax-core").chain(tags.iter().copied()) {
		Element::new("script")
			.attr("type", "text/javascript")
			.attr("src", format!("{js}/boxlang-{bundle}.js"))
			.render_into(&mut output);
		output.push('\n');
	}
	Ok(output)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tags::TagKind;
	use compat_ui_core::{RawAttributes, validate_all};
	use rstest::rstest;

	fn import(pairs: &[(&str, &str)]) -> ComponentFrame {
		let raw: RawAttributes = pairs.iter().copied().collect();
		let attributes =
			validate_all("AjaxImport", TagKind::AjaxImport.attributes(), &raw).unwrap();
		ComponentFrame::open(TagKind::AjaxImport, "", attributes)
	}

	#[rstest]
	fn test_default_import_includes_every_bundle() {
		let html = render(&import(&[]), &UiSettings::default()).unwrap();
		assert!(html.contains(
			"<link rel=\"stylesheet\" type=\"text/css\" href=\"/bx-compat-ui/css/boxlang-ajax-core.css\" />"
		));
		assert!(html.contains(
			"<script type=\"text/javascript\" src=\"/bx-compat-ui/js/boxlang-ajax-core.js\"></script>"
		));
		for tag in ["layout", "div", "grid", "tooltip", "pod"] {
			assert!(html.contains(&format!("boxlang-{tag}.css")));
			assert!(html.contains(&format!("boxlang-{tag}.js")));
		}
		assert!(html.contains("boxlang-ajaxproxy.js"));
		assert!(!html.contains("boxlang-ajaxproxy.css"));
	}

	#[rstest]
	fn test_specific_tags() {
		let html = render(&import(&[("tags", "layout,grid")]), &UiSettings::default()).unwrap();
		assert!(html.contains("boxlang-layout.css"));
		assert!(html.contains("boxlang-grid.js"));
		assert!(!html.contains("boxlang-div.css"));
		assert!(!html.contains("boxlang-tooltip.css"));
	}

	#[rstest]
	fn test_custom_sources() {
		let html = render(
			&import(&[("cssSrc", "/custom/styles"), ("scriptSrc", "/custom/scripts/")]),
			&UiSettings::default(),
		)
		.unwrap();
		assert!(html.contains("href=\"/custom/styles/boxlang-ajax-core.css\""));
		assert!(html.contains("src=\"/custom/scripts/boxlang-layout.js\""));
	}

	#[rstest]
	#[case("", 6)]
	#[case(" , ", 6)]
	#[case("Grid, grid", 1)]
	fn test_requested_tags(#[case] raw: &str, #[case] expected: usize) {
		let attributes = import(&[("tags", raw)]).attributes;
		assert_eq!(requested_tags(&attributes).unwrap().len(), expected);
	}

	#[rstest]
	fn test_unknown_tag_rejected() {
		let attributes = import(&[("tags", "grid,calendar")]).attributes;
		let err = requested_tags(&attributes).unwrap_err();
		assert!(err.to_string().starts_with("tags attribute must be one of: layout, div"));
	}
}
