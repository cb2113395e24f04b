//! Template helper functions: `ajax_link` and `ajax_on_load`

use crate::script::{ScriptWriter, js_string, script_block, write_dom_ready};
use compat_ui_core::attribute::is_js_identifier;
use compat_ui_core::{Result, UiError};

/// Builds a `javascript:` URL that loads `url` into the enclosing container
///
/// # Examples
///
/// ```
/// use compat_ui_components::functions::ajax_link;
///
/// let href = ajax_link("load.cfm").unwrap();
/// assert!(href.starts_with("javascript:void("));
/// assert!(href.contains("handleAjaxLink('load.cfm', event)"));
/// assert!(ajax_link("  ").is_err());
/// ```
pub fn ajax_link(url: &str) -> Result<String> {
	let url = url.trim();
	if url.is_empty() {
		return Err(UiError::missing_argument("AjaxLink", "url"));
	}
	Ok(format!(
		"javascript:void(BoxLangAjax && BoxLangAjax.utils ? BoxLangAjax.utils.handleAjaxLink({}, event) : console.error('BoxLang AJAX not initialized'))",
		js_string(url)
	))
}

/// Builds a script block that calls `function_name` once the DOM is ready
///
/// The name must be a plain JavaScript identifier; a missing function is
/// reported on the console instead of throwing.
pub fn ajax_on_load(function_name: &str) -> Result<String> {
	let name = function_name.trim();
	if name.is_empty() {
		return Err(UiError::missing_argument("AjaxOnLoad", "functionName"));
	}
	if !is_js_identifier(name) {
		return Err(UiError::InvalidArgument(format!(
			"functionName '{name}' must be a valid JavaScript function name"
		)));
	}

	let mut w = ScriptWriter::new();
	w.open("(function() {")
		.open("function run() {")
		.open(format!("if (typeof {name} === 'function') {{"))
		.line(format!("{name}();"))
		.reopen("} else {")
		.line(format!("console.error('Function {name} is not defined');"))
		.close("}")
		.close("}");
	write_dom_ready(&mut w, "run");
	w.close("})();");
	Ok(script_block(&w.finish()))
}
