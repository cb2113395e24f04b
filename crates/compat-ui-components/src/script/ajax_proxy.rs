//! Ajax-proxy script: a client class forwarding method calls to the proxy endpoint

use super::bind::write_bind_request;
use super::events::{BIND_ERROR, BIND_SUCCESS};
use super::{ScriptWriter, js_string, script_block};
use crate::frame::ComponentFrame;
use compat_ui_core::attribute::is_js_identifier;
use compat_ui_core::{Result, UiError, ValidatedAttributes, bind};

/// Resolves the JavaScript class name of a proxy
///
/// An explicit `jsclassname` wins; otherwise the last dotted segment of
/// `cfc` is used and must itself be a valid identifier. `None` when the tag
/// only carries a bind expression.
pub fn class_name(attributes: &ValidatedAttributes) -> Result<Option<String>> {
	if let Some(explicit) = attributes.get("jsclassname") {
		return Ok(Some(explicit.to_string()));
	}
	let Some(cfc) = attributes.get("cfc") else {
		return Ok(None);
	};
	let derived = cfc.rsplit('.').next().unwrap_or(cfc);
	if !is_js_identifier(derived) {
		return Err(UiError::InvalidAttributeType {
			tag: "AjaxProxy".to_string(),
			attribute: "jsclassname".to_string(),
			expected: "a valid JavaScript identifier".to_string(),
		});
	}
	Ok(Some(derived.to_string()))
}

/// Splits the `methods` list, rejecting names that cannot be JavaScript methods
pub fn method_names(attributes: &ValidatedAttributes) -> Result<Vec<&str>> {
	let Some(methods) = attributes.get("methods") else {
		return Ok(Vec::new());
	};
	methods
		.split(',')
		.map(str::trim)
		.filter(|name| !name.is_empty())
		.map(|name| {
			if is_js_identifier(name) {
				Ok(name)
			} else {
				Err(UiError::InvalidAttributeType {
					tag: "AjaxProxy".to_string(),
					attribute: "methods".to_string(),
					expected: "a comma separated list of JavaScript identifiers".to_string(),
				})
			}
		})
		.collect()
}

/// Emits the proxy script block
pub fn ajax_proxy_script(frame: &ComponentFrame, proxy_endpoint: &str) -> Result<String> {
	let attributes = &frame.attributes;
	let mut w = ScriptWriter::new();
	w.open("(function() {");

	if let (Some(cfc), Some(class)) = (attributes.get("cfc"), class_name(attributes)?) {
		write_proxy_class(&mut w, &class, cfc, proxy_endpoint, &method_names(attributes)?);
	}

	if let Some(expression) = attributes.get("bind") {
		let on_success = attributes.get("onSuccess");
		let on_error = attributes.get("onError");
		if on_success.is_none() {
			w.open("function handleSuccess(result) {")
				.line(format!(
					"document.dispatchEvent(new CustomEvent('{BIND_SUCCESS}', {{ detail: {{ bind: {}, result: result }} }}));",
					js_string(expression)
				))
				.close("}");
		}
		if on_error.is_none() {
			w.open("function handleError(message, error) {")
				.line("console.error('Bind request failed: ' + message, error);")
				.line(format!(
					"document.dispatchEvent(new CustomEvent('{BIND_ERROR}', {{ detail: {{ bind: {}, message: message }} }}));",
					js_string(expression)
				))
				.close("}");
		}
		write_bind_request(
			&mut w,
			expression,
			&bind::parse(expression),
			proxy_endpoint,
			on_success.unwrap_or("handleSuccess"),
			on_error.unwrap_or("handleError"),
		);
	}

	w.close("})();");
	Ok(script_block(&w.finish()))
}

fn write_proxy_class(
	w: &mut ScriptWriter,
	class: &str,
	cfc: &str,
	proxy_endpoint: &str,
	methods: &[&str],
) {
	w.open(format!("class {class} {{"))
		.open("constructor() {")
		.line(format!("this.cfcPath = {};", js_string(cfc)))
		.line(format!("this.endpoint = {};", js_string(proxy_endpoint)))
		.close("}")
		.line("")
		.open("async callMethod(methodName, args = {}) {")
		.line("const url = this.endpoint;")
		.line("const formData = new FormData();")
		.line("formData.append('method', methodName);")
		.line("formData.append('cfc', this.cfcPath);")
		.open("Object.keys(args).forEach(function(key) {")
		.line("const value = args[key];")
		.line("formData.append(key, typeof value === 'object' ? JSON.stringify(value) : value);")
		.close("});")
		.open("const response = await fetch(url, {")
		.line("method: 'POST',")
		.line("body: formData,")
		.line("headers: { 'X-Requested-With': 'XMLHttpRequest' }")
		.close("});")
		.open("if (!response.ok) {")
		.line("throw new Error('HTTP ' + response.status + ': ' + response.statusText);")
		.close("}")
		.line("const contentType = response.headers.get('content-type') || '';")
		.line("return contentType.includes('application/json') ? response.json() : response.text();")
		.close("}");
	for method in methods {
		w.line("")
			.open(format!("{method}(args = {{}}) {{"))
			.line(format!("return this.callMethod('{method}', args);"))
			.close("}");
	}
	w.close("}");
	w.line(format!("window.{class} = new {class}();"));
}
