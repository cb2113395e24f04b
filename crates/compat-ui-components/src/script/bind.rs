//! Request code for bind expressions
//!
//! The descriptor decides the request shape: a `FormData` POST to the proxy
//! endpoint for component calls, a GET for URLs, and a warning stub for
//! anything else.

use super::{ScriptWriter, js_string};
use compat_ui_core::BindDescriptor;
use compat_ui_core::escape::escape_js;

/// Writes the request for `descriptor`
///
/// `on_success` is called with the parsed response as `result`; `on_error`
/// is called with the error message and the error object. Both must name
/// functions visible at the call site.
pub fn write_bind_request(
	w: &mut ScriptWriter,
	expression: &str,
	descriptor: &BindDescriptor,
	proxy_endpoint: &str,
	on_success: &str,
	on_error: &str,
) {
	match descriptor {
		BindDescriptor::CfcCall {
			component_path,
			method_name,
			params,
		} => {
			w.line(format!("// Execute bind expression: {}", escape_js(expression)));
			w.open("{");
			w.line("const formData = new FormData();");
			w.line(format!(
				"formData.append('method', {});",
				js_string(method_name)
			));
			w.line(format!(
				"formData.append('cfc', {});",
				js_string(component_path)
			));
			for param in params {
				let name = js_string(param);
				w.line(format!("formData.append({name}, {name});"));
			}
			w.open(format!("fetch({}, {{", js_string(proxy_endpoint)))
				.line("method: 'POST',")
				.line("body: formData,")
				.line("headers: { 'X-Requested-With': 'XMLHttpRequest' }")
				.close("})");
			write_response_chain(w, on_success, on_error);
			w.close("}");
		}
		BindDescriptor::Url { url } => {
			w.line(format!("// Execute bind expression: {}", escape_js(expression)));
			w.open(format!("fetch({}, {{", js_string(url)))
				.line("method: 'GET',")
				.line("headers: { 'X-Requested-With': 'XMLHttpRequest' }")
				.close("})");
			write_response_chain(w, on_success, on_error);
		}
		BindDescriptor::Generic { raw } => {
			let raw = escape_js(raw);
			w.line(format!("// Generic bind handler for: {raw}"));
			w.line(format!(
				"console.warn('Bind expression not fully supported: {raw}');"
			));
		}
	}
}

fn write_response_chain(w: &mut ScriptWriter, on_success: &str, on_error: &str) {
	w.indented(|w| {
		w.open(".then(function(response) {")
			.open("if (!response.ok) {")
			.line("throw new Error('HTTP ' + response.status + ': ' + response.statusText);")
			.close("}")
			.line("const contentType = response.headers.get('content-type') || '';")
			.line("return contentType.includes('application/json') ? response.json() : response.text();")
			.close("})")
			.open(".then(function(result) {")
			.line(format!("{on_success}(result);"))
			.close("})")
			.open(".catch(function(error) {")
			.line(format!("{on_error}(error.message, error);"))
			.close("});");
	});
}

#[cfg(test)]
mod tests {
	use super::*;
	use compat_ui_core::bind::parse;
	use rstest::rstest;

	fn emit(expression: &str) -> String {
		let mut w = ScriptWriter::new();
		write_bind_request(
			&mut w,
			expression,
			&parse(expression),
			"/bx-compat-ui/ajaxproxy",
			"handleSuccess",
			"handleError",
		);
		w.finish()
	}

	#[rstest]
	fn test_cfc_call_posts_form_data() {
		let script = emit("cfc:mycomponent.getData(param1,param2)");
		assert!(script.contains("// Execute bind expression: cfc:mycomponent.getData(param1,param2)"));
		assert!(script.contains("formData.append('method', 'getData')"));
		assert!(script.contains("formData.append('cfc', 'mycomponent')"));
		assert!(script.contains("formData.append('param1', 'param1')"));
		assert!(script.contains("formData.append('param2', 'param2')"));
		assert!(script.contains("fetch('/bx-compat-ui/ajaxproxy', {"));
		assert!(script.contains("handleSuccess(result)"));
		assert!(script.contains("handleError(error.message"));
	}

	#[rstest]
	fn test_url_bind_uses_get() {
		let script = emit("url:/api/data");
		assert!(script.contains("fetch('/api/data', {"));
		assert!(script.contains("method: 'GET'"));
		assert!(!script.contains("FormData"));
	}

	#[rstest]
	fn test_generic_bind_only_warns() {
		let script = emit("javascript:myFunction()");
		assert!(script.contains("// Generic bind handler for: javascript:myFunction()"));
		assert!(script.contains(
			"console.warn('Bind expression not fully supported: javascript:myFunction()');"
		));
		assert!(!script.contains("fetch("));
	}
}
