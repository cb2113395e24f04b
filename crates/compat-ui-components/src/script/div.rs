//! Div behavior: bind-driven content loading

use super::bind::write_bind_request;
use super::events::{BIND_ERROR, BIND_SUCCESS};
use super::{component_script, js_string, write_fire_helper, write_handler_call, write_resolve_helper};
use crate::frame::ComponentFrame;
use compat_ui_core::bind;

/// Emits the script block of a bound div; `None` without a `bind` attribute
pub fn div_script(frame: &ComponentFrame, proxy_endpoint: &str) -> Option<String> {
	let expression = frame.attributes.get("bind")?;
	let descriptor = bind::parse(expression);
	let bind_on_load = frame.attributes.flag_or("bindOnLoad", true);
	let on_bind_error = frame.attributes.get("onBindError");
	let quoted = js_string(expression);

	Some(component_script(&frame.id, "divElement", |w| {
		write_resolve_helper(w);
		write_fire_helper(w, "divElement");
		w.open("function handleSuccess(result) {")
			.line("divElement.innerHTML = typeof result === 'string' ? result : JSON.stringify(result);")
			.line(format!(
				"fire('{BIND_SUCCESS}', {{ bind: {quoted}, result: result }});"
			))
			.close("}")
			.open("function handleError(message, error) {")
			.line("const notice = document.createElement('div');")
			.line("notice.className = 'bx-error';")
			.line("notice.textContent = message;")
			.line("divElement.replaceChildren(notice);")
			.line(format!(
				"fire('{BIND_ERROR}', {{ bind: {quoted}, message: message }});"
			))
			.call(|w| write_handler_call(w, on_bind_error, "message, error"))
			.close("}")
			.open("function executeBind() {")
			.call(|w| {
				write_bind_request(
					w,
					expression,
					&descriptor,
					proxy_endpoint,
					"handleSuccess",
					"handleError",
				)
			})
			.close("}")
			.line("divElement.executeBind = executeBind;");
		if bind_on_load {
			w.line("executeBind();");
		}
	}))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tags::TagKind;
	use compat_ui_core::{RawAttributes, validate_all};
	use rstest::rstest;

	fn frame(pairs: &[(&str, &str)]) -> ComponentFrame {
		let raw: RawAttributes = pairs.iter().copied().collect();
		let attributes = validate_all("Div", TagKind::Div.attributes(), &raw).unwrap();
		ComponentFrame::open(TagKind::Div, "manualDiv", attributes)
	}

	#[rstest]
	fn test_bound_div_script() {
		let script = div_script(
			&frame(&[("bind", "url:/api/data"), ("onBindError", "handleError")]),
			"/bx-compat-ui/ajaxproxy",
		)
		.unwrap();
		assert!(script.contains("function executeBind()"));
		assert!(script.contains("divElement.executeBind = executeBind"));
		assert!(script.contains("fetch('/api/data'"));
		assert!(script.contains("bindSuccess"));
		assert!(script.contains("bindError"));
		assert!(script.contains("resolve('handleError')"));
		assert!(script.contains("    executeBind();"));
	}

	#[rstest]
	fn test_manual_bind_is_not_executed() {
		let script = div_script(
			&frame(&[("bind", "cfc:test.getData()"), ("bindOnLoad", "false")]),
			"/bx-compat-ui/ajaxproxy",
		)
		.unwrap();
		assert!(script.contains("divElement.executeBind = executeBind;\n"));
		assert!(!script.contains("        executeBind();"));
	}

	#[rstest]
	fn test_unbound_div_has_no_script() {
		assert!(div_script(&frame(&[("id", "x")]), "/p").is_none());
	}
}
