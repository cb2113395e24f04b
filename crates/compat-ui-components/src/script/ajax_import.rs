//! The `window.BoxLangAjax` bootstrap emitted by ajax-import

use super::{ScriptWriter, js_string, script_block, write_dom_ready};

const UTILITIES: &str = r#"BoxLangAjax.utils.escapeHtml = function(text) {
    const holder = document.createElement('div');
    holder.textContent = String(text);
    return holder.innerHTML;
};

BoxLangAjax.utils.fetchContent = async function(url, options = {}) {
    const fetchOptions = Object.assign({ method: 'GET' }, options);
    fetchOptions.headers = Object.assign({ 'X-Requested-With': 'XMLHttpRequest' }, options.headers || {});
    const response = await fetch(url, fetchOptions);
    if (!response.ok) {
        throw new Error('HTTP ' + response.status + ': ' + response.statusText);
    }
    return response.text();
};

BoxLangAjax.utils.loadIntoContainer = function(containerId, url, options) {
    const container = document.getElementById(containerId);
    if (!container) {
        console.error('Container not found: ' + containerId);
        return Promise.resolve();
    }
    container.innerHTML = '<div class="bx-loading">Loading...</div>';
    return BoxLangAjax.utils.fetchContent(url, options)
        .then(function(content) {
            container.innerHTML = content;
            container.dispatchEvent(new CustomEvent('boxlang-content-loaded', { bubbles: true, detail: { url: url } }));
        })
        .catch(function(error) {
            container.innerHTML = '<div class="bx-error">Error loading content: ' + BoxLangAjax.utils.escapeHtml(error.message) + '</div>';
        });
};

BoxLangAjax.utils.handleAjaxLink = function(url, event) {
    if (event) {
        event.preventDefault();
    }
    let currentElement = event && event.target ? event.target.parentElement : null;
    while (currentElement) {
        if (currentElement.classList.contains('bx-layout') || currentElement.classList.contains('bx-div') || currentElement.classList.contains('bx-pod')) {
            break;
        }
        currentElement = currentElement.parentElement;
    }
    const target = currentElement || document.querySelector('.bx-layout, .bx-div, .bx-pod, [id]');
    if (!target) {
        window.location.href = url;
        return;
    }
    if (!target.id) {
        target.id = 'bx_ajax_' + Date.now();
    }
    BoxLangAjax.utils.loadIntoContainer(target.id, url);
};"#;

/// Emits the bootstrap script with the resolved asset roots and parameters
pub fn ajax_import_script(
	css_src: &str,
	script_src: &str,
	version: &str,
	params: &[(&str, &str)],
) -> String {
	let mut w = ScriptWriter::new();
	w.open("window.BoxLangAjax = window.BoxLangAjax || {")
		.line(format!("version: {},", js_string(version)))
		.open("config: {")
		.line(format!("cssSrc: {},", js_string(css_src)))
		.line(format!("scriptSrc: {}", js_string(script_src)))
		.close("},")
		.line("utils: {}")
		.close("};");
	w.line("BoxLangAjax.config = BoxLangAjax.config || {};");
	w.line("BoxLangAjax.utils = BoxLangAjax.utils || {};");
	w.line("");
	w.line("BoxLangAjax.config.params = {};");
	for (key, value) in params {
		w.line(format!(
			"BoxLangAjax.config.params[{}] = {};",
			js_string(key),
			js_string(value)
		));
	}
	w.line("");
	w.block(UTILITIES);
	w.line("");
	w.open("BoxLangAjax.init = function() {")
		.line("console.log('BoxLang AJAX initialized');")
		.close("};");
	write_dom_ready(&mut w, "BoxLangAjax.init");
	script_block(&w.finish())
}

/// Parses `k=v,k2=v2`; entries without `=` or with a blank key are skipped
pub fn parse_params(raw: &str) -> Vec<(&str, &str)> {
	raw.split(',')
		.filter_map(|pair| pair.split_once('='))
		.map(|(key, value)| (key.trim(), value.trim()))
		.filter(|(key, _)| !key.is_empty())
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_bootstrap_namespace() {
		let script = ajax_import_script("/bx-compat-ui/css", "/bx-compat-ui/js", "1.0.0", &[]);
		assert!(script.contains("window.BoxLangAjax = window.BoxLangAjax ||"));
		assert!(script.contains("version: '1.0.0'"));
		assert!(script.contains("cssSrc: '/bx-compat-ui/css'"));
		assert!(script.contains("scriptSrc: '/bx-compat-ui/js'"));
		assert!(script.contains("utils: {}"));
		assert!(script.contains("BoxLangAjax.config.params = {}"));
		assert!(script.contains("if (document.readyState === 'loading')"));
		assert!(script.contains("document.addEventListener('DOMContentLoaded'"));
		assert!(script.contains("console.log('BoxLang AJAX initialized')"));
	}

	#[rstest]
	fn test_utilities_present() {
		let script = ajax_import_script("/c", "/j", "1.0.0", &[]);
		for needle in [
			"BoxLangAjax.utils.fetchContent = async function",
			"const response = await fetch(url, fetchOptions)",
			"BoxLangAjax.utils.loadIntoContainer = function",
			"const container = document.getElementById(containerId)",
			"container.innerHTML = '<div class=\"bx-loading\">Loading...</div>'",
			"container.innerHTML = content",
			"boxlang-content-loaded",
			"'<div class=\"bx-error\">Error loading content: '",
			"handleAjaxLink = function(url, event)",
			"event.preventDefault()",
			"currentElement.classList.contains('bx-pod')",
			"document.querySelector('.bx-layout, .bx-div, .bx-pod, [id]')",
		] {
			assert!(script.contains(needle), "missing {needle}");
		}
	}

	#[rstest]
	fn test_params_assigned() {
		let params = parse_params("googlemapkey=ABC123,apikey=XYZ789");
		let script = ajax_import_script("/c", "/j", "1.0.0", &params);
		assert!(script.contains("BoxLangAjax.config.params['googlemapkey'] = 'ABC123'"));
		assert!(script.contains("BoxLangAjax.config.params['apikey'] = 'XYZ789'"));
	}

	#[rstest]
	#[case("a=1, b = 2", vec![("a", "1"), ("b", "2")])]
	#[case("novalue,=x,k=", vec![("k", "")])]
	#[case("", vec![])]
	fn test_parse_params(#[case] raw: &str, #[case] expected: Vec<(&str, &str)>) {
		assert_eq!(parse_params(raw), expected);
	}
}
