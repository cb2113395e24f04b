//! Escaping for HTML text, HTML attributes and JavaScript string literals

use std::borrow::Cow;

/// Escapes text for use between HTML tags
pub fn escape_html(input: &str) -> Cow<'_, str> {
	html_escape::encode_text(input)
}

/// Escapes text for use inside a double-quoted HTML attribute
///
/// # Examples
///
/// ```
/// use compat_ui_core::escape::escape_attr;
///
/// assert_eq!(escape_attr(r#"a "b" & c"#), "a &quot;b&quot; &amp; c");
/// assert_eq!(escape_attr("/api/pod-content"), "/api/pod-content");
/// ```
pub fn escape_attr(input: &str) -> Cow<'_, str> {
	html_escape::encode_double_quoted_attribute(input)
}

/// Escapes text for use inside a single- or double-quoted JavaScript string
///
/// Angle brackets are hex-escaped so a value can never close the enclosing
/// `<script>` element. Slashes are left alone to keep URLs readable.
///
/// # Examples
///
/// ```
/// use compat_ui_core::escape::escape_js;
///
/// assert_eq!(escape_js("it's"), r"it\'s");
/// assert_eq!(escape_js("</script>"), r"\x3C/script\x3E");
/// assert_eq!(escape_js("/api/data"), "/api/data");
/// ```
pub fn escape_js(input: &str) -> Cow<'_, str> {
	if !input.contains(['\\', '\'', '"', '\n', '\r', '\t', '<', '>']) {
		return Cow::Borrowed(input);
	}

	let mut escaped = String::with_capacity(input.len() + 8);
	for c in input.chars() {
		match c {
			'\\' => escaped.push_str("\\\\"),
			'\'' => escaped.push_str("\\'"),
			'"' => escaped.push_str("\\\""),
			'\n' => escaped.push_str("\\n"),
			'\r' => escaped.push_str("\\r"),
			'\t' => escaped.push_str("\\t"),
			'<' => escaped.push_str("\\x3C"),
			'>' => escaped.push_str("\\x3E"),
			_ => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}
