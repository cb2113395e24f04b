//! Bind expression parsing
//!
//! A bind expression names a remote data source in a compact form:
//!
//! - `cfc:path.to.component.method(param1, param2)` calls a server component
//! - `url:/some/path`, `/some/path` or `https://host/path` fetches a URL
//! - anything else is kept verbatim as [`BindDescriptor::Generic`]
//!
//! Parsing never fails. Unsupported syntax degrades to `Generic` so the
//! emitted script can still carry a visible warning.

/// Structured form of a bind expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindDescriptor {
	/// `cfc:<component>.<method>(<params>)`
	CfcCall {
		/// Dotted component path, everything before the last `.`
		component_path: String,
		/// Method name, everything after the last `.`
		method_name: String,
		/// Parameter names in declaration order
		params: Vec<String>,
	},
	/// A URL to fetch
	Url {
		/// The URL with any `url:` prefix removed
		url: String,
	},
	/// Anything the parser does not understand
	Generic {
		/// The expression as given
		raw: String,
	},
}

impl BindDescriptor {
	/// Returns `true` for [`BindDescriptor::Generic`]
	pub fn is_generic(&self) -> bool {
		matches!(self, Self::Generic { .. })
	}
}

/// Parses a bind expression
///
/// # Examples
///
/// ```
/// use compat_ui_core::bind::{BindDescriptor, parse};
///
/// assert_eq!(
/// 	parse("cfc:mycomponent.getData(param1,param2)"),
/// 	BindDescriptor::CfcCall {
/// 		component_path: "mycomponent".into(),
/// 		method_name: "getData".into(),
/// 		params: vec!["param1".into(), "param2".into()],
/// 	}
/// );
/// assert_eq!(
/// 	parse("url:/api/data"),
/// 	BindDescriptor::Url { url: "/api/data".into() }
/// );
/// ```
pub fn parse(expr: &str) -> BindDescriptor {
	let trimmed = expr.trim();

	if let Some(call) = trimmed.strip_prefix("cfc:") {
		return parse_cfc_call(call).unwrap_or_else(|| generic(expr));
	}

	if let Some(url) = trimmed.strip_prefix("url:") {
		return BindDescriptor::Url {
			url: url.trim().to_string(),
		};
	}

	if trimmed.contains('/') || trimmed.starts_with("http") {
		return BindDescriptor::Url {
			url: trimmed.to_string(),
		};
	}

	generic(expr)
}

fn generic(expr: &str) -> BindDescriptor {
	tracing::warn!(expression = expr, "bind expression is not fully supported");
	BindDescriptor::Generic {
		raw: expr.to_string(),
	}
}

// `path.method(a, b)` -> CfcCall, None when the shape is wrong
fn parse_cfc_call(call: &str) -> Option<BindDescriptor> {
	let open = call.find('(')?;
	let args = call[open + 1..].strip_suffix(')')?;
	let (component_path, method_name) = call[..open].trim().rsplit_once('.')?;

	if component_path.is_empty() || method_name.is_empty() {
		return None;
	}

	let params = args
		.split(',')
		.map(str::trim)
		.filter(|p| !p.is_empty())
		.map(str::to_string)
		.collect();

	Some(BindDescriptor::CfcCall {
		component_path: component_path.to_string(),
		method_name: method_name.to_string(),
		params,
	})
}
