//! UI settings
//!
//! Settings can be built in code, loaded from a TOML or JSON file, and then
//! overridden from `COMPAT_UI_*` environment variables.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How auto-generated element ids are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
	/// Per-prefix counters (`grid_1`, `grid_2`); reproducible
	#[default]
	Sequential,
	/// Short random tokens derived from a v4 uuid
	Random,
}

impl std::str::FromStr for IdStrategy {
	type Err = SettingsError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"sequential" => Ok(Self::Sequential),
			"random" => Ok(Self::Random),
			other => Err(SettingsError::ValidationError(format!(
				"id_strategy must be one of: sequential, random (got {other})"
			))),
		}
	}
}

/// Rendering settings shared by every tag of a document
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiSettings {
	/// Base path of the stylesheet assets
	#[serde(default = "default_css_src")]
	pub css_src: String,

	/// Base path of the script assets
	#[serde(default = "default_script_src")]
	pub script_src: String,

	/// Endpoint receiving grid-update database requests
	#[serde(default = "default_grid_update_endpoint")]
	pub grid_update_endpoint: String,

	/// Endpoint receiving remote component calls
	#[serde(default = "default_proxy_endpoint")]
	pub proxy_endpoint: String,

	/// Version reported by the client bootstrap
	#[serde(default = "default_version")]
	pub version: String,

	/// Id generation strategy
	#[serde(default)]
	pub id_strategy: IdStrategy,
}

fn default_css_src() -> String {
	"/bx-compat-ui/css".to_string()
}

fn default_script_src() -> String {
	"/bx-compat-ui/js".to_string()
}

fn default_grid_update_endpoint() -> String {
	"/bx-compat-ui/gridupdate".to_string()
}

fn default_proxy_endpoint() -> String {
	"/bx-compat-ui/ajaxproxy".to_string()
}

fn default_version() -> String {
	"1.0.0".to_string()
}

impl Default for UiSettings {
	fn default() -> Self {
		Self {
			css_src: default_css_src(),
			script_src: default_script_src(),
			grid_update_endpoint: default_grid_update_endpoint(),
			proxy_endpoint: default_proxy_endpoint(),
			version: default_version(),
			id_strategy: IdStrategy::default(),
		}
	}
}

impl UiSettings {
	/// Create new settings with defaults
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the id strategy
	pub fn with_id_strategy(mut self, strategy: IdStrategy) -> Self {
		self.id_strategy = strategy;
		self
	}

	/// Validate settings
	///
	/// Asset paths must be non-empty; endpoints must be absolute paths or
	/// `http(s)` URLs.
	pub fn validate(&self) -> Result<(), SettingsError> {
		for (field, value) in [("css_src", &self.css_src), ("script_src", &self.script_src)] {
			if value.trim().is_empty() {
				return Err(SettingsError::ValidationError(format!(
					"{field} must not be empty"
				)));
			}
		}

		for (field, value) in [
			("grid_update_endpoint", &self.grid_update_endpoint),
			("proxy_endpoint", &self.proxy_endpoint),
		] {
			if !(value.starts_with('/')
				|| value.starts_with("http://")
				|| value.starts_with("https://"))
			{
				return Err(SettingsError::ValidationError(format!(
					"{field} must be an absolute path or an http(s) URL, got '{value}'"
				)));
			}
		}

		if self.version.trim().is_empty() {
			return Err(SettingsError::ValidationError(
				"version must not be empty".to_string(),
			));
		}

		Ok(())
	}

	/// Parse settings from a TOML document
	pub fn from_toml_str(contents: &str) -> Result<Self, SettingsError> {
		toml::from_str(contents)
			.map_err(|e| SettingsError::ParseError(format!("TOML parse error: {}", e)))
	}

	/// Load settings from a `.toml` or `.json` file
	pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
		let path = path.into();
		let contents = std::fs::read_to_string(&path).map_err(|e| {
			SettingsError::FileError(format!("Failed to read {}: {}", path.display(), e))
		})?;

		let settings = match path.extension().and_then(|s| s.to_str()) {
			Some("toml") => Self::from_toml_str(&contents)?,
			Some("json") => serde_json::from_str(&contents)
				.map_err(|e| SettingsError::ParseError(format!("JSON parse error: {}", e)))?,
			_ => {
				return Err(SettingsError::UnsupportedFormat(
					"Supported formats: .toml, .json".to_string(),
				));
			}
		};

		tracing::debug!(path = %path.display(), "loaded ui settings");
		Ok(settings)
	}

	/// Load settings from defaults plus environment variables
	pub fn from_env() -> Result<Self, SettingsError> {
		Self::default().with_env_overrides()
	}

	/// Applies `COMPAT_UI_*` environment variables on top of these settings
	pub fn with_env_overrides(self) -> Result<Self, SettingsError> {
		self.with_overrides_from(|key| std::env::var(key).ok())
	}

	/// Applies overrides read through `lookup`, keyed by environment variable name
	pub fn with_overrides_from(
		mut self,
		lookup: impl Fn(&str) -> Option<String>,
	) -> Result<Self, SettingsError> {
		if let Some(value) = lookup("COMPAT_UI_CSS_SRC") {
			self.css_src = value;
		}
		if let Some(value) = lookup("COMPAT_UI_SCRIPT_SRC") {
			self.script_src = value;
		}
		if let Some(value) = lookup("COMPAT_UI_GRID_UPDATE_ENDPOINT") {
			self.grid_update_endpoint = value;
		}
		if let Some(value) = lookup("COMPAT_UI_PROXY_ENDPOINT") {
			self.proxy_endpoint = value;
		}
		if let Some(value) = lookup("COMPAT_UI_ID_STRATEGY") {
			self.id_strategy = value.parse()?;
		}
		Ok(self)
	}
}

/// Settings error
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("File error: {0}")]
	FileError(String),

	#[error("Parse error: {0}")]
	ParseError(String),

	#[error("Validation error: {0}")]
	ValidationError(String),

	#[error("Unsupported format: {0}")]
	UnsupportedFormat(String),
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::collections::HashMap;

	#[rstest]
	fn test_defaults() {
		let settings = UiSettings::default();
		assert_eq!(settings.css_src, "/bx-compat-ui/css");
		assert_eq!(settings.script_src, "/bx-compat-ui/js");
		assert_eq!(settings.grid_update_endpoint, "/bx-compat-ui/gridupdate");
		assert_eq!(settings.id_strategy, IdStrategy::Sequential);
		assert!(settings.validate().is_ok());
	}

	#[rstest]
	fn test_partial_toml_keeps_defaults() {
		let settings = UiSettings::from_toml_str(
			r#"
			css_src = "/static/css"
			id_strategy = "random"
			"#,
		)
		.unwrap();
		assert_eq!(settings.css_src, "/static/css");
		assert_eq!(settings.script_src, "/bx-compat-ui/js");
		assert_eq!(settings.id_strategy, IdStrategy::Random);
	}

	#[rstest]
	fn test_overrides_from_lookup() {
		let env: HashMap<&str, &str> = [
			("COMPAT_UI_PROXY_ENDPOINT", "https://api.example.com/proxy"),
			("COMPAT_UI_ID_STRATEGY", "Random"),
		]
		.into_iter()
		.collect();
		let settings = UiSettings::default()
			.with_overrides_from(|key| env.get(key).map(|v| v.to_string()))
			.unwrap();
		assert_eq!(settings.proxy_endpoint, "https://api.example.com/proxy");
		assert_eq!(settings.id_strategy, IdStrategy::Random);
	}

	#[rstest]
	fn test_invalid_id_strategy_override() {
		let result = UiSettings::default()
			.with_overrides_from(|key| (key == "COMPAT_UI_ID_STRATEGY").then(|| "uuid".into()));
		assert!(matches!(result, Err(SettingsError::ValidationError(_))));
	}

	#[rstest]
	#[case("", "/ok")]
	#[case("/css", "relative/endpoint")]
	fn test_validation_failures(#[case] css: &str, #[case] endpoint: &str) {
		let mut settings = UiSettings::default();
		settings.css_src = css.to_string();
		settings.grid_update_endpoint = endpoint.to_string();
		assert!(settings.validate().is_err());
	}
}
