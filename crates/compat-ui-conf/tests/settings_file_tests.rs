//! Settings file loading tests

use compat_ui_conf::{IdStrategy, SettingsError, UiSettings};
use rstest::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_settings(suffix: &str, contents: &str) -> NamedTempFile {
	let mut file = tempfile::Builder::new()
		.suffix(suffix)
		.tempfile()
		.expect("create temp file");
	file.write_all(contents.as_bytes()).expect("write temp file");
	file
}

#[rstest]
fn test_load_toml_file() {
	let file = write_settings(
		".toml",
		r#"
		script_src = "/assets/js"
		grid_update_endpoint = "https://example.com/grid"
		"#,
	);

	let settings = UiSettings::from_file(file.path()).unwrap();

	assert_eq!(settings.script_src, "/assets/js");
	assert_eq!(settings.grid_update_endpoint, "https://example.com/grid");
	assert_eq!(settings.css_src, "/bx-compat-ui/css");
	assert!(settings.validate().is_ok());
}

#[rstest]
fn test_load_json_file() {
	let file = write_settings(".json", r#"{"id_strategy": "random", "version": "2.0.0"}"#);

	let settings = UiSettings::from_file(file.path()).unwrap();

	assert_eq!(settings.id_strategy, IdStrategy::Random);
	assert_eq!(settings.version, "2.0.0");
}

#[rstest]
fn test_unsupported_extension() {
	let file = write_settings(".yaml", "css_src: /x");
	assert!(matches!(
		UiSettings::from_file(file.path()),
		Err(SettingsError::UnsupportedFormat(_))
	));
}

#[rstest]
fn test_malformed_toml() {
	let file = write_settings(".toml", "css_src = ");
	assert!(matches!(
		UiSettings::from_file(file.path()),
		Err(SettingsError::ParseError(_))
	));
}

#[rstest]
fn test_missing_file() {
	let dir = tempfile::tempdir().unwrap();
	let result = UiSettings::from_file(dir.path().join("absent.toml"));
	assert!(matches!(result, Err(SettingsError::FileError(_))));
}
