//! # compat-ui-conf
//!
//! Settings consumed by the compat-ui renderers.
//!
//! ## Example
//!
//! ```
//! use compat_ui_conf::{IdStrategy, UiSettings};
//!
//! let settings = UiSettings::from_toml_str(r#"css_src = "/static/ui/css""#).unwrap();
//! assert_eq!(settings.css_src, "/static/ui/css");
//! assert_eq!(settings.id_strategy, IdStrategy::Sequential);
//! ```

pub mod settings;

pub use settings::{IdStrategy, SettingsError, UiSettings};
