//! Renderer settings.
//!
//! # Examples
//!
//! ```rust
//! use compat_ui::conf::UiSettings;
//!
//! let settings = UiSettings::default();
//! assert!(settings.validate().is_ok());
//! ```

pub use compat_ui_conf::*;
