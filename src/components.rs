//! The tag engine, renderers and template helper functions.
//!
//! # Examples
//!
//! ```rust
//! use compat_ui::components::ajax_link;
//!
//! let href = ajax_link("panel.cfm").unwrap();
//! assert!(href.starts_with("javascript:"));
//! ```

pub use compat_ui_components::*;
