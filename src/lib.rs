//! # compat-ui
//!
//! Server-side rendering of declarative UI tags into HTML and client script.
//!
//! A host template engine reports each tag invocation (`grid`, `gridcolumn`,
//! `gridrow`, `gridupdate`, `layout`, `layoutarea`, `pod`, `div`, `ajaxproxy`,
//! `ajaximport`) to a [`Document`]. The document validates attributes, keeps
//! track of nesting, and renders every closed tag as markup followed by a
//! self-initializing script block.
//!
//! ## Crates
//!
//! - [`core`]: attribute validation, bind expressions, pagination, escaping
//! - [`conf`]: renderer settings loaded from TOML and the environment
//! - [`components`]: the tag engine, renderers and helper functions
//!
//! ## Quick Example
//!
//! ```rust
//! use compat_ui::prelude::*;
//!
//! let mut document = Document::new(UiSettings::default());
//! document
//! 	.on_start(TagInvocation::new("grid").attribute("name", "users").with_body())
//! 	.unwrap();
//! for column in ["id", "email"] {
//! 	document
//! 		.on_start(TagInvocation::new("gridcolumn").attribute("name", column))
//! 		.unwrap();
//! 	document.on_end("gridcolumn").unwrap();
//! }
//! document.on_end("grid").unwrap();
//!
//! let html = document.finish().unwrap();
//! assert!(html.contains("data-column=\"email\""));
//! ```

pub mod components;
pub mod conf;
pub mod core;

pub use compat_ui_components::{
	ComponentContext, ComponentFrame, Document, GridQueryResult, Payload, Query, Row,
	TagInvocation, TagKind, ajax_link, ajax_on_load, query_convert_for_grid,
};
pub use compat_ui_conf::{IdStrategy, SettingsError, UiSettings};
pub use compat_ui_core::{BindDescriptor, Result, UiError};

/// Prelude module for convenient imports
pub mod prelude {
	pub use crate::{
		Document, GridQueryResult, IdStrategy, Query, Row, TagInvocation, UiError, UiSettings,
		ajax_link, ajax_on_load, query_convert_for_grid,
	};
}
