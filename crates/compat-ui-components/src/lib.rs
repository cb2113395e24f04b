//! # compat-ui-components
//!
//! The tag engine and renderers for compat-ui.
//!
//! A host template engine drives a [`Document`] with start/end callbacks for
//! each tag invocation. Container tags (`grid`, `layout`) collect their
//! children through the [`ComponentContext`] stack; every other tag renders
//! its markup and client script as soon as it closes.
//!
//! ## Modules
//!
//! - [`document`]: the start/end tag engine
//! - [`tags`]: tag identities and attribute tables
//! - [`context`], [`frame`]: the open-frame stack and per-instance state
//! - [`markup`], [`html`]: HTML rendering
//! - [`script`]: client script emission
//! - [`query`]: tabular data and `query_convert_for_grid`
//! - [`functions`]: `ajax_link` and `ajax_on_load`
//!
//! ## Example
//!
//! ```
//! use compat_ui_components::{Document, TagInvocation};
//! use compat_ui_conf::UiSettings;
//!
//! let mut document = Document::new(UiSettings::default());
//! document
//! 	.on_start(TagInvocation::new("pod").attribute("title", "News").with_body())
//! 	.unwrap();
//! document.write("<p>Hello</p>");
//! document.on_end("pod").unwrap();
//!
//! let html = document.finish().unwrap();
//! assert!(html.starts_with("<div id=\"pod_1\" class=\"bx-pod\">"));
//! assert!(html.contains("<h3 class=\"bx-pod-title\">News</h3>"));
//! ```

pub mod context;
pub mod document;
pub mod frame;
pub mod functions;
pub mod html;
pub mod markup;
pub mod query;
pub mod script;
pub mod tags;

pub use context::ComponentContext;
pub use document::{Document, Payload, TagInvocation};
pub use frame::{ChildDescriptor, ComponentFrame, FrameKind, GridColumn, LayoutArea};
pub use functions::{ajax_link, ajax_on_load};
pub use query::{GridQueryResult, Query, Row, query_convert_for_grid};
pub use tags::TagKind;
