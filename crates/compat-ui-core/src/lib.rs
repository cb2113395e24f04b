//! # compat-ui-core
//!
//! Building blocks shared by every compat-ui tag:
//!
//! - [`attribute`]: declarative attribute specs and all-or-nothing validation
//! - [`bind`]: the bind expression parser
//! - [`pagination`]: row-window arithmetic
//! - [`escape`]: HTML and JavaScript escaping
//! - [`id`]: per-document element id generation
//! - [`error`]: the error taxonomy surfaced to template authors
//!
//! Everything here is pure and synchronous.

pub mod attribute;
pub mod bind;
pub mod error;
pub mod escape;
pub mod id;
pub mod pagination;

pub use attribute::{
	AttributeSpec, Mapping, RawAttributes, ValidatedAttributes, ValidationResult, ValueType,
	validate, validate_all,
};
pub use bind::BindDescriptor;
pub use error::{Result, UiError};
pub use id::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
pub use pagination::{Pagination, paginate};
