//! Validation, bind parsing, pagination and escaping.
//!
//! # Examples
//!
//! ```rust
//! use compat_ui::core::pagination::paginate;
//!
//! let page = paginate(10, 2, 3).unwrap();
//! assert_eq!((page.start_row, page.end_row), (4, 6));
//! ```

pub use compat_ui_core::*;
