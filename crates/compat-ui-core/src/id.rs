//! Element id generation
//!
//! Ids only need to be unique within one rendered document, so each document
//! owns its generator. [`SequentialIdGenerator`] yields reproducible ids for
//! tests; [`RandomIdGenerator`] yields short uuid-derived tokens.

use std::collections::HashMap;
use uuid::Uuid;

/// Source of auto-generated element ids
pub trait IdGenerator: std::fmt::Debug {
	/// Returns a fresh id of the form `<prefix>_<token>`
	fn next_id(&mut self, prefix: &str) -> String;
}

/// Per-prefix counters: `grid_1`, `grid_2`, `layout_1`, ...
#[derive(Debug, Clone, Default)]
pub struct SequentialIdGenerator {
	counters: HashMap<String, u64>,
}

impl SequentialIdGenerator {
	/// Creates a generator with every counter at zero
	pub fn new() -> Self {
		Self::default()
	}
}

impl IdGenerator for SequentialIdGenerator {
	fn next_id(&mut self, prefix: &str) -> String {
		let counter = self.counters.entry(prefix.to_string()).or_insert(0);
		*counter += 1;
		format!("{prefix}_{counter}")
	}
}

/// Random 8-hex-digit tokens taken from a v4 uuid
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
	fn next_id(&mut self, prefix: &str) -> String {
		let token = Uuid::new_v4().simple().to_string();
		format!("{prefix}_{}", &token[..8])
	}
}
