//! # Cutsel Query
//!
//! The decision core: raw operator input goes through [`normalize_number`],
//! past the [`CompletenessPolicy`] gate, and into the
//! [`QueryEngine`], which narrows each catalog by a conjunction of
//! per-field predicates. An absent input contributes no predicate, so
//! unspecified fields never exclude a row.

mod engine;
mod error;
mod gate;
mod normalize;

pub use engine::QueryEngine;
pub use error::{QueryError, Result};
pub use gate::CompletenessPolicy;
pub use normalize::normalize_number;
