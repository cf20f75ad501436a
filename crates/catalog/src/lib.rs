//! # Cutsel Catalog
//!
//! Persisted catalogs of cutting-tool breakers and workpiece materials.
//!
//! Each row carries a process type and one or two `(min, recommended, max)`
//! bands. The store is populated once by the importer and is a pure read
//! path afterwards: every read opens a read-only connection, executes, and
//! releases it before returning.

mod error;
mod store;
mod types;

pub use error::{CatalogError, Result};
pub use store::CatalogStore;
pub use types::{Band, BreakerRow, MaterialRow, ProcessType, QueryInput};
