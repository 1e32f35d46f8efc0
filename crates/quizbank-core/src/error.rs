//! Catalog error types.
//!
//! These are the deterministic failures of building and querying a catalog.
//! I/O and file-format failures live in the loader and use `anyhow`.

use thiserror::Error;

/// Errors returned by the catalog store and query service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two entries handed to `CatalogStore::load` share an id.
    #[error("duplicate question id: {0}")]
    DuplicateId(String),

    /// No entry with this id exists in the catalog.
    #[error("question not found: {0}")]
    NotFound(String),

    /// A sample larger than the catalog was requested.
    #[error("cannot sample {requested} questions, catalog holds only {available}")]
    InsufficientEntries { requested: usize, available: usize },

    /// A section name outside the known set.
    #[error("unknown section: {0}")]
    UnknownSection(String),
}
