//! quizbank-core: question catalog store, loaders, and queries.
//!
//! This crate defines the question data model, the immutable catalog store
//! with its indices, the query service over it, and the loaders that turn
//! question-bank files into entries.

pub mod error;
pub mod model;
pub mod parser;
pub mod query;
pub mod snapshot;
pub mod store;

pub use error::CatalogError;
pub use model::{QuestionBank, QuestionEntry, Section};
pub use query::QueryService;
pub use store::CatalogStore;
