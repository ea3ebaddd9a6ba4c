//! metaindex-text
//!
//! Tantivy-backed `IndexSink` for catalog search documents. Each document is
//! stored whole as JSON next to its analyzed name, description and FQN parts.
pub mod tantivy_utils;
pub mod index;

pub use index::TantivyIndexer;
