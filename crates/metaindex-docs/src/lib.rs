//! metaindex-docs
//!
//! Turns catalog entity snapshots into search documents: owner labels are
//! canonicalized, change history is stripped, the FQN is decomposed into
//! prefix parts and weighted autocomplete suggestions are attached. Each
//! entity type also owns the field-boost table the query layer uses.

pub mod builder;
pub mod classification;
pub mod domain;
pub mod filter;
pub mod fqn;
pub mod owner;
pub mod registry;
pub mod stored_procedure;
pub mod suggest;
pub mod weights;

pub use builder::{build_document, DocumentBuilder, IndexProfile};
pub use classification::ClassificationIndex;
pub use domain::DomainIndex;
pub use registry::EntityKind;
pub use stored_procedure::StoredProcedureIndex;
pub use suggest::SuggestionEntry;
pub use weights::WeightTable;
