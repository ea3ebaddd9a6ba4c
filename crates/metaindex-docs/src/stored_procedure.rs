use metaindex_core::types::StoredProcedure;

use crate::builder::{DocumentBuilder, IndexProfile};
use crate::filter::DEFAULT_EXCLUDED_FIELDS;
use crate::suggest::SuggestionSource;
use crate::weights::NAMED_ENTITY_FIELDS;

pub const ENTITY_TYPE: &str = "storedProcedure";

pub const PROFILE: IndexProfile = IndexProfile {
    entity_type: ENTITY_TYPE,
    excluded_fields: DEFAULT_EXCLUDED_FIELDS,
    suggestions: &[SuggestionSource::FullyQualifiedName(5), SuggestionSource::Name(10)],
    fields: NAMED_ENTITY_FIELDS,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct StoredProcedureIndex;

impl DocumentBuilder for StoredProcedureIndex {
    type Entity = StoredProcedure;

    fn profile(&self) -> &'static IndexProfile {
        &PROFILE
    }
}
