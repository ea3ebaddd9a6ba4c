use metaindex_core::types::Classification;

use crate::builder::{DocumentBuilder, IndexProfile};
use crate::filter::DEFAULT_EXCLUDED_FIELDS;
use crate::suggest::SuggestionSource;
use crate::weights::NAMED_ENTITY_FIELDS;

pub const ENTITY_TYPE: &str = "classification";

/// Classifications are looked up by short name (`PII`, `Tier`) far more
/// often than by path.
pub const PROFILE: IndexProfile = IndexProfile {
    entity_type: ENTITY_TYPE,
    excluded_fields: DEFAULT_EXCLUDED_FIELDS,
    suggestions: &[SuggestionSource::Name(10), SuggestionSource::FullyQualifiedName(5)],
    fields: NAMED_ENTITY_FIELDS,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ClassificationIndex;

impl DocumentBuilder for ClassificationIndex {
    type Entity = Classification;

    fn profile(&self) -> &'static IndexProfile {
        &PROFILE
    }
}
