use metaindex_core::types::Domain;

use crate::builder::{DocumentBuilder, IndexProfile};
use crate::filter::DEFAULT_EXCLUDED_FIELDS;
use crate::suggest::SuggestionSource;
use crate::weights::NAMED_ENTITY_FIELDS;

pub const ENTITY_TYPE: &str = "domain";

// Subdomain paths carry as much meaning as the leaf name.
pub const PROFILE: IndexProfile = IndexProfile {
    entity_type: ENTITY_TYPE,
    excluded_fields: DEFAULT_EXCLUDED_FIELDS,
    suggestions: &[SuggestionSource::Name(5), SuggestionSource::FullyQualifiedName(5)],
    fields: NAMED_ENTITY_FIELDS,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct DomainIndex;

impl DocumentBuilder for DomainIndex {
    type Entity = Domain;

    fn profile(&self) -> &'static IndexProfile {
        &PROFILE
    }
}
