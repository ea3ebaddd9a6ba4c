use serde_json::Value;
use tracing::debug;

use metaindex_core::{CatalogEntity, Error, IndexDocument, Result};

use crate::filter::remove_non_indexable_fields;
use crate::fqn::fqn_parts;
use crate::owner::canonicalize_owner;
use crate::suggest::{build_suggestions, suggestion_inputs, SuggestionSource};
use crate::weights::{WeightTable, FULLY_QUALIFIED_NAME_PARTS};

pub const FIELD_SUGGEST: &str = "suggest";
pub const FIELD_ENTITY_TYPE: &str = "entityType";

/// Per-type indexing configuration.
#[derive(Debug, Clone, Copy)]
pub struct IndexProfile {
    pub entity_type: &'static str,
    pub excluded_fields: &'static [&'static str],
    pub suggestions: &'static [SuggestionSource],
    pub fields: WeightTable,
}

pub trait DocumentBuilder: Send + Sync {
    type Entity: CatalogEntity;

    fn profile(&self) -> &'static IndexProfile;

    fn build_document(&self, entity: &Self::Entity) -> Result<IndexDocument> {
        build_document(self.profile(), entity)
    }

    fn fields(&self) -> WeightTable {
        self.profile().fields
    }
}

/// Turn an entity snapshot into a search document.
///
/// The caller's entity is never modified; owner canonicalization happens on
/// a copy. Suggestions are built before FQN parts because their inputs are
/// folded into the parts list.
pub fn build_document<E: CatalogEntity>(profile: &IndexProfile, entity: &E) -> Result<IndexDocument> {
    let mut entity = entity.clone();
    if let Some(owner) = entity.owner_mut() {
        canonicalize_owner(owner);
    }

    let mut doc = match serde_json::to_value(&entity)? {
        Value::Object(map) => map,
        _ => return Err(Error::NotAnObject(profile.entity_type.to_string())),
    };
    remove_non_indexable_fields(&mut doc, profile.excluded_fields);

    let fqn = entity.fully_qualified_name();
    let suggest = build_suggestions(profile.suggestions, entity.name(), fqn);
    let parts = fqn_parts(fqn, &suggestion_inputs(&suggest));

    doc.insert(FULLY_QUALIFIED_NAME_PARTS.to_string(), Value::from(parts));
    doc.insert(FIELD_SUGGEST.to_string(), serde_json::to_value(&suggest)?);
    doc.insert(FIELD_ENTITY_TYPE.to_string(), Value::from(profile.entity_type));

    debug!(entity_type = profile.entity_type, fqn = ?fqn, fields = doc.len(), "built search document");
    Ok(doc)
}
