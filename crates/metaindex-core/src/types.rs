//! Catalog entity snapshots handed to the document builders.
//!
//! Wire names are camelCase to match the catalog's JSON payloads. Optional
//! fields that are absent stay absent when the entity is serialized again;
//! nothing here fills in defaults. Fields this model does not know about are
//! kept in `extra` so they reach the index untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Unknown fields carried through from the source payload.
pub type Extra = Map<String, Value>;

/// A normalized search document: field name to JSON value.
///
/// Keys iterate in sorted order, so serializing the same document twice
/// always produces the same bytes.
pub type IndexDocument = Map<String, Value>;

/// A pointer to another catalog entity, typically an owner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fully_qualified_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// One changed field inside a [`ChangeDescription`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldChange {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_value: Option<Value>,
}

/// Audit trail of the last version bump. Never indexed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeDescription {
    #[serde(default)]
    pub fields_added: Vec<FieldChange>,
    #[serde(default)]
    pub fields_updated: Vec<FieldChange>,
    #[serde(default)]
    pub fields_deleted: Vec<FieldChange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_version: Option<f64>,
}

/// A tag attached to an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagLabel {
    #[serde(rename = "tagFQN")]
    pub tag_fqn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// A tag classification such as `PII` or `Tier`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fully_qualified_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<EntityReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mutually_exclusive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_description: Option<ChangeDescription>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// A business domain grouping data assets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fully_qualified_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<EntityReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<EntityReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<EntityReference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experts: Option<Vec<EntityReference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_description: Option<ChangeDescription>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Source code of a stored procedure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredProcedureCode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// A stored procedure living in a database schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredProcedure {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fully_qualified_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<EntityReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stored_procedure_code: Option<StoredProcedureCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_schema: Option<EntityReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<EntityReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<EntityReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagLabel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followers: Option<Vec<EntityReference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_description: Option<ChangeDescription>,
    #[serde(flatten)]
    pub extra: Extra,
}

macro_rules! impl_catalog_entity {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl crate::traits::CatalogEntity for $ty {
                fn name(&self) -> &str { &self.name }
                fn fully_qualified_name(&self) -> Option<&str> { self.fully_qualified_name.as_deref() }
                fn owner_mut(&mut self) -> Option<&mut EntityReference> { self.owner.as_mut() }
            }
        )+
    };
}

impl_catalog_entity!(Classification, Domain, StoredProcedure);
