use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use metaindex_core::types::{Classification, Domain, StoredProcedure};
use metaindex_core::{Error, IndexDocument, Result};

use crate::builder::{DocumentBuilder, IndexProfile};
use crate::weights::WeightTable;
use crate::{classification, domain, stored_procedure};
use crate::{ClassificationIndex, DomainIndex, StoredProcedureIndex};

/// Indexable entity types, addressable by their type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Classification,
    Domain,
    StoredProcedure,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [Self::Classification, Self::Domain, Self::StoredProcedure];

    pub fn profile(self) -> &'static IndexProfile {
        match self {
            Self::Classification => &classification::PROFILE,
            Self::Domain => &domain::PROFILE,
            Self::StoredProcedure => &stored_procedure::PROFILE,
        }
    }

    pub fn type_tag(self) -> &'static str {
        self.profile().entity_type
    }

    pub fn from_type_tag(tag: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.type_tag() == tag)
            .ok_or_else(|| Error::UnknownEntityType(tag.to_string()))
    }

    pub fn fields(self) -> WeightTable {
        self.profile().fields
    }

    /// Parse an untyped entity payload and build its document.
    pub fn build_from_json(self, value: Value) -> Result<IndexDocument> {
        match self {
            Self::Classification => {
                let entity: Classification = serde_json::from_value(value)?;
                ClassificationIndex.build_document(&entity)
            }
            Self::Domain => {
                let entity: Domain = serde_json::from_value(value)?;
                DomainIndex.build_document(&entity)
            }
            Self::StoredProcedure => {
                let entity: StoredProcedure = serde_json::from_value(value)?;
                StoredProcedureIndex.build_document(&entity)
            }
        }
    }
}

impl FromStr for EntityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_type_tag(s)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_tag())
    }
}
