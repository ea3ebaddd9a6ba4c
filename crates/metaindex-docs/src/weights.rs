//! Query-time field boosts, one table per entity type.
//!
//! Tables are `const` data. The query layer multiplies each field's score
//! contribution by its boost, so keyword-exact matches must stay at or above
//! analyzed names, names above FQN parts, and FQN parts above descriptions.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

pub const FIELD_NAME: &str = "name";
pub const FIELD_DISPLAY_NAME: &str = "displayName";
pub const FIELD_DESCRIPTION: &str = "description";
pub const NAME_KEYWORD: &str = "name.keyword";
pub const DISPLAY_NAME_KEYWORD: &str = "displayName.keyword";
pub const FULLY_QUALIFIED_NAME_PARTS: &str = "fqnParts";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightTable(&'static [(&'static str, f32)]);

impl WeightTable {
    pub const fn new(entries: &'static [(&'static str, f32)]) -> Self {
        Self(entries)
    }

    pub fn get(&self, field: &str) -> Option<f32> {
        self.0.iter().find(|(name, _)| *name == field).map(|(_, boost)| *boost)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f32)> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_map(&self) -> HashMap<String, f32> {
        self.iter().map(|(name, boost)| (name.to_string(), boost)).collect()
    }
}

impl Serialize for WeightTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, boost) in self.iter() {
            map.serialize_entry(name, &boost)?;
        }
        map.end()
    }
}

/// Boosts shared by the named catalog entities.
pub const NAMED_ENTITY_FIELDS: WeightTable = WeightTable::new(&[
    (FIELD_DISPLAY_NAME, 15.0),
    (FIELD_NAME, 15.0),
    (DISPLAY_NAME_KEYWORD, 25.0),
    (NAME_KEYWORD, 25.0),
    (FIELD_DESCRIPTION, 1.0),
    (FULLY_QUALIFIED_NAME_PARTS, 10.0),
]);
