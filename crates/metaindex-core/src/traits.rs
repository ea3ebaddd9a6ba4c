use serde::Serialize;

use crate::types::{EntityReference, IndexDocument};

/// Read surface every indexable catalog entity exposes.
pub trait CatalogEntity: Serialize + Clone + Send + Sync {
    fn name(&self) -> &str;
    fn fully_qualified_name(&self) -> Option<&str>;
    fn owner_mut(&mut self) -> Option<&mut EntityReference>;
}

/// Client that writes built documents into a search index.
pub trait IndexSink: Send + Sync {
    fn upsert(&self, entity_type: &str, doc: &IndexDocument) -> anyhow::Result<()>;

    fn upsert_all(&self, entity_type: &str, docs: &[IndexDocument]) -> anyhow::Result<()> {
        for doc in docs {
            self.upsert(entity_type, doc)?;
        }
        Ok(())
    }
}
