use serde_json::json;
use tempfile::TempDir;

use metaindex_core::traits::IndexSink;
use metaindex_core::types::{Domain, StoredProcedure};
use metaindex_docs::{DocumentBuilder, DomainIndex, StoredProcedureIndex};
use metaindex_text::TantivyIndexer;

const HEAP: usize = 20_000_000;

fn procedure(description: &str) -> StoredProcedure {
    serde_json::from_value(json!({
        "id": "7d1e8f10-2222-4000-8000-000000000003",
        "name": "proc1",
        "fullyQualifiedName": "db.schema.proc1",
        "description": description,
        "changeDescription": { "fieldsAdded": [], "fieldsUpdated": [], "fieldsDeleted": [] }
    }))
    .expect("fixture")
}

#[test]
fn upsert_replaces_previous_version() {
    let indexer = TantivyIndexer::in_memory(HEAP).expect("indexer");
    let first = StoredProcedureIndex.build_document(&procedure("first draft")).expect("build");
    let second = StoredProcedureIndex.build_document(&procedure("final")).expect("build");

    indexer.upsert("storedProcedure", &first).expect("upsert first");
    indexer.upsert("storedProcedure", &second).expect("upsert second");

    assert_eq!(indexer.num_docs().expect("count"), 1);
    let stored = indexer
        .get("storedProcedure", "7d1e8f10-2222-4000-8000-000000000003")
        .expect("get")
        .expect("present");
    assert_eq!(stored, second);
    assert!(!stored.contains_key("changeDescription"));
}

#[test]
fn documents_without_id_are_keyed_by_fqn() {
    let indexer = TantivyIndexer::in_memory(HEAP).expect("indexer");
    let domains: Vec<_> = ["Finance", "Finance.Payments"]
        .iter()
        .map(|fqn| {
            let name = fqn.rsplit('.').next().unwrap_or(fqn);
            let domain: Domain = serde_json::from_value(json!({ "name": name, "fullyQualifiedName": fqn }))
                .expect("fixture");
            DomainIndex.build_document(&domain).expect("build")
        })
        .collect();

    indexer.upsert_all("domain", &domains).expect("upsert");
    assert_eq!(indexer.num_docs().expect("count"), 2);
    assert!(indexer.get("domain", "Finance.Payments").expect("get").is_some());
    assert!(indexer.get("classification", "Finance").expect("get").is_none());
}

#[test]
fn document_without_identity_is_rejected() {
    let indexer = TantivyIndexer::in_memory(HEAP).expect("indexer");
    let mut doc = serde_json::Map::new();
    doc.insert("name".to_string(), json!("orphan"));
    assert!(indexer.upsert("domain", &doc).is_err());
    assert_eq!(indexer.num_docs().expect("count"), 0);
}

#[test]
fn on_disk_index_survives_reopen() {
    let tmp = TempDir::new().expect("tmp");
    let dir = tmp.path().join("tantivy");
    let doc = StoredProcedureIndex.build_document(&procedure("persisted")).expect("build");
    {
        let indexer = TantivyIndexer::create(&dir, HEAP).expect("create");
        indexer.upsert("storedProcedure", &doc).expect("upsert");
    }
    let reopened = TantivyIndexer::open_or_create(&dir, HEAP).expect("reopen");
    assert_eq!(reopened.num_docs().expect("count"), 1);

    let recreated = TantivyIndexer::create(&dir, HEAP).expect("recreate");
    assert_eq!(recreated.num_docs().expect("count"), 0);
}
