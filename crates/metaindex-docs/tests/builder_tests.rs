use serde_json::{json, Value};

use metaindex_core::types::{Classification, Domain, EntityReference, StoredProcedure};
use metaindex_core::Error;
use metaindex_docs::owner::{canonicalize_owner, canonicalized};
use metaindex_docs::{
    ClassificationIndex, DocumentBuilder, DomainIndex, EntityKind, StoredProcedureIndex,
};

fn owner(name: Option<&str>, display_name: Option<&str>) -> EntityReference {
    EntityReference {
        id: Some("6f1c2b0e-0000-4000-8000-000000000001".to_string()),
        entity_type: Some("user".to_string()),
        name: name.map(str::to_string),
        display_name: display_name.map(str::to_string),
        ..EntityReference::default()
    }
}

fn stored_procedure() -> StoredProcedure {
    serde_json::from_value(json!({
        "id": "0b7a4a52-1111-4000-8000-000000000002",
        "name": "proc1",
        "fullyQualifiedName": "db.schema.proc1",
        "description": "Nightly load of the orders fact table",
        "owner": { "id": "u-1", "type": "user", "name": "alice", "displayName": "" },
        "storedProcedureCode": { "language": "SQL", "code": "insert into orders select * from staging" },
        "serviceType": "Snowflake",
        "version": 0.2,
        "changeDescription": {
            "fieldsAdded": [],
            "fieldsUpdated": [{ "name": "description", "oldValue": "", "newValue": "Nightly load" }],
            "fieldsDeleted": [],
            "previousVersion": 0.1
        }
    }))
    .expect("stored procedure fixture")
}

fn classification() -> Classification {
    serde_json::from_value(json!({
        "name": "PII",
        "fullyQualifiedName": "PII",
        "description": "Personally identifiable information",
        "mutuallyExclusive": true,
        "changeDescription": { "fieldsAdded": [], "fieldsUpdated": [], "fieldsDeleted": [] }
    }))
    .expect("classification fixture")
}

fn domain() -> Domain {
    serde_json::from_value(json!({
        "name": "Payments",
        "fullyQualifiedName": "Finance.Payments",
        "domainType": "Aggregate",
        "owner": { "id": "t-1", "type": "team", "name": "finance-data" },
        "changeDescription": {
            "fieldsAdded": [{ "name": "experts", "newValue": "[]" }],
            "fieldsUpdated": [],
            "fieldsDeleted": [],
            "previousVersion": 0.1
        }
    }))
    .expect("domain fixture")
}

#[test]
fn stored_procedure_suggestions_favor_short_name() {
    let doc = StoredProcedureIndex.build_document(&stored_procedure()).expect("build");
    assert_eq!(
        doc["suggest"],
        json!([
            { "input": "db.schema.proc1", "weight": 5 },
            { "input": "proc1", "weight": 10 }
        ])
    );
    assert_eq!(
        doc["fqnParts"],
        json!(["db", "db.schema", "db.schema.proc1", "db.schema.proc1", "proc1"])
    );
    assert_eq!(doc["entityType"], json!("storedProcedure"));
}

#[test]
fn classification_and_domain_weights() {
    let doc = ClassificationIndex.build_document(&classification()).expect("build");
    assert_eq!(
        doc["suggest"],
        json!([{ "input": "PII", "weight": 10 }, { "input": "PII", "weight": 5 }])
    );
    assert_eq!(doc["fqnParts"], json!(["PII", "PII", "PII"]));
    assert_eq!(doc["entityType"], json!("classification"));

    let doc = DomainIndex.build_document(&domain()).expect("build");
    assert_eq!(
        doc["suggest"],
        json!([
            { "input": "Payments", "weight": 5 },
            { "input": "Finance.Payments", "weight": 5 }
        ])
    );
    assert_eq!(doc["entityType"], json!("domain"));
}

#[test]
fn change_history_is_never_indexed() {
    let doc = StoredProcedureIndex.build_document(&stored_procedure()).expect("build");
    assert!(!doc.contains_key("changeDescription"));
    let doc = ClassificationIndex.build_document(&classification()).expect("build");
    assert!(!doc.contains_key("changeDescription"));
    let doc = DomainIndex.build_document(&domain()).expect("build");
    assert!(!doc.contains_key("changeDescription"));
}

#[test]
fn nested_objects_keep_unmodeled_keys() {
    let entity: StoredProcedure = serde_json::from_value(json!({
        "name": "proc1",
        "fullyQualifiedName": "db.schema.proc1",
        "owner": { "id": "u-1", "type": "user", "name": "alice", "inherited": true },
        "databaseSchema": { "id": "s-1", "type": "databaseSchema", "name": "schema", "inherited": false },
        "storedProcedureCode": { "language": "SQL", "code": "select 1", "extraHint": "x" },
        "tags": [{
            "tagFQN": "PII.Sensitive",
            "source": "Classification",
            "labelType": "Manual",
            "state": "Confirmed",
            "reason": "contains emails"
        }]
    }))
    .expect("tagged stored procedure");
    assert_eq!(entity.tags.as_ref().map(|t| t[0].tag_fqn.as_str()), Some("PII.Sensitive"));

    let doc = StoredProcedureIndex.build_document(&entity).expect("build");
    assert_eq!(doc["owner"]["inherited"], json!(true));
    assert_eq!(doc["owner"]["displayName"], json!("alice"));
    assert_eq!(doc["databaseSchema"]["inherited"], json!(false));
    assert_eq!(doc["storedProcedureCode"]["extraHint"], json!("x"));
    assert_eq!(
        doc["tags"],
        json!([{
            "tagFQN": "PII.Sensitive",
            "source": "Classification",
            "labelType": "Manual",
            "state": "Confirmed",
            "reason": "contains emails"
        }])
    );
}

#[test]
fn domain_references_keep_unmodeled_keys() {
    let entity: Domain = serde_json::from_value(json!({
        "name": "Payments",
        "fullyQualifiedName": "Finance.Payments",
        "deleted": false,
        "parent": { "id": "d-0", "type": "domain", "name": "Finance", "inherited": true },
        "experts": [{ "id": "u-2", "type": "user", "name": "bob", "inherited": false }]
    }))
    .expect("domain with references");
    assert_eq!(entity.deleted, Some(false));

    let doc = DomainIndex.build_document(&entity).expect("build");
    assert_eq!(doc["parent"]["inherited"], json!(true));
    assert_eq!(doc["experts"][0]["inherited"], json!(false));
    assert_eq!(doc["deleted"], json!(false));
}

#[test]
fn other_fields_pass_through_and_absent_ones_stay_absent() {
    let doc = StoredProcedureIndex.build_document(&stored_procedure()).expect("build");
    assert_eq!(doc["serviceType"], json!("Snowflake"));
    assert_eq!(doc["storedProcedureCode"]["language"], json!("SQL"));
    assert_eq!(doc["version"], json!(0.2));
    assert!(!doc.contains_key("displayName"));
    assert!(!doc.contains_key("tags"));
}

#[test]
fn owner_display_name_is_filled_on_a_copy() {
    let entity = stored_procedure();
    let doc = StoredProcedureIndex.build_document(&entity).expect("build");
    assert_eq!(doc["owner"]["displayName"], json!("alice"));
    assert_eq!(entity.owner.as_ref().and_then(|o| o.display_name.as_deref()), Some(""));

    let doc = DomainIndex.build_document(&domain()).expect("build");
    assert_eq!(doc["owner"]["displayName"], json!("finance-data"));
}

#[test]
fn owner_canonicalization_rules() {
    let mut set = owner(Some("alice"), Some("Alice Liddell"));
    canonicalize_owner(&mut set);
    assert_eq!(set.display_name.as_deref(), Some("Alice Liddell"));

    let mut nameless = owner(None, None);
    canonicalize_owner(&mut nameless);
    assert_eq!(nameless.display_name, None);

    let once = canonicalized(&owner(Some("bob"), None));
    let twice = canonicalized(&once);
    assert_eq!(once.display_name.as_deref(), Some("bob"));
    assert_eq!(once, twice);
}

#[test]
fn entity_type_ignores_entity_content() {
    let mut entity = domain();
    entity.extra.insert("entityType".to_string(), json!("table"));
    let doc = DomainIndex.build_document(&entity).expect("build");
    assert_eq!(doc["entityType"], json!("domain"));
}

#[test]
fn missing_fqn_degrades_to_name_only() {
    let mut entity = classification();
    entity.fully_qualified_name = None;
    let doc = ClassificationIndex.build_document(&entity).expect("build");
    assert_eq!(doc["suggest"], json!([{ "input": "PII", "weight": 10 }]));
    assert_eq!(doc["fqnParts"], json!(["PII"]));
}

#[test]
fn identical_snapshots_build_identical_bytes() {
    let a = serde_json::to_vec(&StoredProcedureIndex.build_document(&stored_procedure()).expect("build"))
        .expect("encode");
    let b = serde_json::to_vec(&StoredProcedureIndex.build_document(&stored_procedure()).expect("build"))
        .expect("encode");
    assert_eq!(a, b);
}

#[test]
fn registry_dispatches_by_type_tag() {
    for kind in EntityKind::ALL {
        assert_eq!(EntityKind::from_type_tag(kind.type_tag()).expect("known tag"), kind);
        assert_eq!(kind.to_string().parse::<EntityKind>().expect("parse"), kind);
    }

    let raw = serde_json::to_value(stored_procedure()).expect("encode");
    let via_registry = EntityKind::StoredProcedure.build_from_json(raw).expect("build");
    let direct = StoredProcedureIndex.build_document(&stored_procedure()).expect("build");
    assert_eq!(via_registry, direct);
}

#[test]
fn registry_errors() {
    assert!(matches!(
        EntityKind::from_type_tag("table"),
        Err(Error::UnknownEntityType(tag)) if tag == "table"
    ));
    let missing_name = json!({ "fullyQualifiedName": "Finance" });
    assert!(matches!(
        EntityKind::Domain.build_from_json(missing_name),
        Err(Error::Serialization(_))
    ));
    assert!(matches!(
        EntityKind::Domain.build_from_json(Value::String("Finance".to_string())),
        Err(Error::Serialization(_))
    ));
}
