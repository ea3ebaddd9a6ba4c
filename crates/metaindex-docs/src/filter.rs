use metaindex_core::IndexDocument;

/// Change-history payload carried by every versioned entity.
pub const CHANGE_DESCRIPTION: &str = "changeDescription";

pub const DEFAULT_EXCLUDED_FIELDS: &[&str] = &[CHANGE_DESCRIPTION];

/// Drop every excluded key from a serialized entity. Missing keys are ignored.
pub fn remove_non_indexable_fields(doc: &mut IndexDocument, excluded: &[&str]) {
    for field in excluded {
        doc.remove(*field);
    }
}
