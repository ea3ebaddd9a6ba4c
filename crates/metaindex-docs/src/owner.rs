use metaindex_core::types::EntityReference;

/// Make sure an owner carries a human-readable label.
///
/// A missing or empty display name is replaced by the owner's name. Owners
/// without a name, or with a display name already set, are left alone.
pub fn canonicalize_owner(owner: &mut EntityReference) {
    let needs_label = owner.display_name.as_deref().map_or(true, str::is_empty);
    if needs_label {
        if let Some(name) = owner.name.as_ref() {
            owner.display_name = Some(name.clone());
        }
    }
}

/// Copying variant of [`canonicalize_owner`].
pub fn canonicalized(owner: &EntityReference) -> EntityReference {
    let mut owner = owner.clone();
    canonicalize_owner(&mut owner);
    owner
}
