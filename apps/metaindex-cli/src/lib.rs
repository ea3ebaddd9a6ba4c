//! Shared plumbing for the metaindex binaries: logging setup and loading
//! entity JSON files from a directory tree.
use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use metaindex_core::IndexDocument;
use metaindex_docs::EntityKind;

/// Log to stderr so NDJSON on stdout stays machine-readable.
/// `RUST_LOG` wins over the configured filter.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

pub fn list_json_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("json"))
        .map(|e| e.into_path())
        .collect();
    files.sort();
    files
}

/// The entity kind for a file: the override if given, else the name of the
/// directory holding the file (`storedProcedure/proc1.json`).
pub fn entity_kind_for(path: &Path, type_override: Option<EntityKind>) -> Result<EntityKind> {
    if let Some(kind) = type_override { return Ok(kind); }
    let dir = path
        .parent()
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow!("cannot infer entity type for {}", path.display()))?;
    Ok(EntityKind::from_type_tag(dir)?)
}

/// A file holds either one entity object or an array of them.
pub fn read_entities(path: &Path) -> Result<Vec<Value>> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    match serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))? {
        Value::Array(items) => Ok(items),
        single => Ok(vec![single]),
    }
}

pub fn build_file(kind: EntityKind, path: &Path) -> Result<Vec<IndexDocument>> {
    read_entities(path)?
        .into_iter()
        .map(|entity| kind.build_from_json(entity).with_context(|| format!("building {} document from {}", kind, path.display())))
        .collect()
}
