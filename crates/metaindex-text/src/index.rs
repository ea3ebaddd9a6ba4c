use anyhow::{anyhow, Result};
use serde_json::Value;
use std::path::Path;
use tantivy::collector::TopDocs;
use tantivy::directory::MmapDirectory;
use tantivy::query::TermQuery;
use tantivy::schema::{Field, IndexRecordOption, Value as _};
use tantivy::{Index, IndexWriter, TantivyDocument, Term};
use tracing::{debug, info};

use metaindex_core::traits::IndexSink;
use metaindex_core::IndexDocument;

use crate::tantivy_utils::{
	build_schema, register_tokenizer, DESCRIPTION_FIELD, DISPLAY_NAME_FIELD, ENTITY_TYPE_FIELD, FQN_PARTS_FIELD, KEY_FIELD,
	NAME_FIELD, SOURCE_FIELD,
};

/// Local tantivy index holding catalog search documents.
///
/// Documents are keyed by `<entityType>:<id>`, falling back to the FQN when
/// the entity has no id. Upserting a key replaces whatever was stored under it.
pub struct TantivyIndexer {
	index: Index,
	writer_heap_bytes: usize,
	key_field: Field,
	entity_type_field: Field,
	name_field: Field,
	display_name_field: Field,
	description_field: Field,
	fqn_parts_field: Field,
	source_field: Field,
}

impl TantivyIndexer {
	/// Create a brand-new index, wiping `index_dir` if it already exists.
	pub fn create(index_dir: &Path, writer_heap_bytes: usize) -> Result<Self> {
		if index_dir.exists() { std::fs::remove_dir_all(index_dir)?; }
		std::fs::create_dir_all(index_dir)?;
		let index = Index::create_in_dir(index_dir, build_schema())?;
		Self::from_index(index, writer_heap_bytes)
	}

	/// Open the index in `index_dir`, creating it when missing.
	pub fn open_or_create(index_dir: &Path, writer_heap_bytes: usize) -> Result<Self> {
		std::fs::create_dir_all(index_dir)?;
		let directory = MmapDirectory::open(index_dir)?;
		let index = Index::open_or_create(directory, build_schema())?;
		Self::from_index(index, writer_heap_bytes)
	}

	pub fn in_memory(writer_heap_bytes: usize) -> Result<Self> {
		Self::from_index(Index::create_in_ram(build_schema()), writer_heap_bytes)
	}

	fn from_index(index: Index, writer_heap_bytes: usize) -> Result<Self> {
		register_tokenizer(&index);
		let schema = index.schema();
		Ok(Self {
			key_field: schema.get_field(KEY_FIELD)?,
			entity_type_field: schema.get_field(ENTITY_TYPE_FIELD)?,
			name_field: schema.get_field(NAME_FIELD)?,
			display_name_field: schema.get_field(DISPLAY_NAME_FIELD)?,
			description_field: schema.get_field(DESCRIPTION_FIELD)?,
			fqn_parts_field: schema.get_field(FQN_PARTS_FIELD)?,
			source_field: schema.get_field(SOURCE_FIELD)?,
			index,
			writer_heap_bytes,
		})
	}

	/// Fetch the stored document for an entity id (or FQN).
	pub fn get(&self, entity_type: &str, id: &str) -> Result<Option<IndexDocument>> {
		let searcher = self.index.reader()?.searcher();
		let term = Term::from_field_text(self.key_field, &document_key(entity_type, id));
		let query = TermQuery::new(term, IndexRecordOption::Basic);
		let Some((_, address)) = searcher.search(&query, &TopDocs::with_limit(1))?.into_iter().next() else {
			return Ok(None);
		};
		let doc: TantivyDocument = searcher.doc(address)?;
		let source = doc.get_first(self.source_field).and_then(|v| v.as_str()).ok_or_else(|| anyhow!("document without stored source"))?;
		Ok(Some(serde_json::from_str(source)?))
	}

	pub fn num_docs(&self) -> Result<u64> {
		Ok(self.index.reader()?.searcher().num_docs())
	}

	fn to_tantivy(&self, key: &str, entity_type: &str, doc: &IndexDocument) -> Result<TantivyDocument> {
		let mut out = TantivyDocument::default();
		out.add_text(self.key_field, key);
		out.add_text(self.entity_type_field, entity_type);
		for (field, name) in [(self.name_field, NAME_FIELD), (self.display_name_field, DISPLAY_NAME_FIELD), (self.description_field, DESCRIPTION_FIELD)] {
			if let Some(text) = doc.get(name).and_then(Value::as_str) { out.add_text(field, text); }
		}
		if let Some(parts) = doc.get(FQN_PARTS_FIELD).and_then(Value::as_array) {
			for part in parts.iter().filter_map(Value::as_str) { out.add_text(self.fqn_parts_field, part); }
		}
		out.add_text(self.source_field, serde_json::to_string(doc)?);
		Ok(out)
	}
}

fn document_key(entity_type: &str, id: &str) -> String {
	format!("{}:{}", entity_type, id)
}

fn identity(doc: &IndexDocument) -> Option<&str> {
	doc.get("id").or_else(|| doc.get("fullyQualifiedName")).and_then(Value::as_str)
}

impl IndexSink for TantivyIndexer {
	fn upsert(&self, entity_type: &str, doc: &IndexDocument) -> Result<()> {
		self.upsert_all(entity_type, std::slice::from_ref(doc))
	}

	fn upsert_all(&self, entity_type: &str, docs: &[IndexDocument]) -> Result<()> {
		if docs.is_empty() { return Ok(()); }
		let mut index_writer: IndexWriter = self.index.writer(self.writer_heap_bytes)?;
		for doc in docs {
			let id = identity(doc).ok_or_else(|| anyhow!("{} document has neither id nor fullyQualifiedName", entity_type))?;
			let key = document_key(entity_type, id);
			index_writer.delete_term(Term::from_field_text(self.key_field, &key));
			index_writer.add_document(self.to_tantivy(&key, entity_type, doc)?)?;
			debug!(key = %key, "queued document");
		}
		index_writer.commit()?;
		info!(entity_type, count = docs.len(), "committed documents");
		Ok(())
	}
}
