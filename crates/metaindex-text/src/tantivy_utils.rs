use tantivy::schema::{IndexRecordOption, Schema, TextFieldIndexing, TextOptions, STORED, STRING};
use tantivy::tokenizer::{LowerCaser, SimpleTokenizer, StopWordFilter, TextAnalyzer};
use tantivy::Index;

pub const KEY_FIELD: &str = "key";
pub const ENTITY_TYPE_FIELD: &str = "entityType";
pub const NAME_FIELD: &str = "name";
pub const DISPLAY_NAME_FIELD: &str = "displayName";
pub const DESCRIPTION_FIELD: &str = "description";
pub const FQN_PARTS_FIELD: &str = "fqnParts";
pub const SOURCE_FIELD: &str = "source";

const TOKENIZER: &str = "catalog_text";

pub fn build_schema() -> Schema {
	let mut schema_builder = Schema::builder();
	schema_builder.add_text_field(KEY_FIELD, STRING | STORED);
	schema_builder.add_text_field(ENTITY_TYPE_FIELD, STRING | STORED);
	let text_field_indexing = TextFieldIndexing::default().set_tokenizer(TOKENIZER).set_index_option(IndexRecordOption::WithFreqsAndPositions);
	let text_options = TextOptions::default().set_indexing_options(text_field_indexing);
	schema_builder.add_text_field(NAME_FIELD, text_options.clone());
	schema_builder.add_text_field(DISPLAY_NAME_FIELD, text_options.clone());
	schema_builder.add_text_field(DESCRIPTION_FIELD, text_options);
	// each FQN prefix is one untokenized term
	schema_builder.add_text_field(FQN_PARTS_FIELD, STRING);
	schema_builder.add_text_field(SOURCE_FIELD, STORED);
	schema_builder.build()
}

pub fn register_tokenizer(index: &Index) {
	let stop_words = vec![
		"a","an","and","are","as","at","be","by","for","from","in","is","it","its","of","on","or","that","the","this","to","was","with",
	];
	let tokenizer = TextAnalyzer::builder(SimpleTokenizer::default())
		.filter(LowerCaser)
		.filter(StopWordFilter::remove(stop_words.into_iter().map(|s| s.to_string())))
		.build();
	index.tokenizers().register(TOKENIZER, tokenizer);
}
