use serde::{Deserialize, Serialize};

/// One autocomplete candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionEntry {
    pub input: String,
    pub weight: u32,
}

impl SuggestionEntry {
    pub fn new(input: impl Into<String>, weight: u32) -> Self {
        Self { input: input.into(), weight }
    }
}

/// Where a suggestion's text comes from, and the weight it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionSource {
    Name(u32),
    FullyQualifiedName(u32),
}

/// Build suggestions in the order `sources` lists them.
///
/// A source with no value (an entity without an FQN) contributes nothing.
pub fn build_suggestions(
    sources: &[SuggestionSource],
    name: &str,
    fqn: Option<&str>,
) -> Vec<SuggestionEntry> {
    sources
        .iter()
        .filter_map(|source| match *source {
            SuggestionSource::Name(weight) => Some(SuggestionEntry::new(name, weight)),
            SuggestionSource::FullyQualifiedName(weight) => {
                fqn.map(|fqn| SuggestionEntry::new(fqn, weight))
            }
        })
        .collect()
}

pub fn suggestion_inputs(suggestions: &[SuggestionEntry]) -> Vec<String> {
    suggestions.iter().map(|s| s.input.clone()).collect()
}
