//! Fully-qualified-name decomposition for hierarchical prefix search.
//!
//! `db.sales."orders.v2".cleanup` has four segments; a segment wrapped in
//! double quotes may contain the separator. Quotes are kept verbatim in the
//! emitted prefixes so they still match the stored FQN text.

pub const FQN_SEPARATOR: char = '.';
const QUOTE: char = '"';

/// Split an FQN into its segments.
///
/// An unbalanced quote makes the quoted split meaningless, so the name falls
/// back to a plain split on the separator instead of failing.
pub fn split(fqn: &str) -> Vec<&str> {
    split_quoted(fqn).unwrap_or_else(|| fqn.split(FQN_SEPARATOR).collect())
}

fn split_quoted(fqn: &str) -> Option<Vec<&str>> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    for (i, c) in fqn.char_indices() {
        match c {
            QUOTE => in_quotes = !in_quotes,
            FQN_SEPARATOR if !in_quotes => {
                segments.push(&fqn[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    if in_quotes {
        return None;
    }
    segments.push(&fqn[start..]);
    Some(segments)
}

/// Progressively longer prefixes of `fqn`, followed by `additional_inputs`.
///
/// For k segments the first k entries are the joins of the first 1..=k
/// segments, so the k-th is the FQN itself. The additional inputs are
/// appended as given, duplicates included. A missing or empty FQN yields
/// only the additional inputs.
pub fn fqn_parts(fqn: Option<&str>, additional_inputs: &[String]) -> Vec<String> {
    let mut parts = Vec::with_capacity(additional_inputs.len());
    if let Some(fqn) = fqn.filter(|f| !f.is_empty()) {
        let segments = split(fqn);
        parts.reserve(segments.len());
        let mut prefix = String::with_capacity(fqn.len());
        for (i, segment) in segments.iter().enumerate() {
            if i > 0 {
                prefix.push(FQN_SEPARATOR);
            }
            prefix.push_str(segment);
            parts.push(prefix.clone());
        }
    }
    parts.extend(additional_inputs.iter().cloned());
    parts
}
