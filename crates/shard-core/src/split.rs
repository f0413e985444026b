//! Lexical candidate and schema-chunk splitting
//!
//! Splitting is deliberately quote- and comment-blind: every case-insensitive
//! occurrence of the introducer token becomes a cut, and the completeness
//! checker decides afterwards which cuts were premature and merges them back
//! together. Doing the expensive comment/quote analysis only on merge
//! validation keeps the scan itself a plain regex pass.

use once_cell::sync::Lazy;
use regex::Regex;

static R_CREATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)create or replace").unwrap());
static R_SCHEMA: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)create or replace schema\b").unwrap());

/// Cut `text` at every statement-introducer occurrence.
///
/// Each returned slice starts at an introducer and runs to the next one (the
/// last runs to end of text). Text before the first introducer belongs to no
/// candidate. Zero matches yields an empty vec, which callers surface as
/// "nothing to do" rather than an error.
pub fn candidates(text: &str) -> Vec<&str> {
    spans_at(&R_CREATE, text)
}

/// Cut `text` at every schema-introducer occurrence.
///
/// Unlike [`candidates`], the text before the first schema introducer is
/// kept as a leading chunk: the database definition and any objects created
/// outside an explicit schema live there. When the dump defines no schemas
/// at all, the whole text is one implicit chunk.
pub fn schema_chunks(text: &str) -> Vec<&str> {
    let starts: Vec<usize> = R_SCHEMA.find_iter(text).map(|m| m.start()).collect();
    if starts.is_empty() {
        return vec![text];
    }

    let mut chunks = Vec::with_capacity(starts.len() + 1);
    if starts[0] > 0 {
        chunks.push(&text[..starts[0]]);
    }
    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(text.len());
        chunks.push(&text[start..end]);
    }
    chunks
}

fn spans_at<'t>(pattern: &Regex, text: &'t str) -> Vec<&'t str> {
    let starts: Vec<usize> = pattern.find_iter(text).map(|m| m.start()).collect();
    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(text.len());
            &text[start..end]
        })
        .collect()
}
