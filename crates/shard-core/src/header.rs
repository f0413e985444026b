//! Object type and name extraction from a statement preamble

use once_cell::sync::Lazy;
use regex::Regex;

use crate::kind::ObjectKind;

// The alternation lists keywords longest-first so two-word kinds win over
// their one-word suffixes ("materialized view" before "view").
static R_PREAMBLE: Lazy<Regex> = Lazy::new(|| {
    let mut keywords: Vec<&str> = ObjectKind::ALL.iter().map(|k| k.keyword()).collect();
    keywords.sort_by_key(|k| std::cmp::Reverse(k.len()));
    let pattern = format!(
        r#"(?i)^create or replace\s*(?:transient)?\s+({})\s+([0-9A-Za-z_.$\-"]+)"#,
        keywords.join("|")
    );
    Regex::new(&pattern).unwrap()
});

/// The classified preamble of one object definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub kind: ObjectKind,
    /// Object name with surrounding double quotes stripped; embedded quotes
    /// are left for the sanitizer.
    pub name: String,
}

/// Parse the preamble of a definition into its kind and name.
///
/// Returns `None` when the text doesn't open with
/// `CREATE OR REPLACE [TRANSIENT] <recognized kind> <name>`; callers treat
/// that as a per-object skip, not a failure of the whole run.
pub fn parse_header(definition: &str) -> Option<Header> {
    let caps = R_PREAMBLE.captures(definition)?;
    let kind = ObjectKind::from_keyword(&caps[1])?;
    let name = caps[2].trim_matches('"').to_string();
    Some(Header { kind, name })
}
