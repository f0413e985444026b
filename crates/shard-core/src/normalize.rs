//! Dump text canonicalization

use once_cell::sync::Lazy;
use regex::Regex;

// Tag assignments carry no object definition and their quoting trips up the
// downstream boundary detection, so they are dropped wholesale.
static R_TAG_STATEMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)alter\s+database\s+\S+\s+set\s+tag\b[^;]*;\n?").unwrap());

/// Canonicalize a raw dump before any boundary detection.
///
/// Converts Windows-style CR/LF line endings to LF only, guarantees a
/// trailing newline, and strips `ALTER DATABASE ... SET TAG ...;`
/// statements. Never fails; the logical content is otherwise unchanged.
pub fn normalize_dump(raw: &str) -> String {
    let mut text = raw.replace('\r', "");
    if !text.ends_with('\n') {
        text.push('\n');
    }
    R_TAG_STATEMENT.replace_all(&text, "").into_owned()
}
