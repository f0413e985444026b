//! Structural completeness testing
//!
//! A candidate cut is only a whole statement if its quoting and its
//! BEGIN/END nesting both balance. Counting either on the raw text would be
//! thrown off by comments, escapes, and quoted identifiers, so the counts
//! run over a [`StrippedView`] instead: a scratch representation that
//! exists for balance testing only and is never written to disk.

use once_cell::sync::Lazy;
use regex::Regex;

// A quoted run of dashes (a popular separator literal) must be removed
// before line-comment stripping sees it: the `--` inside the literal would
// otherwise swallow the closing quote and leave the view looking
// unterminated. This is the one quoting scheme the checker special-cases.
static R_QUOTED_DASHES: Lazy<Regex> = Lazy::new(|| Regex::new(r"'-+'").unwrap());
static R_BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());
static R_LINE_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)(--|//).*$").unwrap());
// "BEGIN" / "END" used as quoted identifiers (column names, usually) must
// not count toward nesting balance.
static R_QUOTED_BEGIN_END: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(?i)"(begin|end)""#).unwrap());
static R_BEGIN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bbegin\b").unwrap());
static R_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bend\b").unwrap());

/// The comment-and-escape-stripped rendering of a candidate, used only for
/// balance counting.
///
/// Deliberately a distinct type from the raw definition text so the two can
/// never be swapped: nothing in this struct can reach the writer.
#[derive(Debug)]
pub struct StrippedView(String);

impl StrippedView {
    /// Build the stripped view of a candidate's raw text.
    pub fn new(raw: &str) -> StrippedView {
        let text = raw.replace("\\\\", "").replace("\\'", "");
        let text = R_QUOTED_DASHES.replace_all(&text, "");
        let text = R_BLOCK_COMMENT.replace_all(&text, "");
        let text = R_LINE_COMMENT.replace_all(&text, "");
        let text = R_QUOTED_BEGIN_END.replace_all(&text, "\"\"");
        StrippedView(text.into_owned())
    }

    /// Whether the view's single quotes pair up.
    pub fn quotes_balanced(&self) -> bool {
        self.0.matches('\'').count() % 2 == 0
    }

    /// Whether every whole-word BEGIN has a matching whole-word END.
    pub fn begin_end_balanced(&self) -> bool {
        R_BEGIN.find_iter(&self.0).count() == R_END.find_iter(&self.0).count()
    }

    /// The full completeness test: both balances must hold.
    pub fn is_balanced(&self) -> bool {
        self.quotes_balanced() && self.begin_end_balanced()
    }
}

/// Test whether `definition` is a structurally complete statement.
pub fn is_complete(definition: &str) -> bool {
    StrippedView::new(definition).is_balanced()
}

#[cfg(test)]
#[path = "balance_test.rs"]
mod tests;
