//! Run summaries and per-object skip records

use serde::Serialize;
use std::fmt;

use crate::kind::ObjectKind;

/// What one `partition` invocation did.
///
/// Per-object failures are accumulated here rather than raised; only the
/// fatal conditions in [`CoreError`](crate::CoreError) abort a run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    /// Object definition files written
    pub written: usize,
    /// Objects skipped, with reasons
    pub skipped: Vec<SkippedObject>,
    /// Distinct kind directories written into
    pub directories: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "wrote {} object{} into {} director{}, {} skipped",
            self.written,
            if self.written == 1 { "" } else { "s" },
            self.directories,
            if self.directories == 1 { "y" } else { "ies" },
            self.skipped.len()
        )
    }
}

/// One object the run could not write, and why.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedObject {
    /// The classified kind, when the header got that far
    pub kind: Option<ObjectKind>,
    /// The raw object name, when the header got that far
    pub name: Option<String>,
    pub reason: SkipReason,
}

impl SkippedObject {
    pub fn unrecognized(snippet: String) -> SkippedObject {
        SkippedObject {
            kind: None,
            name: None,
            reason: SkipReason::UnrecognizedHeader { snippet },
        }
    }

    pub fn signature(kind: ObjectKind, name: String, message: String) -> SkippedObject {
        SkippedObject {
            kind: Some(kind),
            name: Some(name),
            reason: SkipReason::SignatureParse { message },
        }
    }

    pub fn write_failed(kind: ObjectKind, name: String, message: String) -> SkippedObject {
        SkippedObject {
            kind: Some(kind),
            name: Some(name),
            reason: SkipReason::WriteFailed { message },
        }
    }

    pub fn collisions_exhausted(kind: ObjectKind, name: String) -> SkippedObject {
        SkippedObject {
            kind: Some(kind),
            name: Some(name),
            reason: SkipReason::CollisionRetriesExhausted,
        }
    }
}

/// Why an object was skipped.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The statement preamble matched no recognized kind/name grammar
    UnrecognizedHeader { snippet: String },
    /// A routine definition defeated the signature tokenizer
    SignatureParse { message: String },
    /// The definition file could not be written
    WriteFailed { message: String },
    /// No free filename within the collision retry budget
    CollisionRetriesExhausted,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnrecognizedHeader { snippet } => {
                write!(f, "unrecognized statement header: {snippet}")
            }
            SkipReason::SignatureParse { message } => {
                write!(f, "routine signature parse failed: {message}")
            }
            SkipReason::WriteFailed { message } => write!(f, "write failed: {message}"),
            SkipReason::CollisionRetriesExhausted => {
                write!(f, "collision retries exhausted")
            }
        }
    }
}

/// Clip a definition's raw text for log and error messages.
pub(crate) fn snippet_of(text: &str) -> String {
    const SNIPPET_LEN: usize = 160;
    if text.chars().count() <= SNIPPET_LEN {
        text.trim_end().to_string()
    } else {
        let clipped: String = text.chars().take(SNIPPET_LEN).collect();
        format!("{}...", clipped.trim_end())
    }
}
