//! Candidate resolution within one schema chunk
//!
//! Two mechanisms turn raw candidate cuts into whole objects. First,
//! completeness-driven merging: a cut whose quoting or BEGIN/END nesting
//! doesn't balance swallows the next cut and re-tests, because the
//! introducer it was cut at belonged to a statement nested inside it.
//! Second, an ordering heuristic for nested statements that happen to
//! balance on their own: dumps list the non-programmatic objects of a schema
//! before its programmatic ones, so once a programmatic object has gone by,
//! a non-programmatic candidate can only be debris from the preceding body
//! and is appended to it rather than promoted.

use crate::balance;
use crate::error::{CoreError, CoreResult};
use crate::header::parse_header;
use crate::kind::ObjectKind;
use crate::split;
use crate::summary::{snippet_of, SkippedObject, Summary};

/// A whole, classified object definition.
///
/// `definition_text` starts at the statement introducer and is structurally
/// complete under the stripped view, except for [`ObjectKind::FileFormat`],
/// which is exempt from the quote-balance test: the upstream generator emits
/// an unclosed quote in `FIELD_OPTIONALLY_ENCLOSED_BY` for that kind.
#[derive(Debug, Clone)]
pub struct ResolvedObject {
    pub kind: ObjectKind,
    pub raw_name: String,
    pub definition_text: String,
}

/// Everything resolution produced for one schema chunk.
#[derive(Debug, Default)]
pub struct ChunkOutcome {
    pub objects: Vec<ResolvedObject>,
    pub skipped: Vec<SkippedObject>,
}

/// Resolve every candidate in one schema chunk, in document order.
///
/// Fatal only when the candidate stream runs out mid-merge; per-object
/// header failures are recorded in the outcome and the run continues.
pub fn resolve_chunk(chunk: &str) -> CoreResult<ChunkOutcome> {
    let candidates = split::candidates(chunk);
    let mut outcome = ChunkOutcome::default();
    // Explicit accumulator for the ordering heuristic, reset per chunk.
    let mut seen_programmatic = false;

    let mut i = 0;
    while i < candidates.len() {
        let mut definition = candidates[i].to_string();
        i += 1;

        loop {
            if is_quote_exempt(&definition) || balance::is_complete(&definition) {
                break;
            }
            match candidates.get(i) {
                Some(next) => {
                    definition.push_str(next);
                    i += 1;
                }
                None => {
                    return Err(CoreError::UnterminatedDump {
                        snippet: snippet_of(&definition),
                        partial: Summary::default(),
                    })
                }
            }
        }

        seen_programmatic = classify(&mut outcome, seen_programmatic, definition);
    }

    Ok(outcome)
}

/// File formats are accepted unconditionally once the header is recognized.
fn is_quote_exempt(definition: &str) -> bool {
    parse_header(definition).is_some_and(|h| h.kind == ObjectKind::FileFormat)
}

/// Classify one complete candidate, threading the "seen a programmatic
/// object yet" flag through as the fold state.
fn classify(outcome: &mut ChunkOutcome, seen_programmatic: bool, definition: String) -> bool {
    let Some(header) = parse_header(&definition) else {
        log::error!(
            "unable to match an object type and name from:\n{}",
            snippet_of(&definition)
        );
        outcome.skipped.push(SkippedObject::unrecognized(snippet_of(&definition)));
        return seen_programmatic;
    };

    if seen_programmatic && !header.kind.is_programmatic() {
        // Past the programmatic boundary this can only be a definition
        // embedded in the previous object's body; keep its text there.
        if let Some(previous) = outcome.objects.last_mut() {
            log::debug!(
                "folding nested {} {} into {}",
                header.kind,
                header.name,
                previous.raw_name
            );
            previous.definition_text.push_str(&definition);
        }
        return seen_programmatic;
    }

    log::debug!("{} => {}", header.kind, header.name);
    let kind = header.kind;
    outcome.objects.push(ResolvedObject {
        kind,
        raw_name: header.name,
        definition_text: definition,
    });
    seen_programmatic || kind.is_programmatic()
}

#[cfg(test)]
#[path = "resolve_test.rs"]
mod tests;
