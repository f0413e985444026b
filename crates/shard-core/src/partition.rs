//! The partition driver
//!
//! One invocation takes one database's dump text and rebuilds that
//! database's slice of the output tree: stale files are removed first, then
//! every resolved object is written in document order. The classifier's
//! programmatic-seen flag and the collision suffix allocation both depend
//! on that order, so the driver is strictly sequential.

use std::fs;
use std::path::Path;

use crate::error::{CoreError, CoreResult};
use crate::normalize::normalize_dump;
use crate::resolve::{resolve_chunk, ResolvedObject};
use crate::split::schema_chunks;
use crate::summary::{SkippedObject, Summary};
use crate::sync;
use crate::writer::{ObjectWriter, WriteError};

/// Split one database's dump text into per-object files under `output_root`.
///
/// Runs the stale-file sync for `database_name` first, so a rerun with a
/// smaller dump leaves no leftovers. Empty text is valid and yields an
/// empty summary. Fatal errors (unwritable root, a statement left
/// unterminated at end of dump) abort the run; everything else is recorded
/// as a per-object skip in the returned [`Summary`].
pub fn partition(database_name: &str, raw_text: &str, output_root: &Path) -> CoreResult<Summary> {
    fs::create_dir_all(output_root).map_err(|e| CoreError::IoWithPath {
        path: output_root.display().to_string(),
        source: e,
    })?;
    sync::reset(Some(database_name), output_root)?;

    let text = normalize_dump(raw_text);
    let mut summary = Summary::default();
    let mut writer = ObjectWriter::new(output_root);

    for chunk in schema_chunks(&text) {
        let outcome = match resolve_chunk(chunk) {
            Ok(outcome) => outcome,
            Err(CoreError::UnterminatedDump { snippet, .. }) => {
                return Err(CoreError::UnterminatedDump {
                    snippet,
                    partial: summary,
                })
            }
            Err(e) => return Err(e),
        };
        summary.skipped.extend(outcome.skipped);

        for object in outcome.objects {
            write_object(&mut writer, object, &mut summary);
        }
    }

    summary.directories = writer.directories_touched();
    Ok(summary)
}

/// Write one resolved object, resolving routine signatures first and
/// downgrading any failure to a logged skip.
fn write_object(writer: &mut ObjectWriter, object: ResolvedObject, summary: &mut Summary) {
    let ResolvedObject {
        kind,
        raw_name,
        definition_text,
    } = object;

    let output_name = if kind.is_overloadable() {
        match shard_sql::parse_routine_signature(&definition_text) {
            Ok(signature) => signature.disambiguated_name(),
            Err(e) => {
                log::error!("skipping {kind} {raw_name}: {e}");
                summary
                    .skipped
                    .push(SkippedObject::signature(kind, raw_name, e.to_string()));
                return;
            }
        }
    } else {
        raw_name
    };

    match writer.write(kind, &output_name, &definition_text) {
        Ok(path) => {
            log::debug!("{kind} {output_name} => {}", path.display());
            summary.written += 1;
        }
        Err(WriteError::CollisionRetriesExhausted { name }) => {
            log::error!("no free filename left for {kind} {name}; skipping");
            summary
                .skipped
                .push(SkippedObject::collisions_exhausted(kind, name));
        }
        Err(WriteError::Io(e)) => {
            log::error!("failed to write {kind} {output_name}: {e}");
            summary
                .skipped
                .push(SkippedObject::write_failed(kind, output_name, e.to_string()));
        }
    }
}

#[cfg(test)]
#[path = "partition_test.rs"]
mod tests;
