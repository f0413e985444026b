//! Pre-run output tree cleanup
//!
//! The output tree is a git-ready copy of the database structures, so
//! dropped and renamed objects have to disappear from it. Removal happens
//! here, before any writes: this module knows the file layout being written
//! into, while the callers only know which databases they are reading.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{CoreError, CoreResult};
use crate::kind::ObjectKind;
use crate::sanitize::munged_name;

/// Remove the generated files for one database, or the whole output tree.
///
/// With a database name: in every kind directory, delete the database's own
/// definition file, its collision-suffix variants, and every dot-qualified
/// child object file. With `None`: delete every non-hidden directory under
/// the output root; the kind directories are recreated on demand by the
/// next run. A missing output root is nothing to do, not an error.
pub fn reset(database_name: Option<&str>, output_root: &Path) -> CoreResult<()> {
    match database_name {
        Some(name) => remove_database_files(name, output_root),
        None => {
            log::info!("removing files for all databases");
            remove_all_directories(output_root)
        }
    }
}

fn remove_database_files(database_name: &str, output_root: &Path) -> CoreResult<()> {
    let database = munged_name(database_name);
    for kind in ObjectKind::ALL {
        let dir = output_root.join(kind.keyword());
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => {
                return Err(CoreError::IoWithPath {
                    path: dir.display().to_string(),
                    source: e,
                })
            }
        };
        for entry in entries {
            let entry = entry?;
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };
            if is_stale(file_name, &database) {
                log::debug!("removing stale {}", entry.path().display());
                fs::remove_file(entry.path())?;
            }
        }
    }
    Ok(())
}

/// Whether `file_name` belongs to `database`: the database definition
/// itself (`DB.sql`), one of its collision variants (`DB_.sql`, ...), or a
/// dot-qualified child (`DB.SCHEMA.OBJECT.sql` and variants).
fn is_stale(file_name: &str, database: &str) -> bool {
    let Some(stem) = file_name.strip_suffix(".sql") else {
        return false;
    };
    let Some(rest) = stem.strip_prefix(database) else {
        return false;
    };
    rest.is_empty() || rest.starts_with('.') || rest.chars().all(|c| c == '_')
}

fn remove_all_directories(output_root: &Path) -> CoreResult<()> {
    let entries = match fs::read_dir(output_root) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            return Err(CoreError::IoWithPath {
                path: output_root.display().to_string(),
                source: e,
            })
        }
    };
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        fs::remove_dir_all(entry.path())?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "sync_test.rs"]
mod tests;
