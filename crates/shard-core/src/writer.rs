//! Definition file output
//!
//! The only component with a persistent, externally visible side effect.
//! Every object lands at `<kind keyword>/<sanitized name>.sql` under the
//! output root; writes are full-content overwrites.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::error::CoreResult;
use crate::kind::ObjectKind;
use crate::sanitize::munged_name;

/// Upper bound on collision-suffix attempts for one object.
///
/// Some databases carry two versions of the same object differing only by
/// case; on case-insensitive filesystems the existence check sees them as
/// one file, so colliding names get trailing underscores until a free name
/// turns up or the budget runs out.
const MAX_COLLISION_RETRIES: usize = 100;

/// Per-object write failures. Recoverable: the run logs, skips the object,
/// and keeps going.
#[derive(Error, Debug)]
pub enum WriteError {
    /// No free filename within [`MAX_COLLISION_RETRIES`] suffix attempts
    #[error("no free filename for '{name}' after {MAX_COLLISION_RETRIES} collision suffixes")]
    CollisionRetriesExhausted { name: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Writes object definitions under one output root, tracking which kind
/// directories the run has touched.
#[derive(Debug)]
pub struct ObjectWriter {
    root: PathBuf,
    touched: BTreeSet<ObjectKind>,
}

impl ObjectWriter {
    pub fn new(root: impl Into<PathBuf>) -> ObjectWriter {
        ObjectWriter {
            root: root.into(),
            touched: BTreeSet::new(),
        }
    }

    /// Write one definition, sanitizing the name and suffixing underscores
    /// past any existing file until a free path is found.
    pub fn write(
        &mut self,
        kind: ObjectKind,
        name: &str,
        definition: &str,
    ) -> Result<PathBuf, WriteError> {
        let dir = self.root.join(kind.keyword());
        fs::create_dir_all(&dir)?;

        let mut filename = munged_name(name);
        for _ in 0..MAX_COLLISION_RETRIES {
            let path = dir.join(format!("{filename}.sql"));
            if !path.exists() {
                fs::write(&path, definition)?;
                self.touched.insert(kind);
                return Ok(path);
            }
            log::warn!("{filename} already exists; adding suffix");
            filename.push('_');
        }
        Err(WriteError::CollisionRetriesExhausted {
            name: munged_name(name),
        })
    }

    /// Distinct kind directories written into so far.
    pub fn directories_touched(&self) -> usize {
        self.touched.len()
    }
}

/// Write a placeholder for an imported database where the definitions are
/// not obtainable.
///
/// Imported databases are links into other instances: we can use them, but
/// the bulk DDL call returns nothing for their contents. A stub under the
/// `database` kind directory records their existence.
pub fn write_placeholder(database_name: &str, output_root: &Path) -> CoreResult<()> {
    let dir = output_root.join(ObjectKind::Database.keyword());
    fs::create_dir_all(&dir)?;

    let filename = munged_name(database_name);
    let body = format!(
        "create or replace database {database_name}:\n\
         -- This is an 'Imported Database'\n\
         -- The \"GET_DDL\" function has not extracted any objects within this database\n"
    );
    fs::write(dir.join(format!("{filename}.sql")), body)?;
    Ok(())
}

#[cfg(test)]
#[path = "writer_test.rs"]
mod tests;
