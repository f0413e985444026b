//! Dump acquisition interface
//!
//! Where the raw dump text comes from is a collaborator concern: a live
//! connection issuing the bulk DDL call, a file captured earlier, a test
//! fixture. The partitioner only needs a name and the text.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};

/// A provider of one database's bulk DDL text.
pub trait DumpSource {
    /// The logical database name the dump describes.
    fn database_name(&self) -> &str;

    /// Fetch the full dump text.
    fn ddl(&self) -> CoreResult<String>;
}

/// A dump captured to a file. The database name is assumed from the file
/// stem: `WAREHOUSES.sql` describes database `WAREHOUSES`.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    database_name: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> CoreResult<FileSource> {
        let path = path.into();
        let database_name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .filter(|stem| !stem.is_empty())
            .map(str::to_string)
            .ok_or_else(|| CoreError::InvalidDumpPath {
                path: path.display().to_string(),
            })?;
        Ok(FileSource {
            path,
            database_name,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DumpSource for FileSource {
    fn database_name(&self) -> &str {
        &self.database_name
    }

    fn ddl(&self) -> CoreResult<String> {
        fs::read_to_string(&self.path).map_err(|e| CoreError::IoWithPath {
            path: self.path.display().to_string(),
            source: e,
        })
    }
}
