//! Error types for shard-core

use thiserror::Error;

use crate::summary::Summary;

/// Core error type for Snowshard
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: The candidate stream ran out while a statement was still
    /// structurally incomplete. The whole run is aborted; `partial` holds
    /// whatever the run had gathered before failing, for diagnostics only.
    /// Callers must not treat it as usable output.
    #[error("[E001] dump ended inside an unterminated statement near: {snippet}")]
    UnterminatedDump { snippet: String, partial: Summary },

    /// E002: A dump file path with no usable file stem
    #[error("[E002] cannot derive a database name from: {path}")]
    InvalidDumpPath { path: String },

    /// E003: Config parse error
    #[error("[E003] Failed to parse config: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// E004: IO error
    #[error("[E004] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// E005: IO error with file path context
    #[error("[E005] Failed to access '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
