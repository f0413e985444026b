//! Error types for shard-sql

use thiserror::Error;

/// Routine signature extraction errors
#[derive(Error, Debug)]
pub enum SqlError {
    /// Tokenizer failure (S001)
    #[error("[S001] failed to tokenize routine definition: {message}")]
    Tokenize { message: String },

    /// No routine keyword found (S002)
    #[error("[S002] no FUNCTION or PROCEDURE keyword in definition")]
    NotARoutine,

    /// Header shape mismatch (S003)
    #[error("[S003] malformed routine header: expected {expected}")]
    MalformedHeader { expected: &'static str },
}

/// Result type alias for SqlError
pub type SqlResult<T> = Result<T, SqlError>;
