//! shard-sql - SQL tokenization layer for Snowshard
//!
//! This crate extracts routine signatures (qualified name plus declared
//! parameter types) from `CREATE OR REPLACE FUNCTION` / `PROCEDURE`
//! definitions using the sqlparser-rs tokenizer with the Snowflake dialect.

pub mod error;
pub mod signature;

pub use error::SqlError;
pub use signature::{parse_routine_signature, RoutineSignature};
