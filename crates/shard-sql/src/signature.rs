//! Routine signature extraction
//!
//! Functions and procedures are the only object kinds Snowflake allows to
//! overload, so their file names must carry the declared parameter types as
//! well as the routine name. The header is walked at token level rather than
//! parsed as a full statement: routine bodies are frequently JavaScript or
//! multi-statement SQL scripts that no statement-level parser accepts, while
//! the tokenizer only has to get string literals and comments right.

use serde::Serialize;
use sqlparser::dialect::SnowflakeDialect;
use sqlparser::keywords::Keyword;
use sqlparser::tokenizer::{Token, Tokenizer};

use crate::error::{SqlError, SqlResult};

/// Maximum characters kept from a declared type when no abbreviation applies.
///
/// Five is the shortest prefix that still tells the common scalar types
/// apart (VARCHAR/VARIANT, NUMBER/NUMERIC).
const SHORT_TYPE_LEN: usize = 5;

/// A routine's qualified name and its declared parameter types, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutineSignature {
    /// Dot-joined qualified name, quoting removed
    pub name: String,
    /// Declared parameter type names as written, minus precision arguments
    pub arg_types: Vec<String>,
}

impl RoutineSignature {
    /// Render the signature as `name(shortType1,shortType2,...)`.
    ///
    /// Each declared type is shortened via [`short_type`] so that routines
    /// with many long parameter types still fit filesystem name limits.
    pub fn disambiguated_name(&self) -> String {
        let shortened: Vec<String> = self.arg_types.iter().map(|t| short_type(t)).collect();
        format!("{}({})", self.name, shortened.join(","))
    }
}

/// Shorten a declared parameter type for use in a filename.
///
/// The timestamp flavors only differ after the underscore, so truncation
/// alone cannot tell them apart; they get explicit abbreviations. Everything
/// else keeps a fixed-length uppercase prefix.
fn short_type(declared: &str) -> String {
    let upper = declared.to_uppercase();
    match upper.as_str() {
        "TIMESTAMP_NTZ" => "TSNTZ".to_string(),
        "TIMESTAMP_LTZ" => "TSLTZ".to_string(),
        "TIMESTAMP_TZ" => "TSTZ".to_string(),
        _ => upper.chars().take(SHORT_TYPE_LEN).collect(),
    }
}

/// Extract the qualified name and declared parameter types from a
/// `CREATE OR REPLACE FUNCTION` / `PROCEDURE` definition.
///
/// Tokenizes the whole definition with the Snowflake dialect, then walks the
/// header: the first FUNCTION/PROCEDURE keyword, a dot-separated name, and a
/// parenthesized parameter list. Precision arguments (`VARCHAR(16)`) and
/// `DEFAULT` expressions are skipped; only the leading type word of each
/// parameter is kept.
pub fn parse_routine_signature(definition: &str) -> SqlResult<RoutineSignature> {
    let dialect = SnowflakeDialect {};
    let tokens = Tokenizer::new(&dialect, definition)
        .tokenize()
        .map_err(|e| SqlError::Tokenize {
            message: e.to_string(),
        })?;
    let tokens: Vec<&Token> = tokens
        .iter()
        .filter(|t| !matches!(t, Token::Whitespace(_)))
        .collect();

    let routine_kw = tokens
        .iter()
        .position(|t| {
            matches!(t, Token::Word(w)
                if matches!(w.keyword, Keyword::FUNCTION | Keyword::PROCEDURE))
        })
        .ok_or(SqlError::NotARoutine)?;

    let (name, after_name) = parse_qualified_name(&tokens, routine_kw + 1)?;

    if !matches!(tokens.get(after_name), Some(Token::LParen)) {
        return Err(SqlError::MalformedHeader {
            expected: "parameter list",
        });
    }
    let arg_types = parse_parameter_types(&tokens, after_name + 1)?;

    Ok(RoutineSignature { name, arg_types })
}

/// Parse `ident(.ident)*` starting at `pos`; returns the joined name and the
/// index of the first token past it.
fn parse_qualified_name(tokens: &[&Token], pos: usize) -> SqlResult<(String, usize)> {
    let mut parts: Vec<String> = Vec::new();
    let mut i = pos;
    loop {
        match tokens.get(i) {
            Some(Token::Word(w)) => {
                parts.push(w.value.clone());
                i += 1;
            }
            _ => {
                return Err(SqlError::MalformedHeader {
                    expected: "identifier",
                })
            }
        }
        match tokens.get(i) {
            Some(Token::Period) => i += 1,
            _ => break,
        }
    }
    Ok((parts.join("."), i))
}

/// Parse the declared type of every parameter in the list opened just before
/// `pos`. Consumes up to and including the closing parenthesis.
fn parse_parameter_types(tokens: &[&Token], pos: usize) -> SqlResult<Vec<String>> {
    let mut arg_types = Vec::new();
    let mut i = pos;

    if matches!(tokens.get(i), Some(Token::RParen)) {
        return Ok(arg_types);
    }

    loop {
        // parameter name
        if !matches!(tokens.get(i), Some(Token::Word(_))) {
            return Err(SqlError::MalformedHeader {
                expected: "parameter name",
            });
        }
        i += 1;

        // declared type: keep the first word, skip the rest of the
        // declaration (precision arguments, DEFAULT expressions)
        let declared = match tokens.get(i) {
            Some(Token::Word(w)) => w.value.clone(),
            _ => {
                return Err(SqlError::MalformedHeader {
                    expected: "parameter type",
                })
            }
        };
        i += 1;

        let mut depth = 0usize;
        loop {
            match tokens.get(i) {
                Some(Token::LParen) => {
                    depth += 1;
                    i += 1;
                }
                Some(Token::RParen) if depth > 0 => {
                    depth -= 1;
                    i += 1;
                }
                Some(Token::RParen) => break,
                Some(Token::Comma) if depth == 0 => break,
                Some(_) => i += 1,
                None => {
                    return Err(SqlError::MalformedHeader {
                        expected: "closing parenthesis",
                    })
                }
            }
        }
        arg_types.push(declared);

        match tokens.get(i) {
            Some(Token::Comma) => i += 1,
            Some(Token::RParen) => break,
            _ => {
                return Err(SqlError::MalformedHeader {
                    expected: "comma or closing parenthesis",
                })
            }
        }
    }

    Ok(arg_types)
}

#[cfg(test)]
#[path = "signature_test.rs"]
mod tests;
