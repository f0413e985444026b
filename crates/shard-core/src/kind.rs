//! The closed vocabulary of recognized database object kinds

use serde::Serialize;
use std::fmt;

/// Whether an object kind's definition can contain executable logic.
///
/// Programmatic objects may embed nested `CREATE OR REPLACE` statements in
/// their bodies; that property, not the literal type name, is what the
/// classifier's reordering heuristic keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectCategory {
    /// Routines, scheduled tasks and the like; bodies hold executable logic
    Programmatic,
    /// Purely structural objects: tables, views, sequences, formats
    NonProgrammatic,
}

/// A recognized database object kind.
///
/// Each variant carries its dump keyword (the type words between
/// `CREATE OR REPLACE [TRANSIENT]` and the object name) and its
/// [`ObjectCategory`] as associated constants, so adding a kind without
/// classifying it is a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    Database,
    Schema,
    Table,
    TemporaryTable,
    IcebergTable,
    EventTable,
    DynamicTable,
    MaterializedView,
    SecureView,
    View,
    Stream,
    Pipe,
    Sequence,
    Tag,
    FileFormat,
    Function,
    Procedure,
    Task,
    Alert,
    Streamlit,
}

impl ObjectKind {
    /// Every recognized kind, in no significant order.
    pub const ALL: [ObjectKind; 20] = [
        ObjectKind::Database,
        ObjectKind::Schema,
        ObjectKind::Table,
        ObjectKind::TemporaryTable,
        ObjectKind::IcebergTable,
        ObjectKind::EventTable,
        ObjectKind::DynamicTable,
        ObjectKind::MaterializedView,
        ObjectKind::SecureView,
        ObjectKind::View,
        ObjectKind::Stream,
        ObjectKind::Pipe,
        ObjectKind::Sequence,
        ObjectKind::Tag,
        ObjectKind::FileFormat,
        ObjectKind::Function,
        ObjectKind::Procedure,
        ObjectKind::Task,
        ObjectKind::Alert,
        ObjectKind::Streamlit,
    ];

    /// The lowercased type keyword as it appears in dump text. Also used as
    /// the name of the kind's output directory.
    pub const fn keyword(self) -> &'static str {
        match self {
            ObjectKind::Database => "database",
            ObjectKind::Schema => "schema",
            ObjectKind::Table => "table",
            ObjectKind::TemporaryTable => "temporary table",
            ObjectKind::IcebergTable => "iceberg table",
            ObjectKind::EventTable => "event table",
            ObjectKind::DynamicTable => "dynamic table",
            ObjectKind::MaterializedView => "materialized view",
            ObjectKind::SecureView => "secure view",
            ObjectKind::View => "view",
            ObjectKind::Stream => "stream",
            ObjectKind::Pipe => "pipe",
            ObjectKind::Sequence => "sequence",
            ObjectKind::Tag => "tag",
            ObjectKind::FileFormat => "file format",
            ObjectKind::Function => "function",
            ObjectKind::Procedure => "procedure",
            ObjectKind::Task => "task",
            ObjectKind::Alert => "alert",
            ObjectKind::Streamlit => "streamlit",
        }
    }

    /// Whether definitions of this kind hold executable logic.
    pub const fn category(self) -> ObjectCategory {
        match self {
            ObjectKind::Function
            | ObjectKind::Procedure
            | ObjectKind::Task
            | ObjectKind::Alert
            | ObjectKind::Streamlit => ObjectCategory::Programmatic,
            _ => ObjectCategory::NonProgrammatic,
        }
    }

    /// Shorthand for `category() == Programmatic`.
    pub const fn is_programmatic(self) -> bool {
        matches!(self.category(), ObjectCategory::Programmatic)
    }

    /// Whether this kind supports overloading and therefore needs its
    /// parameter types folded into the output filename.
    pub const fn is_overloadable(self) -> bool {
        matches!(self, ObjectKind::Function | ObjectKind::Procedure)
    }

    /// Look up a kind from matched dump text (any case, any inner run of
    /// whitespace between the words of two-word kinds).
    pub fn from_keyword(keyword: &str) -> Option<ObjectKind> {
        let normalized = keyword.to_lowercase();
        let normalized = normalized.split_whitespace().collect::<Vec<_>>().join(" ");
        ObjectKind::ALL
            .iter()
            .copied()
            .find(|k| k.keyword() == normalized)
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
