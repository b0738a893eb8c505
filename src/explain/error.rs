//! Analyzer diagnostics.
//!
//! Each variant renders as the exact sentence returned to the caller in
//! place of an explanation.

use thiserror::Error;

/// Result type for analysis steps.
pub type ExplainResult<T> = Result<T, Diagnostic>;

/// Reasons a statement could not be explained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("The given query is malformed. It is empty.")]
    EmptyStatement,

    #[error(
        "The given query is not supported. \
         Only SELECT and INSERT statements can be explained."
    )]
    UnsupportedStatement(String),

    #[error("The given SELECT query is malformed. It does not have a FROM clause.")]
    MissingFrom,

    #[error("The given SELECT query is malformed. It does not specify any columns.")]
    MissingColumns,

    #[error("The given SELECT query is malformed. It does not specify a table.")]
    MissingSelectTable,

    #[error("The given SELECT query is malformed. Every selected column needs an alias.")]
    MissingAlias,

    #[error("The given INSERT query is malformed. It does not specify a table.")]
    MissingInsertTable,

    #[error("The given INSERT query is malformed. It does not have a VALUES clause.")]
    MissingValues,

    #[error(
        "The given INSERT query is malformed. It lists {} but {}.",
        counted(.columns, "column"),
        counted(.values, "value")
    )]
    ShapeMismatch { columns: usize, values: usize },
}

fn counted(n: &usize, noun: &str) -> String {
    if *n == 1 {
        format!("1 {noun}")
    } else {
        format!("{n} {noun}s")
    }
}
