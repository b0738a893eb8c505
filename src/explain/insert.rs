//! INSERT statement explanation.

use tracing::trace;

use super::config::ExplainConfig;
use super::error::{Diagnostic, ExplainResult};
use super::explanation::Explanation;
use crate::sql::{Command, Span, Tokens};

/// Explain `INSERT INTO <table> (<columns>) VALUES (<values>)`.
pub(super) fn explain_insert(
    tokens: &Tokens,
    config: &ExplainConfig,
) -> ExplainResult<Explanation> {
    let table = match tokens.get(2) {
        Some(table) if table != "VALUES" => table,
        _ => return Err(Diagnostic::MissingInsertTable),
    };

    let values_at = tokens.find_keyword("VALUES", 3).ok_or(Diagnostic::MissingValues)?;
    let columns = strip_punctuation(tokens.span(Span::new(3, values_at)));
    let values = strip_punctuation(tokens.span(Span::new(values_at + 1, tokens.len())));
    trace!(columns = columns.len(), values = values.len(), "INSERT tuple");

    let tuple = if columns.is_empty() {
        format!("({})", values.join(", "))
    } else {
        if config.strict && columns.len() != values.len() {
            return Err(Diagnostic::ShapeMismatch {
                columns: columns.len(),
                values: values.len(),
            });
        }
        // Extra columns or values past the shorter list are dropped.
        columns
            .iter()
            .zip(&values)
            .map(|(column, value)| format!("{column}: {value}"))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut explanation = Explanation::new(Command::Insert);
    explanation.push(format!(
        "The given INSERT query inserts a tuple with {tuple} into the {table} table."
    ));
    Ok(explanation)
}

/// Strip surrounding parentheses and commas, dropping tokens left empty.
fn strip_punctuation(tokens: &[String]) -> Vec<&str> {
    tokens
        .iter()
        .map(|token| token.trim_matches(|c: char| matches!(c, '(' | ')' | ',')))
        .filter(|token| !token.is_empty())
        .collect()
}
