//! SELECT statement explanation.

use tracing::trace;

use super::config::ExplainConfig;
use super::error::{Diagnostic, ExplainResult};
use super::explanation::Explanation;
use crate::sql::{Command, Span, Tokens};

const AS: &str = "AS";

/// Keywords that open an optional clause after FROM.
const CLAUSES: [&str; 3] = ["WHERE", "GROUP", "ORDER"];

/// Explain a SELECT statement, one sentence per clause present.
pub(super) fn explain_select(
    tokens: &Tokens,
    config: &ExplainConfig,
) -> ExplainResult<Explanation> {
    let from = tokens.find_keyword("FROM", 0).ok_or(Diagnostic::MissingFrom)?;

    let mut explanation = Explanation::new(Command::Select);
    explanation.push(describe_columns(tokens, from, config)?);

    if let Some(span) = optional_clause(tokens, "WHERE", from) {
        trace!(?span, "WHERE clause");
        explanation.push(describe_where(tokens.span(span)));
    }

    if let Some(span) = optional_clause(tokens, "GROUP", from) {
        trace!(?span, "GROUP BY clause");
        explanation.push(describe_listing("groups", "GROUP BY", tokens.span(span)));
    }

    if let Some(span) = optional_clause(tokens, "ORDER", from) {
        trace!(?span, "ORDER BY clause");
        explanation.push(describe_listing("orders", "ORDER BY", tokens.span(span)));
    }

    Ok(explanation)
}

/// Span of the clause opened by `keyword` after FROM.
///
/// The span stops at the next other clause keyword, so clauses written in
/// any order never share tokens.
fn optional_clause(tokens: &Tokens, keyword: &str, from: usize) -> Option<Span> {
    let start = tokens.find_keyword(keyword, from)?;
    let terminators: Vec<&str> = CLAUSES.into_iter().filter(|k| *k != keyword).collect();
    Some(tokens.clause(start, &terminators))
}

fn describe_columns(
    tokens: &Tokens,
    from: usize,
    config: &ExplainConfig,
) -> ExplainResult<String> {
    let columns = tokens.span(Span::new(1, from));
    if columns.is_empty() {
        return Err(Diagnostic::MissingColumns);
    }
    let table = tokens.get(from + 1).ok_or(Diagnostic::MissingSelectTable)?;

    if let [only] = columns {
        if only == "*" {
            return Ok(format!("The given query selects all columns from the {table} table."));
        }
    }

    // Strict alternation of `source [AS] alias` once AS is dropped.
    let mut sources = Vec::new();
    let mut aliases = Vec::new();
    for (i, name) in columns.iter().filter(|token| *token != AS).enumerate() {
        if i % 2 == 0 {
            sources.push(name.as_str());
        } else {
            aliases.push(name.as_str());
        }
    }

    if sources.is_empty() {
        return Err(Diagnostic::MissingColumns);
    }
    if config.strict && aliases.len() != sources.len() {
        return Err(Diagnostic::MissingAlias);
    }

    let sentence = match (sources.as_slice(), aliases.as_slice()) {
        ([source], [alias, ..]) => {
            format!(
                "The given query selects the {source} column as {alias} from the {table} table."
            )
        }
        ([source], []) => {
            format!("The given query selects the {source} column from the {table} table.")
        }
        (sources, []) => format!(
            "The given query selects the ({}) columns from the {table} table.",
            sources.join(", ")
        ),
        (sources, aliases) => format!(
            "The given query selects the ({}) columns as ({}) from the {table} table.",
            sources.join(", "),
            aliases.join(", ")
        ),
    };
    Ok(sentence)
}

/// Collect every `lhs = rhs` triple inside the WHERE span.
fn describe_where(span: &[String]) -> String {
    let conditions: Vec<String> = (1..span.len().saturating_sub(1))
        .filter(|&i| span[i] == "=")
        .map(|i| format!("{} = {}", span[i - 1], span[i + 1]))
        .collect();
    format!("The query filters on the conditions: {}.", conditions.join(", "))
}

/// Describe a `GROUP BY` / `ORDER BY` span: keyword, `BY`, then columns.
fn describe_listing(verb: &str, clause: &str, span: &[String]) -> String {
    match span {
        [_, _, column] => format!("The query {verb} on the {column} column."),
        [_, _, columns @ ..] if !columns.is_empty() => {
            format!("The query {verb} on the columns: {}.", columns.join(", "))
        }
        _ => format!("The {clause} clause does not specify any columns."),
    }
}
