//! Natural-language explanation of SQL statements.
//!
//! A statement is tokenized, dispatched on its leading keyword and handed to
//! the SELECT or INSERT handler, which scans the tokens for clause keywords
//! and emits one templated sentence per clause. Malformed input yields a
//! fixed diagnostic sentence instead of an explanation.

mod config;
mod error;
mod explainer;
mod explanation;
mod insert;
mod select;

use tracing::debug;

pub use config::{ExplainConfig, UnsupportedPolicy};
pub use error::{Diagnostic, ExplainResult};
pub use explainer::{Explainer, RuleExplainer};
pub use explanation::Explanation;

use crate::sql::{normalize, tokenize, Command};

/// Explain a statement with the default configuration.
pub fn explain(sql: &str) -> String {
    explain_with(sql, &ExplainConfig::default())
}

/// Explain a statement, rendering diagnostics as the result text.
///
/// Unsupported statements produce an empty string under
/// [`UnsupportedPolicy::PassThrough`].
pub fn explain_with(sql: &str, config: &ExplainConfig) -> String {
    match try_explain(sql, config) {
        Ok(explanation) => explanation.to_string(),
        Err(Diagnostic::UnsupportedStatement(_))
            if config.unsupported == UnsupportedPolicy::PassThrough =>
        {
            String::new()
        }
        Err(diagnostic) => diagnostic.to_string(),
    }
}

/// Explain a statement, returning diagnostics as errors.
pub fn try_explain(sql: &str, config: &ExplainConfig) -> ExplainResult<Explanation> {
    let tokens = tokenize(normalize(sql));
    if tokens.is_empty() {
        return Err(Diagnostic::EmptyStatement);
    }

    let command = Command::detect(&tokens)
        .ok_or_else(|| Diagnostic::UnsupportedStatement(tokens[0].to_string()))?;
    debug!(%command, tokens = tokens.len(), "explaining statement");

    let result = match command {
        Command::Select => select::explain_select(&tokens, config),
        Command::Insert => insert::explain_insert(&tokens, config),
    };
    if let Err(diagnostic) = &result {
        debug!(%command, %diagnostic, "statement not explained");
    }
    result
}

/// Explain every `;`-separated statement in a script.
///
/// Returns `(statement, explanation)` pairs in script order; blank
/// statements are skipped.
pub fn explain_script(script: &str, explainer: &dyn Explainer) -> Vec<(String, String)> {
    script
        .split(';')
        .map(str::trim)
        .filter(|stmt| !stmt.is_empty())
        .map(|stmt| (stmt.to_string(), explainer.explain(stmt, None)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_passes_through() {
        assert_eq!(explain("UPDATE t SET a = 1"), "");
        assert_eq!(explain("select * from t"), "");
        assert_eq!(explain("DELETE FROM t"), "");
    }

    #[test]
    fn test_unsupported_diagnostic_policy() {
        let config = ExplainConfig::new().unsupported(UnsupportedPolicy::Diagnostic);
        assert_eq!(
            explain_with("UPDATE t SET a = 1", &config),
            "The given query is not supported. Only SELECT and INSERT statements can be explained."
        );
        assert_eq!(
            try_explain("drop table t", &config).unwrap_err(),
            Diagnostic::UnsupportedStatement("drop".into())
        );
    }

    #[test]
    fn test_empty_statement() {
        assert_eq!(explain(""), "The given query is malformed. It is empty.");
        assert_eq!(explain(" , ;"), "The given query is malformed. It is empty.");
    }

    #[test]
    fn test_select_properties() {
        assert_eq!(
            explain("SELECT * FROM t"),
            "The given query selects all columns from the t table."
        );
        assert_eq!(
            explain("SELECT a AS x FROM t"),
            "The given query selects the a column as x from the t table."
        );
        assert_eq!(
            explain("SELECT a AS x, b AS y FROM t"),
            "The given query selects the (a, b) columns as (x, y) from the t table."
        );
        assert_eq!(
            explain("SELECT * FROM t WHERE id = 1"),
            "The given query selects all columns from the t table.\n\
             The query filters on the conditions: id = 1."
        );
        assert_eq!(
            explain("SELECT * FROM t GROUP BY c"),
            "The given query selects all columns from the t table.\n\
             The query groups on the c column."
        );
        assert_eq!(
            explain("SELECT * FROM t ORDER BY c1, c2"),
            "The given query selects all columns from the t table.\n\
             The query orders on the columns: c1, c2."
        );
    }

    #[test]
    fn test_insert_property() {
        assert_eq!(
            explain("INSERT INTO t (id, name) VALUES (1, 'Krish')"),
            "The given INSERT query inserts a tuple with id: 1, name: 'Krish' into the t table."
        );
    }

    #[test]
    fn test_malformed_select_diagnostics() {
        assert_eq!(
            explain("SELECT a FROM"),
            "The given SELECT query is malformed. It does not specify a table."
        );
        assert_eq!(
            explain("SELECT FROM t"),
            "The given SELECT query is malformed. It does not specify any columns."
        );
        assert_eq!(
            explain("SELECT a"),
            "The given SELECT query is malformed. It does not have a FROM clause."
        );
    }

    #[test]
    fn test_idempotent() {
        let sql = "SELECT a AS x, b AS y FROM t WHERE a = 1 GROUP BY a ORDER BY b";
        assert_eq!(explain(sql), explain(sql));
    }

    #[test]
    fn test_whitespace_insensitive() {
        assert_eq!(explain("SELECT  *   FROM t"), explain("SELECT * FROM t"));
        assert_eq!(explain("SELECT * FROM t;"), explain("SELECT * FROM t"));
    }

    #[test]
    fn test_try_explain_sentences() {
        let sql = "SELECT * FROM t WHERE a = 1 ORDER BY a";
        let explanation = try_explain(sql, &ExplainConfig::default()).unwrap();
        assert_eq!(explanation.command, Command::Select);
        assert_eq!(explanation.len(), 3);
        assert!(explanation.sentences.iter().all(|s| s.ends_with('.')));
    }

    #[test]
    fn test_explain_script() {
        let script = "SELECT * FROM students;\n\
                      INSERT INTO students (id, name) VALUES ('1', 'Krish');\n\
                      UPDATE students SET a = 1;\n";
        let results = explain_script(script, &RuleExplainer::default());
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].0, "SELECT * FROM students");
        assert_eq!(
            results[0].1,
            "The given query selects all columns from the students table."
        );
        assert_eq!(
            results[1].1,
            "The given INSERT query inserts a tuple with id: '1', name: 'Krish' \
             into the students table."
        );
        assert_eq!(results[2].1, "");
    }
}
