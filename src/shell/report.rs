//! Explanation reports and their rendering.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use super::error::{ShellError, ShellResult};
use crate::explain::{explain_script, Explainer};

/// How reports are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain sentences.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// One explained statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub statement: String,
    pub explanation: String,
}

impl Report {
    /// Explain a single statement.
    pub fn explain(explainer: &dyn Explainer, statement: &str) -> Self {
        Self {
            statement: statement.to_string(),
            explanation: explainer.explain(statement, None),
        }
    }
}

/// Explain every statement in the script at `path`.
pub fn explain_file(path: &Path, explainer: &dyn Explainer) -> ShellResult<Vec<Report>> {
    let script = fs::read_to_string(path).map_err(|source| ShellError::Script {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = script.len(), "explaining script");

    Ok(explain_script(&script, explainer)
        .into_iter()
        .map(|(statement, explanation)| Report {
            statement,
            explanation,
        })
        .collect())
}

/// Write reports to `out`.
///
/// Text output labels each statement only when there is more than one.
pub fn write_reports<W: Write>(
    out: &mut W,
    reports: &[Report],
    format: OutputFormat,
) -> ShellResult<()> {
    match format {
        OutputFormat::Json => {
            for report in reports {
                writeln!(out, "{}", serde_json::to_string(report)?)?;
            }
        }
        OutputFormat::Text => {
            let labelled = reports.len() > 1;
            for (i, report) in reports.iter().enumerate() {
                if labelled {
                    if i > 0 {
                        writeln!(out)?;
                    }
                    writeln!(out, "-- {}", report.statement)?;
                }
                if !report.explanation.is_empty() {
                    writeln!(out, "{}", report.explanation)?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explain::RuleExplainer;

    fn render(reports: &[Report], format: OutputFormat) -> String {
        let mut out = Vec::new();
        write_reports(&mut out, reports, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_single_text_report() {
        let report = Report::explain(&RuleExplainer::default(), "SELECT * FROM t");
        assert_eq!(
            render(&[report], OutputFormat::Text),
            "The given query selects all columns from the t table.\n"
        );
    }

    #[test]
    fn test_unsupported_text_report_is_silent() {
        let report = Report::explain(&RuleExplainer::default(), "UPDATE t SET a = 1");
        assert_eq!(render(&[report], OutputFormat::Text), "");
    }

    #[test]
    fn test_json_report() {
        let report = Report::explain(&RuleExplainer::default(), "SELECT * FROM t GROUP BY c");
        let out = render(&[report], OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(value["statement"], "SELECT * FROM t GROUP BY c");
        assert_eq!(
            value["explanation"],
            "The given query selects all columns from the t table.\n\
             The query groups on the c column."
        );
    }

    #[test]
    fn test_explain_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "SELECT a AS x FROM t;").unwrap();
        writeln!(file, "INSERT INTO t (id) VALUES (1);").unwrap();
        writeln!(file).unwrap();

        let reports = explain_file(file.path(), &RuleExplainer::default()).unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[1].statement, "INSERT INTO t (id) VALUES (1)");

        assert_eq!(
            render(&reports, OutputFormat::Text),
            "-- SELECT a AS x FROM t\n\
             The given query selects the a column as x from the t table.\n\
             \n\
             -- INSERT INTO t (id) VALUES (1)\n\
             The given INSERT query inserts a tuple with id: 1 into the t table.\n"
        );
    }

    #[test]
    fn test_explain_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing.sql");
        let err = explain_file(&path, &RuleExplainer::default()).unwrap_err();
        assert!(matches!(err, ShellError::Script { .. }));
    }
}
