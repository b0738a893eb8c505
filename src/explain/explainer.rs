//! The explainer interface shared with external backends.

use super::config::ExplainConfig;

/// Anything that turns a statement into an explanation.
///
/// `max_len` is a response-length hint for generative backends. The
/// rule-based explainer ignores it.
pub trait Explainer: Send + Sync {
    /// Short name used to select the explainer.
    fn name(&self) -> &str;

    /// Explain `sql`.
    fn explain(&self, sql: &str, max_len: Option<usize>) -> String;
}

/// Template-based explainer backed by the clause handlers.
#[derive(Debug, Clone, Default)]
pub struct RuleExplainer {
    config: ExplainConfig,
}

impl RuleExplainer {
    pub fn new(config: ExplainConfig) -> Self {
        Self { config }
    }
}

impl Explainer for RuleExplainer {
    fn name(&self) -> &str {
        "explainSQL"
    }

    fn explain(&self, sql: &str, _max_len: Option<usize>) -> String {
        super::explain_with(sql, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_explainer_ignores_length_hint() {
        let explainer = RuleExplainer::default();
        let sql = "SELECT * FROM students";
        assert_eq!(explainer.explain(sql, Some(5)), explainer.explain(sql, None));
        assert_eq!(
            explainer.explain(sql, Some(5)),
            "The given query selects all columns from the students table."
        );
    }

    #[test]
    fn test_rule_explainer_is_object_safe() {
        let explainers: Vec<Box<dyn Explainer>> =
            vec![Box::new(RuleExplainer::new(ExplainConfig::new().strict(true)))];
        assert_eq!(explainers[0].name(), "explainSQL");
        assert_eq!(
            explainers[0].explain("SELECT a FROM t", None),
            "The given SELECT query is malformed. Every selected column needs an alias."
        );
    }
}
