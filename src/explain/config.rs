//! Analyzer configuration.

/// What to return for statements that are neither SELECT nor INSERT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnsupportedPolicy {
    /// Return an empty string.
    #[default]
    PassThrough,
    /// Return the unsupported-statement diagnostic.
    Diagnostic,
}

/// Analyzer configuration options.
#[derive(Debug, Clone, Default)]
pub struct ExplainConfig {
    /// Reject column/alias and column/value count mismatches instead of
    /// pairing as far as possible.
    pub strict: bool,
    /// Handling of unrecognized leading keywords.
    pub unsupported: UnsupportedPolicy,
}

impl ExplainConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set strict flag.
    pub fn strict(mut self, value: bool) -> Self {
        self.strict = value;
        self
    }

    /// Set the unsupported-statement policy.
    pub fn unsupported(mut self, policy: UnsupportedPolicy) -> Self {
        self.unsupported = policy;
        self
    }
}
