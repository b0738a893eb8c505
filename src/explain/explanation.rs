//! Explanation output type.

use std::fmt;

use serde::Serialize;

use crate::sql::Command;

/// The sentences describing one statement, in clause order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Explanation {
    pub command: Command,
    pub sentences: Vec<String>,
}

impl Explanation {
    pub fn new(command: Command) -> Self {
        Self {
            command,
            sentences: Vec::new(),
        }
    }

    /// Append one clause sentence.
    pub fn push(&mut self, sentence: impl Into<String>) {
        self.sentences.push(sentence.into());
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sentences.join("\n"))
    }
}
