//! Leading command keyword recognition.

use std::fmt;

use serde::Serialize;

use super::Tokens;

/// Statement kinds the analyzer can explain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    /// SELECT statement.
    Select,
    /// INSERT statement.
    Insert,
}

impl Command {
    /// Recognize the command from token 0. Only exact uppercase matches count.
    pub fn detect(tokens: &Tokens) -> Option<Self> {
        match tokens.get(0)? {
            "SELECT" => Some(Command::Select),
            "INSERT" => Some(Command::Insert),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Select => "SELECT",
            Command::Insert => "INSERT",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
