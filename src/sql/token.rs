//! Statement tokenizer and token-index scanning.

use std::ops::Index;

/// Trim surrounding whitespace and trailing `;` terminators.
pub fn normalize(sql: &str) -> &str {
    sql.trim().trim_end_matches(|c: char| c == ';' || c.is_whitespace())
}

/// Split a statement on whitespace and commas, dropping empty fragments.
///
/// Quotes are not interpreted, so a comma inside a string literal still
/// separates two tokens.
pub fn tokenize(sql: &str) -> Tokens {
    let tokens = sql
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect();
    Tokens { tokens }
}

/// A half-open range `[start, end)` of token indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An immutable, ordered token sequence for one statement.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tokens {
    tokens: Vec<String>,
}

impl Tokens {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    /// First index at or after `from` holding exactly `keyword`.
    pub fn find_keyword(&self, keyword: &str, from: usize) -> Option<usize> {
        self.find_any(&[keyword], from)
    }

    /// First index at or after `from` holding any of `keywords`.
    ///
    /// Matching is case-sensitive.
    pub fn find_any(&self, keywords: &[&str], from: usize) -> Option<usize> {
        self.tokens
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, token)| keywords.contains(&token.as_str()))
            .map(|(i, _)| i)
    }

    /// Span from `start` up to the next of `terminators`, or to the end.
    pub fn clause(&self, start: usize, terminators: &[&str]) -> Span {
        let end = self
            .find_any(terminators, start + 1)
            .unwrap_or(self.tokens.len());
        Span::new(start, end)
    }

    /// Tokens covered by `span`, clamped to the sequence.
    pub fn span(&self, span: Span) -> &[String] {
        let end = span.end.min(self.tokens.len());
        let start = span.start.min(end);
        &self.tokens[start..end]
    }
}

impl Index<usize> for Tokens {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.tokens[index]
    }
}
