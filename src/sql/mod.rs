//! Lexical layer for sqlexplain.
//!
//! Splits raw statement text into tokens and recognizes the leading
//! command keyword. There is no grammar here: clause boundaries are found
//! later by scanning the token sequence for keywords.

mod command;
mod token;

pub use command::Command;
pub use token::{normalize, tokenize, Span, Tokens};
