//! Command-line front end: one-shot, script and interactive explanation.
//!
//! The shell only talks to an [`Explainer`](crate::explain::Explainer), so
//! any backend implementing that trait can be driven from here.

mod error;
mod repl;
mod report;

pub use error::{ShellError, ShellResult};
pub use repl::{Repl, ReplConfig};
pub use report::{explain_file, write_reports, OutputFormat, Report};
