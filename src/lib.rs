//! sqlexplain - plain-English explanations of SQL statements
//!
//! This crate turns `SELECT` and `INSERT` statements into short templated
//! sentences describing what they select, filter, group, order or insert.
//! Analysis is a pure function of the statement text: no database, network
//! or model runtime is involved.
//!
//! # Example
//!
//! ```
//! use sqlexplain::explain::explain;
//!
//! assert_eq!(
//!     explain("SELECT * FROM students WHERE id = 1"),
//!     "The given query selects all columns from the students table.\n\
//!      The query filters on the conditions: id = 1."
//! );
//! ```

pub mod explain;
pub mod shell;
pub mod sql;
