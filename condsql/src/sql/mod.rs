//! Condition-to-SQL compiler for SQLite
//!
//! Compiles a condition tree into a `WHERE`-clause fragment using SQLite's
//! comparison, `BETWEEN`, `LIKE`, `GLOB`, and `IN` operators.
//!
//! Field names and string literals are emitted verbatim. Field names are not
//! quoted or validated, and single quotes inside string values are not
//! escaped. Callers must only pass trusted column names and sanitised values.

mod clause;
mod compile;
mod leaf;
mod literal;
mod operator;

pub use clause::{Clause, Join};
pub use compile::{compile, to_sql, where_clause};
pub use literal::to_literal;
pub use operator::{ComparisonOp, Operator, OperatorFamily, PatternCode};
