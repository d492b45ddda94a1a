//! # condsql
//!
//! Compiles declarative, JSON-shaped condition trees into SQLite `WHERE`-clause
//! fragments.
//!
//! A leaf condition names a `field`, an `operator`, and the companion keys the
//! operator needs (`value`, `begin`/`end`, `caseSensitive`, `escape`). Objects
//! without a leaf signature OR their members together; arrays AND their
//! elements together.
//!
//! ```
//! use condsql::condition::Condition;
//! use serde_json::json;
//!
//! let tree = Condition::from(json!([
//!     {"field": "city", "operator": "in", "value": ["seoul", "busan"]},
//!     {"field": "age", "operator": "range", "begin": 20, "end": 30}
//! ]));
//! assert_eq!(
//!     condsql::to_sql(&tree).trim(),
//!     "( (city IN ( 'seoul',  'busan' )) ) AND  ( (age BETWEEN 20 AND 30) )"
//! );
//! ```

pub mod app;
pub mod condition;
pub mod core;
pub mod sql;
pub mod utils;

pub use condition::{Condition, ConditionError, ParseLimits, parse_condition};
pub use sql::{Clause, compile, to_sql, where_clause};
