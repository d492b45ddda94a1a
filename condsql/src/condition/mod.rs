//! Condition trees
//!
//! Provides the owned value model the compiler walks, and JSON ingestion with
//! size and depth limits for untrusted input.
//!
//! ## Usage
//!
//! ```
//! use condsql::condition::{parse_condition, ParseLimits};
//!
//! let json_str = r#"{"field": "age", "operator": ">", "value": 10}"#;
//! let condition = parse_condition(json_str, &ParseLimits::default()).unwrap();
//! assert_eq!(condsql::sql::to_sql(&condition), " (age > 10) ");
//! ```

mod error;
mod parser;
mod value;

pub use error::ConditionError;
pub use parser::{DEFAULT_MAX_BYTES, DEFAULT_MAX_DEPTH, ParseLimits, parse_condition};
pub use value::{Condition, Number};
