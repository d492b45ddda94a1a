//! SQL literal rendering for scalar condition values

use crate::condition::{Condition, Number};

/// Render a scalar as a SQLite literal
///
/// - integers: decimal digits
/// - floats: fixed notation with six fractional digits (`1.5` → `1.500000`)
/// - strings: wrapped in single quotes
/// - booleans: `1` / `0`
///
/// Returns `None` for objects, arrays, and null.
///
/// Embedded single quotes are NOT escaped: `it's` renders as `'it's'`.
/// Callers passing untrusted strings must sanitise them first.
pub fn to_literal(value: &Condition) -> Option<String> {
    match value {
        Condition::Number(Number::Unsigned(n)) => Some(n.to_string()),
        Condition::Number(Number::Signed(n)) => Some(n.to_string()),
        Condition::Number(Number::Float(n)) => Some(format!("{:.6}", n)),
        Condition::String(s) => Some(format!("'{}'", s)),
        Condition::Bool(b) => Some(if *b { "1" } else { "0" }.to_string()),
        Condition::Object(_) | Condition::Array(_) | Condition::Null => None,
    }
}
