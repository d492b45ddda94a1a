//! Condition parsing
//!
//! Parses JSON text into a condition tree with size and depth validation.

use super::error::ConditionError;
use super::value::Condition;

/// Default maximum size of condition JSON in bytes (64KB)
pub const DEFAULT_MAX_BYTES: usize = 64 * 1024;

/// Default maximum nesting depth of a condition tree
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Limits applied while ingesting untrusted condition text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseLimits {
    pub max_bytes: usize,
    pub max_depth: usize,
}

impl Default for ParseLimits {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Parse a condition tree from JSON text
///
/// Rejects oversized input before parsing and overly nested trees after.
pub fn parse_condition(json_str: &str, limits: &ParseLimits) -> Result<Condition, ConditionError> {
    if json_str.len() > limits.max_bytes {
        return Err(ConditionError::TooLarge {
            size: json_str.len(),
            max: limits.max_bytes,
        });
    }

    let condition: Condition = serde_json::from_str(json_str)?;

    let depth = condition.depth();
    if depth > limits.max_depth {
        return Err(ConditionError::TooDeep {
            depth,
            max: limits.max_depth,
        });
    }

    tracing::trace!(depth, bytes = json_str.len(), "Parsed condition tree");
    Ok(condition)
}
