//! Error type for condition ingestion
//!
//! Compilation itself never fails. These errors come from turning untrusted
//! text into a condition tree.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConditionError {
    /// Input text larger than the configured limit
    #[error("Condition JSON is {size} bytes, exceeds maximum of {max} bytes")]
    TooLarge { size: usize, max: usize },

    /// Input text is not valid JSON
    #[error("Invalid condition JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Parsed tree nests deeper than the configured limit
    #[error("Condition tree depth {depth} exceeds maximum of {max}")]
    TooDeep { depth: usize, max: usize },
}

impl ConditionError {
    /// Check if the input was rejected by a size or depth limit
    pub fn is_limit(&self) -> bool {
        matches!(self, Self::TooLarge { .. } | Self::TooDeep { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_large_display() {
        let err = ConditionError::TooLarge { size: 70000, max: 65536 };
        assert_eq!(
            err.to_string(),
            "Condition JSON is 70000 bytes, exceeds maximum of 65536 bytes"
        );
        assert!(err.is_limit());
    }

    #[test]
    fn test_too_deep_display() {
        let err = ConditionError::TooDeep { depth: 80, max: 64 };
        assert_eq!(err.to_string(), "Condition tree depth 80 exceeds maximum of 64");
        assert!(err.is_limit());
    }

    #[test]
    fn test_invalid_json_is_not_limit() {
        let err: ConditionError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("Invalid condition JSON"));
        assert!(!err.is_limit());
    }
}
