//! Operator resolution
//!
//! Classifies a leaf's `operator` string into a negation flag and an operator
//! family. Comparison tokens match case-sensitively; pattern codes match
//! case-insensitively. The two tables stay separate so that `"EQ"` is not a
//! comparison while `"like"` and `"LIKE"` are the same pattern code.

use std::fmt;

/// Comparison operator rendered between a field and a literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    Eq,
    Neq,
    Lt,
    Le,
    Gt,
    Ge,
}

/// Exact-case comparison tokens
const COMPARISON_TOKENS: &[(&str, ComparisonOp)] = &[
    ("eq", ComparisonOp::Eq),
    ("=", ComparisonOp::Eq),
    ("neq", ComparisonOp::Neq),
    ("!=", ComparisonOp::Neq),
    ("<>", ComparisonOp::Neq),
    ("lt", ComparisonOp::Lt),
    ("<", ComparisonOp::Lt),
    ("le", ComparisonOp::Le),
    ("<=", ComparisonOp::Le),
    ("gt", ComparisonOp::Gt),
    (">", ComparisonOp::Gt),
    ("ge", ComparisonOp::Ge),
    (">=", ComparisonOp::Ge),
];

impl ComparisonOp {
    /// Look up an exact-case comparison token
    pub fn from_token(token: &str) -> Option<Self> {
        COMPARISON_TOKENS
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, op)| *op)
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Neq => "!=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
        }
    }

    /// All accepted tokens, in lookup order
    pub fn tokens() -> impl Iterator<Item = &'static str> {
        COMPARISON_TOKENS.iter().map(|(t, _)| *t)
    }
}

/// Pattern-family operator code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternCode {
    Between,
    Like,
    Glob,
    In,
    Range,
    /// `CTNS` or `CONTAINS`
    Contains,
}

/// Upper-case pattern tokens, matched after ASCII upper-casing the input
const PATTERN_TOKENS: &[(&str, PatternCode)] = &[
    ("BETWEEN", PatternCode::Between),
    ("LIKE", PatternCode::Like),
    ("GLOB", PatternCode::Glob),
    ("IN", PatternCode::In),
    ("RANGE", PatternCode::Range),
    ("CTNS", PatternCode::Contains),
    ("CONTAINS", PatternCode::Contains),
];

impl PatternCode {
    /// Look up a pattern token, ignoring ASCII case
    pub fn from_token(token: &str) -> Option<Self> {
        let upper = token.to_ascii_uppercase();
        PATTERN_TOKENS
            .iter()
            .find(|(t, _)| *t == upper)
            .map(|(_, code)| *code)
    }

    /// Codes that turn a non-empty array `value` into an `IN (...)` list
    pub fn accepts_set(&self) -> bool {
        matches!(self, Self::Range | Self::In | Self::Contains)
    }

    /// Codes that turn `begin`/`end` into a `BETWEEN` range
    pub fn accepts_range(&self) -> bool {
        matches!(self, Self::Between | Self::Range)
    }

    /// Codes that do substring matching on a string `value`
    pub fn is_substring(&self) -> bool {
        matches!(self, Self::In | Self::Contains)
    }

    /// All accepted tokens, in lookup order
    pub fn tokens() -> impl Iterator<Item = &'static str> {
        PATTERN_TOKENS.iter().map(|(t, _)| *t)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorFamily {
    Comparison(ComparisonOp),
    Pattern(PatternCode),
    Unknown,
}

/// A resolved leaf operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operator {
    pub negated: bool,
    pub family: OperatorFamily,
}

impl Operator {
    /// Resolve an operator string. Never fails: unmatched input resolves to
    /// `OperatorFamily::Unknown`.
    ///
    /// Negation is recognised only for the exact prefixes `"NOT "` and
    /// `"not "`. A mixed-case prefix such as `"Not "` is left in place, so
    /// `"Not like"` upper-cases to `"NOT LIKE"` and resolves to `Unknown`.
    pub fn resolve(operator: &str) -> Self {
        let (negated, rest) = match operator
            .strip_prefix("NOT ")
            .or_else(|| operator.strip_prefix("not "))
        {
            Some(rest) => (true, rest),
            None => (false, operator),
        };

        let family = if let Some(op) = ComparisonOp::from_token(rest) {
            OperatorFamily::Comparison(op)
        } else if let Some(code) = PatternCode::from_token(rest) {
            OperatorFamily::Pattern(code)
        } else {
            OperatorFamily::Unknown
        };

        Self { negated, family }
    }

    /// `"NOT "` when negated, empty otherwise
    pub fn negation(&self) -> &'static str {
        if self.negated { "NOT " } else { "" }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.family {
            OperatorFamily::Comparison(op) => op.as_sql(),
            OperatorFamily::Pattern(PatternCode::Between) => "BETWEEN",
            OperatorFamily::Pattern(PatternCode::Like) => "LIKE",
            OperatorFamily::Pattern(PatternCode::Glob) => "GLOB",
            OperatorFamily::Pattern(PatternCode::In) => "IN",
            OperatorFamily::Pattern(PatternCode::Range) => "RANGE",
            OperatorFamily::Pattern(PatternCode::Contains) => "CONTAINS",
            OperatorFamily::Unknown => "unknown",
        };
        write!(f, "{}{}", self.negation(), name)
    }
}
