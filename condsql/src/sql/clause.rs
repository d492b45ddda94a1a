//! Compiled clause fragments

use std::fmt;

/// How a group combines its children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Join {
    /// Object members
    Or,
    /// Array elements
    And,
}

impl Join {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Join::Or => "OR",
            Join::And => "AND",
        }
    }
}

/// A non-empty compiled SQL fragment
///
/// The text keeps the padding spaces it was rendered with so fragments can
/// be concatenated into a larger `WHERE` clause as-is. Absence of a clause is
/// modelled as `Option<Clause>`, never as an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause(String);

impl Clause {
    /// Wrap a leaf body as ` (<body>) `
    pub(crate) fn leaf(body: impl fmt::Display) -> Self {
        Self(format!(" ({}) ", body))
    }

    /// Combine child clauses as ` (<a>) OR  (<b>)`.
    ///
    /// Returns `None` when there are no children, so empty groups leave no
    /// dangling operator or parentheses behind.
    pub(crate) fn group(children: impl IntoIterator<Item = Clause>, join: Join) -> Option<Self> {
        let parts: Vec<String> = children
            .into_iter()
            .map(|child| format!(" ({})", child.0))
            .collect();
        if parts.is_empty() {
            return None;
        }
        let separator = format!(" {} ", join.as_sql());
        Some(Self(parts.join(separator.as_str())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The fragment without its padding spaces
    pub fn trimmed(&self) -> &str {
        self.0.trim()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
