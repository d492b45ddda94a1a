//! Leaf clause construction
//!
//! Turns one `{field, operator, ...}` object into a clause. Each operator
//! family needs specific companion keys; when they are missing or have the
//! wrong shape the leaf yields no clause.

use crate::condition::Condition;
use crate::utils::sql::{escape_like_wildcards, has_like_wildcard};

use super::clause::Clause;
use super::literal::to_literal;
use super::operator::{ComparisonOp, Operator, OperatorFamily, PatternCode};

/// Escape character used when a LIKE leaf does not supply a valid one
const DEFAULT_LIKE_ESCAPE: &str = "\\";

/// Build the clause for a leaf condition
pub(crate) fn build_leaf(field: &str, operator: Operator, condition: &Condition) -> Option<Clause> {
    let clause = match operator.family {
        OperatorFamily::Comparison(op) => comparison(field, operator, op, condition),
        OperatorFamily::Pattern(code) => match condition.get("value") {
            Some(value) => pattern_value(field, operator, code, value, condition),
            None => range(field, operator, code, condition),
        },
        OperatorFamily::Unknown => None,
    };

    if clause.is_none() {
        tracing::trace!(field, operator = %operator, "Leaf condition produced no clause");
    }
    clause
}

/// `(NOT <field> <op> <literal>)`
///
/// Negation goes in front of the field because `field NOT = x` is not valid
/// SQLite.
fn comparison(
    field: &str,
    operator: Operator,
    op: ComparisonOp,
    condition: &Condition,
) -> Option<Clause> {
    let literal = to_literal(condition.get("value")?)?;
    Some(Clause::leaf(format_args!(
        "{}{} {} {}",
        operator.negation(),
        field,
        op.as_sql(),
        literal
    )))
}

/// Pattern codes with a `value` key: set membership, GLOB, LIKE
fn pattern_value(
    field: &str,
    operator: Operator,
    code: PatternCode,
    value: &Condition,
    condition: &Condition,
) -> Option<Clause> {
    let not = operator.negation();

    match value {
        Condition::Array(items) if code.accepts_set() && !items.is_empty() => {
            // Unrenderable elements are dropped; nothing left means no clause
            let literals: Vec<String> = items
                .iter()
                .filter_map(to_literal)
                .map(|literal| format!(" {}", literal))
                .collect();
            if literals.is_empty() {
                return None;
            }
            Some(Clause::leaf(format_args!(
                "{} {}IN ({} )",
                field,
                not,
                literals.join(", ")
            )))
        }
        Condition::String(text) => {
            let case_sensitive = condition.get("caseSensitive").and_then(Condition::as_bool)
                == Some(true);

            if code == PatternCode::Glob || (code.is_substring() && case_sensitive) {
                let pattern = if code == PatternCode::Glob {
                    text.clone()
                } else {
                    format!("*{}*", text)
                };
                Some(Clause::leaf(format_args!("{} {}GLOB '{}'", field, not, pattern)))
            } else if code == PatternCode::Like {
                let escape = like_escape(condition);
                Some(Clause::leaf(format_args!(
                    "{} {}LIKE '{}' ESCAPE '{}'",
                    field, not, text, escape
                )))
            } else if code.is_substring() {
                let pattern = if has_like_wildcard(text) {
                    format!("'%{}%' ESCAPE '\\'", escape_like_wildcards(text))
                } else {
                    format!("'%{}%'", text)
                };
                Some(Clause::leaf(format_args!("{} {}LIKE {}", field, not, pattern)))
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Explicit `escape` key when it is exactly one character, `\` otherwise
fn like_escape(condition: &Condition) -> &str {
    condition
        .get("escape")
        .and_then(Condition::as_str)
        .filter(|e| e.chars().count() == 1)
        .unwrap_or(DEFAULT_LIKE_ESCAPE)
}

/// BETWEEN / RANGE without a `value` key: `begin` and `end` bounds
fn range(
    field: &str,
    operator: Operator,
    code: PatternCode,
    condition: &Condition,
) -> Option<Clause> {
    if !code.accepts_range() {
        return None;
    }
    let begin = bound(condition.get("begin")?)?;
    let end = bound(condition.get("end")?)?;
    Some(Clause::leaf(format_args!(
        "{} {}BETWEEN {} AND {}",
        field,
        operator.negation(),
        begin,
        end
    )))
}

/// Range bounds must be strings or numbers
fn bound(value: &Condition) -> Option<String> {
    match value {
        Condition::String(_) | Condition::Number(_) => to_literal(value),
        _ => None,
    }
}
