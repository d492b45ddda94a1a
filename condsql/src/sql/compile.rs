//! Recursive condition compiler
//!
//! Objects carrying string `field` and `operator` keys are leaves. Other
//! objects OR their members together, arrays AND their elements together,
//! and scalars compile to nothing.

use crate::condition::Condition;

use super::clause::{Clause, Join};
use super::leaf::build_leaf;
use super::operator::Operator;

/// Compile a condition tree into a clause
///
/// Returns `None` when the tree places no constraint. Malformed nodes never
/// fail the compilation: they contribute nothing and disappear from the
/// enclosing group.
pub fn compile(condition: &Condition) -> Option<Clause> {
    match condition {
        Condition::Object(members) => match leaf_signature(condition) {
            // A leaf never falls back to group semantics, even with no clause
            Some((field, operator)) => build_leaf(field, Operator::resolve(operator), condition),
            None => Clause::group(members.values().filter_map(compile), Join::Or),
        },
        Condition::Array(items) => Clause::group(items.iter().filter_map(compile), Join::And),
        other => {
            tracing::trace!(kind = other.kind(), "Scalar condition produced no clause");
            None
        }
    }
}

/// Compile a condition tree into a `WHERE`-clause fragment
///
/// The fragment keeps its padding spaces. An empty string means no
/// constraint.
///
/// # Example
///
/// ```
/// use condsql::condition::Condition;
/// use condsql::sql::to_sql;
/// use serde_json::json;
///
/// let condition = Condition::from(json!({"field": "age", "operator": "range", "begin": 20, "end": 30}));
/// assert_eq!(to_sql(&condition).trim(), "(age BETWEEN 20 AND 30)");
/// assert_eq!(to_sql(&Condition::from(json!({}))), "");
/// ```
pub fn to_sql(condition: &Condition) -> String {
    compile(condition)
        .map(Clause::into_string)
        .unwrap_or_default()
}

/// Compile into a complete `WHERE <fragment>` clause, or `None` when the tree
/// places no constraint and the keyword should be omitted.
pub fn where_clause(condition: &Condition) -> Option<String> {
    compile(condition).map(|clause| format!("WHERE {}", clause.trimmed()))
}

fn leaf_signature(condition: &Condition) -> Option<(&str, &str)> {
    let field = condition.get("field").and_then(Condition::as_str)?;
    let operator = condition.get("operator").and_then(Condition::as_str)?;
    Some((field, operator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sql(value: serde_json::Value) -> String {
        to_sql(&Condition::from(value)).trim().to_string()
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(sql(json!({})), "");
        assert_eq!(sql(json!([])), "");
        assert_eq!(sql(json!(null)), "");
        assert_eq!(sql(json!("field")), "");
        assert_eq!(sql(json!(42)), "");
    }

    #[test]
    fn test_leaf_keeps_padding() {
        let condition = Condition::from(json!({"field": "age", "operator": ">", "value": 10}));
        assert_eq!(to_sql(&condition), " (age > 10) ");
    }

    #[test]
    fn test_or_group() {
        assert_eq!(
            sql(json!({
                "group0": {"field": "name", "operator": "=", "value": "test"},
                "group1": {"field": "age", "operator": ">", "value": 10}
            })),
            "( (name = 'test') ) OR  ( (age > 10) )"
        );
    }

    #[test]
    fn test_and_group() {
        assert_eq!(
            sql(json!([
                {"field": "name", "operator": "=", "value": "test"},
                {"field": "age", "operator": ">", "value": 10}
            ])),
            "( (name = 'test') ) AND  ( (age > 10) )"
        );
    }

    #[test]
    fn test_group_follows_document_order() {
        assert_eq!(
            sql(json!({
                "z": {"field": "b", "operator": "=", "value": 2},
                "a": {"field": "a", "operator": "=", "value": 1}
            })),
            "( (b = 2) ) OR  ( (a = 1) )"
        );
    }

    #[test]
    fn test_nested_groups() {
        assert_eq!(
            sql(json!([
                {
                    "x": {"field": "a", "operator": "=", "value": 1},
                    "y": {"field": "b", "operator": "=", "value": 2}
                },
                {"field": "c", "operator": "lt", "value": 3}
            ])),
            "( ( (a = 1) ) OR  ( (b = 2) )) AND  ( (c < 3) )"
        );
    }

    #[test]
    fn test_group_skips_empty_children() {
        assert_eq!(
            sql(json!([
                {"field": "a", "operator": "bogus", "value": 1},
                {},
                "scalar",
                {"field": "b", "operator": "=", "value": 2}
            ])),
            "( (b = 2) )"
        );
    }

    #[test]
    fn test_group_of_only_empty_children() {
        assert_eq!(
            sql(json!({
                "a": {"field": "a", "operator": "bogus"},
                "b": [],
                "c": null
            })),
            ""
        );
    }

    #[test]
    fn test_failed_leaf_does_not_become_group() {
        // The nested member would compile on its own, but the object is a leaf
        assert_eq!(
            sql(json!({
                "field": "age",
                "operator": "=",
                "nested": {"field": "b", "operator": "=", "value": 2}
            })),
            ""
        );
    }

    #[test]
    fn test_non_string_operator_is_a_group() {
        assert_eq!(
            sql(json!({
                "field": "age",
                "operator": 5,
                "nested": {"field": "b", "operator": "=", "value": 2}
            })),
            "( (b = 2) )"
        );
    }

    #[test]
    fn test_compile_is_deterministic() {
        let condition = Condition::from(json!([
            {"field": "city", "operator": "in", "value": ["seoul", "busan"]},
            {"field": "age", "operator": "range", "begin": 20, "end": 30}
        ]));
        assert_eq!(compile(&condition), compile(&condition));
    }

    #[test]
    fn test_where_clause() {
        let condition = Condition::from(json!({"field": "age", "operator": ">", "value": 10}));
        assert_eq!(where_clause(&condition), Some("WHERE (age > 10)".to_string()));
        assert_eq!(where_clause(&Condition::from(json!([]))), None);
    }
}
