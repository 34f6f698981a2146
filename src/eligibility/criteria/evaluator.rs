//! Criterion evaluator and logical combinators

use serde_json::Value;

use super::ast::{Condition, Criterion};
use super::compare;
use crate::eligibility::path::{FieldPath, Resolved};

/// Evaluate one criterion against the value at `path` in `cart`
pub fn evaluate(cart: &Value, path: &FieldPath, criterion: &Criterion) -> bool {
    let value = path.resolve(cart);
    log::trace!("Resolved '{}' to {:?}", path, value);
    evaluate_resolved(&value, criterion)
}

/// Evaluate a criterion against an already resolved value.
///
/// An absent value fails every criterion, whatever its operators.
pub fn evaluate_resolved(value: &Resolved<'_>, criterion: &Criterion) -> bool {
    if value.is_absent() {
        return false;
    }

    match criterion {
        Criterion::Literal(target) => compare::eq(value, target),
        Criterion::Comparator(conditions) => conditions
            .iter()
            .all(|condition| evaluate_condition(value, condition, Scope::TopLevel)),
    }
}

/// `and`: every sub-condition holds
pub fn evaluate_and(value: &Resolved<'_>, conditions: &[Condition]) -> bool {
    conditions
        .iter()
        .all(|condition| evaluate_condition(value, condition, Scope::Nested))
}

/// `or`: at least one sub-condition holds
pub fn evaluate_or(value: &Resolved<'_>, conditions: &[Condition]) -> bool {
    conditions
        .iter()
        .any(|condition| evaluate_condition(value, condition, Scope::Nested))
}

/// Where a condition sits: directly under a path, or inside `and`/`or`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    TopLevel,
    Nested,
}

fn evaluate_condition(value: &Resolved<'_>, condition: &Condition, scope: Scope) -> bool {
    match (condition, scope) {
        // Directly under a path, a key outside the operator set fails outright.
        (Condition::Unrecognized { key, .. }, Scope::TopLevel) => {
            log::warn!("Unrecognized operator '{}' in criterion, treating as unmet", key);
            false
        }
        // Inside `and`/`or` it compares its operand for equality instead.
        (Condition::Unrecognized { target, .. }, Scope::Nested) => compare::eq(value, target),
        (Condition::Gt(target), _) => compare::gt(value, target),
        (Condition::Lt(target), _) => compare::lt(value, target),
        (Condition::Gte(target), _) => compare::gte(value, target),
        (Condition::Lte(target), _) => compare::lte(value, target),
        (Condition::In(targets), _) => compare::is_in(value, targets),
        (Condition::And(conditions), _) => evaluate_and(value, conditions),
        (Condition::Or(conditions), _) => evaluate_or(value, conditions),
    }
}
