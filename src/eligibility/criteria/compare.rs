// SPDX-License-Identifier: MIT

//! Primitive comparison predicates
//!
//! Equality and membership broadcast over sequence values and succeed when
//! any element matches. Ordering predicates do not broadcast: a sequence
//! value never satisfies `gt`, `lt`, `gte` or `lte`.

use serde_json::Value;
use std::borrow::Cow;
use std::cmp::Ordering;

use crate::eligibility::path::Resolved;

/// `eq`: any element (or the single value) loosely equals `target`
pub fn eq(value: &Resolved<'_>, target: &Value) -> bool {
    any_element(value, |candidate| loosely_equal(candidate, target))
}

/// `in`: any element (or the single value) is a member of `targets`
pub fn is_in(value: &Resolved<'_>, targets: &Value) -> bool {
    let Value::Array(targets) = targets else {
        return false;
    };
    any_element(value, |candidate| {
        targets.iter().any(|target| strictly_equal(candidate, target))
    })
}

pub fn gt(value: &Resolved<'_>, target: &Value) -> bool {
    ordered(value, target, Ordering::is_gt)
}

pub fn lt(value: &Resolved<'_>, target: &Value) -> bool {
    ordered(value, target, Ordering::is_lt)
}

pub fn gte(value: &Resolved<'_>, target: &Value) -> bool {
    ordered(value, target, Ordering::is_ge)
}

pub fn lte(value: &Resolved<'_>, target: &Value) -> bool {
    ordered(value, target, Ordering::is_le)
}

fn any_element<F>(value: &Resolved<'_>, matches: F) -> bool
where
    F: Fn(&Value) -> bool,
{
    match value {
        Resolved::Absent => false,
        Resolved::One(Value::Array(items)) => items.iter().any(|item| matches(item)),
        Resolved::One(single) => matches(*single),
        Resolved::Many(values) => values.iter().any(|item| matches(*item)),
    }
}

fn ordered(value: &Resolved<'_>, target: &Value, accept: fn(Ordering) -> bool) -> bool {
    if value.is_sequence() {
        log::trace!("Ordering comparison against a sequence value is rejected");
        return false;
    }
    value
        .single()
        .and_then(|single| compare_ordered(single, target))
        .is_some_and(accept)
}

/// Loose equality used by bare criteria and `eq` fallbacks.
///
/// - `null` equals only `null`
/// - arrays and objects never equal anything
/// - same-type strings, booleans and numbers compare directly
/// - mixed scalar types compare numerically when both sides are numbers or
///   numeric strings (`"20" == 20`), otherwise by their text form
///   (`"true" == true`)
pub fn loosely_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,
        (Value::Array(_) | Value::Object(_), _) | (_, Value::Array(_) | Value::Object(_)) => false,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a.as_f64() == b.as_f64(),
        _ => match (as_number(left), as_number(right)) {
            (Some(a), Some(b)) => a == b,
            _ => scalar_text(left) == scalar_text(right),
        },
    }
}

/// Strict equality used for `in` membership: same JSON type required,
/// numbers compared by value (`20 == 20.0`), containers never match.
pub fn strictly_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a.as_f64() == b.as_f64(),
        (Value::String(a), Value::String(b)) => a == b,
        _ => false,
    }
}

/// Ordering used by `gt`, `lt`, `gte` and `lte`.
///
/// Numeric when both sides are numbers or numeric strings, lexicographic
/// when both are (non-numeric) strings, otherwise unordered.
pub fn compare_ordered(left: &Value, right: &Value) -> Option<Ordering> {
    if let (Some(a), Some(b)) = (as_number(left), as_number(right)) {
        return a.partial_cmp(&b);
    }
    match (left, right) {
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

/// Numeric reading of a number or a finite numeric string
fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
        }
        _ => None,
    }
}

fn scalar_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        _ => None,
    }
}
