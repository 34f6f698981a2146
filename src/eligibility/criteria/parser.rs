//! Criteria document parser
//!
//! Turns a JSON-compatible document such as
//! `{"total": {"gt": 50}, "products.productId": {"in": ["A"]}}`
//! into the tagged [`Criteria`] tree evaluated by the service.

use serde_json::{Map, Value};

use super::ast::{Condition, Criteria, Criterion, Operator, Rule};
use crate::eligibility::path::FieldPath;
use crate::error::{EligibilityError, Result};

/// Parse a criteria document; the top level must be a mapping
pub fn parse(document: &Value) -> Result<Criteria> {
    let Value::Object(entries) = document else {
        return Err(EligibilityError::invalid_criteria(format!(
            "expected a mapping of paths to criteria, found {}",
            json_kind(document)
        )));
    };

    let rules = entries
        .iter()
        .map(|(path, criterion)| Rule {
            path: FieldPath::parse(path),
            criterion: parse_criterion(criterion),
        })
        .collect();

    Ok(Criteria { rules })
}

/// Parse the criterion attached to one path.
///
/// Objects are comparator objects. Arrays are comparator objects keyed by
/// element index, so a non-empty array is never satisfied and `[]` always is.
pub fn parse_criterion(value: &Value) -> Criterion {
    match value {
        Value::Object(entries) => Criterion::Comparator(parse_conditions(entries)),
        Value::Array(items) => Criterion::Comparator(indexed_conditions(items)),
        other => Criterion::Literal(other.clone()),
    }
}

fn parse_conditions(entries: &Map<String, Value>) -> Vec<Condition> {
    entries
        .iter()
        .map(|(key, operand)| parse_condition(key, operand))
        .collect()
}

// Elements become unrecognized entries keyed "0", "1", ...
fn indexed_conditions(items: &[Value]) -> Vec<Condition> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| Condition::Unrecognized {
            key: index.to_string(),
            target: item.clone(),
        })
        .collect()
}

// Operand of `and`/`or`: a mapping of sub-conditions, an array read as
// index-keyed entries, and any other value as no entries at all.
fn logical_operand(operand: &Value) -> Vec<Condition> {
    match operand {
        Value::Object(entries) => parse_conditions(entries),
        Value::Array(items) => indexed_conditions(items),
        _ => Vec::new(),
    }
}

fn parse_condition(key: &str, operand: &Value) -> Condition {
    let Some(op) = Operator::from_key(key) else {
        return Condition::Unrecognized {
            key: key.to_string(),
            target: operand.clone(),
        };
    };

    match op {
        Operator::Gt => Condition::Gt(operand.clone()),
        Operator::Lt => Condition::Lt(operand.clone()),
        Operator::Gte => Condition::Gte(operand.clone()),
        Operator::Lte => Condition::Lte(operand.clone()),
        Operator::In => Condition::In(operand.clone()),
        Operator::And => Condition::And(logical_operand(operand)),
        Operator::Or => Condition::Or(logical_operand(operand)),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Criteria {
    /// Parse a criteria document; see [`parse`]
    pub fn parse(document: &Value) -> Result<Self> {
        parse(document)
    }
}

impl TryFrom<Value> for Criteria {
    type Error = EligibilityError;

    fn try_from(document: Value) -> Result<Self> {
        parse(&document)
    }
}
