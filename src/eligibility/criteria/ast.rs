// SPDX-License-Identifier: MIT

//! Parsed form of a criteria document

use serde::Deserialize;
use serde_json::Value;
use std::fmt;

use crate::eligibility::path::FieldPath;

/// Full rule set a cart is evaluated against, in declared order
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(try_from = "Value")]
pub struct Criteria {
    pub(crate) rules: Vec<Rule>,
}

impl Criteria {
    /// Criteria with no rules; every cart satisfies it
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// The criterion attached to one path
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub path: FieldPath,
    pub criterion: Criterion,
}

/// A criterion is either an implicit equality or a comparator object
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    /// Bare value: the cart value must loosely equal it
    Literal(Value),
    /// `{"gt": 10, "lt": 30}`: every condition must hold
    Comparator(Vec<Condition>),
}

/// One `key: operand` entry of a comparator object or of an `and`/`or` operand
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Gt(Value),
    Lt(Value),
    Gte(Value),
    Lte(Value),
    /// Membership in a list
    In(Value),
    /// Every sub-condition
    And(Vec<Condition>),
    /// Any sub-condition
    Or(Vec<Condition>),
    /// Any key outside the operator set, kept verbatim with its operand
    Unrecognized { key: String, target: Value },
}

impl Condition {
    /// The key this condition was written under
    pub fn key(&self) -> String {
        match self {
            Condition::Gt(_) => Operator::Gt.to_string(),
            Condition::Lt(_) => Operator::Lt.to_string(),
            Condition::Gte(_) => Operator::Gte.to_string(),
            Condition::Lte(_) => Operator::Lte.to_string(),
            Condition::In(_) => Operator::In.to_string(),
            Condition::And(_) => Operator::And.to_string(),
            Condition::Or(_) => Operator::Or.to_string(),
            Condition::Unrecognized { key, .. } => key.clone(),
        }
    }
}

/// Operators usable as comparator keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// gt
    Gt,
    /// lt
    Lt,
    /// gte
    Gte,
    /// lte
    Lte,
    /// in (membership in a list)
    In,
    /// and (every sub-condition)
    And,
    /// or (any sub-condition)
    Or,
}

impl Operator {
    /// Look up an operator by its criteria key
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "gt" => Some(Operator::Gt),
            "lt" => Some(Operator::Lt),
            "gte" => Some(Operator::Gte),
            "lte" => Some(Operator::Lte),
            "in" => Some(Operator::In),
            "and" => Some(Operator::And),
            "or" => Some(Operator::Or),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Gt => write!(f, "gt"),
            Operator::Lt => write!(f, "lt"),
            Operator::Gte => write!(f, "gte"),
            Operator::Lte => write!(f, "lte"),
            Operator::In => write!(f, "in"),
            Operator::And => write!(f, "and"),
            Operator::Or => write!(f, "or"),
        }
    }
}
