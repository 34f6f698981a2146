// SPDX-License-Identifier: MIT

//! Dotted path resolution into nested cart values
//!
//! A path such as `products.quantity` is tokenized once into segments and
//! walked against the cart. Arrays met along the way are broadcast: the
//! remaining segments are resolved against every element and the results
//! flattened by one level.

use serde_json::Value;
use std::fmt;

/// A pre-tokenized dotted path (`a.b.c`); empty segments are discarded
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    raw: String,
    segments: Vec<String>,
}

impl FieldPath {
    /// Tokenize a dotted path
    pub fn parse(raw: &str) -> Self {
        let segments = raw
            .split('.')
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            raw: raw.to_string(),
            segments,
        }
    }

    /// The path as written in the criteria document
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Resolve this path against a cart value
    pub fn resolve<'a>(&self, node: &'a Value) -> Resolved<'a> {
        resolve_segments(&self.segments, node)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Outcome of resolving a path against a cart
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved<'a> {
    /// Some segment was missing
    Absent,
    /// The path ended on a single value (which may itself be an array)
    One(&'a Value),
    /// The path crossed at least one array; one entry per matching leaf
    Many(Vec<&'a Value>),
}

impl<'a> Resolved<'a> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Resolved::Absent)
    }

    /// True when predicates must be broadcast over several elements
    pub fn is_sequence(&self) -> bool {
        matches!(self, Resolved::Many(_) | Resolved::One(Value::Array(_)))
    }

    /// The resolved value when it is a single non-array value
    pub fn single(&self) -> Option<&'a Value> {
        match self {
            Resolved::One(value) if !value.is_array() => Some(*value),
            _ => None,
        }
    }

    /// Owned JSON form of the resolved value; `Many` becomes an array
    pub fn to_value(&self) -> Option<Value> {
        match self {
            Resolved::Absent => None,
            Resolved::One(value) => Some((*value).clone()),
            Resolved::Many(values) => Some(Value::Array(
                values.iter().map(|value| (*value).clone()).collect(),
            )),
        }
    }
}

fn resolve_segments<'a>(segments: &[String], node: &'a Value) -> Resolved<'a> {
    let Some((head, rest)) = segments.split_first() else {
        return Resolved::One(node);
    };

    match node {
        Value::Array(items) => {
            // Each element resolves the same remaining segments; element
            // results are already flat, so one level of flattening suffices.
            let mut flattened = Vec::new();
            for item in items {
                match resolve_segments(segments, item) {
                    Resolved::Absent => {}
                    Resolved::One(Value::Array(inner)) => flattened.extend(inner.iter()),
                    Resolved::One(value) => flattened.push(value),
                    Resolved::Many(values) => flattened.extend(values),
                }
            }
            Resolved::Many(flattened)
        }
        Value::Object(map) => match map.get(head.as_str()) {
            Some(child) => resolve_segments(rest, child),
            None => Resolved::Absent,
        },
        _ => Resolved::Absent,
    }
}
