// SPDX-License-Identifier: MIT

//! Eligibility service - the public entry point
//!
//! A cart is eligible when it satisfies every rule of the criteria.

use serde_json::Value;

use super::criteria::{self, Criteria, Rule};
use super::path::{FieldPath, Resolved};
use crate::error::Result;

/// Evaluates carts against criteria.
///
/// Holds no state; a single instance can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct EligibilityService;

impl EligibilityService {
    pub fn new() -> Self {
        Self
    }

    /// True when `cart` satisfies every rule of `criteria`.
    ///
    /// Empty criteria accept every cart. Rules are checked in declared order
    /// and evaluation stops at the first unmet rule.
    pub fn is_eligible(&self, cart: &Value, criteria: &Criteria) -> bool {
        for rule in criteria.rules() {
            if !self.satisfies(cart, rule) {
                log::debug!("Cart not eligible: criterion on '{}' not met", rule.path);
                return false;
            }
        }
        true
    }

    /// Parse a raw criteria document, then evaluate it
    pub fn is_eligible_value(&self, cart: &Value, criteria: &Value) -> Result<bool> {
        let criteria = Criteria::parse(criteria)?;
        Ok(self.is_eligible(cart, &criteria))
    }

    /// Evaluate a single rule
    pub fn satisfies(&self, cart: &Value, rule: &Rule) -> bool {
        criteria::evaluate(cart, &rule.path, &rule.criterion)
    }

    /// Look up the value(s) a dotted path addresses in `cart`
    pub fn cart_value<'a>(&self, path: &str, cart: &'a Value) -> Resolved<'a> {
        FieldPath::parse(path).resolve(cart)
    }
}
