// SPDX-License-Identifier: MIT

//! Criteria parsing and evaluation
//!
//! A criteria document maps dotted paths to criteria:
//! - `"shopperId": "shopper-id"` - bare value, loose equality
//! - `"total": {"gt": 50}` - comparator object, every key must hold
//! - `"date": {"and": {"gt": "2021-01-01", "lt": "2021-12-31"}}` - nested logic

mod ast;
pub mod compare;
mod evaluator;
mod parser;

pub use ast::{Condition, Criteria, Criterion, Operator, Rule};
pub use evaluator::{evaluate, evaluate_and, evaluate_or, evaluate_resolved};
pub use parser::{parse, parse_criterion};
