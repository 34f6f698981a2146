// SPDX-License-Identifier: MIT

//! Cart eligibility evaluation
//!
//! Decides whether a JSON cart satisfies a declarative criteria document:
//! a mapping from dotted field paths to literal targets or comparator
//! objects such as `{"gt": 10}` or `{"and": {"gte": 5, "lt": 20}}`.

pub mod eligibility;
pub mod error;

pub use eligibility::criteria::{Condition, Criteria, Criterion, Operator, Rule};
pub use eligibility::loader::CriteriaLoader;
pub use eligibility::path::{FieldPath, Resolved};
pub use eligibility::service::EligibilityService;
pub use error::{EligibilityError, Result};
