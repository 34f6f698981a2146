// SPDX-License-Identifier: MIT

//! Typed error handling for cart-eligibility
//!
//! Evaluation itself never fails: a cart either satisfies the criteria or it
//! does not. These errors cover building criteria from documents and files.

use thiserror::Error;

/// Convenience result alias used across the crate
pub type Result<T> = std::result::Result<T, EligibilityError>;

/// Top-level error type for cart-eligibility
#[derive(Debug, Error)]
pub enum EligibilityError {
    /// The criteria document does not have the expected shape
    #[error("Invalid criteria: {0}")]
    InvalidCriteria(String),

    /// Criteria file extension is neither JSON nor YAML
    #[error("Unsupported criteria format: {0}")]
    UnsupportedFormat(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl EligibilityError {
    /// Create an invalid criteria error
    pub fn invalid_criteria(message: impl Into<String>) -> Self {
        Self::InvalidCriteria(message.into())
    }

    /// Create an unsupported format error
    pub fn unsupported_format(message: impl Into<String>) -> Self {
        Self::UnsupportedFormat(message.into())
    }
}
