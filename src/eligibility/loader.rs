//! Criteria loader - JSON and YAML documents
//!
//! Criteria usually live next to the promotion they gate, either as JSON or
//! as YAML. Files are dispatched on their extension.

use std::fs;
use std::path::Path;

use super::criteria::Criteria;
use crate::error::{EligibilityError, Result};

/// Loads criteria documents from strings or files
#[derive(Debug, Default)]
pub struct CriteriaLoader;

impl CriteriaLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load criteria from a `.json`, `.yaml` or `.yml` file
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Criteria> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let criteria = match extension.as_deref() {
            Some("json") => Self::parse_json(&fs::read_to_string(path)?)?,
            Some("yaml" | "yml") => Self::parse_yaml(&fs::read_to_string(path)?)?,
            _ => {
                return Err(EligibilityError::unsupported_format(
                    path.display().to_string(),
                ))
            }
        };

        log::debug!(
            "Loaded {} criteria from {}",
            criteria.len(),
            path.display()
        );
        Ok(criteria)
    }

    /// Parse criteria from a JSON string
    pub fn parse_json(content: &str) -> Result<Criteria> {
        let criteria: Criteria = serde_json::from_str(content)?;
        Ok(criteria)
    }

    /// Parse criteria from a YAML string
    pub fn parse_yaml(content: &str) -> Result<Criteria> {
        let criteria: Criteria = serde_yaml::from_str(content)?;
        Ok(criteria)
    }
}
