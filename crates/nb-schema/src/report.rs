//! Structured validation results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One failed schema rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Violation {
    /// JSON pointer to the offending value (`/` for the document root).
    pub path: String,
    /// The schema keyword that failed (`type`, `required`, `additionalProperties`, ...).
    pub rule: String,
    /// Human-readable description from the validator.
    pub message: String,
}

impl Violation {
    /// Build a violation from raw validator locations.
    ///
    /// The rule is the last segment of the schema path, which is always the
    /// keyword that rejected the instance.
    #[must_use]
    pub fn from_locations(instance_path: &str, schema_path: &str, message: String) -> Self {
        let path = if instance_path.is_empty() {
            "/".to_string()
        } else {
            instance_path.to_string()
        };
        let rule = schema_path
            .rsplit('/')
            .find(|segment| !segment.is_empty())
            .unwrap_or("schema")
            .to_string();
        Self {
            path,
            rule,
            message,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.path, self.rule, self.message)
    }
}

/// Outcome of validating one instance: valid when no violations were found.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Whether any violation was raised by `rule`.
    #[must_use]
    pub fn has_rule(&self, rule: &str) -> bool {
        self.violations.iter().any(|v| v.rule == rule)
    }
}
