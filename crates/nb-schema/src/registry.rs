//! Central schema registry for all Nodebucket contracts.
//!
//! The `SchemaRegistry` builds JSON Schemas from nb-core types at construction
//! time using [`schemars::schema_for!`], compiles each one with `jsonschema`,
//! and validates untyped JSON against them by name.

use std::collections::HashMap;

use schemars::schema_for;

use crate::error::SchemaError;
use crate::report::{ValidationReport, Violation};

/// Schema for the create-task body: exactly `{text}`.
pub const TASK_CREATE: &str = "task_create";

/// Schema for the replace-task-lists body: exactly `{todo, done}`.
pub const TASK_LISTS: &str = "task_lists";

struct RegisteredSchema {
    schema: serde_json::Value,
    validator: jsonschema::Validator,
}

/// Central store of all JSON Schemas in the Nodebucket system.
///
/// Built from nb-core types via [`schemars::schema_for!`]. Provides lookup
/// by name and validation of arbitrary JSON values against registered schemas.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, RegisteredSchema>,
}

/// Insert a compiled schema into the map. Panics if `schemars` output cannot
/// be converted or compiled (generated schemas are always well-formed).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {{
        let schema = serde_json::to_value(schema_for!($ty)).unwrap();
        let validator = jsonschema::validator_for(&schema).unwrap();
        $map.insert($name, RegisteredSchema { schema, validator });
    }};
}

impl SchemaRegistry {
    /// Build a new registry containing the request and response schemas.
    ///
    /// # Panics
    ///
    /// Panics if a `schemars`-generated schema fails to serialize or compile.
    /// This is not expected in practice because `schemars` always produces
    /// valid draft 2020-12 output.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Request contracts (2) ---
        register!(schemas, TASK_CREATE, nb_core::requests::NewTask);
        register!(schemas, TASK_LISTS, nb_core::requests::TaskLists);

        // --- Entities (2) ---
        register!(schemas, "employee", nb_core::entities::Employee);
        register!(schemas, "task", nb_core::entities::Task);

        // --- Responses (4) ---
        register!(
            schemas,
            "employee_tasks",
            nb_core::responses::EmployeeTasks
        );
        register!(
            schemas,
            "create_task_response",
            nb_core::responses::CreateTaskResponse
        );
        register!(schemas, "error_envelope", nb_core::responses::ErrorEnvelope);
        register!(schemas, "health_response", nb_core::responses::HealthResponse);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name).map(|entry| &entry.schema)
    }

    /// Check a JSON value against a named schema and report every violation.
    ///
    /// Pure and synchronous; never touches anything but the instance.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown.
    pub fn check(
        &self,
        name: &str,
        instance: &serde_json::Value,
    ) -> Result<ValidationReport, SchemaError> {
        let entry = self
            .schemas
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let violations = entry
            .validator
            .iter_errors(instance)
            .map(|e| {
                Violation::from_locations(
                    &e.instance_path.to_string(),
                    &e.schema_path.to_string(),
                    e.to_string(),
                )
            })
            .collect();

        Ok(ValidationReport { violations })
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces violations.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let report = self.check(name, instance)?;
        if report.is_valid() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed {
                violations: report.violations,
            })
        }
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new()
    }

    #[test]
    fn registry_has_expected_count() {
        // 2 requests + 2 entities + 4 responses = 8
        assert_eq!(registry().schema_count(), 8);
    }

    #[test]
    fn registry_list_is_sorted() {
        let names = registry().list();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn get_nonexistent_schema() {
        assert!(registry().get("nonexistent").is_none());
    }

    #[test]
    fn accepts_well_formed_new_task() {
        let report = registry()
            .check(TASK_CREATE, &json!({"text": "write spec"}))
            .unwrap();
        assert!(report.is_valid(), "{report:?}");
    }

    #[rstest]
    #[case::extra_field(json!({"text": "x", "due": "tomorrow"}), "additionalProperties")]
    #[case::missing_text(json!({}), "required")]
    #[case::wrong_type(json!({"text": 42}), "type")]
    #[case::empty_text(json!({"text": ""}), "minLength")]
    #[case::not_an_object(json!(["text"]), "type")]
    fn rejects_malformed_new_task(#[case] body: serde_json::Value, #[case] rule: &str) {
        let report = registry().check(TASK_CREATE, &body).unwrap();
        assert!(!report.is_valid());
        assert!(report.has_rule(rule), "expected rule {rule}: {report:?}");
    }

    #[test]
    fn accepts_well_formed_task_lists() {
        let body = json!({
            "todo": [{"_id": "a", "text": "x"}],
            "done": []
        });
        assert!(registry().validate(TASK_LISTS, &body).is_ok());
    }

    #[rstest]
    #[case::missing_done(json!({"todo": []}), "required")]
    #[case::extra_envelope_field(json!({"todo": [], "done": [], "doing": []}), "additionalProperties")]
    #[case::extra_task_field(json!({"todo": [{"_id": "a", "text": "x", "pinned": true}], "done": []}), "additionalProperties")]
    #[case::task_missing_id(json!({"todo": [], "done": [{"text": "x"}]}), "required")]
    #[case::list_not_array(json!({"todo": {}, "done": []}), "type")]
    fn rejects_malformed_task_lists(#[case] body: serde_json::Value, #[case] rule: &str) {
        let report = registry().check(TASK_LISTS, &body).unwrap();
        assert!(report.has_rule(rule), "expected rule {rule}: {report:?}");
    }

    #[test]
    fn violation_paths_point_at_offending_task() {
        let body = json!({
            "todo": [{"_id": "a", "text": "x"}, {"_id": 7, "text": "y"}],
            "done": []
        });
        let report = registry().check(TASK_LISTS, &body).unwrap();
        assert!(
            report.violations.iter().any(|v| v.path == "/todo/1/_id"),
            "{report:?}"
        );
    }

    #[test]
    fn validate_reports_violations_in_error() {
        let result = registry().validate(TASK_CREATE, &json!({"text": "x", "extra": 1}));
        match result {
            Err(SchemaError::ValidationFailed { violations }) => {
                assert!(!violations.is_empty());
            }
            other => panic!("Expected ValidationFailed, got {other:?}"),
        }
    }

    #[test]
    fn validate_nonexistent_schema_returns_not_found() {
        let result = registry().validate("bogus", &json!({}));
        assert!(matches!(result, Err(SchemaError::NotFound(_))));
    }
}
