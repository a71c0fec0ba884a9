use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Task;

/// The per-employee document holding both task lists.
///
/// `emp_id` is the sole lookup key. Missing lists deserialize as empty so
/// documents seeded without them still read cleanly.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub emp_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default)]
    pub todo: Vec<Task>,
    #[serde(default)]
    pub done: Vec<Task>,
}

impl Employee {
    /// A fresh employee document with both lists initialized empty.
    #[must_use]
    pub const fn new(emp_id: i64) -> Self {
        Self {
            emp_id,
            first_name: None,
            last_name: None,
            todo: Vec::new(),
            done: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_name(
        mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        self.first_name = Some(first_name.into());
        self.last_name = Some(last_name.into());
        self
    }

    /// `"First Last"`, or whichever half is present.
    #[must_use]
    pub fn display_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Whether either list holds a task with this ID.
    #[must_use]
    pub fn contains_task(&self, task_id: &str) -> bool {
        self.todo.iter().chain(&self.done).any(|t| t.id == task_id)
    }
}
