//! Request contracts accepted by the task endpoints.
//!
//! Both contracts reject unknown fields; the generated JSON Schemas carry
//! `additionalProperties: false` so the validator reports them by path.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Task;

/// Body of `POST /api/employees/{empId}/tasks`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NewTask {
    #[schemars(length(min = 1))]
    pub text: String,
}

/// Body of `PUT /api/employees/{empId}/tasks`: both lists, fully replacing
/// the stored ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TaskLists {
    pub todo: Vec<Task>,
    pub done: Vec<Task>,
}

impl TaskLists {
    #[must_use]
    pub const fn new(todo: Vec<Task>, done: Vec<Task>) -> Self {
        Self { todo, done }
    }
}
