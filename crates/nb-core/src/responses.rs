//! Response shapes returned by the task endpoints.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Employee, Task};

/// Projection returned by `GET /api/employees/{empId}/tasks`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeTasks {
    pub emp_id: i64,
    #[serde(default)]
    pub todo: Vec<Task>,
    #[serde(default)]
    pub done: Vec<Task>,
}

impl From<Employee> for EmployeeTasks {
    fn from(employee: Employee) -> Self {
        Self {
            emp_id: employee.emp_id,
            todo: employee.todo,
            done: employee.done,
        }
    }
}

/// Response from `POST /api/employees/{empId}/tasks`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CreateTaskResponse {
    pub id: String,
}

/// Response from `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

/// JSON body of every non-2xx response.
///
/// `stack` is only populated when the server runs in development mode.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ErrorEnvelope {
    #[serde(rename = "type")]
    pub kind: String,
    pub status: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl ErrorEnvelope {
    pub const KIND: &'static str = "error";

    #[must_use]
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: Self::KIND.to_string(),
            status,
            message: message.into(),
            stack: None,
        }
    }

    #[must_use]
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }
}
