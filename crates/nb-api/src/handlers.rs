//! Employee task endpoints.
//!
//! Each handler runs the same pipeline: parse `empId`, validate the body (if
//! any), fetch the employee, branch on existence, mutate, respond. Nothing is
//! written to the response until every check has passed.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use nb_core::entities::{Employee, Task};
use nb_core::ids::generate_task_id;
use nb_core::requests::{NewTask, TaskLists};
use nb_core::responses::{CreateTaskResponse, EmployeeTasks, HealthResponse};
use nb_schema::{TASK_CREATE, TASK_LISTS};

use crate::error::ApiError;
use crate::state::AppState;

pub(crate) fn parse_emp_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(ApiError::InvalidEmployeeId)
}

/// Validate an untyped body against a named schema, then deserialize it.
fn contract_body<T: DeserializeOwned>(
    state: &AppState,
    schema: &str,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<T, ApiError> {
    let Json(body) = payload.map_err(|rejection| ApiError::MalformedBody(rejection.body_text()))?;
    state.schemas.validate(schema, &body)?;
    serde_json::from_value(body).map_err(|e| ApiError::MalformedBody(e.to_string()))
}

async fn require_employee(state: &AppState, emp_id: i64) -> Result<Employee, ApiError> {
    state
        .store
        .find_employee(emp_id)
        .await?
        .ok_or(ApiError::EmployeeNotFound(emp_id))
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// `GET /api/employees/{empId}`
pub async fn get_employee(
    State(state): State<AppState>,
    Path(emp_id): Path<String>,
) -> Result<Json<Employee>, ApiError> {
    let emp_id = parse_emp_id(&emp_id)?;
    let employee = require_employee(&state, emp_id).await?;
    Ok(Json(employee))
}

/// `GET /api/employees/{empId}/tasks`
pub async fn list_tasks(
    State(state): State<AppState>,
    Path(emp_id): Path<String>,
) -> Result<Json<EmployeeTasks>, ApiError> {
    let emp_id = parse_emp_id(&emp_id)?;
    let tasks = state
        .store
        .find_task_lists(emp_id)
        .await?
        .ok_or(ApiError::EmployeeNotFound(emp_id))?;
    Ok(Json(tasks))
}

/// `POST /api/employees/{empId}/tasks`
pub async fn create_task(
    State(state): State<AppState>,
    Path(emp_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateTaskResponse>), ApiError> {
    let emp_id = parse_emp_id(&emp_id)?;
    let new_task: NewTask = contract_body(&state, TASK_CREATE, payload)?;
    require_employee(&state, emp_id).await?;

    let task = Task::new(generate_task_id()?, new_task.text);
    let modified = state.store.append_task(emp_id, &task).await?;
    if modified == 0 {
        return Err(ApiError::MutationFailed {
            emp_id,
            action: "create task",
        });
    }

    debug!(emp_id, task_id = %task.id, "task created");
    Ok((StatusCode::CREATED, Json(CreateTaskResponse { id: task.id })))
}

/// `PUT /api/employees/{empId}/tasks`
pub async fn replace_task_lists(
    State(state): State<AppState>,
    Path(emp_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let emp_id = parse_emp_id(&emp_id)?;
    let lists: TaskLists = contract_body(&state, TASK_LISTS, payload)?;
    require_employee(&state, emp_id).await?;

    let modified = state.store.replace_task_lists(emp_id, &lists).await?;
    if modified == 0 {
        return Err(ApiError::MutationFailed {
            emp_id,
            action: "update tasks",
        });
    }

    debug!(emp_id, todo = lists.todo.len(), done = lists.done.len(), "task lists replaced");
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/employees/{empId}/tasks/{taskId}`
///
/// Deleting an id that is in neither list still answers 204.
pub async fn delete_task(
    State(state): State<AppState>,
    Path((emp_id, task_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let emp_id = parse_emp_id(&emp_id)?;
    let employee = require_employee(&state, emp_id).await?;

    if !employee.contains_task(&task_id) {
        debug!(emp_id, task_id, "delete of absent task");
    }
    state.store.remove_task(emp_id, &task_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Fallback for every unmatched route.
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1007", 1007)]
    #[case("0", 0)]
    #[case("-3", -3)]
    fn numeric_ids_parse(#[case] raw: &str, #[case] expected: i64) {
        assert_eq!(parse_emp_id(raw).unwrap(), expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("12abc")]
    #[case("1.5")]
    #[case("")]
    #[case("99999999999999999999")]
    fn non_numeric_ids_are_rejected(#[case] raw: &str) {
        assert!(matches!(
            parse_emp_id(raw),
            Err(ApiError::InvalidEmployeeId(_))
        ));
    }
}
