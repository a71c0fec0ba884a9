//! Centralized error rendering.
//!
//! Every handler returns `Result<_, ApiError>`. `ApiError` renders the
//! `{type, status, message}` envelope and stashes an [`ErrorDetail`] in the
//! response extensions; [`attach_stack`] then rewrites the body with the
//! `stack` field when the server runs in development mode.

use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::error::Error as _;

use thiserror::Error;
use tracing::warn;

use nb_core::errors::CoreError;
use nb_core::responses::ErrorEnvelope;
use nb_db::DatabaseError;
use nb_schema::SchemaError;

use crate::state::AppState;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The `empId` path segment is not an integer.
    #[error("Employee ID must be a number.")]
    InvalidEmployeeId(#[source] std::num::ParseIntError),

    /// The body is not valid JSON (or not JSON at all).
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// The body is JSON but does not match the request contract.
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] SchemaError),

    #[error("Unable to find employee with empId {0}")]
    EmployeeNotFound(i64),

    /// The store matched no document on an update that should have matched.
    #[error("Unable to {action} for employee with empId {emp_id}")]
    MutationFailed { emp_id: i64, action: &'static str },

    #[error("Service unavailable")]
    StoreUnavailable(#[source] DatabaseError),

    #[error("Internal server error")]
    Store(#[source] DatabaseError),

    #[error("Internal server error")]
    Core(#[from] CoreError),

    /// No route matched the request path.
    #[error("Not Found")]
    RouteNotFound,
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidEmployeeId(_) | Self::MalformedBody(_) | Self::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::EmployeeNotFound(_) | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::MutationFailed { .. }
            | Self::StoreUnavailable(_)
            | Self::Store(_)
            | Self::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[must_use]
    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope::new(self.status().as_u16(), self.to_string())
    }

    /// The error followed by its `source()` chain, one cause per line.
    #[must_use]
    pub fn stack(&self) -> String {
        let mut stack = format!("ApiError: {self}");
        let mut source = self.source();
        while let Some(cause) = source {
            stack.push_str("\n    caused by: ");
            stack.push_str(&cause.to_string());
            source = cause.source();
        }
        stack
    }
}

impl From<DatabaseError> for ApiError {
    fn from(error: DatabaseError) -> Self {
        if error.is_unavailable() {
            Self::StoreUnavailable(error)
        } else {
            Self::Store(error)
        }
    }
}

/// Rendered error carried from `IntoResponse` to [`attach_stack`].
#[derive(Debug, Clone)]
pub struct ErrorDetail {
    pub envelope: ErrorEnvelope,
    pub stack: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!(error = %self.stack(), "request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "request rejected");
        }

        let envelope = self.envelope();
        let detail = ErrorDetail {
            envelope: envelope.clone(),
            stack: self.stack(),
        };
        let mut response = (status, Json(envelope)).into_response();
        response.extensions_mut().insert(detail);
        response
    }
}

/// Re-render error responses with their `stack` in development mode.
pub async fn attach_stack(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let Some(detail) = response.extensions_mut().remove::<ErrorDetail>() else {
        return response;
    };
    if !state.environment.exposes_stack() {
        return response;
    }
    let status = response.status();
    (status, Json(detail.envelope.with_stack(detail.stack))).into_response()
}
