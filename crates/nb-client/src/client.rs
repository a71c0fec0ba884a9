//! Transport seam and its reqwest implementation.

use async_trait::async_trait;
use tracing::debug;

use nb_core::entities::Employee;
use nb_core::requests::{NewTask, TaskLists};
use nb_core::responses::{CreateTaskResponse, EmployeeTasks};

use crate::error::ClientError;
use crate::http::check_response;

/// The calls the synchronization layer makes against the server.
#[async_trait]
pub trait TaskApi: Send + Sync {
    async fn get_employee(&self, emp_id: i64) -> Result<Employee, ClientError>;

    async fn get_tasks(&self, emp_id: i64) -> Result<EmployeeTasks, ClientError>;

    async fn create_task(&self, emp_id: i64, text: &str)
    -> Result<CreateTaskResponse, ClientError>;

    async fn replace_task_lists(&self, emp_id: i64, lists: &TaskLists) -> Result<(), ClientError>;

    async fn delete_task(&self, emp_id: i64, task_id: &str) -> Result<(), ClientError>;
}

/// HTTP client for the `/api/employees` endpoints.
#[derive(Debug, Clone)]
pub struct TaskClient {
    http: reqwest::Client,
    base_url: String,
}

impl TaskClient {
    /// Create a client rooted at `base_url` (e.g. `http://localhost:3000`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying client fails to build.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("nodebucket/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn employee_url(&self, emp_id: i64) -> String {
        format!("{}/api/employees/{emp_id}", self.base_url)
    }

    fn tasks_url(&self, emp_id: i64) -> String {
        format!("{}/tasks", self.employee_url(emp_id))
    }
}

#[async_trait]
impl TaskApi for TaskClient {
    async fn get_employee(&self, emp_id: i64) -> Result<Employee, ClientError> {
        let resp = check_response(self.http.get(self.employee_url(emp_id)).send().await?).await?;
        resp.json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }

    async fn get_tasks(&self, emp_id: i64) -> Result<EmployeeTasks, ClientError> {
        let resp = check_response(self.http.get(self.tasks_url(emp_id)).send().await?).await?;
        resp.json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }

    async fn create_task(
        &self,
        emp_id: i64,
        text: &str,
    ) -> Result<CreateTaskResponse, ClientError> {
        let body = NewTask {
            text: text.to_string(),
        };
        let resp = check_response(
            self.http
                .post(self.tasks_url(emp_id))
                .json(&body)
                .send()
                .await?,
        )
        .await?;
        let created: CreateTaskResponse = resp
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))?;
        debug!(emp_id, task_id = %created.id, "task created");
        Ok(created)
    }

    async fn replace_task_lists(&self, emp_id: i64, lists: &TaskLists) -> Result<(), ClientError> {
        // 204, no body.
        check_response(
            self.http
                .put(self.tasks_url(emp_id))
                .json(lists)
                .send()
                .await?,
        )
        .await?;
        Ok(())
    }

    async fn delete_task(&self, emp_id: i64, task_id: &str) -> Result<(), ClientError> {
        let url = format!("{}/{}", self.tasks_url(emp_id), urlencoding::encode(task_id));
        check_response(self.http.delete(url).send().await?).await?;
        Ok(())
    }
}
