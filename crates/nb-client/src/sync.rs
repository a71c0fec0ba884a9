//! Local task lists kept in step with the server.
//!
//! [`TaskSync`] is the seam; [`OptimisticBoard`] is the optimistic
//! implementation. Reorders and transfers change the local lists first and
//! then push both lists to the server without waiting for confirmation.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use nb_core::entities::Task;
use nb_core::enums::TaskListKind;
use nb_core::requests::TaskLists;

use crate::banner::{Banner, BannerState};
use crate::client::TaskApi;
use crate::error::{ClientError, TASK_TEXT_MAX, TASK_TEXT_MIN};
use crate::moves::{move_item, transfer_item};

pub const TASK_ADDED: &str = "Task added successfully!";
pub const TASK_DELETED: &str = "Task deleted successfully!";
pub const TASKS_UPDATED: &str = "Tasks updated successfully!";

/// Default lifetime of a banner message.
pub const BANNER_TIMEOUT: Duration = Duration::from_secs(5);

#[async_trait]
pub trait TaskSync: Send {
    /// Replace the local lists with the server's.
    async fn load(&mut self) -> Result<(), ClientError>;

    /// Create a task and append it to the local `todo` list.
    async fn add(&mut self, text: &str) -> Result<Task, ClientError>;

    /// Delete a task from whichever local list holds it.
    async fn delete(&mut self, task_id: &str) -> Result<(), ClientError>;

    /// Move a task within one list.
    async fn reorder(&mut self, kind: TaskListKind, from: usize, to: usize)
    -> Result<(), ClientError>;

    /// Move a task between lists (or within one when both kinds match).
    async fn transfer(
        &mut self,
        from_kind: TaskListKind,
        to_kind: TaskListKind,
        from: usize,
        to: usize,
    ) -> Result<(), ClientError>;

    fn todo(&self) -> &[Task];

    fn done(&self) -> &[Task];

    fn list(&self, kind: TaskListKind) -> &[Task] {
        match kind {
            TaskListKind::Todo => self.todo(),
            TaskListKind::Done => self.done(),
        }
    }

    fn banner(&self) -> BannerState;
}

/// Check task text against the creation form's length bounds.
///
/// # Errors
///
/// Returns [`ClientError::InvalidTaskText`] when the text is shorter than
/// [`TASK_TEXT_MIN`] or longer than [`TASK_TEXT_MAX`] characters.
pub fn validate_task_text(text: &str) -> Result<(), ClientError> {
    let length = text.chars().count();
    if (TASK_TEXT_MIN..=TASK_TEXT_MAX).contains(&length) {
        Ok(())
    } else {
        Err(ClientError::InvalidTaskText { length })
    }
}

pub struct OptimisticBoard<A: TaskApi> {
    api: A,
    emp_id: i64,
    todo: Vec<Task>,
    done: Vec<Task>,
    banner: Banner,
    banner_timeout: Duration,
}

impl<A: TaskApi> OptimisticBoard<A> {
    #[must_use]
    pub fn new(api: A, emp_id: i64) -> Self {
        Self {
            api,
            emp_id,
            todo: Vec::new(),
            done: Vec::new(),
            banner: Banner::new(),
            banner_timeout: BANNER_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_banner_timeout(mut self, timeout: Duration) -> Self {
        self.banner_timeout = timeout;
        self
    }

    #[must_use]
    pub const fn emp_id(&self) -> i64 {
        self.emp_id
    }

    fn fail(&self, op: &'static str, error: ClientError) -> ClientError {
        warn!(emp_id = self.emp_id, op, error = %error, "task sync failed");
        self.banner.error(error.user_message(), self.banner_timeout);
        error
    }

    async fn push_lists(&self) -> Result<(), ClientError> {
        let lists = TaskLists::new(self.todo.clone(), self.done.clone());
        match self.api.replace_task_lists(self.emp_id, &lists).await {
            Ok(()) => {
                debug!(emp_id = self.emp_id, "task lists pushed");
                self.banner.success(TASKS_UPDATED, self.banner_timeout);
                Ok(())
            }
            Err(e) => Err(self.fail("replace", e)),
        }
    }
}

#[async_trait]
impl<A: TaskApi> TaskSync for OptimisticBoard<A> {
    async fn load(&mut self) -> Result<(), ClientError> {
        match self.api.get_tasks(self.emp_id).await {
            Ok(tasks) => {
                self.todo = tasks.todo;
                self.done = tasks.done;
                debug!(
                    emp_id = self.emp_id,
                    todo = self.todo.len(),
                    done = self.done.len(),
                    "task lists loaded"
                );
                Ok(())
            }
            Err(e) => Err(self.fail("load", e)),
        }
    }

    async fn add(&mut self, text: &str) -> Result<Task, ClientError> {
        if let Err(e) = validate_task_text(text) {
            return Err(self.fail("add", e));
        }
        match self.api.create_task(self.emp_id, text).await {
            Ok(created) => {
                let task = Task::new(created.id, text);
                self.todo.push(task.clone());
                self.banner.success(TASK_ADDED, self.banner_timeout);
                Ok(task)
            }
            Err(e) => Err(self.fail("add", e)),
        }
    }

    async fn delete(&mut self, task_id: &str) -> Result<(), ClientError> {
        match self.api.delete_task(self.emp_id, task_id).await {
            Ok(()) => {
                self.todo.retain(|t| t.id != task_id);
                self.done.retain(|t| t.id != task_id);
                self.banner.success(TASK_DELETED, self.banner_timeout);
                Ok(())
            }
            Err(e) => Err(self.fail("delete", e)),
        }
    }

    async fn reorder(
        &mut self,
        kind: TaskListKind,
        from: usize,
        to: usize,
    ) -> Result<(), ClientError> {
        match kind {
            TaskListKind::Todo => move_item(&mut self.todo, from, to),
            TaskListKind::Done => move_item(&mut self.done, from, to),
        }
        self.push_lists().await
    }

    async fn transfer(
        &mut self,
        from_kind: TaskListKind,
        to_kind: TaskListKind,
        from: usize,
        to: usize,
    ) -> Result<(), ClientError> {
        if from_kind == to_kind {
            return self.reorder(from_kind, from, to).await;
        }
        let (source, target) = match from_kind {
            TaskListKind::Todo => (&mut self.todo, &mut self.done),
            TaskListKind::Done => (&mut self.done, &mut self.todo),
        };
        transfer_item(source, target, from, to);
        self.push_lists().await
    }

    fn todo(&self) -> &[Task] {
        &self.todo
    }

    fn done(&self) -> &[Task] {
        &self.done
    }

    fn banner(&self) -> BannerState {
        self.banner.snapshot()
    }
}
