use async_trait::async_trait;

use nb_core::entities::{Employee, Task};
use nb_core::requests::TaskLists;
use nb_core::responses::EmployeeTasks;

use crate::error::DatabaseError;

/// Operations the task endpoints perform on employee documents.
///
/// Mutations return the number of documents the update matched. The
/// endpoint layer treats zero as a failed mutation.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Fetch a whole employee document.
    async fn find_employee(&self, emp_id: i64) -> Result<Option<Employee>, DatabaseError>;

    /// Fetch only the `{empId, todo, done}` projection.
    async fn find_task_lists(&self, emp_id: i64) -> Result<Option<EmployeeTasks>, DatabaseError>;

    /// Append `task` to the tail of the employee's `todo` list.
    async fn append_task(&self, emp_id: i64, task: &Task) -> Result<u64, DatabaseError>;

    /// Overwrite both lists with exactly the given contents.
    async fn replace_task_lists(
        &self,
        emp_id: i64,
        lists: &TaskLists,
    ) -> Result<u64, DatabaseError>;

    /// Filter `task_id` out of both lists and write both back.
    async fn remove_task(&self, emp_id: i64, task_id: &str) -> Result<u64, DatabaseError>;

    /// Insert a new employee document. Fails with `Duplicate` if the id is taken.
    async fn insert_employee(&self, employee: &Employee) -> Result<(), DatabaseError>;
}
