//! `EmployeeStore` backed by libSQL.

use async_trait::async_trait;
use tracing::debug;

use nb_core::entities::{Employee, Task};
use nb_core::requests::TaskLists;
use nb_core::responses::EmployeeTasks;

use crate::error::DatabaseError;
use crate::helpers::{EMPLOYEE_COLS, encode_task_list, row_to_employee};
use crate::store::EmployeeStore;
use crate::{NbDb, StoreHandle};

/// Appends in a single statement so concurrent creates never lose a task.
const APPEND_TODO_SQL: &str = "UPDATE employees \
     SET todo = json_insert(COALESCE(NULLIF(todo, ''), '[]'), '$[#]', json(?2)) \
     WHERE emp_id = ?1";

const REPLACE_LISTS_SQL: &str = "UPDATE employees SET todo = ?2, done = ?3 WHERE emp_id = ?1";

pub struct LibsqlEmployeeStore {
    db: NbDb,
}

impl LibsqlEmployeeStore {
    #[must_use]
    pub const fn new(db: NbDb) -> Self {
        Self { db }
    }

    #[must_use]
    pub const fn db(&self) -> &NbDb {
        &self.db
    }
}

async fn select_employee(
    handle: &StoreHandle,
    emp_id: i64,
) -> Result<Option<Employee>, DatabaseError> {
    let mut rows = handle
        .conn()
        .query(
            &format!("SELECT {EMPLOYEE_COLS} FROM employees WHERE emp_id = ?1"),
            [emp_id],
        )
        .await?;
    match rows.next().await? {
        Some(row) => Ok(Some(row_to_employee(&row)?)),
        None => Ok(None),
    }
}

#[async_trait]
impl EmployeeStore for LibsqlEmployeeStore {
    async fn find_employee(&self, emp_id: i64) -> Result<Option<Employee>, DatabaseError> {
        self.db
            .run(|handle| async move { select_employee(&handle, emp_id).await })
            .await
    }

    async fn find_task_lists(&self, emp_id: i64) -> Result<Option<EmployeeTasks>, DatabaseError> {
        Ok(self.find_employee(emp_id).await?.map(EmployeeTasks::from))
    }

    async fn append_task(&self, emp_id: i64, task: &Task) -> Result<u64, DatabaseError> {
        let task_json = serde_json::to_string(task)?;
        let modified = self
            .db
            .run(|handle| async move {
                Ok::<_, DatabaseError>(
                    handle
                        .conn()
                        .execute(APPEND_TODO_SQL, libsql::params![emp_id, task_json])
                        .await?,
                )
            })
            .await?;
        debug!(emp_id, task_id = %task.id, modified, "appended task to todo");
        Ok(modified)
    }

    async fn replace_task_lists(
        &self,
        emp_id: i64,
        lists: &TaskLists,
    ) -> Result<u64, DatabaseError> {
        let todo = encode_task_list(&lists.todo)?;
        let done = encode_task_list(&lists.done)?;
        let modified = self
            .db
            .run(|handle| async move {
                Ok::<_, DatabaseError>(
                    handle
                        .conn()
                        .execute(REPLACE_LISTS_SQL, libsql::params![emp_id, todo, done])
                        .await?,
                )
            })
            .await?;
        debug!(
            emp_id,
            todo = lists.todo.len(),
            done = lists.done.len(),
            modified,
            "replaced task lists"
        );
        Ok(modified)
    }

    async fn remove_task(&self, emp_id: i64, task_id: &str) -> Result<u64, DatabaseError> {
        let modified = self
            .db
            .run(|handle| async move {
                let Some(employee) = select_employee(&handle, emp_id).await? else {
                    return Ok(0);
                };
                let keep = |t: &Task| t.id != task_id;
                let todo: Vec<Task> = employee.todo.into_iter().filter(keep).collect();
                let done: Vec<Task> = employee.done.into_iter().filter(keep).collect();
                let (todo, done) = (encode_task_list(&todo)?, encode_task_list(&done)?);
                Ok::<_, DatabaseError>(
                    handle
                        .conn()
                        .execute(REPLACE_LISTS_SQL, libsql::params![emp_id, todo, done])
                        .await?,
                )
            })
            .await?;
        debug!(emp_id, task_id, modified, "removed task");
        Ok(modified)
    }

    async fn insert_employee(&self, employee: &Employee) -> Result<(), DatabaseError> {
        let emp_id = employee.emp_id;
        let first_name = employee.first_name.clone();
        let last_name = employee.last_name.clone();
        let todo = encode_task_list(&employee.todo)?;
        let done = encode_task_list(&employee.done)?;
        let inserted = self
            .db
            .run(|handle| async move {
                Ok::<_, DatabaseError>(
                    handle
                        .conn()
                        .execute(
                            "INSERT INTO employees (emp_id, first_name, last_name, todo, done)
                             VALUES (?1, ?2, ?3, ?4, ?5)
                             ON CONFLICT(emp_id) DO NOTHING",
                            libsql::params![emp_id, first_name, last_name, todo, done],
                        )
                        .await?,
                )
            })
            .await?;
        if inserted == 0 {
            return Err(DatabaseError::Duplicate { emp_id });
        }
        debug!(emp_id, "inserted employee");
        Ok(())
    }
}
