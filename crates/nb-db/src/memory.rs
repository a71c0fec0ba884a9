//! In-memory `EmployeeStore` for tests and local experiments.
//!
//! Mirrors the libSQL store's semantics (append to `todo`, total overwrite,
//! filter-both-lists delete, match-count results) and adds two switches
//! that let tests provoke the failure paths: an unavailable store and
//! mutations that match nothing.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use nb_core::entities::{Employee, Task};
use nb_core::requests::TaskLists;
use nb_core::responses::EmployeeTasks;

use crate::error::DatabaseError;
use crate::store::EmployeeStore;

#[derive(Debug, Clone, Default)]
pub struct MemoryEmployeeStore {
    employees: Arc<RwLock<BTreeMap<i64, Employee>>>,
    unavailable: Arc<AtomicBool>,
    ignore_mutations: Arc<AtomicBool>,
    calls: Arc<AtomicUsize>,
}

impl MemoryEmployeeStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-seeded with the given documents.
    #[must_use]
    pub fn with_employees(employees: impl IntoIterator<Item = Employee>) -> Self {
        let map = employees.into_iter().map(|e| (e.emp_id, e)).collect();
        Self {
            employees: Arc::new(RwLock::new(map)),
            ..Self::default()
        }
    }

    /// Make every subsequent call fail with `StoreUnavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Make every subsequent mutation report zero modified documents
    /// without changing anything.
    pub fn set_ignore_mutations(&self, ignore: bool) {
        self.ignore_mutations.store(ignore, Ordering::SeqCst);
    }

    /// Number of store operations performed so far, including failed ones.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Copy of a stored document, bypassing the call counter.
    pub async fn snapshot(&self, emp_id: i64) -> Option<Employee> {
        self.employees.read().await.get(&emp_id).cloned()
    }

    fn enter(&self) -> Result<(), DatabaseError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DatabaseError::StoreUnavailable(
                "memory store switched off".to_string(),
            ));
        }
        Ok(())
    }

    fn ignoring_mutations(&self) -> bool {
        self.ignore_mutations.load(Ordering::SeqCst)
    }
}

#[allow(clippy::significant_drop_tightening)]
#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
    async fn find_employee(&self, emp_id: i64) -> Result<Option<Employee>, DatabaseError> {
        self.enter()?;
        Ok(self.employees.read().await.get(&emp_id).cloned())
    }

    async fn find_task_lists(&self, emp_id: i64) -> Result<Option<EmployeeTasks>, DatabaseError> {
        self.enter()?;
        Ok(self
            .employees
            .read()
            .await
            .get(&emp_id)
            .cloned()
            .map(EmployeeTasks::from))
    }

    async fn append_task(&self, emp_id: i64, task: &Task) -> Result<u64, DatabaseError> {
        self.enter()?;
        if self.ignoring_mutations() {
            return Ok(0);
        }
        let mut guard = self.employees.write().await;
        let Some(employee) = guard.get_mut(&emp_id) else {
            return Ok(0);
        };
        employee.todo.push(task.clone());
        Ok(1)
    }

    async fn replace_task_lists(
        &self,
        emp_id: i64,
        lists: &TaskLists,
    ) -> Result<u64, DatabaseError> {
        self.enter()?;
        if self.ignoring_mutations() {
            return Ok(0);
        }
        let mut guard = self.employees.write().await;
        let Some(employee) = guard.get_mut(&emp_id) else {
            return Ok(0);
        };
        employee.todo.clone_from(&lists.todo);
        employee.done.clone_from(&lists.done);
        Ok(1)
    }

    async fn remove_task(&self, emp_id: i64, task_id: &str) -> Result<u64, DatabaseError> {
        self.enter()?;
        if self.ignoring_mutations() {
            return Ok(0);
        }
        let mut guard = self.employees.write().await;
        let Some(employee) = guard.get_mut(&emp_id) else {
            return Ok(0);
        };
        employee.todo.retain(|t| t.id != task_id);
        employee.done.retain(|t| t.id != task_id);
        Ok(1)
    }

    async fn insert_employee(&self, employee: &Employee) -> Result<(), DatabaseError> {
        self.enter()?;
        let mut guard = self.employees.write().await;
        if guard.contains_key(&employee.emp_id) {
            return Err(DatabaseError::Duplicate {
                emp_id: employee.emp_id,
            });
        }
        guard.insert(employee.emp_id, employee.clone());
        Ok(())
    }
}
