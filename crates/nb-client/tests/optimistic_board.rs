use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use pretty_assertions::assert_eq;

use nb_client::error::GENERIC_ERROR;
use nb_client::sync::{TASK_ADDED, TASK_DELETED, TASKS_UPDATED};
use nb_client::{ClientError, OptimisticBoard, TaskApi, TaskSync};
use nb_core::entities::{Employee, Task};
use nb_core::enums::TaskListKind;
use nb_core::requests::TaskLists;
use nb_core::responses::{CreateTaskResponse, EmployeeTasks};

#[derive(Debug, Clone)]
enum Failure {
    Api(u16, &'static str),
    Parse,
}

impl Failure {
    fn to_error(&self) -> ClientError {
        match self {
            Self::Api(status, message) => ClientError::Api {
                status: *status,
                message: (*message).to_string(),
            },
            Self::Parse => ClientError::Parse("unexpected EOF".into()),
        }
    }
}

#[derive(Debug, Default)]
struct FakeState {
    server: TaskLists,
    pushes: Vec<TaskLists>,
    deletes: Vec<String>,
    next_id: u32,
    fail: Option<Failure>,
}

#[derive(Debug, Clone, Default)]
struct FakeApi {
    state: Arc<Mutex<FakeState>>,
}

impl FakeApi {
    fn with_lists(todo: Vec<Task>, done: Vec<Task>) -> Self {
        let api = Self::default();
        api.state.lock().unwrap().server = TaskLists::new(todo, done);
        api
    }

    fn fail_with(&self, failure: Failure) {
        self.state.lock().unwrap().fail = Some(failure);
    }

    fn pushes(&self) -> Vec<TaskLists> {
        self.state.lock().unwrap().pushes.clone()
    }

    fn check(&self) -> Result<(), ClientError> {
        match &self.state.lock().unwrap().fail {
            Some(failure) => Err(failure.to_error()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl TaskApi for FakeApi {
    async fn get_employee(&self, emp_id: i64) -> Result<Employee, ClientError> {
        self.check()?;
        Ok(Employee::new(emp_id))
    }

    async fn get_tasks(&self, emp_id: i64) -> Result<EmployeeTasks, ClientError> {
        self.check()?;
        let state = self.state.lock().unwrap();
        Ok(EmployeeTasks {
            emp_id,
            todo: state.server.todo.clone(),
            done: state.server.done.clone(),
        })
    }

    async fn create_task(
        &self,
        _emp_id: i64,
        text: &str,
    ) -> Result<CreateTaskResponse, ClientError> {
        self.check()?;
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = format!("t{}", state.next_id);
        state.server.todo.push(Task::new(id.clone(), text));
        Ok(CreateTaskResponse { id })
    }

    async fn replace_task_lists(&self, _emp_id: i64, lists: &TaskLists) -> Result<(), ClientError> {
        self.check()?;
        let mut state = self.state.lock().unwrap();
        state.server = lists.clone();
        state.pushes.push(lists.clone());
        Ok(())
    }

    async fn delete_task(&self, _emp_id: i64, task_id: &str) -> Result<(), ClientError> {
        self.check()?;
        let mut state = self.state.lock().unwrap();
        state.deletes.push(task_id.to_string());
        state.server.todo.retain(|t| t.id != task_id);
        state.server.done.retain(|t| t.id != task_id);
        Ok(())
    }
}

fn tasks(ids: &[&str]) -> Vec<Task> {
    ids.iter().map(|id| Task::new(*id, format!("task {id}"))).collect()
}

fn ids(list: &[Task]) -> Vec<&str> {
    list.iter().map(|t| t.id.as_str()).collect()
}

async fn loaded(api: &FakeApi) -> OptimisticBoard<FakeApi> {
    let mut board = OptimisticBoard::new(api.clone(), 1007);
    board.load().await.unwrap();
    board
}

#[tokio::test]
async fn load_mirrors_server_lists() {
    let api = FakeApi::with_lists(tasks(&["a", "b"]), tasks(&["c"]));
    let board = loaded(&api).await;
    assert_eq!(ids(board.todo()), vec!["a", "b"]);
    assert_eq!(ids(board.list(TaskListKind::Done)), vec!["c"]);
}

#[tokio::test]
async fn add_appends_returned_id_with_local_text() {
    let api = FakeApi::default();
    let mut board = loaded(&api).await;

    let task = board.add("write spec").await.unwrap();
    assert_eq!(task, Task::new("t1", "write spec"));
    assert_eq!(board.todo(), &[Task::new("t1", "write spec")]);
    assert_eq!(board.banner().success.as_deref(), Some(TASK_ADDED));
}

#[tokio::test]
async fn delete_filters_both_lists() {
    let api = FakeApi::with_lists(tasks(&["a"]), tasks(&["b", "c"]));
    let mut board = loaded(&api).await;

    board.delete("b").await.unwrap();
    assert_eq!(ids(board.todo()), vec!["a"]);
    assert_eq!(ids(board.done()), vec!["c"]);
    assert_eq!(board.banner().success.as_deref(), Some(TASK_DELETED));

    // Absent id: the call still goes out and the lists stay as they are.
    board.delete("zzz").await.unwrap();
    assert_eq!(ids(board.todo()), vec!["a"]);
    assert_eq!(api.state.lock().unwrap().deletes, vec!["b", "zzz"]);
}

#[tokio::test]
async fn reorder_pushes_both_lists() {
    let api = FakeApi::with_lists(tasks(&["a", "b", "c"]), tasks(&["d"]));
    let mut board = loaded(&api).await;

    board.reorder(TaskListKind::Todo, 0, 2).await.unwrap();
    assert_eq!(ids(board.todo()), vec!["b", "c", "a"]);

    let pushes = api.pushes();
    assert_eq!(pushes.len(), 1);
    assert_eq!(ids(&pushes[0].todo), vec!["b", "c", "a"]);
    assert_eq!(ids(&pushes[0].done), vec!["d"]);
    assert_eq!(board.banner().success.as_deref(), Some(TASKS_UPDATED));
}

#[tokio::test]
async fn same_position_move_still_pushes() {
    let api = FakeApi::with_lists(tasks(&["a", "b"]), vec![]);
    let mut board = loaded(&api).await;

    board.reorder(TaskListKind::Todo, 1, 1).await.unwrap();
    board.reorder(TaskListKind::Todo, 1, 1).await.unwrap();
    assert_eq!(api.pushes().len(), 2);
}

#[tokio::test]
async fn transfer_moves_between_lists() {
    let api = FakeApi::with_lists(tasks(&["a", "b"]), tasks(&["x"]));
    let mut board = loaded(&api).await;

    board
        .transfer(TaskListKind::Todo, TaskListKind::Done, 0, 0)
        .await
        .unwrap();
    assert_eq!(ids(board.todo()), vec!["b"]);
    assert_eq!(ids(board.done()), vec!["a", "x"]);

    let server = api.state.lock().unwrap().server.clone();
    assert_eq!(ids(&server.done), vec!["a", "x"]);
}

#[tokio::test]
async fn transfer_within_one_list_reorders() {
    let api = FakeApi::with_lists(vec![], tasks(&["x", "y"]));
    let mut board = loaded(&api).await;

    board
        .transfer(TaskListKind::Done, TaskListKind::Done, 1, 0)
        .await
        .unwrap();
    assert_eq!(ids(board.done()), vec!["y", "x"]);
}

#[tokio::test]
async fn failed_push_keeps_local_change_and_shows_server_message() {
    let api = FakeApi::with_lists(tasks(&["a", "b"]), vec![]);
    let mut board = loaded(&api).await;
    api.fail_with(Failure::Api(500, "Unable to update tasks for employee with empId 1007"));

    let err = board.reorder(TaskListKind::Todo, 0, 1).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(ids(board.todo()), vec!["b", "a"]);
    assert_eq!(
        board.banner().error.as_deref(),
        Some("Unable to update tasks for employee with empId 1007")
    );
}

#[tokio::test]
async fn failures_without_message_use_generic_text() {
    let api = FakeApi::default();
    let mut board = loaded(&api).await;
    api.fail_with(Failure::Parse);

    board.add("never lands").await.unwrap_err();
    assert!(board.todo().is_empty());
    assert_eq!(board.banner().error.as_deref(), Some(GENERIC_ERROR));
}

#[tokio::test]
async fn out_of_range_text_never_reaches_the_server() {
    let api = FakeApi::default();
    let mut board = loaded(&api).await;

    for text in ["ab".to_string(), "x".repeat(51)] {
        let err = board.add(&text).await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidTaskText { .. }), "got {err:?}");
    }
    assert!(board.todo().is_empty());
    assert_eq!(api.state.lock().unwrap().next_id, 0);
    assert_eq!(
        board.banner().error.as_deref(),
        Some("Task text must be between 3 and 50 characters.")
    );

    board.add(&"x".repeat(50)).await.unwrap();
    assert_eq!(board.todo().len(), 1);
}

#[tokio::test]
async fn failed_load_sets_error_banner() {
    let api = FakeApi::default();
    api.fail_with(Failure::Api(404, "Unable to find employee with empId 1007"));
    let mut board = OptimisticBoard::new(api, 1007);

    board.load().await.unwrap_err();
    assert_eq!(
        board.banner().error.as_deref(),
        Some("Unable to find employee with empId 1007")
    );
}

#[tokio::test(start_paused = true)]
async fn banner_expires_after_timeout() {
    let api = FakeApi::default();
    let mut board = loaded(&api).await.with_banner_timeout(Duration::from_secs(5));

    board.add("alpha").await.unwrap();
    tokio::time::sleep(Duration::from_millis(4_999)).await;
    assert_eq!(board.banner().success.as_deref(), Some(TASK_ADDED));

    tokio::time::sleep(Duration::from_millis(2)).await;
    tokio::task::yield_now().await;
    assert_eq!(board.banner().success, None);
}

#[tokio::test(start_paused = true)]
async fn overlapping_timers_clear_newer_messages_early() {
    let api = FakeApi::default();
    let mut board = loaded(&api).await;

    board.add("first").await.unwrap();
    tokio::time::sleep(Duration::from_secs(4)).await;
    board.delete("t1").await.unwrap();
    assert_eq!(board.banner().success.as_deref(), Some(TASK_DELETED));

    // The add's timer fires one second later and clears the delete's banner.
    tokio::time::sleep(Duration::from_millis(1_001)).await;
    tokio::task::yield_now().await;
    assert_eq!(board.banner().success, None);
    assert_eq!(board.banner().error, None);
}
