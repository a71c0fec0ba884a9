use std::time::Duration;

use serde::Serialize;

use nb_client::{OptimisticBoard, TaskApi, TaskClient, TaskSync, require_session};
use nb_config::NodebucketConfig;
use nb_core::entities::Task;

use crate::cli::{GlobalFlags, TasksCommands};
use crate::commands::session::session_store;
use crate::commands::surface;
use crate::output::{notice, output};

#[derive(Debug, Serialize)]
struct Board<'a> {
    emp_id: i64,
    todo: &'a [Task],
    done: &'a [Task],
}

#[derive(Debug, Serialize)]
struct Deleted<'a> {
    deleted: &'a str,
}

/// Handle `nbk tasks`.
pub async fn handle(
    action: &TasksCommands,
    config: &NodebucketConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user = require_session(&session_store(config)).map_err(surface)?;
    let client = TaskClient::new(&config.client.base_url).map_err(surface)?;
    let mut board = OptimisticBoard::new(client, user.emp_id)
        .with_banner_timeout(Duration::from_millis(config.client.banner_timeout_ms));

    run(action, &mut board, flags).await
}

async fn run<A: TaskApi>(
    action: &TasksCommands,
    board: &mut OptimisticBoard<A>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TasksCommands::List => {
            board.load().await.map_err(surface)?;
            print_board(board, flags)
        }
        TasksCommands::Add { text } => {
            let task = board.add(text).await.map_err(surface)?;
            show_banner(board, flags);
            output(&task, flags.format)
        }
        TasksCommands::Delete { id } => {
            board.delete(id).await.map_err(surface)?;
            show_banner(board, flags);
            output(&Deleted { deleted: id }, flags.format)
        }
        TasksCommands::Move {
            from,
            to,
            from_index,
            to_index,
        } => {
            board.load().await.map_err(surface)?;
            board
                .transfer(*from, *to, *from_index, *to_index)
                .await
                .map_err(surface)?;
            show_banner(board, flags);
            print_board(board, flags)
        }
    }
}

fn print_board<A: TaskApi>(board: &OptimisticBoard<A>, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(
        &Board {
            emp_id: board.emp_id(),
            todo: board.todo(),
            done: board.done(),
        },
        flags.format,
    )
}

fn show_banner<A: TaskApi>(board: &OptimisticBoard<A>, flags: &GlobalFlags) {
    if let Some(message) = board.banner().success {
        notice(&message, flags);
    }
}
