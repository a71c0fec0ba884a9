use clap::{Args, Subcommand};

use nb_core::enums::TaskListKind;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP server.
    Serve(ServeArgs),
    /// Insert employee documents directly into the store.
    Seed(SeedArgs),
    /// List request schemas, or print one.
    Schema(SchemaArgs),
    /// Sign in as an employee.
    Signin(SigninArgs),
    /// Forget the signed-in employee.
    Signout,
    /// Work with the signed-in employee's tasks.
    Tasks {
        #[command(subcommand)]
        action: TasksCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Override `server.host`.
    #[arg(long)]
    pub host: Option<String>,
    /// Override `server.port`.
    #[arg(long)]
    pub port: Option<u16>,
    /// Serve a built frontend from this directory.
    #[arg(long)]
    pub static_dir: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SeedArgs {
    /// Employee id to create.
    #[arg(long, required_unless_present = "file", conflicts_with = "file")]
    pub emp_id: Option<i64>,
    #[arg(long, requires = "emp_id")]
    pub first_name: Option<String>,
    #[arg(long, requires = "emp_id")]
    pub last_name: Option<String>,
    /// JSON array of employee documents.
    #[arg(long)]
    pub file: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name (e.g. `task_create`). Omit to list all.
    pub name: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SigninArgs {
    /// Employee id as typed.
    pub emp_id: String,
}

#[derive(Clone, Debug, Subcommand)]
pub enum TasksCommands {
    /// Show both lists.
    List,
    /// Add a task to `todo`.
    Add { text: String },
    /// Delete a task from whichever list holds it.
    Delete { id: String },
    /// Move a task within or between lists.
    Move {
        #[arg(long, default_value = "todo")]
        from: TaskListKind,
        #[arg(long, default_value = "todo")]
        to: TaskListKind,
        /// Position in the source list.
        from_index: usize,
        /// Position in the target list.
        to_index: usize,
    },
}
