use clap::Parser;

pub mod commands;
pub mod global;

pub use commands::{Commands, TasksCommands};
pub use global::{GlobalFlags, OutputFormat};

/// Top-level CLI parser for the `nbk` binary.
#[derive(Debug, Parser)]
#[command(name = "nbk", version, about = "Nodebucket - employee task lists")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only, no banners)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
