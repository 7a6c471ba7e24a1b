use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for pclock
/// CLI application keeping a JSON timesheet per project
#[derive(Parser)]
#[command(
    name = "pclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "Project Clock: clock tasks into a per-project JSON timesheet",
    long_about = None,
    disable_version_flag = true
)]
pub struct Cli {
    #[arg(short = 'v', long = "version", action = ArgAction::Version, help = "Print version")]
    pub version: Option<bool>,

    /// Timesheet to use instead of the single *.pclock.json in the current directory
    #[arg(global = true, long = "file", short = 'f', value_name = "FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create <project_name>.pclock.json in the current directory
    New {
        /// Name of the project (also the file name)
        project_name: String,
    },

    /// Start clocking a new task
    Start {
        /// What the task is about
        message: Option<String>,

        #[arg(
            long = "yes",
            short = 'y',
            help = "Stop a running task without asking"
        )]
        yes: bool,
    },

    /// Stop the running task
    Stop {
        /// Replace the running task's message
        message: Option<String>,
    },

    /// Show the running task and the total clocked time
    Status,

    /// List all tasks with their durations
    List,

    /// Edit the timesheet in your editor
    Edit {
        #[arg(long = "yes", short = 'y', help = "Save without asking for confirmation")]
        yes: bool,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file location")]
        path: bool,

        #[arg(long = "init", help = "Write a default configuration file")]
        init: bool,
    },
}
