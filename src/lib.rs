//! pclock library root.
//! Exposes the CLI parser, the timesheet services, the command dispatcher and
//! the top-level error reporting used by `main`.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod timesheet;
pub mod ui;
pub mod utils;

use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};
use std::process::ExitCode;
use ui::messages;

/// `pclock (Project Clock) v<version>`
pub fn banner() -> String {
    format!("pclock (Project Clock) v{}", env!("CARGO_PKG_VERSION"))
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, command: &Commands, cfg: &Config) -> AppResult<()> {
    let file = cli.file.as_deref();
    match command {
        Commands::New { .. } => cli::commands::new::handle(command),
        Commands::Start { .. } => cli::commands::start::handle(command, file, cfg),
        Commands::Stop { .. } => cli::commands::stop::handle(command, file, cfg),
        Commands::Status => cli::commands::status::handle(file, cfg),
        Commands::List => cli::commands::list::handle(file, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(command, file, cfg),
        Commands::Config { .. } => cli::commands::config::handle(command),
    }
}

/// Entry point used by main.rs
///
/// Without a subcommand only the banner is printed and the exit status is
/// non-zero.
pub fn run(cli: &Cli) -> AppResult<ExitCode> {
    let Some(command) = &cli.command else {
        println!("{}", banner());
        return Ok(ExitCode::FAILURE);
    };

    let cfg = match command {
        // `config` must work even when the file is broken
        Commands::Config { .. } | Commands::New { .. } => Config::default(),
        _ => Config::load()?,
    };

    dispatch(cli, command, &cfg)?;
    Ok(ExitCode::SUCCESS)
}

/// Exit status for a failed command.
///
/// - cancelled prompt: 0
/// - expected (`ProjectClockError`) failure: 1
/// - anything else: 2
pub fn exit_status(err: &AppError) -> u8 {
    match err {
        AppError::Cancelled => 0,
        e if e.is_expected() => 1,
        _ => 2,
    }
}

/// Print a failed command's outcome and turn it into the process exit code.
pub fn report(err: AppError) -> ExitCode {
    let status = exit_status(&err);
    match err {
        AppError::Cancelled => messages::info("Operation cancelled."),
        AppError::Clock(e) => messages::error(&e),
        other => {
            tracing::error!(error = ?other, "unexpected failure");
            messages::error(format!("unexpected error: {}", other));
        }
    }
    ExitCode::from(status)
}
