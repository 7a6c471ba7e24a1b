//! pclock main entrypoint.

use clap::Parser;
use pclock::cli::parser::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    pclock::logging::init();
    let cli = Cli::parse();

    match pclock::run(&cli) {
        Ok(code) => code,
        Err(e) => pclock::report(e),
    }
}
