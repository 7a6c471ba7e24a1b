use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `config` subcommand
///
/// Loads the configuration itself so `--path` and `--init` keep working
/// when the file on disk is broken.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        path,
        init,
    } = cmd
    {
        if *path {
            println!("{}", Config::config_file().display());
        }

        if *init {
            let written = Config::init()?;
            success(format!("Config file written to {}", written.display()));
        }

        if *print_config {
            let cfg = Config::load()?;
            println!("{}", serde_yaml::to_string(&cfg)?);
        }

        if !(*path || *init || *print_config) {
            info("Nothing to do: use --print, --path or --init.");
        }
    }

    Ok(())
}
