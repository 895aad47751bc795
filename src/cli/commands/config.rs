use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use std::path::PathBuf;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = &cli.command
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            ConfigLogic::print(cfg)?;
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let path = cli
                .config
                .as_ref()
                .map(PathBuf::from)
                .unwrap_or_else(Config::config_file);
            ConfigLogic::edit(&path, editor)?;
        }
    }

    Ok(())
}
