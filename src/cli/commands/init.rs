use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::PathBuf;

/// Handle the `init` command
///
/// Writes the default configuration file (or the one given with `--config`).
/// An existing file is left alone. In test mode nothing is written.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);

    if path.exists() {
        info(format!("Config file already present: {}", path.display()));
        return Ok(());
    }

    if cli.test {
        info(format!("Test mode: {} not written", path.display()));
        return Ok(());
    }

    Config::default().save_to(&path)?;
    success(format!("Config file: {}", path.display()));
    Ok(())
}
