use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::inspect::InspectLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use crate::utils::path::require_input;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Inspect { log, filter } = cmd {
        let mut cfg = cfg.clone();
        filter.apply(&mut cfg);

        let log_path = require_input(log)?;

        match InspectLogic::run(&log_path, &cfg) {
            Ok(report) => print!("{}", InspectLogic::render(&report, &cfg)),
            Err(AppError::EmptyInput) => warning(AppError::EmptyInput),
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
