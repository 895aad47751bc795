use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::convert::ConvertLogic;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::ui::messages::warning;
use crate::utils::path::{expand_tilde, require_input};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Convert {
        log,
        waypoints,
        format,
        output,
        force,
        tolerance,
        filter,
    } = cmd
    {
        let mut cfg = cfg.clone();
        filter.apply(&mut cfg);
        if let Some(t) = tolerance {
            cfg.waypoint_tolerance_m = *t;
        }
        cfg.validate()?;

        let log_path = require_input(log)?;
        let waypoints_path = match waypoints {
            Some(w) => require_input(w)?,
            None => cfg.waypoints_path().ok_or_else(|| {
                AppError::Config(
                    "no waypoint table: pass -w/--user-waypoints or set waypoints_file".into(),
                )
            })?,
        };

        let trip_log = match ConvertLogic::run(&log_path, &waypoints_path, &cfg) {
            Ok(t) => t,
            Err(AppError::EmptyInput) => {
                warning(AppError::EmptyInput);
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        if trip_log.sessions.is_empty() {
            warning("No session with valid GPS rows found.");
        }

        let output = output.as_deref().map(expand_tilde);
        ExportLogic::export(
            &trip_log.sessions,
            format.unwrap_or(cfg.output_format),
            output.as_deref(),
            *force,
        )?;
    }
    Ok(())
}
