use crate::core::filter::{DEFAULT_MIN_FIX_QUALITY, DEFAULT_MIN_SATELLITES, RowFilter};
use crate::core::waypoints::DEFAULT_TOLERANCE_M;
use crate::errors::{AppError, AppResult};
use crate::export::OutputFormat;
use crate::models::SegmentField;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Run settings. Loaded once, then passed by reference to every component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_min_fix_quality")]
    pub min_fix_quality: i64,
    #[serde(default = "default_min_satellites")]
    pub min_satellites: i64,
    #[serde(default)]
    pub output_format: OutputFormat,
    #[serde(default)]
    pub segment_field: SegmentField,
    #[serde(default = "default_tolerance")]
    pub waypoint_tolerance_m: f64,
    /// Default waypoint table used when `convert` gets no `-w`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waypoints_file: Option<String>,
}

fn default_min_fix_quality() -> i64 {
    DEFAULT_MIN_FIX_QUALITY
}
fn default_min_satellites() -> i64 {
    DEFAULT_MIN_SATELLITES
}
fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE_M
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_fix_quality: default_min_fix_quality(),
            min_satellites: default_min_satellites(),
            output_format: OutputFormat::default(),
            segment_field: SegmentField::default(),
            waypoint_tolerance_m: default_tolerance(),
            waypoints_file: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("triplog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".triplog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("triplog.conf")
    }

    /// Load configuration from `path`, or return defaults if not found
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load the standard configuration file
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Write the configuration as YAML, creating the parent directory.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    pub fn validate(&self) -> AppResult<()> {
        if !(self.waypoint_tolerance_m.is_finite() && self.waypoint_tolerance_m > 0.0) {
            return Err(AppError::Config(format!(
                "waypoint_tolerance_m must be a positive number, got {}",
                self.waypoint_tolerance_m
            )));
        }
        Ok(())
    }

    pub fn row_filter(&self) -> RowFilter {
        RowFilter::new(self.min_fix_quality, self.min_satellites)
    }

    pub fn waypoints_path(&self) -> Option<PathBuf> {
        self.waypoints_file.as_deref().map(expand_tilde)
    }
}
