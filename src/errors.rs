//! Unified application error type.
//! All modules (datalog, core, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("File [{}] does not exist!", .0.display())]
    InputMissing(PathBuf),

    #[error("Empty session index. Is the input file empty?")]
    EmptyInput,

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column '{0}' in input header")]
    MissingColumn(String),

    #[error("Malformed numeric value in '{field}': {value:?}")]
    MalformedNumeric { field: String, value: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Output format not supported: {0}")]
    InvalidOutputFormat(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    pub fn malformed(field: &str, value: &str) -> Self {
        AppError::MalformedNumeric {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
