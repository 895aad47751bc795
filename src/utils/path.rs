//! Path utilities: expand ~, check input files.

use crate::errors::{AppError, AppResult};
use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Espande `~` e verifica che il file di input esista.
pub fn require_input(path: &str) -> AppResult<PathBuf> {
    let p = expand_tilde(path);
    if !Path::new(&p).exists() {
        return Err(AppError::InputMissing(p));
    }
    Ok(p)
}
