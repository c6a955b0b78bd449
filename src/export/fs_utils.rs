use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::PathBuf;

/// Resolve and validate an export/output destination.
pub fn prepare_output_path(file: &str, force: bool) -> AppResult<PathBuf> {
    let path = expand_tilde(file);

    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "'{}' already exists (use --force to overwrite)",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    Ok(path)
}
