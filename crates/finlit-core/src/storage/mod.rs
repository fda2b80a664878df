mod config;
mod store;

pub use config::{Config, ProfileConfig, RemindersConfig};
pub use store::ProfileStore;

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns `~/.config/finlit[-dev]/` based on FINLIT_ENV.
///
/// Set FINLIT_ENV=dev to use the development data directory, or
/// FINLIT_DATA_DIR to point somewhere else entirely (used by tests).
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = if let Ok(custom) = std::env::var("FINLIT_DATA_DIR") {
        PathBuf::from(custom)
    } else {
        let base_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config");

        let env = std::env::var("FINLIT_ENV").unwrap_or_else(|_| "production".to_string());
        if env == "dev" {
            base_dir.join("finlit-dev")
        } else {
            base_dir.join("finlit")
        }
    };

    std::fs::create_dir_all(&dir).map_err(|e| StorageError::DataDir(e.to_string()))?;
    Ok(dir)
}
