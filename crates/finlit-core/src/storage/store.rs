//! JSON snapshot persistence for [`Profile`].
//!
//! The profile is saved as one JSON document at `~/.config/finlit/
//! profile.json`. Load and save are explicit session-boundary operations;
//! the calculators never touch disk. Concurrent writers are not
//! coordinated: the snapshot is last-writer-wins.

use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::StorageError;
use crate::profile::Profile;

const PROFILE_FILE: &str = "profile.json";

/// Loads and saves profile snapshots.
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    /// Store backed by the default data directory.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be resolved.
    pub fn open() -> Result<Self, StorageError> {
        Ok(Self {
            path: data_dir()?.join(PROFILE_FILE),
        })
    }

    /// Store backed by an explicit path (used by tests).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the snapshot, or an empty profile if none exists yet.
    ///
    /// # Errors
    /// Returns [`StorageError::Corrupt`] if a snapshot exists but does not
    /// parse, and [`StorageError::LoadFailed`] for other read failures.
    pub fn load(&self) -> Result<Profile, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|e| StorageError::Corrupt {
                    path: self.path.clone(),
                    message: e.to_string(),
                })
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Profile::default()),
            Err(e) => Err(StorageError::LoadFailed {
                path: self.path.clone(),
                message: e.to_string(),
            }),
        }
    }

    /// Write the snapshot to disk.
    ///
    /// # Errors
    /// Returns [`StorageError::SaveFailed`] if serialization or the write
    /// fails.
    pub fn save(&self, profile: &Profile) -> Result<(), StorageError> {
        let content =
            serde_json::to_string_pretty(profile).map_err(|e| StorageError::SaveFailed {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        std::fs::write(&self.path, content).map_err(|e| StorageError::SaveFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }
}
