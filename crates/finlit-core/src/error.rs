//! Core error types for finlit-core.
//!
//! This module defines the error hierarchy using thiserror. The calculators
//! themselves are total functions; errors arise only at the validation
//! boundary (date strings) and in the storage/config layer.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for finlit-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Profile storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Profile-storage errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to read a snapshot from disk
    #[error("Failed to load profile from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to write a snapshot to disk
    #[error("Failed to save profile to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Snapshot exists but does not parse
    #[error("Profile snapshot at {path} is corrupt: {message}")]
    Corrupt { path: PathBuf, message: String },

    /// Data directory could not be resolved or created
    #[error("Cannot resolve data directory: {0}")]
    DataDir(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Calendar-day string did not parse as YYYY-MM-DD
    #[error("Invalid calendar day '{input}': expected YYYY-MM-DD")]
    InvalidDate { input: String },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
