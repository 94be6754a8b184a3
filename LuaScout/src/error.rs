//! Error types for `LuaScout`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `LuaScout` operations.
///
/// Only the scan root and configuration loading can fail. Problems with
/// individual metadata files or unreadable entries below the root are
/// skipped rather than reported.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal error.
    #[error("directory walk error: {0}")]
    WalkDirError(String),

    // ==================== Scan Root Errors ====================
    /// The scan root does not exist.
    #[error("scan root not found: {path}")]
    RootNotFound {
        /// The root path that was requested.
        path: PathBuf,
    },

    /// The scan root exists but is not a directory.
    #[error("scan root is not a directory: {path}")]
    RootNotDirectory {
        /// The root path that was requested.
        path: PathBuf,
    },

    // ==================== Configuration Errors ====================
    /// The scan configuration has an unusable value.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The configuration file is not valid TOML for `ScanConfig`.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    // ==================== Output Errors ====================
    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDirError(err.to_string())
    }
}

/// A specialized Result type for `LuaScout` operations.
pub type Result<T> = std::result::Result<T, Error>;
