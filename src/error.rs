//! Error types for the packaging pipeline.
//!
//! All stages return [`Result`]; configuration problems the pipeline can
//! survive (unknown platform, missing icon) are logged rather than raised.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, PackageError>;

/// Main error type for all pipeline operations
#[derive(Error, Debug)]
pub enum PackageError {
    /// CLI argument errors
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason the arguments were rejected
        reason: String,
    },

    /// The packaging tool could not be located
    #[error("packaging tool `{tool}` not found on PATH (set --jpackage to point at it)")]
    ToolNotFound {
        /// Executable name that was searched for
        tool: String,
    },

    /// The packaging tool could not be spawned
    #[error("failed to launch `{command}`: {source}")]
    ToolLaunch {
        /// Command that failed to start
        command: String,
        /// Underlying spawn error
        source: std::io::Error,
    },

    /// The packaging tool ran and reported failure
    #[error("`{command}` failed with {status}")]
    ToolFailed {
        /// Command that failed
        command: String,
        /// Exit status reported by the tool
        status: ExitStatus,
    },

    /// An expected artifact was not produced
    #[error("expected artifact missing: {path}")]
    MissingArtifact {
        /// Path that should have existed
        path: PathBuf,
    },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Zip archive errors
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}
