//! Error types for vkbundle
//!
//! All modules use `BundleResult<T>` as their return type. Every failure is
//! terminal for the enclosing build step: nothing is caught and retried
//! internally.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for vkbundle operations
pub type BundleResult<T> = Result<T, BundleError>;

/// All errors that can occur in vkbundle
#[derive(Error, Debug)]
pub enum BundleError {
    // Cache errors
    #[error("Failed to create directory {path}: {source}")]
    DirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to download {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("Failed to move downloaded archive from {from} to {to}: {source}")]
    ArchiveMove {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Archive errors
    #[error("Cannot open archive {path}: {reason}")]
    ArchiveOpen { path: PathBuf, reason: String },

    #[error("No such archive entry: {entry} in {archive}")]
    EntryNotFound { entry: String, archive: PathBuf },

    // Placement errors
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to delete {path}: {source}")]
    Delete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Input errors
    #[error("Invalid ABI identifier: '{0}'")]
    AbiInvalid(String),

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl BundleError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::Fetch { .. } => Some(
                "Nothing was cached for the failed attempt; re-run the build to retry".to_string(),
            ),
            Self::ArchiveOpen { path, .. } => Some(format!(
                "The cached archive may be corrupt. Delete {} and re-run to re-download",
                path.display()
            )),
            Self::EntryNotFound { .. } => Some(
                "Check that the ABI name matches the archive layout for this release".to_string(),
            ),
            _ => None,
        }
    }
}
