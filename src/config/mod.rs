//! Configuration management for vkbundle

pub mod schema;

pub use schema::Config;

use crate::error::{BundleError, BundleResult};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the project-local configuration
pub const CONFIG_FILE_NAME: &str = "vkbundle.toml";

/// Configuration manager
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a config manager for a project directory
    pub fn for_project(project_dir: &Path) -> Self {
        Self {
            config_path: project_dir.join(CONFIG_FILE_NAME),
        }
    }

    /// Create a config manager with a custom path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Load configuration, using defaults if the file does not exist
    pub fn load(&self) -> BundleResult<Config> {
        if !self.config_path.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Config::default());
        }

        self.load_from_file(&self.config_path)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(&self, path: &Path) -> BundleResult<Config> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| BundleError::io(format!("reading config from {}", path.display()), e))?;

        toml::from_str(&content).map_err(|e| BundleError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.config_path
    }
}
