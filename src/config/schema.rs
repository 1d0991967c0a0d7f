//! Configuration schema for vkbundle
//!
//! Configuration is optional and project-local, stored as `vkbundle.toml`
//! next to the Android project's `src/` tree. Every key has a built-in
//! default, so a missing file (the common case) means stock behavior.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::cache::{DEFAULT_BASE_URL, DEFAULT_VERSION};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Validation-layer release settings
    pub layer: LayerConfig,

    /// Archive cache settings
    pub cache: CacheConfig,
}

/// Validation-layer release settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerConfig {
    /// Release version to bundle
    pub version: String,

    /// Base URL of the release downloads
    pub base_url: String,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Archive cache settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache directory override (defaults to the user cache root)
    pub dir: Option<PathBuf>,
}
