//! Versioned archive cache
//!
//! One complete release archive per validation-layer version, stored in a
//! user-scoped cache directory and shared across all ABIs and all build
//! invocations. Existence of the file is the completeness signal: a cached
//! archive is returned without any validation, and recovery from a corrupt
//! download is manual (delete the file).

use crate::error::{BundleError, BundleResult};
use std::io;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Directory name under the user cache root holding one archive per version
pub const CACHE_DIR_NAME: &str = "android-vulkan-validation";

/// Base URL of the Khronos validation-layer release downloads
pub const DEFAULT_BASE_URL: &str =
    "https://github.com/KhronosGroup/Vulkan-ValidationLayers/releases/download";

/// Validation-layer release bundled when no version is configured
pub const DEFAULT_VERSION: &str = "1.3.268.0";

/// Get the default cache directory path
pub fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CACHE_DIR_NAME)
}

/// File name of the release archive for a version
pub fn archive_file_name(version: &str) -> String {
    format!("android-binaries-vulkan-sdk-{version}-android.zip")
}

/// Download URL for a version's release archive
pub fn download_url(base_url: &str, version: &str) -> String {
    format!(
        "{base_url}/vulkan-sdk-{version}/{file}",
        file = archive_file_name(version)
    )
}

/// Download-once cache of validation-layer release archives
pub struct ArchiveCache {
    dir: PathBuf,
    base_url: String,
}

impl ArchiveCache {
    /// Create a cache rooted at `dir`, fetching from `base_url` on misses
    pub fn new(dir: PathBuf, base_url: impl Into<String>) -> Self {
        Self {
            dir,
            base_url: base_url.into(),
        }
    }

    /// Local path of the archive for `version`, whether or not it exists yet
    pub fn archive_path(&self, version: &str) -> PathBuf {
        self.dir.join(archive_file_name(version))
    }

    /// Return the local archive for `version`, downloading it on first use.
    ///
    /// A file already at the cache path is trusted and returned without
    /// touching the network. A failed download leaves nothing at the final
    /// path: the body is streamed into a uniquely named temp file in the
    /// cache directory and renamed into place only once complete, so
    /// concurrent builds racing on the same version each persist a whole
    /// archive and the last rename wins.
    pub fn obtain(&self, version: &str) -> BundleResult<PathBuf> {
        std::fs::create_dir_all(&self.dir).map_err(|e| BundleError::DirCreate {
            path: self.dir.clone(),
            source: e,
        })?;

        let archive = self.archive_path(version);
        if archive.exists() {
            debug!("Using cached {}", archive.display());
            return Ok(archive);
        }

        let url = download_url(&self.base_url, version);
        info!("Downloading {} ...", archive_file_name(version));
        self.download(&url, &archive)?;

        Ok(archive)
    }

    fn download(&self, url: &str, dest: &Path) -> BundleResult<()> {
        let mut response = ureq::get(url).call().map_err(|e| BundleError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        // Temp file lives in the cache directory so the final rename never
        // crosses a filesystem boundary.
        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(|e| {
            BundleError::io(format!("creating temp file in {}", self.dir.display()), e)
        })?;

        let mut body = response.body_mut().as_reader();
        io::copy(&mut body, tmp.as_file_mut()).map_err(|e| BundleError::Fetch {
            url: url.to_string(),
            reason: format!("reading response body: {e}"),
        })?;

        let tmp_path = tmp.path().to_path_buf();
        tmp.persist(dest).map_err(|e| BundleError::ArchiveMove {
            from: tmp_path,
            to: dest.to_path_buf(),
            source: e.error,
        })?;

        Ok(())
    }
}
