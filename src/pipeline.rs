//! The fetch/cache/select/place pipeline
//!
//! Debug builds install the validation layer for every enabled ABI; release
//! builds remove it. The archive is obtained once per run and shared across
//! ABIs; removal never touches the cache or the network. The first failing
//! ABI aborts the rest, with no rollback of ABIs already placed.

use crate::abi::{Abi, Mode};
use crate::archive::{LayerArchive, LAYER_FILE_NAME};
use crate::cache::ArchiveCache;
use crate::error::BundleResult;
use crate::placement;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Project-relative directory packaged into the APK's native-library tree
pub const JNI_LIBS_DIR: &str = "src/main/jniLibs";

/// Output path of an ABI's layer binary inside the project tree
pub fn layer_output_path(project_dir: &Path, abi: &Abi) -> PathBuf {
    project_dir
        .join(JNI_LIBS_DIR)
        .join(abi.as_str())
        .join(LAYER_FILE_NAME)
}

/// One pipeline run over a project's enabled ABIs
pub struct Pipeline {
    cache: ArchiveCache,
    project_dir: PathBuf,
}

impl Pipeline {
    /// Create a pipeline placing files under `project_dir`
    pub fn new(cache: ArchiveCache, project_dir: PathBuf) -> Self {
        Self { cache, project_dir }
    }

    /// Run the pipeline for every ABI in the set.
    ///
    /// An empty set is a successful no-op. ABIs are processed in sorted
    /// order so logs are deterministic regardless of how the set was built.
    pub fn run(&self, version: &str, abis: &BTreeSet<Abi>, mode: Mode) -> BundleResult<()> {
        if abis.is_empty() {
            debug!("No ABIs enabled, nothing to do");
            return Ok(());
        }

        match mode {
            Mode::Remove => self.remove_all(abis),
            Mode::Install => self.install_all(version, abis),
        }
    }

    fn remove_all(&self, abis: &BTreeSet<Abi>) -> BundleResult<()> {
        for abi in abis {
            placement::remove(&layer_output_path(&self.project_dir, abi))?;
        }
        Ok(())
    }

    fn install_all(&self, version: &str, abis: &BTreeSet<Abi>) -> BundleResult<()> {
        let archive_path = self.cache.obtain(version)?;
        let mut archive = LayerArchive::open(&archive_path, version)?;

        for abi in abis {
            let target = layer_output_path(&self.project_dir, abi);
            info!("Bundling {JNI_LIBS_DIR}/{abi}/{LAYER_FILE_NAME}");

            let (len, mut entry) = archive.entry(abi)?;
            placement::install(len, &mut entry, &target)?;
        }
        Ok(())
    }
}
