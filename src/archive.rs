//! Single-entry extraction from a cached release archive
//!
//! The release archive is a ZIP whose root folder is named after the
//! version, with one subfolder per ABI, each holding exactly the layer
//! shared object. Lookups are by exact entry name; nothing else in the
//! archive is inspected or extracted.

use crate::abi::Abi;
use crate::error::{BundleError, BundleResult};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use zip::result::ZipError;
use zip::ZipArchive;

/// File name of the validation layer binary, identical for every ABI
pub const LAYER_FILE_NAME: &str = "libVkLayer_khronos_validation.so";

/// Name of the archive's root folder for a version
pub fn archive_root_dir(version: &str) -> String {
    format!("android-binaries-vulkan-sdk-{version}")
}

/// Exact entry name of an ABI's layer binary inside the archive
pub fn entry_name(version: &str, abi: &Abi) -> String {
    format!("{root}/{abi}/{LAYER_FILE_NAME}", root = archive_root_dir(version))
}

/// A release archive opened for random-access entry reads
pub struct LayerArchive {
    archive: ZipArchive<File>,
    path: PathBuf,
    version: String,
}

impl LayerArchive {
    /// Open the archive at `path` for the given version.
    pub fn open(path: &Path, version: &str) -> BundleResult<Self> {
        let file = File::open(path).map_err(|e| BundleError::ArchiveOpen {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let archive = ZipArchive::new(file).map_err(|e| BundleError::ArchiveOpen {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            archive,
            path: path.to_path_buf(),
            version: version.to_string(),
        })
    }

    /// Look up the layer binary entry for `abi` by its exact name.
    ///
    /// Returns the entry's declared uncompressed length and a reader over
    /// its decompressed bytes.
    pub fn entry(&mut self, abi: &Abi) -> BundleResult<(u64, impl Read + '_)> {
        let name = entry_name(&self.version, abi);
        match self.archive.by_name(&name) {
            Ok(entry) => Ok((entry.size(), entry)),
            Err(ZipError::FileNotFound) => Err(BundleError::EntryNotFound {
                entry: name,
                archive: self.path.clone(),
            }),
            Err(e) => Err(BundleError::ArchiveOpen {
                path: self.path.clone(),
                reason: e.to_string(),
            }),
        }
    }
}
