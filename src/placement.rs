//! Placing and removing the layer binary in the jniLibs tree
//!
//! Installs go through a temp file next to the target and an atomic rename,
//! so a packaging step never observes a half-written shared object. A
//! target whose byte length already equals the archive entry's declared
//! length is left untouched; the length check is a fast-path heuristic,
//! not a content comparison.

use crate::error::{BundleError, BundleResult};
use std::io::{self, Read};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Stream `reader` into `target`, replacing it atomically.
///
/// `len` is the entry's declared uncompressed length; an existing target of
/// exactly that length is treated as already correct and no filesystem
/// write happens. Parent directories are created as needed.
pub fn install(len: u64, reader: &mut impl Read, target: &Path) -> BundleResult<()> {
    if let Ok(metadata) = std::fs::metadata(target) {
        if metadata.len() == len {
            debug!("{} already in place", target.display());
            return Ok(());
        }
    }

    let parent = target.parent().ok_or_else(|| {
        BundleError::io(
            format!("resolving parent directory of {}", target.display()),
            io::Error::other("target path has no parent"),
        )
    })?;
    std::fs::create_dir_all(parent).map_err(|e| BundleError::DirCreate {
        path: parent.to_path_buf(),
        source: e,
    })?;

    // Temp file shares the target's directory so the rename stays on one
    // filesystem.
    let mut tmp = NamedTempFile::new_in(parent).map_err(|e| BundleError::Write {
        path: target.to_path_buf(),
        source: e,
    })?;

    io::copy(reader, tmp.as_file_mut()).map_err(|e| BundleError::Write {
        path: target.to_path_buf(),
        source: e,
    })?;

    tmp.persist(target).map_err(|e| BundleError::Write {
        path: target.to_path_buf(),
        source: e.error,
    })?;

    info!("Bundled {}", target.display());
    Ok(())
}

/// Delete `target` if it exists; absence is a no-op success.
pub fn remove(target: &Path) -> BundleResult<()> {
    match std::fs::remove_file(target) {
        Ok(()) => {
            info!("Removed {}", target.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(BundleError::Delete {
            path: target.to_path_buf(),
            source: e,
        }),
    }
}
