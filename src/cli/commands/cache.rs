//! Cache command - inspect the archive cache
//!
//! Inspection only: the cache is never evicted by vkbundle, so recovery
//! from a corrupt archive is deleting the listed file by hand.

use crate::cache::default_cache_dir;
use crate::cli::args::{CacheAction, CacheArgs};
use crate::error::{BundleError, BundleResult};
use std::path::Path;

/// Execute the cache command
pub fn cache(args: CacheArgs) -> BundleResult<()> {
    let dir = args.cache_dir.unwrap_or_else(default_cache_dir);

    match args.action {
        CacheAction::Path => {
            println!("{}", dir.display());
            Ok(())
        }
        CacheAction::List => list_archives(&dir),
    }
}

/// List cached release archives with their sizes
fn list_archives(dir: &Path) -> BundleResult<()> {
    if !dir.exists() {
        println!("No cached archives.");
        return Ok(());
    }

    let entries = std::fs::read_dir(dir)
        .map_err(|e| BundleError::io(format!("reading cache directory {}", dir.display()), e))?;

    let mut archives: Vec<(String, u64)> = Vec::new();
    for entry in entries {
        let entry =
            entry.map_err(|e| BundleError::io("reading cache directory entry".to_string(), e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.ends_with(".zip") {
            continue;
        }
        let len = entry
            .metadata()
            .map_err(|e| BundleError::io(format!("reading metadata of {name}"), e))?
            .len();
        archives.push((name, len));
    }
    archives.sort();

    if archives.is_empty() {
        println!("No cached archives.");
        return Ok(());
    }

    for (name, len) in &archives {
        println!("{name}  {}", format_bytes(*len));
    }
    println!();
    println!("Total: {} archive(s)", archives.len());

    Ok(())
}

/// Format bytes as human-readable size (e.g., "1.5 GB")
fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
