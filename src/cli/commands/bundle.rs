//! Install/remove command - run the bundling pipeline for a project

use crate::abi::{abi_set, Mode};
use crate::cache::{default_cache_dir, ArchiveCache};
use crate::cli::args::BundleArgs;
use crate::config::{Config, ConfigManager};
use crate::error::BundleResult;
use crate::pipeline::Pipeline;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Execute the install or remove command.
///
/// Inputs resolve with CLI flags taking precedence over the project's
/// `vkbundle.toml`, which takes precedence over built-in defaults.
pub fn bundle(args: BundleArgs, mode: Mode, config_path: Option<&Path>) -> BundleResult<()> {
    let manager = match config_path {
        Some(path) => ConfigManager::with_path(path.to_path_buf()),
        None => ConfigManager::for_project(&args.project),
    };
    let config = manager.load()?;

    let version = args
        .version
        .clone()
        .unwrap_or_else(|| config.layer.version.clone());
    let base_url = args
        .base_url
        .clone()
        .unwrap_or_else(|| config.layer.base_url.clone());
    let cache_dir = resolve_cache_dir(args.cache_dir.clone(), &config);

    debug!("Running {mode} for version {version} in {}", args.project.display());

    let cache = ArchiveCache::new(cache_dir, base_url);
    let pipeline = Pipeline::new(cache, args.project.clone());
    pipeline.run(&version, &abi_set(&args.abis), mode)
}

/// Resolve the cache directory: CLI flag, then config, then user default
pub fn resolve_cache_dir(cli_dir: Option<PathBuf>, config: &Config) -> PathBuf {
    cli_dir
        .or_else(|| config.cache.dir.clone())
        .unwrap_or_else(default_cache_dir)
}
