//! CLI argument definitions using clap derive

use crate::abi::Abi;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// vkbundle - Vulkan validation layer bundler for Android builds
///
/// Downloads the Khronos validation layer release once per version, caches
/// it, and places the per-ABI binaries into the project's jniLibs tree for
/// debug builds (or removes them for release builds).
#[derive(Parser, Debug)]
#[command(name = "vkbundle")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path (defaults to <project>/vkbundle.toml)
    #[arg(short, long, global = true, env = "VKBUNDLE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Place the validation layer for each ABI (debug builds)
    Install(BundleArgs),

    /// Remove any placed validation layer (release builds)
    Remove(BundleArgs),

    /// Inspect the archive cache
    Cache(CacheArgs),
}

/// Arguments shared by the install and remove commands
#[derive(Parser, Debug)]
pub struct BundleArgs {
    /// Enabled target ABI (repeat for each ABI; zero ABIs is a no-op)
    #[arg(long = "abi", value_name = "ABI")]
    pub abis: Vec<Abi>,

    /// Android project directory containing src/main/jniLibs
    #[arg(short, long, default_value = ".")]
    pub project: PathBuf,

    /// Validation-layer release version to bundle
    #[arg(long)]
    pub version: Option<String>,

    /// Cache directory override
    #[arg(long, env = "VKBUNDLE_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Release-archive base URL override
    #[arg(long, env = "VKBUNDLE_BASE_URL")]
    pub base_url: Option<String>,
}

/// Arguments for the cache command
#[derive(Parser, Debug)]
pub struct CacheArgs {
    /// Cache action to perform
    #[command(subcommand)]
    pub action: CacheAction,

    /// Cache directory override
    #[arg(long, global = true, env = "VKBUNDLE_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,
}

/// Cache inspection actions
#[derive(Subcommand, Debug)]
pub enum CacheAction {
    /// Print the cache directory path
    Path,

    /// List cached release archives
    List,
}
