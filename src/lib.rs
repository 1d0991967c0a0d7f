//! vkbundle - Vulkan validation layer bundler for Android builds
//!
//! Fetches a versioned release of the Khronos validation layers once,
//! caches it per user, and keeps the per-ABI `libVkLayer_khronos_validation.so`
//! present in debug builds and absent in release builds.

pub mod abi;
pub mod archive;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod placement;

pub use error::{BundleError, BundleResult};
