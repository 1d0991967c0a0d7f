//! Target ABI identifiers and the install/remove mode
//!
//! ABIs are opaque strings supplied by the host build's native-build
//! configuration (e.g. `armeabi-v7a`, `arm64-v8a`, `x86`, `x86_64`). The
//! vocabulary is owned by the host build, not this crate, so anything
//! path-safe is accepted.

use crate::error::{BundleError, BundleResult};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A target CPU/ABI identifier
///
/// The value is spliced into archive entry names and output paths, so it
/// must be a single path-safe component.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Abi(String);

impl Abi {
    /// Parse and validate an ABI identifier.
    ///
    /// Rejects empty strings and anything that would escape a single path
    /// component (`/`, `\`, `..`).
    pub fn new(s: &str) -> BundleResult<Self> {
        let s = s.trim();
        if s.is_empty() || s == ".." || s.contains('/') || s.contains('\\') {
            return Err(BundleError::AbiInvalid(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Abi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Abi {
    type Err = BundleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Collect CLI-supplied ABI values into a deterministic, deduplicated set
pub fn abi_set(abis: &[Abi]) -> BTreeSet<Abi> {
    abis.iter().cloned().collect()
}

/// What the pipeline does with the layer binaries
///
/// Debug builds install the validation layer, release builds remove it so
/// it never ships in a release artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Place the layer binary for every requested ABI
    Install,
    /// Delete any previously placed layer binary
    Remove,
}

impl Mode {
    /// Map a build type to the pipeline mode
    pub fn for_debug_build(is_debug: bool) -> Self {
        if is_debug {
            Self::Install
        } else {
            Self::Remove
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Install => write!(f, "install"),
            Self::Remove => write!(f, "remove"),
        }
    }
}
