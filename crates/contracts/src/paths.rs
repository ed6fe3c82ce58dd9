//! Module for common paths used for compiled contract artifacts.

use std::path::PathBuf;

/// Conventional location of compiled contract artifacts, relative to the
/// working directory the deployer is invoked from.
pub fn default_artifacts_dir() -> PathBuf {
    PathBuf::from("artifacts")
}
