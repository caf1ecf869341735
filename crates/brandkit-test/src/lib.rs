//! brandkit-test - Regression test framework for brandkit
//!
//! Supports two modes:
//!
//! - **Compare**: Check computed values and images against expectations
//! - **Display**: Same checks, plus write intermediate images under
//!   `tests/regout` for visual inspection
//!
//! # Usage
//!
//! ```ignore
//! use brandkit_test::RegParams;
//!
//! let mut rp = RegParams::new("border_fill");
//! rp.compare_values(24.0, count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use std::path::PathBuf;

/// Get the path to the workspace root
fn workspace_root() -> PathBuf {
    // brandkit-test is at crates/brandkit-test, so go up two directories
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> PathBuf {
    workspace_root().join("tests/regout")
}

/// Create a fresh, empty scratch directory for a test.
///
/// The directory lives under the system temp dir and is keyed by the test
/// name and process id, so parallel test binaries do not collide.
pub fn scratch_dir(name: &str) -> TestResult<PathBuf> {
    let dir = std::env::temp_dir().join(format!("brandkit-{}-{}", name, std::process::id()));
    if dir.exists() {
        std::fs::remove_dir_all(&dir).map_err(|e| TestError::DirectoryCreate {
            path: dir.display().to_string(),
            message: e.to_string(),
        })?;
    }
    std::fs::create_dir_all(&dir).map_err(|e| TestError::DirectoryCreate {
        path: dir.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(dir)
}
