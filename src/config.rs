//! Configuration from environment variables.
//!
//! Only environment details live here: where the driver store sits inside a
//! Windows installation and where the third-party tool checkouts live.
//! `.env` files are honored because `main` loads them via dotenvy before
//! this module reads the environment.

use std::env;
use std::path::{Path, PathBuf};

/// Driver-store file repository, relative to the Windows root.
pub const DEFAULT_DRIVER_STORE_SUBDIR: &str = "Windows/System32/DriverStore/FileRepository";

/// Third-party tool checkouts, relative to the project base directory.
pub const DEFAULT_TOOLS_DIR: &str = "third-party";

/// fwgather configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the driver-store file repository under the Windows root.
    pub driver_store_subdir: PathBuf,
    /// Directory holding the qcom-mbn-tools and qca-swiss-army-knife checkouts.
    pub tools_dir: PathBuf,
}

impl Config {
    /// Load configuration from the environment, with defaults.
    ///
    /// Relative paths are resolved against `base_dir`.
    pub fn load(base_dir: &Path) -> Self {
        let driver_store_subdir = env::var("FWGATHER_DRIVER_STORE_SUBDIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DRIVER_STORE_SUBDIR));

        let tools_dir = env::var("FWGATHER_TOOLS_DIR")
            .map(|s| {
                let path = PathBuf::from(s);
                if path.is_absolute() {
                    path
                } else {
                    base_dir.join(path)
                }
            })
            .unwrap_or_else(|_| base_dir.join(DEFAULT_TOOLS_DIR));

        Self {
            driver_store_subdir,
            tools_dir,
        }
    }
}
