// ⚙️ Store Configuration - where the flat files live

use std::path::{Path, PathBuf};

pub const DEFAULT_HOUSES_FILE: &str = "houses.txt";
pub const DEFAULT_TENANTS_FILE: &str = "tenants.txt";

/// Backing file paths for a [`crate::RentalStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub houses_path: PathBuf,
    pub tenants_path: PathBuf,
}

impl StoreConfig {
    /// Both files under `dir`, using the default file names
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        StoreConfig {
            houses_path: dir.join(DEFAULT_HOUSES_FILE),
            tenants_path: dir.join(DEFAULT_TENANTS_FILE),
        }
    }
}

impl Default for StoreConfig {
    /// Relative to the working directory
    fn default() -> Self {
        StoreConfig {
            houses_path: PathBuf::from(DEFAULT_HOUSES_FILE),
            tenants_path: PathBuf::from(DEFAULT_TENANTS_FILE),
        }
    }
}
