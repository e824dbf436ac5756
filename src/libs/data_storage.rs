//! Where the settings file lives on each platform.

use std::env::consts::OS;
use std::env::var;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "cliclockwork";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
/// Full path override for the settings file.
pub const CONFIG_PATH_ENV: &str = "CLOCKWORK_CONFIG";

/// Resolves where the settings file lives for the current user.
#[derive(Clone, Debug)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let base_path = match OS {
            "windows" => var("APPDATA").unwrap_or_else(|_| ".".into()),
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.config",
        };
        Self::with_base(Path::new(&base_path))
    }

    /// Storage rooted at `base`, i.e. files land in `base/cliclockwork/`.
    pub fn with_base(base: &Path) -> Self {
        Self {
            base_path: base.join(APP_NAME),
        }
    }

    pub fn get_path(&self, file_name: &str) -> PathBuf {
        self.base_path.join(file_name)
    }

    /// The settings file path, honoring `CLOCKWORK_CONFIG` when set and non-empty.
    pub fn settings_path(&self) -> PathBuf {
        resolve_settings_path(var(CONFIG_PATH_ENV).ok(), self)
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}

pub fn resolve_settings_path(override_path: Option<String>, storage: &DataStorage) -> PathBuf {
    match override_path {
        Some(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => storage.get_path(SETTINGS_FILE_NAME),
    }
}
