//! The settings file: one JSON object holding the API token, the active timer
//! and the user's display name.
//!
//! The record is deliberately untyped at the storage level. Every write is a
//! read-modify-write of the whole object, so keys this version of the tool
//! does not know about survive untouched.
//!
//! ```rust,no_run
//! use cliclockwork::libs::config::{ConfigRecord, ConfigStore, TIMER_KEY};
//!
//! let store = ConfigStore::new();
//! store.merge(ConfigRecord::new().with(TIMER_KEY, "PROJ-1"))?;
//! assert_eq!(store.load().timer(), Some("PROJ-1"));
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const TOKEN_KEY: &str = "token";
pub const TIMER_KEY: &str = "timer";
pub const NAME_KEY: &str = "name";
pub const NAME_MATCH_KEY: &str = "name_match";

/// How a worklog author is compared against the configured display name.
/// Every policy ignores case.
#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NameMatch {
    /// The whole author name equals the configured name.
    Exact,
    /// The configured name appears anywhere in the author name.
    #[default]
    Substring,
    /// The configured name is a regular expression searched in the author name.
    Regex,
}

/// The persisted key-value document.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct ConfigRecord(Map<String, Value>);

impl ConfigRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly used to assemble partial records for [`ConfigStore::merge`].
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// A string field. `null`, missing and non-string values all read as `None`.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn token(&self) -> Option<&str> {
        self.get_str(TOKEN_KEY)
    }

    pub fn timer(&self) -> Option<&str> {
        self.get_str(TIMER_KEY).filter(|timer| !timer.is_empty())
    }

    pub fn name(&self) -> Option<&str> {
        self.get_str(NAME_KEY)
    }

    /// The stored matching policy, ignoring values this version cannot parse.
    pub fn name_match(&self) -> Option<NameMatch> {
        self.0
            .get(NAME_MATCH_KEY)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// Shallow merge: keys in `partial` overwrite, everything else is kept.
    pub fn merge(&mut self, partial: ConfigRecord) {
        self.0.extend(partial.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Map<String, Value>> for ConfigRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Handle to the settings file. Cheap to clone; holds only the path.
#[derive(Clone, Debug)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store at the per-user default location (or `CLOCKWORK_CONFIG`).
    pub fn new() -> Self {
        Self::at(DataStorage::new().settings_path())
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the record. A missing, unreadable or malformed file reads as empty.
    pub fn load(&self) -> ConfigRecord {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no settings file yet");
                return ConfigRecord::new();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "settings file unreadable");
                return ConfigRecord::new();
            }
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => ConfigRecord::from(map),
            Ok(_) => {
                warn!(path = %self.path.display(), "settings file is not a JSON object");
                ConfigRecord::new()
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "settings file is malformed");
                ConfigRecord::new()
            }
        }
    }

    /// Merges `partial` into the stored record and writes the result back.
    /// Returns the record as written.
    pub fn merge(&self, partial: ConfigRecord) -> Result<ConfigRecord> {
        let mut record = self.load();
        record.merge(partial);
        self.write(&record)?;
        Ok(record)
    }

    /// Writes to a sibling temp file and renames it over the target, so an
    /// interrupted write never leaves a truncated settings file behind.
    fn write(&self, record: &ConfigRecord) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }

        let tmp_path = self.tmp_path();
        {
            let mut file = File::create(&tmp_path).with_context(|| format!("creating {}", tmp_path.display()))?;
            serde_json::to_writer_pretty(&mut file, record)?;
            file.write_all(b"\n")?;
            file.sync_all()?;
        }
        fs::rename(&tmp_path, &self.path).with_context(|| format!("replacing {}", self.path.display()))?;

        debug!(path = %self.path.display(), keys = record.len(), "settings saved");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}
