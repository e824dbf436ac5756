//! Core of the CLI: the settings file and everything layered on it.
//!
//! - **config / data_storage**: the persisted record and where it lives
//! - **settings**: environment-provided runtime settings
//! - **credentials**: resolve-or-create for the API token and display name
//! - **timer**: start/stop/info/reset of the mirrored Clockwork timer
//! - **worklog**: the daily worklog report
//! - **messages / view**: terminal output

pub mod config;
pub mod credentials;
pub mod data_storage;
pub mod messages;
pub mod settings;
pub mod timer;
pub mod view;
pub mod worklog;
