//! # cliclockwork
//!
//! A little CLI to manage Clockwork timers in Jira.
//!
//! ## Features
//!
//! - **Timers**: start and stop the Clockwork timer for a ticket
//! - **Local state**: the API token, active timer and display name live in one settings file
//! - **Daily report**: yesterday's worklogs as a table, or summarized when an OpenAI key is set
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cliclockwork::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
