//! Remote services the CLI talks to.
//!
//! - **Clockwork**: start/stop timers and list worklogs ([`clockwork`])
//! - **OpenAI**: optional text generation for the daily summary ([`openai`])
//!
//! Both sit behind traits so the timer and worklog logic can run against
//! in-memory fakes.

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

pub mod clockwork;
pub mod openai;

pub use clockwork::Clockwork;
pub use openai::{OpenAi, TextGenerator};

#[derive(Error, Debug)]
pub enum ApiError {
    /// Non-success status; `body` is the payload as the server sent it.
    #[error("{status} {body}")]
    Remote { status: u16, body: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Clockwork endpoints used by the CLI. Every call carries the API token.
#[allow(async_fn_in_trait)]
pub trait ClockworkApi {
    /// Starts a timer; returns the first message the server sent back, if any.
    async fn start_timer(&self, token: &str, issue_key: &str) -> Result<Option<String>, ApiError>;

    /// Stops the timer for `issue_key`; returns the first server message, if any.
    async fn stop_timer(&self, token: &str, issue_key: &str) -> Result<Option<String>, ApiError>;

    /// All worklogs in the single-day window `day..=day`, with authors and issues expanded.
    async fn worklogs(&self, token: &str, day: NaiveDate) -> Result<Vec<Worklog>, ApiError>;
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Worklog {
    pub author: Option<WorklogAuthor>,
    pub issue: Option<WorklogIssue>,
    pub comment: Option<String>,
    #[serde(rename = "timeSpentSeconds")]
    pub time_spent_seconds: Option<i64>,
    #[serde(rename = "timeSpent")]
    pub time_spent: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct WorklogAuthor {
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct WorklogIssue {
    pub key: Option<String>,
    pub fields: Option<WorklogIssueFields>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct WorklogIssueFields {
    pub summary: Option<String>,
}

impl Worklog {
    pub fn author_name(&self) -> Option<&str> {
        self.author.as_ref().and_then(|a| a.display_name.as_deref())
    }

    pub fn issue_key(&self) -> Option<&str> {
        self.issue.as_ref().and_then(|i| i.key.as_deref())
    }

    pub fn summary(&self) -> Option<&str> {
        self.issue
            .as_ref()
            .and_then(|i| i.fields.as_ref())
            .and_then(|f| f.summary.as_deref())
    }
}
