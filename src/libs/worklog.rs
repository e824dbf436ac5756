//! Yesterday's worklogs for the daily standup.
//!
//! Worklogs are fetched for a single day, narrowed down to the current user
//! by author display name and projected to `{issue, summary, comment, timeSpent}`.
//! With a text generator available the projection is summarized, otherwise
//! it is shown as a table.

use super::config::{ConfigStore, NameMatch};
use super::credentials::{CredentialResolver, Prompter};
use crate::api::{ClockworkApi, TextGenerator, Worklog};
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use tracing::{debug, warn};

/// One row of the report.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct WorklogEntry {
    pub issue: String,
    pub summary: String,
    pub comment: String,
    #[serde(rename = "timeSpent")]
    pub time_spent: String,
    /// Unknown when the server sent neither seconds nor a parsable text.
    #[serde(skip)]
    pub seconds: Option<i64>,
}

impl From<&Worklog> for WorklogEntry {
    fn from(worklog: &Worklog) -> Self {
        let seconds = worklog
            .time_spent_seconds
            .or_else(|| worklog.time_spent.as_deref().and_then(parse_duration));
        let time_spent = match (&worklog.time_spent, worklog.time_spent_seconds) {
            (Some(text), _) if !text.is_empty() => text.clone(),
            (_, Some(seconds)) => format_duration(seconds),
            _ => String::new(),
        };
        Self {
            issue: worklog.issue_key().unwrap_or_default().to_string(),
            summary: worklog.summary().unwrap_or_default().to_string(),
            comment: worklog.comment.clone().unwrap_or_default(),
            time_spent,
            seconds,
        }
    }
}

/// A compiled [`NameMatch`] policy for one display name.
#[derive(Debug, Clone)]
pub enum NameMatcher {
    Exact(String),
    Substring(String),
    Regex(Regex),
}

impl NameMatcher {
    pub fn new(policy: NameMatch, name: &str) -> Result<Self> {
        let name = name.trim();
        Ok(match policy {
            NameMatch::Exact => NameMatcher::Exact(name.to_lowercase()),
            NameMatch::Substring => NameMatcher::Substring(name.to_lowercase()),
            NameMatch::Regex => NameMatcher::Regex(
                RegexBuilder::new(name)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| msg_error_anyhow!(Message::InvalidNamePattern(e.to_string())))?,
            ),
        })
    }

    pub fn matches(&self, author: &str) -> bool {
        match self {
            NameMatcher::Exact(name) => author.trim().to_lowercase() == *name,
            NameMatcher::Substring(name) => author.to_lowercase().contains(name.as_str()),
            NameMatcher::Regex(re) => re.is_match(author),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DailyReport {
    /// Nothing logged by the user that day.
    Empty { name: String },
    Table(Vec<WorklogEntry>),
    Summary(String),
    /// Summarization was attempted and failed; the table is shown instead.
    Fallback { error: String, entries: Vec<WorklogEntry> },
}

pub struct WorklogSummarizer<A: ClockworkApi, P: Prompter> {
    store: ConfigStore,
    credentials: CredentialResolver<P>,
    api: A,
}

impl<A: ClockworkApi, P: Prompter> WorklogSummarizer<A, P> {
    pub fn new(credentials: CredentialResolver<P>, api: A) -> Self {
        Self {
            store: credentials.store().clone(),
            credentials,
            api,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// The user's worklogs for `day`. `policy` overrides the stored `name_match`.
    pub async fn collect(&self, day: NaiveDate, policy: Option<NameMatch>) -> Result<Vec<WorklogEntry>> {
        let token = self.credentials.get_token()?;
        let name = self.credentials.get_name()?;
        let policy = policy.or_else(|| self.store.load().name_match()).unwrap_or_default();
        let matcher = NameMatcher::new(policy, &name)?;

        let worklogs = self.api.worklogs(&token, day).await?;
        let total = worklogs.len();
        let entries: Vec<WorklogEntry> = worklogs
            .iter()
            .filter(|w| w.author_name().is_some_and(|author| matcher.matches(author)))
            .map(WorklogEntry::from)
            .collect();

        debug!(%day, total, kept = entries.len(), ?policy, "worklogs filtered");
        Ok(entries)
    }

    pub async fn report<G: TextGenerator>(
        &self,
        day: NaiveDate,
        policy: Option<NameMatch>,
        generator: Option<&G>,
    ) -> Result<DailyReport> {
        let entries = self.collect(day, policy).await?;
        if entries.is_empty() {
            let name = self.store.load().name().unwrap_or_default().to_string();
            return Ok(DailyReport::Empty { name });
        }

        let Some(generator) = generator else {
            return Ok(DailyReport::Table(entries));
        };

        let prompt = summary_prompt(&entries)?;
        match generator.generate(&prompt).await {
            Ok(text) if !text.trim().is_empty() => Ok(DailyReport::Summary(text.trim().to_string())),
            Ok(_) => Ok(DailyReport::Fallback {
                error: Message::SummaryEmpty.to_string(),
                entries,
            }),
            Err(e) => {
                warn!(error = %e, "summarization failed");
                Ok(DailyReport::Fallback {
                    error: e.to_string(),
                    entries,
                })
            }
        }
    }
}

/// The local calendar day before `today`.
pub fn previous_day(today: NaiveDate) -> NaiveDate {
    today.pred_opt().unwrap_or(today)
}

pub fn yesterday() -> NaiveDate {
    previous_day(Local::now().date_naive())
}

/// `5400` → `1h 30m`, `3600` → `1h`, `59` → `0m`.
pub fn format_duration(seconds: i64) -> String {
    let minutes = seconds.max(0) / 60;
    let (hours, minutes) = (minutes / 60, minutes % 60);
    match (hours, minutes) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

/// `1h 30m` → `5400`. Only hours, minutes and seconds are understood; days
/// and weeks depend on the Jira instance's working-time settings.
pub fn parse_duration(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let re = Regex::new(r"^(\d+)\s*([hms])$").ok()?;
    text.split_whitespace().try_fold(0i64, |total, part| {
        let caps = re.captures(part)?;
        let value: i64 = caps[1].parse().ok()?;
        let unit = match &caps[2] {
            "h" => 3600,
            "m" => 60,
            _ => 1,
        };
        total.checked_add(value.checked_mul(unit)?)
    })
}

pub fn summary_prompt(entries: &[WorklogEntry]) -> Result<String> {
    Ok(format!(
        "Here are my worklogs as JSON:\n{}",
        serde_json::to_string_pretty(entries)?
    ))
}
