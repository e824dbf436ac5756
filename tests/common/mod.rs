#![allow(dead_code)]

use anyhow::Result;
use chrono::NaiveDate;
use cliclockwork::api::{ApiError, ClockworkApi, TextGenerator, Worklog, WorklogAuthor, WorklogIssue, WorklogIssueFields};
use cliclockwork::libs::config::ConfigStore;
use cliclockwork::libs::credentials::Prompter;
use std::collections::VecDeque;
use std::path::Path;
use std::sync::Mutex;

/// Answers prompts from a fixed script and remembers what was asked.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<String>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(|a| a.to_string()).collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&self, prompt: &str) -> Result<String> {
        self.asked.lock().unwrap().push(prompt.to_string());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("unexpected prompt: {}", prompt))
    }
}

/// In-memory Clockwork that records every call as `endpoint:token:arg`.
#[derive(Default)]
pub struct MockApi {
    pub calls: Mutex<Vec<String>>,
    pub fail_start: bool,
    pub fail_stop: bool,
    pub fail_worklogs: bool,
    pub worklogs: Vec<Worklog>,
}

impl MockApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn rejected() -> ApiError {
        ApiError::Remote {
            status: 400,
            body: r#"{"errors":[{"body":"Issue not found"}]}"#.to_string(),
        }
    }
}

impl ClockworkApi for MockApi {
    async fn start_timer(&self, token: &str, issue_key: &str) -> Result<Option<String>, ApiError> {
        self.record(format!("start_timer:{}:{}", token, issue_key));
        if self.fail_start {
            return Err(Self::rejected());
        }
        Ok(Some(format!("Timer for {} started", issue_key)))
    }

    async fn stop_timer(&self, token: &str, issue_key: &str) -> Result<Option<String>, ApiError> {
        self.record(format!("stop_timer:{}:{}", token, issue_key));
        if self.fail_stop {
            return Err(Self::rejected());
        }
        Ok(Some(format!("Timer for {} stopped", issue_key)))
    }

    async fn worklogs(&self, token: &str, day: NaiveDate) -> Result<Vec<Worklog>, ApiError> {
        self.record(format!("worklogs:{}:{}", token, day.format("%Y-%m-%d")));
        if self.fail_worklogs {
            return Err(Self::rejected());
        }
        Ok(self.worklogs.clone())
    }
}

/// Text generator with a canned reply.
pub struct MockGenerator {
    pub reply: Result<String, String>,
    pub prompts: Mutex<Vec<String>>,
}

impl MockGenerator {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(body: &str) -> Self {
        Self {
            reply: Err(body.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, ApiError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(body) => Err(ApiError::Remote {
                status: 429,
                body: body.clone(),
            }),
        }
    }
}

pub fn worklog(author: &str, issue: &str, summary: &str, comment: &str, seconds: i64) -> Worklog {
    Worklog {
        author: Some(WorklogAuthor {
            display_name: Some(author.to_string()),
        }),
        issue: Some(WorklogIssue {
            key: Some(issue.to_string()),
            fields: Some(WorklogIssueFields {
                summary: Some(summary.to_string()),
            }),
        }),
        comment: Some(comment.to_string()),
        time_spent_seconds: Some(seconds),
        time_spent: None,
    }
}

pub fn store_in(dir: &Path) -> ConfigStore {
    ConfigStore::at(dir.join("cliclockwork").join("settings.json"))
}

pub fn write_raw(store: &ConfigStore, content: &str) {
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(store.path(), content).unwrap();
}
