//! HTTP client for the Clockwork for Jira REST API.
//!
//! ```rust,no_run
//! use cliclockwork::api::{Clockwork, ClockworkApi};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let api = Clockwork::new("https://api.clockwork.report/v1");
//! let message = api.start_timer("my-token", "PROJ-1").await?;
//! # Ok(())
//! # }
//! ```

use super::{ApiError, ClockworkApi, Worklog};
use chrono::NaiveDate;
use reqwest::{header::AUTHORIZATION, Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use tracing::debug;

const START_TIMER_URL: &str = "start_timer";
const STOP_TIMER_URL: &str = "stop_timer";
const WORKLOGS_URL: &str = "worklogs";
const WORKLOGS_EXPAND: &str = "authors,issues,worklogs";

#[derive(Serialize, Debug)]
struct TimerRequest<'a> {
    issue_key: &'a str,
}

#[derive(Deserialize, Debug, Default)]
struct TimerResponse {
    #[serde(default)]
    messages: Vec<TimerMessage>,
}

#[derive(Deserialize, Debug)]
struct TimerMessage {
    body: Option<String>,
}

/// The worklogs endpoint answers with a bare list; older deployments wrap it.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum WorklogsResponse {
    List(Vec<Worklog>),
    Wrapped { worklogs: Vec<Worklog> },
}

#[derive(Debug, Clone)]
pub struct Clockwork {
    client: Client,
    base_url: String,
}

impl Clockwork {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder, token: &str) -> RequestBuilder {
        request.header(AUTHORIZATION, format!("Token {}", token))
    }

    async fn post_timer(&self, path: &str, token: &str, issue_key: &str) -> Result<Option<String>, ApiError> {
        let url = self.url(path);
        debug!(%url, issue_key, "posting timer request");
        let request = self.client.post(&url).json(&TimerRequest { issue_key });
        let res = ensure_success(self.authorized(request, token).send().await?).await?;

        let text = res.text().await?;
        // An empty or unexpected body still means the server accepted the request.
        let reply: TimerResponse = serde_json::from_str(&text).unwrap_or_default();
        Ok(reply.messages.into_iter().find_map(|m| m.body))
    }
}

impl ClockworkApi for Clockwork {
    async fn start_timer(&self, token: &str, issue_key: &str) -> Result<Option<String>, ApiError> {
        self.post_timer(START_TIMER_URL, token, issue_key).await
    }

    async fn stop_timer(&self, token: &str, issue_key: &str) -> Result<Option<String>, ApiError> {
        self.post_timer(STOP_TIMER_URL, token, issue_key).await
    }

    async fn worklogs(&self, token: &str, day: NaiveDate) -> Result<Vec<Worklog>, ApiError> {
        let url = self.url(WORKLOGS_URL);
        let day = day.format("%Y-%m-%d").to_string();
        debug!(%url, %day, "fetching worklogs");

        let request = self.client.get(&url).query(&[
            ("starting_at", day.as_str()),
            ("ending_at", day.as_str()),
            ("expand", WORKLOGS_EXPAND),
        ]);
        let res = ensure_success(self.authorized(request, token).send().await?).await?;

        let text = res.text().await?;
        parse_worklogs(&text)
    }
}

async fn ensure_success(res: Response) -> Result<Response, ApiError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let body = res.text().await.unwrap_or_default();
    Err(ApiError::Remote {
        status: status.as_u16(),
        body,
    })
}

fn parse_worklogs(text: &str) -> Result<Vec<Worklog>, ApiError> {
    match serde_json::from_str::<WorklogsResponse>(text) {
        Ok(WorklogsResponse::List(worklogs)) | Ok(WorklogsResponse::Wrapped { worklogs }) => Ok(worklogs),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}
