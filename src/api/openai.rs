//! Chat-completions client used to turn yesterday's worklogs into a standup summary.

use super::ApiError;
use crate::libs::settings::OpenAiSettings;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

const COMPLETIONS_URL: &str = "chat/completions";
const SYSTEM_PROMPT: &str = "You summarize a developer's Jira worklogs from the previous working day \
for a daily standup. Answer with a short bullet list grouped by issue, in the first person.";

/// Anything that can turn a prompt into text.
#[allow(async_fn_in_trait)]
pub trait TextGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, ApiError>;
}

#[derive(Serialize, Debug)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize, Debug)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize, Debug)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize, Debug)]
struct ChatReply {
    content: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OpenAi {
    client: Client,
    settings: OpenAiSettings,
}

impl OpenAi {
    pub fn new(settings: &OpenAiSettings) -> Self {
        Self {
            client: Client::new(),
            settings: settings.clone(),
        }
    }
}

impl TextGenerator for OpenAi {
    async fn generate(&self, prompt: &str) -> Result<String, ApiError> {
        let url = format!("{}/{}", self.settings.api_url.trim_end_matches('/'), COMPLETIONS_URL);
        debug!(%url, model = %self.settings.model, "requesting summary");

        let request = ChatRequest {
            model: &self.settings.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.settings.api_key)
            .json(&request)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(ApiError::Remote {
                status: status.as_u16(),
                body,
            });
        }

        let reply: ChatResponse = res.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        reply
            .choices
            .into_iter()
            .find_map(|choice| choice.message.content)
            .ok_or_else(|| ApiError::Decode("no choices in completion".to_string()))
    }
}
