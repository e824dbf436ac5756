//! Runtime settings taken from the process environment (and `.env`).

use std::env;

pub const DEFAULT_API_URL: &str = "https://api.clockwork.report/v1";
pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

pub const API_URL_ENV: &str = "CLOCKWORK_API_URL";
pub const OPENAI_KEY_ENV: &str = "OPENAI_API_KEY";
pub const OPENAI_URL_ENV: &str = "OPENAI_API_URL";
pub const OPENAI_MODEL_ENV: &str = "OPENAI_MODEL";

#[derive(Clone, Debug, PartialEq)]
pub struct OpenAiSettings {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub api_url: String,
    /// Present only when a summarization key is configured.
    pub openai: Option<OpenAiSettings>,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let openai = get(OPENAI_KEY_ENV).map(|api_key| OpenAiSettings {
            api_key,
            api_url: get(OPENAI_URL_ENV).unwrap_or_else(|| DEFAULT_OPENAI_URL.to_string()),
            model: get(OPENAI_MODEL_ENV).unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
        });

        Self {
            api_url: get(API_URL_ENV).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            openai,
        }
    }
}
