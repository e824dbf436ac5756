//! Resolve-or-create for values the user types in once: the API token and the
//! display name.
//!
//! Whether to prompt is decided here; how to prompt is up to the [`Prompter`].
//! The interactive one wraps `dialoguer`, tests plug in a scripted one.

use super::config::{ConfigRecord, ConfigStore, NAME_KEY, TOKEN_KEY};
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CredentialError {
    #[error("The {0} must not be empty")]
    Blank(String),
}

/// Source of answers for missing values.
pub trait Prompter {
    fn ask(&self, prompt: &str) -> Result<String>;
}

/// Asks on the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn ask(&self, prompt: &str) -> Result<String> {
        let answer: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .interact_text()?;
        Ok(answer)
    }
}

/// Where a resolved value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Stored(String),
    /// Typed in by the user and persisted just now.
    Prompted(String),
}

impl Resolution {
    pub fn into_value(self) -> String {
        match self {
            Resolution::Stored(v) | Resolution::Prompted(v) => v,
        }
    }

    pub fn was_prompted(&self) -> bool {
        matches!(self, Resolution::Prompted(_))
    }
}

#[derive(Debug, Clone)]
pub struct CredentialResolver<P: Prompter> {
    store: ConfigStore,
    prompter: P,
}

impl<P: Prompter> CredentialResolver<P> {
    pub fn new(store: ConfigStore, prompter: P) -> Self {
        Self { store, prompter }
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Returns the stored `key` if it is non-blank, otherwise prompts and persists.
    pub fn resolve_or_create(&self, key: &str, prompt: &str) -> Result<Resolution> {
        if let Some(value) = self.store.load().get_str(key).filter(|v| !v.trim().is_empty()) {
            return Ok(Resolution::Stored(value.to_string()));
        }

        debug!(key, "value missing, prompting");
        let answer = self.prompter.ask(prompt)?.trim().to_string();
        if answer.is_empty() {
            return Err(CredentialError::Blank(key.to_string()).into());
        }

        self.store.merge(ConfigRecord::new().with(key, answer.as_str()))?;
        Ok(Resolution::Prompted(answer))
    }

    pub fn get_token(&self) -> Result<String> {
        Ok(self
            .resolve_or_create(TOKEN_KEY, &Message::PromptApiToken.to_string())?
            .into_value())
    }

    pub fn get_name(&self) -> Result<String> {
        Ok(self
            .resolve_or_create(NAME_KEY, &Message::PromptDisplayName.to_string())?
            .into_value())
    }
}
