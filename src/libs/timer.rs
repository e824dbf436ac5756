//! The locally mirrored Clockwork timer.
//!
//! Clockwork owns the real timer; the settings file only remembers which
//! ticket it is running for so `stop` knows what to stop. Local state is
//! changed only after the remote call succeeded, so a failed call can simply
//! be retried.
//!
//! `start` does not stop a running timer first. The client relies on Clockwork
//! to keep a single timer per user and only overwrites its local copy.

use super::config::{ConfigRecord, ConfigStore, TIMER_KEY};
use super::credentials::{CredentialResolver, Prompter};
use crate::api::ClockworkApi;
use anyhow::Result;
use serde_json::Value;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Started {
    pub ticket: String,
    /// First message returned by Clockwork.
    pub message: Option<String>,
    /// Ticket whose local timer was overwritten, if it differed.
    pub replaced: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stopped {
    Stopped { ticket: String, message: Option<String> },
    NoActiveTimer,
}

pub struct TimerState<A: ClockworkApi, P: Prompter> {
    store: ConfigStore,
    credentials: CredentialResolver<P>,
    api: A,
}

impl<A: ClockworkApi, P: Prompter> TimerState<A, P> {
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

    pub fn credentials(&self) -> &CredentialResolver<P> {
        &self.credentials
    }

    pub async fn start(&self, ticket: &str) -> Result<Started> {
        let token = self.credentials.get_token()?;
        let message = self.api.start_timer(&token, ticket).await?;

        let previous = self.store.load().timer().map(str::to_string);
        self.store.merge(ConfigRecord::new().with(TIMER_KEY, ticket))?;
        info!(ticket, "timer started");

        Ok(Started {
            ticket: ticket.to_string(),
            message,
            replaced: previous.filter(|p| p != ticket),
        })
    }

    /// Stops the stored timer. The token is resolved first, like every timer
    /// operation; without a stored timer nothing is sent to Clockwork.
    pub async fn stop(&self) -> Result<Stopped> {
        let token = self.credentials.get_token()?;
        let Some(ticket) = self.store.load().timer().map(str::to_string) else {
            return Ok(Stopped::NoActiveTimer);
        };

        let message = self.api.stop_timer(&token, &ticket).await?;

        self.store.merge(ConfigRecord::new().with(TIMER_KEY, Value::Null))?;
        info!(ticket = %ticket, "timer stopped");

        Ok(Stopped::Stopped { ticket, message })
    }

    pub fn info(&self) -> Option<String> {
        self.store.load().timer().map(str::to_string)
    }

    /// Forgets the local timer without telling Clockwork.
    pub fn reset(&self) -> Result<()> {
        self.store.merge(ConfigRecord::new().with(TIMER_KEY, Value::Null))?;
        Ok(())
    }

    pub fn auth(&self) -> Result<String> {
        self.credentials.get_token()
    }
}
