//! Command-line surface.
//!
//! Every subcommand prints its own outcome. Failures are reported on stderr and
//! the process still exits successfully; nothing here signals errors to the shell.

pub mod auth;
pub mod daily;
pub mod info;
pub mod reset;
pub mod start;
pub mod stop;

use crate::api::Clockwork;
use crate::libs::{
    config::ConfigStore,
    credentials::{CredentialResolver, DialoguerPrompter},
    messages::Message,
    settings::Settings,
    timer::TimerState,
};
use crate::msg_error;
use anyhow::Result;
use clap::{Parser, Subcommand};

const LONG_ABOUT: &str = r#" .d8888b.  888      8888888       .d8888b.  888                   888                                     888
d88P  Y88b 888        888        d88P  Y88b 888                   888                                     888
888    888 888        888        888    888 888                   888                                     888
888        888        888        888        888  .d88b.   .d8888b 888  888 888  888  888  .d88b.  888d888 888  888
888        888        888        888        888 d88""88b d88P"    888 .88P 888  888  888 d88""88b 888P"   888 .88P
888    888 888        888        888    888 888 888  888 888      888888K  888  888  888 888  888 888     888888K
Y88b  d88P 888        888        Y88b  d88P 888 Y88..88P Y88b.    888 "88b Y88b 888 d88P Y88..88P 888     888 "88b
 "Y8888P"  88888888 8888888       "Y8888P"  888  "Y88P"   "Y8888P 888  888  "Y8888888P"   "Y88P"  888     888  888

A little CLI to manage Clockwork in Jira."#;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Start a timer for the given ticket. Starting a new timer will stop the current one.")]
    Start(start::StartArgs),
    #[command(about = "Stop the current timer, if there is one.")]
    Stop,
    #[command(about = "Get info if a timer is currently active.")]
    Info,
    #[command(about = "Show or summarize yesterday's worklogs.")]
    Daily(daily::DailyArgs),
    #[command(about = "Reset the current timer in case of sync problems.")]
    Reset,
    #[command(about = "Get the current API token or set one if it does not exist.")]
    Auth,
}

#[derive(Debug, Parser)]
#[command(name = "cliclockwork", author, version, about = "A little CLI to manage Clockwork in Jira.", long_about = LONG_ABOUT)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// What every command needs: the settings file handle and environment settings.
#[derive(Debug, Clone)]
pub struct Context {
    pub store: ConfigStore,
    pub settings: Settings,
}

impl Context {
    pub fn from_env() -> Self {
        Self {
            store: ConfigStore::new(),
            settings: Settings::from_env(),
        }
    }

    pub fn credentials(&self) -> CredentialResolver<DialoguerPrompter> {
        CredentialResolver::new(self.store.clone(), DialoguerPrompter)
    }

    pub fn clockwork(&self) -> Clockwork {
        Clockwork::new(&self.settings.api_url)
    }

    pub fn timer(&self) -> TimerState<Clockwork, DialoguerPrompter> {
        TimerState::new(self.credentials(), self.clockwork())
    }
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        let ctx = Context::from_env();

        let result = match cli.command {
            Commands::Start(args) => start::cmd(&ctx, args).await,
            Commands::Stop => stop::cmd(&ctx).await,
            Commands::Info => info::cmd(&ctx),
            Commands::Daily(args) => daily::cmd(&ctx, args).await,
            Commands::Reset => reset::cmd(&ctx),
            Commands::Auth => auth::cmd(&ctx),
        };

        if let Err(e) = result {
            msg_error!(Message::CommandFailed(e.to_string()));
        }
        Ok(())
    }
}
