//! `start <ticket>`: start a Clockwork timer.

use super::Context;
use crate::libs::{messages::Message, timer::Started};
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StartArgs {
    /// Ticket to track time on, e.g. PROJ-123
    #[arg(required = true)]
    ticket: String,
}

pub async fn cmd(ctx: &Context, start_args: StartArgs) -> Result<()> {
    match ctx.timer().start(&start_args.ticket).await {
        Ok(Started {
            ticket,
            message,
            replaced,
        }) => {
            if let Some(previous) = replaced {
                msg_info!(Message::TimerReplaced(previous));
            }
            msg_success!(message.unwrap_or_else(|| Message::TimerStarted(ticket).to_string()));
        }
        Err(e) => msg_error!(Message::TimerStartFailed(e.to_string())),
    }
    Ok(())
}
