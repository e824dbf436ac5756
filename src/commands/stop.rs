//! `stop`: stop the running Clockwork timer.

use super::Context;
use crate::libs::{messages::Message, timer::Stopped};
use crate::{msg_error, msg_success};
use anyhow::Result;

pub async fn cmd(ctx: &Context) -> Result<()> {
    match ctx.timer().stop().await {
        Ok(Stopped::Stopped { ticket, message }) => {
            msg_success!(message.unwrap_or_else(|| Message::TimerStopped(ticket).to_string()));
        }
        Ok(Stopped::NoActiveTimer) => msg_error!(Message::NoActiveTimer),
        Err(e) => msg_error!(Message::TimerStopFailed(e.to_string())),
    }
    Ok(())
}
