//! `reset`: forget the local timer when it drifted from Clockwork.

use super::Context;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;

pub fn cmd(ctx: &Context) -> Result<()> {
    ctx.timer().reset()?;
    msg_success!(Message::TimerReset);
    Ok(())
}
