//! `info`: which ticket is the timer running for?

use super::Context;
use crate::libs::messages::Message;
use crate::{msg_error, msg_print};
use anyhow::Result;

pub fn cmd(ctx: &Context) -> Result<()> {
    match ctx.timer().info() {
        Some(ticket) => msg_print!(Message::RunningTimer(ticket)),
        None => msg_error!(Message::NoActiveTimer),
    }
    Ok(())
}
