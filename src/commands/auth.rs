//! `auth`: show the API token, or set one.

use super::Context;
use crate::msg_print;
use anyhow::Result;

/// Prints the stored token, asking for one first if there is none.
pub fn cmd(ctx: &Context) -> Result<()> {
    let token = ctx.timer().auth()?;
    msg_print!(token);
    Ok(())
}
