//! User-facing text for every command.
//!
//! All strings printed by the CLI are variants of [`Message`]; the wording lives
//! in [`display`] and the `msg_*!` macros in [`macros`] decide where it goes.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
