//! Workflows behind the three programs

pub mod actions;
pub mod base;
pub mod create_remote;
pub mod switch_remote;
pub mod validators;

pub use actions::{ActionsCommand, ActionsOperation};
pub use base::{Command, CommandContext, finish};
pub use create_remote::CreateRemoteCommand;
pub use switch_remote::SwitchRemoteCommand;
