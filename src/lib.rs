//! gh-utils - small helpers that wrap `git` and `gh` for routine repository setup

pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod git;
pub mod github;
pub mod logging;
pub mod remote;
pub mod runner;
pub mod utils;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext};
pub use config::{CredentialStore, HostCredential};
pub use error::GhUtilsError;
pub use logging::Logger;
pub use remote::{RemoteIdentity, Transport};
pub use runner::{CommandRunner, CompletedInvocation, Invocation};
