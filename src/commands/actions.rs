//! Inspect or toggle GitHub Actions permissions for a repository

use super::{Command, CommandContext};
use crate::git;
use crate::github::cli as gh;
use crate::runner::OutputMode;
use anyhow::{Context, Result};
use clap::ValueEnum;

/// What to do with the repository's Actions permissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ActionsOperation {
    /// Print the current permissions
    #[default]
    Get,
    /// Disable GitHub Actions
    Disable,
    /// Enable GitHub Actions
    Enable,
}

/// `gh-repo-actions`: owner and repository come from a local remote's URL
#[derive(Debug, Clone)]
pub struct ActionsCommand {
    pub operation: ActionsOperation,
    pub remote: String,
}

impl Command for ActionsCommand {
    fn execute(&self, context: &CommandContext) -> Result<i32> {
        let runner = &context.runner;
        let identity = git::remote_identity(runner, &self.remote)
            .with_context(|| format!("Cannot determine OWNER/REPO from remote {}", self.remote))?;

        let completed = match self.operation {
            ActionsOperation::Get => runner.run_checked(
                &gh::get_actions_permissions(&identity),
                OutputMode::Inherit,
            )?,
            ActionsOperation::Disable | ActionsOperation::Enable => {
                let enabled = self.operation == ActionsOperation::Enable;
                let completed = runner.run_checked(
                    &gh::set_actions_enabled(&identity, enabled),
                    OutputMode::Inherit,
                )?;
                runner.report(&format!(
                    "GitHub Actions {} for {}",
                    if enabled { "enabled" } else { "disabled" },
                    identity.slug()
                ));
                completed
            }
        };

        Ok(completed.exit_code)
    }
}
