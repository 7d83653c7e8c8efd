//! Switch a GitHub remote between its SSH and HTTPS forms

use super::{Command, CommandContext};
use crate::git::{self, remote as git_remote};
use crate::remote::parse;
use crate::runner::OutputMode;
use anyhow::Result;

/// `gh-switch-remote`: flip the transport of one remote
#[derive(Debug, Clone)]
pub struct SwitchRemoteCommand {
    pub remote: String,
}

impl Command for SwitchRemoteCommand {
    fn execute(&self, context: &CommandContext) -> Result<i32> {
        let runner = &context.runner;

        let current_url = git::get_remote_url(runner, &self.remote)?;
        let switched = parse(&current_url)?.flipped();
        let new_url = switched.to_url();

        let completed = runner.run_checked(
            &git_remote::set_url(&self.remote, &new_url),
            OutputMode::Inherit,
        )?;
        runner.report(&format!(
            "Switched remote {}: {} -> {} ({})",
            self.remote, current_url, new_url, switched.transport
        ));

        Ok(completed.exit_code)
    }
}
