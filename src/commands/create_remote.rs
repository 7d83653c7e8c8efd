//! Create a GitHub repository and wire it up as a git remote

use super::{Command, CommandContext};
use crate::config::default_hosts_path;
use crate::constants::git::UPSTREAM_REMOTE;
use crate::git::{self, remote as git_remote};
use crate::github::{Visibility, cli as gh};
use crate::remote::{Transport, remote_url};
use crate::runner::OutputMode;
use anyhow::{Context, Result, anyhow};
use std::path::{Path, PathBuf};

/// `ghcrar`: create the repository on GitHub and add it as a remote
#[derive(Debug, Clone)]
pub struct CreateRemoteCommand {
    /// Explicit `NAME` or `OWNER/NAME`; overrides the directory name
    pub name: Option<String>,
    /// Appended to the directory name as `DIR-SUFFIX`
    pub append: Option<String>,
    pub remote: String,
    pub visibility: Visibility,
    /// Remove a conflicting remote instead of renaming it to `upstream`
    pub overwrite_remote: bool,
    /// Defaults to the first host in the hosts file
    pub hostname: Option<String>,
    pub protocol: Transport,
    /// Run `gh repo set-default` at the end
    pub set_default: bool,
    /// Overrides the GitHub CLI hosts file location
    pub hosts_file: Option<PathBuf>,
}

/// Where the new remote should point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemotePlan {
    /// Name passed to `gh repo create`
    pub repo_name: String,
    /// `OWNER/NAME`
    pub slug: String,
    pub url: String,
}

impl CreateRemoteCommand {
    /// Repository name from `--name`, or the working directory's name plus
    /// the optional suffix
    pub fn repo_name(&self, working_dir: &Path) -> Result<String> {
        if let Some(name) = &self.name {
            return Ok(name.clone());
        }

        let dir_name = working_dir
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                anyhow!(
                    "Cannot derive a repository name from {}; use --name",
                    working_dir.display()
                )
            })?;

        Ok(match &self.append {
            Some(suffix) => format!("{dir_name}-{suffix}"),
            None => dir_name.to_string(),
        })
    }

    fn hosts_path(&self) -> Result<PathBuf> {
        match &self.hosts_file {
            Some(path) => Ok(path.clone()),
            None => Ok(default_hosts_path()?),
        }
    }

    /// Resolve repository name, owner slug and desired remote URL.
    ///
    /// The hosts file is only read when the hostname or the owner has to be
    /// looked up.
    pub fn plan(&self, context: &CommandContext) -> Result<RemotePlan> {
        let repo_name = self.repo_name(&context.working_dir)?;

        let hostname = match &self.hostname {
            Some(hostname) => hostname.clone(),
            None => {
                context
                    .credentials
                    .first(&self.hosts_path()?)
                    .context("Cannot pick a default GitHub hostname")?
                    .hostname
            }
        };

        let slug = if repo_name.contains('/') {
            repo_name.clone()
        } else {
            let username = context
                .credentials
                .username_for_host(&hostname, &self.hosts_path()?)?;
            format!("{username}/{repo_name}")
        };

        let url = remote_url(&hostname, self.protocol, &slug);
        Ok(RemotePlan {
            repo_name,
            slug,
            url,
        })
    }
}

impl Command for CreateRemoteCommand {
    fn execute(&self, context: &CommandContext) -> Result<i32> {
        let runner = &context.runner;
        let logger = context.logger();
        let plan = self.plan(context)?;

        // (re)initializing an existing repository is harmless
        runner.run(&git_remote::init(), OutputMode::Inherit)?;

        let remotes = git::list_remotes(runner)?;
        if remotes.iter().any(|name| name == &self.remote) {
            logger.info(&format!("Remote {} exists.", self.remote));

            let current_url = git::get_remote_url(runner, &self.remote)?;
            if git::same_remote_url(&current_url, &plan.url) {
                logger.success(&format!(
                    "Remote {} URL {} is already the desired one.",
                    self.remote, current_url
                ));
                logger.info("Exiting.");
                return Ok(0);
            }

            if self.overwrite_remote {
                runner.run(&git_remote::remove(&self.remote), OutputMode::Inherit)?;
                runner.report("Removed previous remote.");
            } else {
                runner.run(
                    &git_remote::rename(&self.remote, UPSTREAM_REMOTE),
                    OutputMode::Inherit,
                )?;
                runner.report(&format!("Renamed previous remote to {UPSTREAM_REMOTE}."));
            }
        }

        let added = runner.run(&git_remote::add(&self.remote, &plan.url), OutputMode::Inherit)?;
        if added.success() {
            runner.report(&format!("Added remote: {}", plan.url));
        } else {
            logger.warn(&format!("Adding remote {} failed", self.remote));
        }

        // may fail if the repository already exists on GitHub
        let mut last = runner.run(
            &gh::repo_create(&plan.repo_name, self.visibility),
            OutputMode::Inherit,
        )?;
        if last.success() {
            runner.report(&format!(
                "Created {} repository {}",
                self.visibility, plan.repo_name
            ));
        }

        if self.set_default {
            logger.info(&format!("Running `gh repo set-default {}`", plan.slug));
            last = runner.run(&gh::repo_set_default(&plan.slug), OutputMode::Inherit)?;
        }

        Ok(last.exit_code)
    }
}
