//! `git init` and `git remote` invocations

use crate::constants::git::GIT_SUFFIX;
use crate::error::Result;
use crate::remote::{RemoteIdentity, parse};
use crate::runner::{CommandRunner, Invocation, OutputMode};

const GIT: &str = "git";

pub fn init() -> Invocation {
    Invocation::mutating(GIT, ["init"])
}

pub fn list() -> Invocation {
    Invocation::inspecting(GIT, ["remote"])
}

pub fn get_url(remote: &str) -> Invocation {
    Invocation::inspecting(GIT, ["remote", "get-url", remote])
}

pub fn add(remote: &str, url: &str) -> Invocation {
    Invocation::mutating(GIT, ["remote", "add", remote, url])
}

pub fn remove(remote: &str) -> Invocation {
    Invocation::mutating(GIT, ["remote", "remove", remote])
}

pub fn rename(old: &str, new: &str) -> Invocation {
    Invocation::mutating(GIT, ["remote", "rename", old, new])
}

pub fn set_url(remote: &str, url: &str) -> Invocation {
    Invocation::mutating(GIT, ["remote", "set-url", remote, url])
}

/// Remote names of the repository in the working directory.
///
/// A failing `git remote` (for example outside a repository in dry-run
/// mode, where `git init` was skipped) is treated as "no remotes".
pub fn list_remotes(runner: &CommandRunner) -> Result<Vec<String>> {
    let completed = runner.run(&list(), OutputMode::Capture)?;
    if !completed.success() {
        return Ok(Vec::new());
    }
    Ok(completed
        .stdout_text()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Current URL of `remote`; fails when git reports an error
pub fn get_remote_url(runner: &CommandRunner, remote: &str) -> Result<String> {
    runner.capture_text(&get_url(remote))
}

/// Decode the GitHub owner/repo behind `remote`
pub fn remote_identity(runner: &CommandRunner, remote: &str) -> Result<RemoteIdentity> {
    let url = get_remote_url(runner, remote)?;
    parse(&url)
}

/// Compare two remote URLs, ignoring one trailing `.git` on either side
pub fn same_remote_url(a: &str, b: &str) -> bool {
    a.strip_suffix(GIT_SUFFIX).unwrap_or(a) == b.strip_suffix(GIT_SUFFIX).unwrap_or(b)
}
