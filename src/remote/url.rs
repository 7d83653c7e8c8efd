//! Remote URL codec
//!
//! GitHub remotes come in two textual forms:
//!
//! - SSH: `git@github.com:OWNER/REPO.git`
//! - HTTPS: `https://github.com/OWNER/REPO.git`
//!
//! [`parse`] accepts either form with or without the `.git` suffix and
//! [`unparse`] always produces the canonical form with the suffix.

use crate::constants::{git::GIT_SUFFIX, github::HOST};
use crate::error::{GhUtilsError, Result};
use clap::ValueEnum;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

// Anchored at the start only: trailing content after the repository is kept
// in the second group.
static GITHUB_REMOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:https?://github\.com/|git@github\.com:)([^/]+)/(.+)")
        .expect("static regex is valid")
});

/// Access method encoded in a remote URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Transport {
    Ssh,
    Https,
}

impl Transport {
    pub fn from_ssh_flag(use_ssh: bool) -> Self {
        if use_ssh { Self::Ssh } else { Self::Https }
    }

    pub fn is_ssh(self) -> bool {
        self == Self::Ssh
    }

    /// The other transport
    pub fn flipped(self) -> Self {
        match self {
            Self::Ssh => Self::Https,
            Self::Https => Self::Ssh,
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ssh => write!(f, "ssh"),
            Self::Https => write!(f, "https"),
        }
    }
}

/// Owner, repository and transport decoded from a GitHub remote URL
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoteIdentity {
    pub owner: String,
    pub repo: String,
    pub transport: Transport,
}

impl RemoteIdentity {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, transport: Transport) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            transport,
        }
    }

    /// `OWNER/REPO`
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    /// Canonical remote URL for this identity
    pub fn to_url(&self) -> String {
        unparse(&self.owner, &self.repo, self.transport.is_ssh())
    }

    /// Same owner and repository over the other transport
    pub fn flipped(&self) -> Self {
        Self {
            transport: self.transport.flipped(),
            ..self.clone()
        }
    }
}

impl fmt::Display for RemoteIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_url())
    }
}

impl FromStr for RemoteIdentity {
    type Err = GhUtilsError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

/// Decode a GitHub remote URL.
///
/// Fails with [`GhUtilsError::Format`] when the URL matches neither the SSH
/// nor the HTTPS form, or when nothing is left of the repository name once
/// the `.git` suffix is removed.
pub fn parse(url: &str) -> Result<RemoteIdentity> {
    let captures = GITHUB_REMOTE
        .captures(url)
        .ok_or_else(|| GhUtilsError::Format(url.to_string()))?;

    let owner = &captures[1];
    let repo = &captures[2];
    let repo = repo.strip_suffix(GIT_SUFFIX).unwrap_or(repo);
    if repo.is_empty() {
        return Err(GhUtilsError::Format(url.to_string()));
    }

    Ok(RemoteIdentity::new(
        owner,
        repo,
        Transport::from_ssh_flag(url.starts_with("git@")),
    ))
}

/// Encode an owner/repository pair as a canonical github.com remote URL
pub fn unparse(owner: &str, repo: &str, use_ssh: bool) -> String {
    remote_url(
        HOST,
        Transport::from_ssh_flag(use_ssh),
        &format!("{owner}/{repo}"),
    )
}

/// Build a remote URL for `slug` (`OWNER/REPO`) on an arbitrary host
pub fn remote_url(hostname: &str, transport: Transport, slug: &str) -> String {
    match transport {
        Transport::Ssh => format!("git@{hostname}:{slug}{GIT_SUFFIX}"),
        Transport::Https => format!("https://{hostname}/{slug}{GIT_SUFFIX}"),
    }
}
