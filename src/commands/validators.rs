//! Command argument validation utilities
//!
//! Checks that run after clap parsing and before any external command, so a
//! bad argument never leaves a half-configured repository behind.

use anyhow::{Result, anyhow};

/// Validation errors for command arguments
#[derive(Debug, PartialEq)]
pub enum CommandValidationError {
    /// Invalid argument value
    InvalidValue {
        argument: String,
        value: String,
        reason: String,
    },
}

impl std::fmt::Display for CommandValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandValidationError::InvalidValue {
                argument,
                value,
                reason,
            } => {
                write!(f, "Invalid value '{}' for {}: {}", value, argument, reason)
            }
        }
    }
}

impl std::error::Error for CommandValidationError {}

/// Convert validation error to anyhow::Error
pub fn validation_error_to_anyhow(error: CommandValidationError) -> anyhow::Error {
    anyhow!(error)
}

fn invalid(argument: &str, value: &str, reason: &str) -> anyhow::Error {
    validation_error_to_anyhow(CommandValidationError::InvalidValue {
        argument: argument.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    })
}

fn has_whitespace(value: &str) -> bool {
    value.chars().any(char::is_whitespace)
}

/// Validate a git remote name
pub fn validate_remote_name(remote: &str) -> Result<()> {
    if remote.trim().is_empty() {
        return Err(invalid("--remote", remote, "remote name cannot be empty"));
    }
    if has_whitespace(remote) || remote.starts_with('-') {
        return Err(invalid("--remote", remote, "invalid git remote name"));
    }
    Ok(())
}

/// Validate a repository name given as `NAME` or `OWNER/NAME`
pub fn validate_repo_name(name: &Option<String>) -> Result<()> {
    let Some(name) = name else {
        return Ok(());
    };
    if name.trim().is_empty() {
        return Err(invalid("--name", name, "repository name cannot be empty"));
    }
    if has_whitespace(name) {
        return Err(invalid(
            "--name",
            name,
            "repository name cannot contain whitespace",
        ));
    }
    let parts: Vec<&str> = name.split('/').collect();
    if parts.len() > 2 || parts.iter().any(|part| part.is_empty()) {
        return Err(invalid("--name", name, "expected NAME or OWNER/NAME"));
    }
    Ok(())
}

/// Validate the suffix appended to the directory name
pub fn validate_suffix(suffix: &Option<String>) -> Result<()> {
    if let Some(suffix) = suffix
        && (suffix.trim().is_empty() || has_whitespace(suffix) || suffix.contains('/'))
    {
        return Err(invalid(
            "--append",
            suffix,
            "suffix must be non-empty without whitespace or slashes",
        ));
    }
    Ok(())
}

/// Validate a GitHub hostname; any non-empty host without whitespace or slashes is accepted
pub fn validate_hostname(hostname: &Option<String>) -> Result<()> {
    if let Some(hostname) = hostname
        && (hostname.trim().is_empty() || has_whitespace(hostname) || hostname.contains('/'))
    {
        return Err(invalid("--hostname", hostname, "not a valid hostname"));
    }
    Ok(())
}
