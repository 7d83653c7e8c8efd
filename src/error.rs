//! Error kinds raised by the gh-utils library.

use std::path::PathBuf;
use thiserror::Error;

use crate::utils::get_exit_code_description;

/// The typed error returned by the codec, the credential reader and the runner.
#[derive(Error, Debug)]
pub enum GhUtilsError {
    /// Missing hosts file, empty hosts file, or unknown hostname
    #[error("{0}")]
    NotFound(String),

    #[error("Invalid GitHub remote URL: {0}")]
    Format(String),

    /// A wrapped `git`/`gh` invocation exited non-zero while being checked
    #[error("Command `{command}` exited with {code} ({}){}", describe_code(.code), stderr_suffix(.stderr))]
    ExternalCommand {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("Failed to execute `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid hosts file {}: {reason}", .path.display())]
    InvalidHostsFile { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

fn describe_code(code: &i32) -> &'static str {
    get_exit_code_description(*code)
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}

pub type Result<T> = std::result::Result<T, GhUtilsError>;
