//! Base types and traits for the command pattern

use crate::config::CredentialStore;
use crate::logging::Logger;
use crate::runner::CommandRunner;
use crate::utils::{exit_code_for_error, process_exit_code};
use anyhow::Result;
use colored::*;
use std::path::PathBuf;
use std::process::ExitCode;

/// Context passed to all commands, built once per program run
pub struct CommandContext {
    /// Runner for every external `git`/`gh` call
    pub runner: CommandRunner,
    /// Memoized hosts-file reader
    pub credentials: CredentialStore,
    /// Directory the repository name is derived from
    pub working_dir: PathBuf,
}

impl CommandContext {
    pub fn new(runner: CommandRunner, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            credentials: CredentialStore::new(),
            working_dir: working_dir.into(),
        }
    }

    /// Context for the current process: real executor, current directory
    pub fn from_env(program: &str, dry_run: bool) -> Result<Self> {
        let runner = CommandRunner::new(dry_run, Logger::new(program));
        Ok(Self::new(runner, std::env::current_dir()?))
    }

    pub fn logger(&self) -> &Logger {
        self.runner.logger()
    }
}

/// Trait that all commands must implement
pub trait Command {
    /// Execute the command, returning the exit code the program should end with
    fn execute(&self, context: &CommandContext) -> Result<i32>;
}

/// Turn a command outcome into the process exit code, printing any error
pub fn finish(result: Result<i32>) -> ExitCode {
    match result {
        Ok(code) => ExitCode::from(process_exit_code(code)),
        Err(error) => {
            eprintln!("{} {:#}", "Error:".red().bold(), error);
            ExitCode::from(exit_code_for_error(&error))
        }
    }
}
