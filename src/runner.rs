//! External command runner with dry-run support
//!
//! Every `git`/`gh` call is planned as an [`Invocation`] tagged as mutating or
//! inspecting. [`CommandRunner::run`] is the single place where that tag is
//! checked: in dry-run mode mutating invocations are printed and a
//! successful empty result is synthesized, while inspecting invocations
//! still run so later steps see real repository state.

use crate::error::{GhUtilsError, Result};
use crate::logging::Logger;
use crate::utils::render_command;
use std::path::PathBuf;
use std::process::Command;

/// A planned external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
    mutating: bool,
}

impl Invocation {
    /// A command that changes state; suppressed in dry-run mode
    pub fn mutating<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            mutating: true,
        }
    }

    /// A read-only command; executed even in dry-run mode
    pub fn inspecting<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mutating: false,
            ..Self::mutating(program, args)
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn is_mutating(&self) -> bool {
        self.mutating
    }

    /// Shell-quoted, space-joined rendering used in status lines
    pub fn render(&self) -> String {
        render_command(&self.program, &self.args)
    }
}

/// How a child's standard streams are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Child writes straight to this process's stdout/stderr
    #[default]
    Inherit,
    /// Stdout and stderr are collected into the result
    Capture,
}

/// Outcome of a run (or a synthesized dry-run) invocation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompletedInvocation {
    /// `-1` when the child was terminated without an exit code
    pub exit_code: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl CompletedInvocation {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}

/// Spawns planned invocations
pub trait Executor {
    fn execute(&self, invocation: &Invocation, mode: OutputMode) -> Result<CompletedInvocation>;
}

/// Executor backed by `std::process::Command`
#[derive(Debug, Clone, Default)]
pub struct SystemExecutor {
    working_dir: Option<PathBuf>,
}

impl SystemExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every child in `dir` instead of the current directory
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: Some(dir.into()),
        }
    }
}

impl Executor for SystemExecutor {
    fn execute(&self, invocation: &Invocation, mode: OutputMode) -> Result<CompletedInvocation> {
        let mut command = Command::new(invocation.program());
        command.args(invocation.args());
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        let spawn_error = |source: std::io::Error| GhUtilsError::Spawn {
            command: invocation.render(),
            source,
        };

        match mode {
            OutputMode::Inherit => {
                let status = command.status().map_err(spawn_error)?;
                Ok(CompletedInvocation {
                    exit_code: status.code().unwrap_or(-1),
                    ..Default::default()
                })
            }
            OutputMode::Capture => {
                let output = command.output().map_err(spawn_error)?;
                Ok(CompletedInvocation {
                    exit_code: output.status.code().unwrap_or(-1),
                    stdout: output.stdout,
                    stderr: output.stderr,
                })
            }
        }
    }
}

/// Runs invocations, honouring dry-run mode
pub struct CommandRunner {
    executor: Box<dyn Executor>,
    dry_run: bool,
    logger: Logger,
}

impl CommandRunner {
    /// Runner that spawns real processes in the current directory
    pub fn new(dry_run: bool, logger: Logger) -> Self {
        Self::with_executor(SystemExecutor::new(), dry_run, logger)
    }

    pub fn with_executor(executor: impl Executor + 'static, dry_run: bool, logger: Logger) -> Self {
        Self {
            executor: Box::new(executor),
            dry_run,
            logger,
        }
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Report a completed mutating step. Silent in dry-run mode, where the
    /// planned command was already printed.
    pub fn report(&self, msg: &str) {
        if !self.dry_run {
            self.logger.success(msg);
        }
    }

    /// Run `invocation` and return its outcome without checking the exit code
    pub fn run(&self, invocation: &Invocation, mode: OutputMode) -> Result<CompletedInvocation> {
        if self.dry_run {
            if invocation.is_mutating() {
                self.logger
                    .dry_run(&format!("Would run: {}", invocation.render()));
                return Ok(CompletedInvocation::default());
            }
            self.logger
                .dry_run(&format!("Inspecting state with: {}", invocation.render()));
        }

        self.executor.execute(invocation, mode)
    }

    /// Like [`run`](Self::run), but a non-zero exit becomes
    /// [`GhUtilsError::ExternalCommand`]
    pub fn run_checked(
        &self,
        invocation: &Invocation,
        mode: OutputMode,
    ) -> Result<CompletedInvocation> {
        let completed = self.run(invocation, mode)?;
        if !completed.success() {
            return Err(GhUtilsError::ExternalCommand {
                command: invocation.render(),
                code: completed.exit_code,
                stderr: completed.stderr_text(),
            });
        }
        Ok(completed)
    }

    /// Run a checked, captured invocation and return its trimmed stdout
    pub fn capture_text(&self, invocation: &Invocation) -> Result<String> {
        let completed = self.run_checked(invocation, OutputMode::Capture)?;
        Ok(completed.stdout_text().trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct RecordingExecutor {
        calls: Rc<RefCell<Vec<Invocation>>>,
        exit_code: i32,
    }

    impl Executor for RecordingExecutor {
        fn execute(&self, invocation: &Invocation, mode: OutputMode) -> Result<CompletedInvocation> {
            self.calls.borrow_mut().push(invocation.clone());
            let stdout = match mode {
                OutputMode::Capture => b"origin\n".to_vec(),
                OutputMode::Inherit => Vec::new(),
            };
            Ok(CompletedInvocation {
                exit_code: self.exit_code,
                stdout,
                stderr: b"boom".to_vec(),
            })
        }
    }

    fn runner(executor: &RecordingExecutor, dry_run: bool) -> CommandRunner {
        CommandRunner::with_executor(executor.clone(), dry_run, Logger::new("test"))
    }

    #[test]
    fn test_invocation_render_quotes_arguments() {
        let invocation = Invocation::inspecting(
            "gh",
            ["api", "-H", "Accept: application/vnd.github+json", "repos/o/r"],
        );
        assert_eq!(
            invocation.render(),
            "gh api -H 'Accept: application/vnd.github+json' repos/o/r"
        );
        assert!(!invocation.is_mutating());
        assert!(Invocation::mutating("git", ["init"]).is_mutating());
    }

    #[test]
    fn test_dry_run_mutating_is_not_executed() {
        let executor = RecordingExecutor::default();
        let result = runner(&executor, true)
            .run(&Invocation::mutating("git", ["init"]), OutputMode::Capture)
            .unwrap();

        assert!(executor.calls.borrow().is_empty());
        assert_eq!(result, CompletedInvocation::default());
        assert!(result.success());
        assert_eq!(result.stdout_text(), "");
    }

    #[test]
    fn test_dry_run_inspecting_is_executed() {
        let executor = RecordingExecutor::default();
        let result = runner(&executor, true)
            .run(&Invocation::inspecting("git", ["remote"]), OutputMode::Capture)
            .unwrap();

        assert_eq!(executor.calls.borrow().len(), 1);
        assert_eq!(result.stdout_text(), "origin\n");
    }

    #[test]
    fn test_real_run_executes_mutating() {
        let executor = RecordingExecutor::default();
        runner(&executor, false)
            .run(&Invocation::mutating("git", ["init"]), OutputMode::Inherit)
            .unwrap();

        assert_eq!(
            executor.calls.borrow().as_slice(),
            &[Invocation::mutating("git", ["init"])]
        );
    }

    #[test]
    fn test_run_checked_reports_failure() {
        let executor = RecordingExecutor {
            exit_code: 128,
            ..Default::default()
        };
        let err = runner(&executor, false)
            .run_checked(
                &Invocation::inspecting("git", ["remote", "get-url", "origin"]),
                OutputMode::Capture,
            )
            .unwrap_err();

        match err {
            GhUtilsError::ExternalCommand {
                command,
                code,
                stderr,
            } => {
                assert_eq!(command, "git remote get-url origin");
                assert_eq!(code, 128);
                assert_eq!(stderr, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_run_checked_dry_run_mutating_succeeds() {
        let executor = RecordingExecutor {
            exit_code: 1,
            ..Default::default()
        };
        let result = runner(&executor, true).run_checked(
            &Invocation::mutating("git", ["remote", "set-url", "origin", "x"]),
            OutputMode::Inherit,
        );
        assert!(result.is_ok());
        assert!(executor.calls.borrow().is_empty());
    }

    #[test]
    fn test_capture_text_trims() {
        let executor = RecordingExecutor::default();
        let text = runner(&executor, false)
            .capture_text(&Invocation::inspecting("git", ["remote"]))
            .unwrap();
        assert_eq!(text, "origin");
    }
}
