//! Common test support utilities and fixtures
//!
//! [`ScriptedExecutor`] records every invocation that reaches it and answers
//! with canned results, so workflows can be exercised without `git` or `gh`.

#![allow(dead_code)]

use gh_utils::runner::{Executor, OutputMode};
use gh_utils::{CommandContext, CommandRunner, CompletedInvocation, Invocation, Logger};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tempfile::TempDir;

pub const HOSTS_YAML: &str = "\
github.com:
    user: octocat
    oauth_token: gho_xxxxxxxx
    git_protocol: ssh
ghe.example.com:
    user: octo-enterprise
";

#[derive(Default)]
struct Script {
    responses: HashMap<String, CompletedInvocation>,
    calls: Vec<Invocation>,
}

/// Executor that answers from a script keyed by the rendered command line
#[derive(Clone, Default)]
pub struct ScriptedExecutor {
    script: Rc<RefCell<Script>>,
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `command` with `exit_code` and `stdout`; unscripted commands succeed silently
    pub fn respond(&self, command: &str, exit_code: i32, stdout: &str) -> &Self {
        self.script.borrow_mut().responses.insert(
            command.to_string(),
            CompletedInvocation {
                exit_code,
                stdout: stdout.as_bytes().to_vec(),
                stderr: if exit_code == 0 {
                    Vec::new()
                } else {
                    b"scripted failure".to_vec()
                },
            },
        );
        self
    }

    /// Rendered command lines that were actually executed, in order
    pub fn calls(&self) -> Vec<String> {
        self.script
            .borrow()
            .calls
            .iter()
            .map(Invocation::render)
            .collect()
    }

    pub fn mutating_calls(&self) -> Vec<String> {
        self.script
            .borrow()
            .calls
            .iter()
            .filter(|invocation| invocation.is_mutating())
            .map(Invocation::render)
            .collect()
    }
}

impl Executor for ScriptedExecutor {
    fn execute(
        &self,
        invocation: &Invocation,
        mode: OutputMode,
    ) -> gh_utils::error::Result<CompletedInvocation> {
        let mut script = self.script.borrow_mut();
        script.calls.push(invocation.clone());
        let mut completed = script
            .responses
            .get(&invocation.render())
            .cloned()
            .unwrap_or_default();
        if mode == OutputMode::Inherit {
            completed.stdout.clear();
            completed.stderr.clear();
        }
        Ok(completed)
    }
}

/// Context whose runner talks to `executor`
pub fn context(executor: &ScriptedExecutor, dry_run: bool, working_dir: &Path) -> CommandContext {
    let runner = CommandRunner::with_executor(executor.clone(), dry_run, Logger::new("test"));
    CommandContext::new(runner, working_dir)
}

/// Write `content` as `hosts.yml` inside `dir`
pub fn write_hosts(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("hosts.yml");
    fs::write(&path, content).expect("Failed to write hosts file");
    path
}
