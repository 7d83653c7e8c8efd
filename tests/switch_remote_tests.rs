//! Integration tests for switching a remote between SSH and HTTPS

mod support;

use gh_utils::commands::SwitchRemoteCommand;
use gh_utils::runner::SystemExecutor;
use gh_utils::{Command, CommandContext, CommandRunner, GhUtilsError, Logger, git};
use std::path::Path;
use std::process::Command as Process;
use support::{ScriptedExecutor, context};
use tempfile::TempDir;

fn switch() -> SwitchRemoteCommand {
    SwitchRemoteCommand {
        remote: "origin".to_string(),
    }
}

#[test]
fn test_ssh_to_https() {
    let executor = ScriptedExecutor::new();
    executor.respond(
        "git remote get-url origin",
        0,
        "git@github.com:tddschn/gh-utils.git\n",
    );

    switch()
        .execute(&context(&executor, false, Path::new(".")))
        .unwrap();

    assert_eq!(
        executor.mutating_calls(),
        vec!["git remote set-url origin https://github.com/tddschn/gh-utils.git"]
    );
}

#[test]
fn test_https_without_suffix_to_ssh() {
    let executor = ScriptedExecutor::new();
    executor.respond(
        "git remote get-url origin",
        0,
        "https://github.com/tddschn/gh-utils\n",
    );

    switch()
        .execute(&context(&executor, false, Path::new(".")))
        .unwrap();

    assert_eq!(
        executor.mutating_calls(),
        vec!["git remote set-url origin git@github.com:tddschn/gh-utils.git"]
    );
}

#[test]
fn test_malformed_url_is_not_mutated() {
    let executor = ScriptedExecutor::new();
    executor.respond(
        "git remote get-url origin",
        0,
        "https://gitlab.com/tddschn/gh-utils.git\n",
    );

    let err = switch()
        .execute(&context(&executor, false, Path::new(".")))
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<GhUtilsError>(),
        Some(GhUtilsError::Format(_))
    ));
    assert!(executor.mutating_calls().is_empty());
}

#[test]
fn test_dry_run_does_not_set_url() {
    let executor = ScriptedExecutor::new();
    executor.respond(
        "git remote get-url origin",
        0,
        "git@github.com:tddschn/gh-utils.git\n",
    );

    let code = switch()
        .execute(&context(&executor, true, Path::new(".")))
        .unwrap();

    assert_eq!(code, 0);
    assert_eq!(executor.calls(), vec!["git remote get-url origin"]);
}

fn git_in(dir: &Path, args: &[&str]) {
    let status = Process::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .expect("Failed to run git");
    assert!(status.success(), "git {args:?} failed");
}

#[test]
fn test_switch_in_real_repository() {
    let temp_dir = TempDir::new().unwrap();
    git_in(temp_dir.path(), &["init", "--quiet"]);
    git_in(
        temp_dir.path(),
        &["remote", "add", "origin", "git@github.com:octo/cat.git"],
    );

    let runner = CommandRunner::with_executor(
        SystemExecutor::in_dir(temp_dir.path()),
        false,
        Logger::new("test"),
    );
    let ctx = CommandContext::new(runner, temp_dir.path());

    switch().execute(&ctx).unwrap();
    assert_eq!(
        git::get_remote_url(&ctx.runner, "origin").unwrap(),
        "https://github.com/octo/cat.git"
    );

    switch().execute(&ctx).unwrap();
    assert_eq!(
        git::get_remote_url(&ctx.runner, "origin").unwrap(),
        "git@github.com:octo/cat.git"
    );
}
