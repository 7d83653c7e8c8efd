use anyhow::Result;
use clap::Parser;
use gh_utils::commands::{ActionsCommand, ActionsOperation, finish, validators};
use gh_utils::{Command, CommandContext, constants};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = constants::programs::REPO_ACTIONS)]
#[command(
    about = "Inspect or toggle GitHub Actions permissions for the current repository"
)]
#[command(version)]
struct Cli {
    /// Operation to perform
    #[arg(value_enum, default_value_t = ActionsOperation::Get)]
    command: ActionsOperation,

    /// Remote to derive OWNER/REPO from
    #[arg(short, long, value_name = "REMOTE", default_value_t = constants::git::DEFAULT_REMOTE.to_string())]
    remote: String,

    /// Show the commands that would run without executing them
    #[arg(short = 'n', long)]
    dry_run: bool,
}

fn run(cli: Cli) -> Result<i32> {
    validators::validate_remote_name(&cli.remote)?;

    let context = CommandContext::from_env(constants::programs::REPO_ACTIONS, cli.dry_run)?;

    ActionsCommand {
        operation: cli.command,
        remote: cli.remote,
    }
    .execute(&context)
}

fn main() -> ExitCode {
    finish(run(Cli::parse()))
}
