use anyhow::Result;
use clap::Parser;
use gh_utils::commands::{SwitchRemoteCommand, finish, validators};
use gh_utils::{Command, CommandContext, constants};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = constants::programs::SWITCH_REMOTE)]
#[command(about = "Switch between HTTPS and SSH types of GitHub remotes")]
#[command(version)]
struct Cli {
    /// Remote whose URL is switched
    #[arg(short, long, default_value_t = constants::git::DEFAULT_REMOTE.to_string())]
    remote: String,

    /// Show the commands that would run without executing them
    #[arg(short = 'n', long)]
    dry_run: bool,
}

fn run(cli: Cli) -> Result<i32> {
    validators::validate_remote_name(&cli.remote)?;

    let context = CommandContext::from_env(constants::programs::SWITCH_REMOTE, cli.dry_run)?;

    SwitchRemoteCommand { remote: cli.remote }.execute(&context)
}

fn main() -> ExitCode {
    finish(run(Cli::parse()))
}
