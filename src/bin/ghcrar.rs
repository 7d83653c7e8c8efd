use anyhow::Result;
use clap::Parser;
use gh_utils::commands::{CreateRemoteCommand, finish, validators};
use gh_utils::github::Visibility;
use gh_utils::{Command, CommandContext, Transport, constants};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = constants::programs::CREATE_REMOTE)]
#[command(about = "Create a GitHub repo with gh and add it as a remote")]
#[command(version)]
struct Cli {
    /// String to append to the repo name
    #[arg(short, long, value_name = "SUFFIX")]
    append: Option<String>,

    /// The string to use as GitHub repo name, or <user|org>/<repo-name> with a slash
    #[arg(short = 'N', long, value_name = "GITHUB REPO NAME")]
    name: Option<String>,

    /// Specify remote name for the new repository
    #[arg(short, long, default_value_t = constants::git::DEFAULT_REMOTE.to_string())]
    remote: String,

    /// Create a public repository
    #[arg(long)]
    public: bool,

    /// Overwrites remote if exists
    #[arg(long, visible_alias = "force")]
    overwrite_remote: bool,

    /// GitHub hostname, default to use the first entry in hosts.yml
    #[arg(short = 'H', long)]
    hostname: Option<String>,

    /// Git protocol
    #[arg(short, long, value_enum, default_value_t = Transport::Ssh)]
    protocol: Transport,

    /// Do not run `gh repo set-default`
    #[arg(short = 'S', long)]
    no_set_default: bool,

    /// Show the commands that would run without executing them
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// GitHub CLI hosts file to read hostnames and usernames from
    #[arg(long, value_name = "PATH")]
    hosts_file: Option<PathBuf>,
}

fn run(cli: Cli) -> Result<i32> {
    validators::validate_repo_name(&cli.name)?;
    validators::validate_suffix(&cli.append)?;
    validators::validate_remote_name(&cli.remote)?;
    validators::validate_hostname(&cli.hostname)?;

    let context = CommandContext::from_env(constants::programs::CREATE_REMOTE, cli.dry_run)?;

    CreateRemoteCommand {
        name: cli.name,
        append: cli.append,
        remote: cli.remote,
        visibility: Visibility::from_public_flag(cli.public),
        overwrite_remote: cli.overwrite_remote,
        hostname: cli.hostname,
        protocol: cli.protocol,
        set_default: !cli.no_set_default,
        hosts_file: cli.hosts_file,
    }
    .execute(&context)
}

fn main() -> ExitCode {
    finish(run(Cli::parse()))
}
