// file: src/main.rs
// description: commandline application entry point
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::builder::NonEmptyStringValueParser;
use clap::{ArgAction, Parser};
use dotenvy::dotenv;
use org_repo_config::utils::logging::{format_error, format_success, init_logger};
use org_repo_config::{Credentials, ExclusionSet, GitHubClient, PipelineOrchestrator, Settings};
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use tracing::{error, info};

/// Flags older invocations pass with a single dash, e.g. `-org acme`.
const LEGACY_FLAGS: [&str; 4] = ["org", "user", "token", "excl"];

#[derive(Parser, Debug)]
#[command(name = "org_repo_config")]
#[command(author = "cipher")]
#[command(version)]
#[command(
    about = "Generate an indexer config listing every repository of a GitHub organization",
    long_about = None
)]
struct Cli {
    /// GitHub organization name
    #[arg(long, env = "GITHUB_ORG", value_parser = NonEmptyStringValueParser::new())]
    org: String,

    /// GitHub user name embedded into clone URLs
    #[arg(long, env = "GITHUB_USER", value_parser = NonEmptyStringValueParser::new())]
    user: String,

    /// Access token used for the API and embedded into clone URLs
    #[arg(
        long,
        env = "GITHUB_TOKEN",
        hide_env_values = true,
        value_parser = NonEmptyStringValueParser::new()
    )]
    token: String,

    /// File with repository names to exclude, one per line
    #[arg(long, env = "GITHUB_EXCLUSIONS", value_name = "FILE")]
    excl: Option<PathBuf>,

    /// Optional TOML settings file
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Before parsing, so `.env` can supply the GITHUB_* flag values.
    dotenv().ok();

    let cli = Cli::parse_from(normalize_legacy_flags(std::env::args_os()));

    init_logger(cli.color, cli.verbose);

    if let Err(e) = run(cli).await {
        error!("{:#}", e);
        eprintln!("{}", format_error("Config generation failed"));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load(cli.settings.as_deref()).context("Failed to load settings")?;

    let exclusions = ExclusionSet::load(cli.excl.as_deref());

    let client = GitHubClient::new(&settings, &cli.org, cli.token.clone())
        .context("Failed to create GitHub client")?;

    info!(
        "Listing {} repositories of {} via {}",
        settings.repo_type, cli.org, settings.api_base_url
    );

    let orchestrator = PipelineOrchestrator::new(
        settings,
        client,
        exclusions,
        Credentials::new(cli.user, cli.token),
    );

    let config = orchestrator
        .run()
        .await
        .with_context(|| format!("Failed to build config for organization {}", cli.org))?;

    config
        .write_to(io::stdout().lock())
        .context("Failed to write config")?;

    eprintln!(
        "{}",
        format_success(&format!("Wrote config for {} repositories", config.repos.len()))
    );

    Ok(())
}

/// Rewrites `-org`, `-org=acme` and friends to their `--` spelling.
fn normalize_legacy_flags<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    args.into_iter()
        .enumerate()
        .map(|(index, arg)| {
            if index > 0 && arg.to_str().is_some_and(is_legacy_flag) {
                let mut flag = OsString::from("-");
                flag.push(&arg);
                flag
            } else {
                arg
            }
        })
        .collect()
}

fn is_legacy_flag(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };

    if rest.starts_with('-') {
        return false;
    }

    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    LEGACY_FLAGS.contains(&name)
}
