use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use etelemetry::config::ClientConfig;
use etelemetry::telemetry::checker::VersionChecker;
use etelemetry::telemetry::fetcher::{Fetcher, fetcher_for};
use etelemetry::telemetry::guard::CheckGuard;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "etelemetry")]
#[command(version, about = "Check a release registry for newer or known-bad versions")]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Registry base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Show debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the registry's version info for a project
    Fetch {
        /// Project as <owner>/<name>
        project: String,
    },
    /// Compare a running version against the registry
    Check {
        /// Project as <owner>/<name>
        project: String,

        /// Version currently in use
        #[arg(long)]
        current: String,

        /// Exit with an error when the version is flagged as bad
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let default_directive = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with_writer(std::io::stderr)
        .init();

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let fetcher = build_fetcher(&cli)?;

    match cli.command {
        Command::Fetch { project } => {
            let Some(fetcher) = fetcher else {
                anyhow::bail!("built without HTTP support");
            };
            match fetcher.fetch(&project).await? {
                Some(info) => println!("{}", serde_json::to_string_pretty(&info)?),
                None => eprintln!("Registry requests are disabled"),
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Check {
            project,
            current,
            strict,
        } => {
            let guard = CheckGuard::global();
            let result = VersionChecker::new(project, current, guard)
                .with_fetcher(fetcher)
                .raise_on_bad_version(strict)
                .check()
                .await;

            match result {
                Ok(_) => Ok(ExitCode::SUCCESS),
                Err(e) => {
                    eprintln!("{e}");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}

fn build_fetcher(cli: &Cli) -> anyhow::Result<Option<Arc<dyn Fetcher>>> {
    let mut config = match &cli.config {
        Some(path) => ClientConfig::from_path(path)?,
        None => ClientConfig::default(),
    }
    .apply_env();

    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }

    Ok(fetcher_for(&config))
}
