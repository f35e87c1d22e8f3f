//! smart-commit - CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use smart_commit::command::{Collaborators, Outcome, generate_commit_message};
use smart_commit::confirm::TerminalInteraction;
use smart_commit::credential::FileCredentialStore;
use smart_commit::host::{GitHost, pending_message_path};
use smart_commit::llm::prompt::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use smart_commit::llm::{GeneratorConfig, OpenRouterClient};
use smart_commit::workspace::{GitCli, resolve_workspace};

/// Generate a commit message for the staged diff.
#[derive(Parser, Debug)]
#[command(name = "smart-commit")]
#[command(about = "Generate a commit message for your changes using an LLM")]
#[command(version)]
struct Cli {
    /// Workspace root (defaults to the current directory)
    #[arg(long)]
    workdir: Option<PathBuf>,

    /// Completion endpoint URL
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Model identifier sent with the request
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Show debug logs
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let result = run(cli).await;
    if let Err(e) = &result {
        eprintln!("{e}");
    }
    ExitCode::from(exit_status(&result))
}

/// Exit status for a run: 1 on any abort, 0 for every completed outcome.
fn exit_status(result: &Result<Outcome>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

async fn run(cli: Cli) -> Result<Outcome> {
    let store = FileCredentialStore::open_default()?;
    let interaction = TerminalInteraction;
    let git = GitCli::new();

    let config = GeneratorConfig {
        endpoint: cli.endpoint,
        model: cli.model,
        ..Default::default()
    };
    let generator = OpenRouterClient::new(config)?;

    // Checked after the credential, so a missing workspace is reported then
    let workspace = resolve_workspace(cli.workdir.as_deref()).ok();
    let host = GitHost::new(workspace.clone().unwrap_or_default());

    let deps = Collaborators {
        store: &store,
        interaction: &interaction,
        git: &git,
        generator: &generator,
        host: &host,
    };

    let outcome = generate_commit_message(&deps, workspace).await?;
    report(&outcome);
    Ok(outcome)
}

fn report(outcome: &Outcome) {
    match outcome {
        Outcome::Written { git_dir, .. } => {
            println!(
                "✓ Commit message ready in {}",
                pending_message_path(git_dir).display()
            );
        }
        Outcome::Dismissed => {}
        Outcome::HostUnavailable { message } => {
            eprintln!("No repository to write into. Generated message:\n{message}");
        }
    }
}
