use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

mod commands;
mod request;

use commands::Context;

#[derive(Parser)]
#[command(
    name = "dda",
    version,
    about = "Struggle classification and dynamic difficulty adjustment",
    long_about = "Reads one JSON payload, prints one JSON object on stdout. \
                  Evaluation failures are reported as {\"error\": ...} with exit status 0."
)]
struct Cli {
    /// Log debug diagnostics to stderr (DDA_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Config file (default: ~/.config/dda/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// KEY=VALUE file holding SUPABASE_URL / SUPABASE_ANON_KEY
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify one attempt's struggle severity
    Analyze(commands::analyze::AnalyzeArgs),
    /// Pick the next difficulty tier from a struggle status
    Adjust(commands::adjust::AdjustArgs),
    /// Classify an attempt, then adjust difficulty from the result
    Full(commands::full::FullArgs),
    /// Starting tier for a learner with no history
    Recommend(commands::recommend::RecommendArgs),
    /// Configuration inspection
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("DDA_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> dda_core::error::Result<Value> {
    let ctx = Context::load(cli.config, cli.env_file)?;
    match cli.command {
        Commands::Analyze(args) => commands::analyze::run(args, &ctx).await,
        Commands::Adjust(args) => commands::adjust::run(args, &ctx),
        Commands::Full(args) => commands::full::run(args, &ctx).await,
        Commands::Recommend(args) => Ok(commands::recommend::run(args)),
        Commands::Config { action } => commands::config::run(action, &ctx),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Callers inspect the payload shape, not the exit status.
    let payload = run(cli).await.unwrap_or_else(|e| {
        tracing::debug!(error = %e, "evaluation failed");
        json!({ "error": e.to_string() })
    });
    println!("{payload}");
}
