use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;

/// Substreams Contract Reviewer
#[derive(Parser)]
#[command(name = "contract-reviewer")]
#[command(about = "Recover contract interaction data from Substreams output and produce analytics")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Analyse a captured Substreams output file
    Analyse(commands::analyse::AnalyseCommand),
    /// Run the Substreams CLI and analyse its output
    Run(commands::run::RunCommand),
}

pub async fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyse(command) => command.run(),
        Commands::Run(command) => command.run().await,
    }
}
