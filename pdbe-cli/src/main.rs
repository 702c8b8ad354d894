use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;

#[derive(Parser)]
#[command(
    name = "pdbe-cli",
    about = "Command-line interface for the PDBe REST API",
    long_about = "A CLI tool for retrieving structural, bibliographic and experimental data about PDB entries from the Protein Data Bank in Europe"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Base URL of the PDBe API (for mirrors or testing)
    #[arg(long, env = "PDBE_BASE_URL", global = true)]
    base_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch one endpoint for a PDB entry and print or save the JSON
    Fetch(commands::fetch::Fetch),
    /// List the supported endpoints
    Endpoints(commands::endpoints::Endpoints),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    // Execute command
    match &cli.command {
        Commands::Fetch(cmd) => cmd.execute_with_config(cli.base_url.as_deref()).await,
        Commands::Endpoints(cmd) => cmd.execute(),
    }
}
