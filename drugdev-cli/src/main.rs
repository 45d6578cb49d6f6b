use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;

#[derive(Parser)]
#[command(
    name = "drugdev",
    about = "Search PubMed for drug development research papers",
    long_about = "A CLI tool that searches PubMed for drug development research and renders the results as cards"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    client: commands::ClientArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single search and print the results
    Search(commands::search::Search),
    /// Read queries from stdin, one search per line
    Interactive(commands::interactive::Interactive),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with indicatif layer for the search spinner
    let filter = if cli.verbose { "debug" } else { "info" };

    let indicatif_layer = IndicatifLayer::new();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(indicatif_layer.get_stderr_writer()),
        )
        .with(indicatif_layer)
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    match &cli.command {
        Commands::Search(cmd) => cmd.execute(&cli.client).await,
        Commands::Interactive(cmd) => cmd.execute(&cli.client).await,
    }
}
