use anyhow::Result;
use clap::{Parser, Subcommand};

/// reachout - Self-hosted contact page
#[derive(Parser)]
#[command(name = "reachout")]
#[command(about = "Contact page with form relay", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Validate configuration and probe the relay endpoint
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = reachout::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    reachout::observability::init_observability(
        "reachout",
        env!("CARGO_PKG_VERSION"),
        &config.logging,
    )?;

    match cli.command {
        Commands::Serve { host, port } => reachout::cli::serve(config, host, port).await,
        Commands::Check => reachout::cli::check(config).await,
    }
}
