mod cmd;
mod output;

use clap::{Parser, Subcommand};
use roster_core::config::Config;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "roster",
    about = "Mergington High School activity signup service",
    version,
    propagate_version = true
)]
struct Cli {
    /// Path to a YAML config file
    #[arg(long, global = true, env = "ROSTER_CONFIG")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config; 0 = OS-assigned)
        #[arg(long)]
        port: Option<u16>,

        /// YAML seed file with the activity catalog (overrides config)
        #[arg(long)]
        seed: Option<PathBuf>,

        /// Open the signup page in a browser once listening
        #[arg(long)]
        open: bool,
    },

    /// Print the activity catalog the server would start with
    Catalog {
        /// YAML seed file (overrides config)
        #[arg(long)]
        seed: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        Commands::Catalog { .. } => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let result = Config::load_or_default(cli.config.as_deref())
        .map_err(anyhow::Error::from)
        .and_then(|config| match cli.command {
            Commands::Serve {
                host,
                port,
                seed,
                open,
            } => cmd::serve::run(config, host, port, seed, open),
            Commands::Catalog { seed } => cmd::catalog::run(config, seed, cli.json),
        });

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
