//! `embedurl` CLI - resolve links to embeddable HTML

mod cmd;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use embedurl::EmbedConfig;

#[derive(Parser)]
#[command(name = "embedurl")]
#[command(about = "Turn links into embeddable HTML snippets")]
#[command(version)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (default: ~/.config/embedurl/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Google Maps Embed API key (overrides config and GOOGLE_MAPS_API_KEY)
    #[arg(long, global = true)]
    google_maps_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a URL to embeddable HTML
    Resolve {
        /// URL to resolve
        url: String,

        /// Print the full result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// List registered providers in matching order
    Providers,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref(), cli.google_maps_key)?;

    match cli.command {
        Commands::Resolve { url, json } => {
            let found = cmd::resolve::cmd_resolve(&url, json, &config)?;
            if !found {
                std::process::exit(1);
            }
        }
        Commands::Providers => {
            cmd::providers::cmd_providers(&config);
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn load_config(path: Option<&std::path::Path>, google_maps_key: Option<String>) -> Result<EmbedConfig> {
    let config = match path {
        Some(path) => EmbedConfig::from_path(path)?.with_env_overrides(),
        None => EmbedConfig::load()?,
    };

    Ok(match google_maps_key {
        Some(key) => config.with_google_maps_api_key(key),
        None => config,
    })
}
