//! Listing CLI
//!
//! Command-line client for the inventory and transfer listing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use listing::{load_config, Config, ListingService};
use listing_core::EntryType;
use tracing::Level;

#[derive(Parser)]
#[command(name = "listing")]
#[command(about = "Inventory and transfer listing client")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend base URL (overrides config file)
    #[arg(long)]
    base_url: Option<String>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every entry of the listing as a card
    List,
    /// Resolve the detail screen an entry opens and print what it receives
    Open {
        /// Module code (IA, DSD, PO, TSFIN, TSFOUT, SC, RTV)
        entry_type: EntryType,
        id: String,
    },
    /// Delete an editable entry and print the refreshed listing
    Delete {
        /// Module code (IA or DSD)
        entry_type: EntryType,
        id: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, base_url={:?}, log_level={:?}",
        args.config,
        args.base_url,
        args.log_level
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if let Some(base_url) = args.base_url {
        config.backend.base_url = base_url;
    }

    tracing::info!("Using backend {}", config.backend.base_url);
    let service = ListingService::connect(&config)?;

    match args.command {
        Command::List => print!("{}", service.list().await?),
        Command::Open { entry_type, id } => {
            let (screen, params) = service.open(entry_type, &id).await?;
            println!("{}", screen);
            println!("{}", serde_json::to_string_pretty(&params)?);
        }
        Command::Delete { entry_type, id } => print!("{}", service.delete(entry_type, &id).await?),
    }

    Ok(())
}
