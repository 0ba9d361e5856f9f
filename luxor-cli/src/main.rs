use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use luxor_cli::FrontDesk;
use luxor_core::OccupancyGrid;
use luxor_store::{app_config::Config, CsvGuestStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Front desk console for tracking who is staying in which room.
#[derive(Debug, Parser)]
#[command(name = "luxor", version)]
struct Args {
    /// Directory holding default/<RUN_MODE>/local configuration files
    #[arg(long, default_value = "config")]
    config_dir: PathBuf,

    /// Guest file to read and write, overriding `storage.path`
    #[arg(long)]
    data: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::load_from(&args.config_dir).context("Failed to load config")?;
    if let Some(data) = args.data {
        config.storage.path = data;
    }

    // Logs go to stderr; stdout belongs to the operator
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!(
        hotel = %config.hotel.name,
        path = %config.storage.path.display(),
        "Starting front desk"
    );

    let store = CsvGuestStore::new(&config.storage.path);
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut desk = if config.storage.load_on_startup {
        FrontDesk::open(stdin.lock(), stdout.lock(), store, config.hotel.name)?
    } else {
        FrontDesk::new(stdin.lock(), stdout.lock(), OccupancyGrid::new(), store, config.hotel.name)
    };

    desk.run().context("Front desk session failed")?;
    Ok(())
}
