use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub hotel: HotelConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HotelConfig {
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub path: PathBuf,
    pub load_on_startup: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub filter: String,
}

pub const DEFAULT_LOG_FILTER: &str = "luxor_cli=info,luxor_core=info,luxor_store=info";

impl Config {
    pub fn load_from(dir: &Path) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::build(dir, &run_mode, Self::environment())
    }

    // Eg.. `LUXOR_STORAGE__PATH=/tmp/guests.csv`
    fn environment() -> config::Environment {
        config::Environment::with_prefix("LUXOR")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn build(dir: &Path, run_mode: &str, environment: config::Environment) -> Result<Self, config::ConfigError> {
        let s = config::Config::builder()
            .set_default("hotel.name", "Luxor Hotel")?
            .set_default("storage.path", "guests.csv")?
            .set_default("storage.load_on_startup", true)?
            .set_default("logging.filter", DEFAULT_LOG_FILTER)?
            // Shared settings, then the per-environment file, then local
            // overrides that stay out of version control
            .add_source(config::File::from(dir.join("default")).required(false))
            .add_source(config::File::from(dir.join(run_mode)).required(false))
            .add_source(config::File::from(dir.join("local")).required(false))
            .add_source(environment)
            .build()?;

        s.try_deserialize()
    }
}
