pub mod app_config;
pub mod csv_store;

pub use app_config::Config;
pub use csv_store::CsvGuestStore;

use luxor_core::GridError;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Could not access guest file {path}: {source}")]
    FileAccess {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("Malformed guest file row {row}: {reason}")]
    Malformed { row: usize, reason: String },

    #[error("Guest file conflicts with hotel rules: {0}")]
    Grid(#[from] GridError),
}

pub type StoreResult<T> = Result<T, StoreError>;
