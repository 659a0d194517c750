//! Configuration loading and management for the SCHADS pay engine.
//!
//! Rate tables are versioned by award year and loaded from YAML files, so an
//! award-rate change never requires a code deployment.
//!
//! # Example
//!
//! ```no_run
//! use schads_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/schads").unwrap();
//! println!("Loaded award: {}", config.award().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AllowanceRates, AwardConfig, AwardMetadata, MAX_WORKER_LEVEL, MIN_WORKER_LEVEL,
    PenaltyMultipliers, RateTable,
};

#[cfg(test)]
pub(crate) use types::tests::sample_rate_table;
