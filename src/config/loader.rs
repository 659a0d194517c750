//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading versioned
//! SCHADS rate tables from YAML files.

use chrono::NaiveDate;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};

use super::types::{AwardConfig, AwardMetadata, RateTable};

/// Loads and provides access to the award's rate tables.
///
/// # Directory Structure
///
/// ```text
/// config/schads/
/// ├── award.yaml            # Award metadata
/// └── rates/
///     ├── 2024-07-01.yaml   # One rate table per award version
///     └── 2025-07-01.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use schads_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/schads").unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// let table = loader.rate_table_for_date(date).unwrap();
/// println!("Level 3 rate: ${}", table.base_rate(3).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AwardConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `award.yaml` or the `rates` directory is missing, or holds no tables
    /// - any file contains invalid YAML or misses a required field
    /// - two tables share an award version
    /// - a table fails [`RateTable::validate`]
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<AwardMetadata>(&path.join("award.yaml"))?;
        let rate_tables = Self::load_rate_tables(&path.join("rates"))?;

        info!(
            award = %metadata.code,
            tables = rate_tables.len(),
            "Loaded award configuration"
        );

        Self::from_parts(metadata, rate_tables)
    }

    /// Builds a loader from tables already in memory.
    ///
    /// Applies the same duplicate-version and validity checks as [`load`](Self::load).
    pub fn from_parts(metadata: AwardMetadata, rate_tables: Vec<RateTable>) -> EngineResult<Self> {
        let mut seen = HashSet::new();
        for table in &rate_tables {
            table.validate()?;
            if !seen.insert(table.award_version.clone()) {
                return Err(EngineError::ConfigParseError {
                    path: table.award_version.clone(),
                    message: "duplicate award version".to_string(),
                });
            }
        }

        Ok(Self {
            config: AwardConfig::new(metadata, rate_tables),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all rate tables from the rates directory.
    fn load_rate_tables(rates_dir: &Path) -> EngineResult<Vec<RateTable>> {
        let rates_dir_str = rates_dir.display().to_string();

        let entries = fs::read_dir(rates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir_str.clone(),
        })?;

        let mut tables = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rates_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let table = Self::load_yaml::<RateTable>(&path)?;
                debug!(
                    award_version = %table.award_version,
                    file = %path.display(),
                    "Loaded rate table"
                );
                tables.push(table);
            }
        }

        if tables.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rate files found)", rates_dir_str),
            });
        }

        Ok(tables)
    }

    /// Returns the underlying award configuration.
    pub fn config(&self) -> &AwardConfig {
        &self.config
    }

    /// Returns the award metadata.
    pub fn award(&self) -> &AwardMetadata {
        self.config.award()
    }

    /// Returns the loaded award versions, oldest first.
    pub fn versions(&self) -> Vec<&str> {
        self.config
            .rate_tables()
            .iter()
            .map(|t| t.award_version.as_str())
            .collect()
    }

    /// Gets the rate table for an explicit award version.
    pub fn rate_table(&self, version: &str) -> EngineResult<&RateTable> {
        self.config
            .rate_tables()
            .iter()
            .find(|t| t.award_version == version)
            .ok_or_else(|| EngineError::AwardVersionNotFound {
                version: version.to_string(),
            })
    }

    /// Gets the rate table in force on a given date.
    ///
    /// Finds the most recent table whose effective date is on or before `date`.
    pub fn rate_table_for_date(&self, date: NaiveDate) -> EngineResult<&RateTable> {
        self.config
            .rate_tables()
            .iter()
            .rfind(|t| t.effective_date <= date)
            .ok_or(EngineError::RateTableNotFound { date })
    }
}
