use anyhow::{Context, Result};
use records::RecordPolicy;
use storage::DEFAULT_MAX_CONNECTIONS;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub policy: RecordPolicy,
}

impl Config {
    pub fn from_env(database_url: String) -> Result<Self> {
        Self::from_lookup(database_url, |key| std::env::var(key).ok())
    }

    /// Builds the configuration from `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup(
        database_url: String,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let defaults = RecordPolicy::default();

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => value
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a positive number")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let start_year = match lookup("RECORD_START_YEAR") {
            Some(value) => value.parse().context("RECORD_START_YEAR must be a year")?,
            None => defaults.start_year,
        };

        let include_legacy_meets = match lookup("RECORD_INCLUDE_LEGACY") {
            Some(value) => value
                .parse()
                .context("RECORD_INCLUDE_LEGACY must be true or false")?,
            None => defaults.include_legacy_meets,
        };

        Ok(Self {
            database_url,
            max_connections,
            policy: RecordPolicy {
                start_year,
                include_legacy_meets,
            },
        })
    }
}
