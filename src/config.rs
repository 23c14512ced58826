use std::{env, str::FromStr};

use argon2::Params;
use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "sqlite://accounts.db?mode=rwc";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub sql_logging: bool,
    pub run_migrations: bool,
}

/// Argon2 work factor used for new hashes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HasherConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_address: String,
    pub log_level: String,
    pub database: DatabaseConfig,
    pub hasher: HasherConfig,
}

impl AppConfig {
    /// Load configuration from the process environment, after merging `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database = DatabaseConfig {
            url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 10)?,
            min_connections: parse_or(&lookup, "DATABASE_MIN_CONNECTIONS", 1)?,
            sql_logging: parse_or(&lookup, "DATABASE_SQL_LOGGING", false)?,
            run_migrations: parse_or(&lookup, "RUN_MIGRATIONS", true)?,
        };

        let hasher = HasherConfig {
            memory_kib: parse_or(&lookup, "ARGON2_MEMORY_KIB", Params::DEFAULT_M_COST)?,
            iterations: parse_or(&lookup, "ARGON2_ITERATIONS", Params::DEFAULT_T_COST)?,
            parallelism: parse_or(&lookup, "ARGON2_PARALLELISM", Params::DEFAULT_P_COST)?,
        };

        Ok(Self {
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            database,
            hasher,
        })
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}
