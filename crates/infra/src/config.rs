//! Configuration loading and representation.

use std::net::SocketAddr;

use thiserror::Error;

use climastore_catalog::DEFAULT_PAGE_SIZE;

pub const BIND_ADDR: &str = "CLIMASTORE_BIND_ADDR";
pub const PAGE_SIZE: &str = "CLIMASTORE_PAGE_SIZE";
pub const SEED_CATALOG: &str = "CLIMASTORE_SEED_CATALOG";
pub const LOG_FILTER: &str = "CLIMASTORE_LOG";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Process configuration for the storefront.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub bind_addr: SocketAddr,
    pub page_size: u32,
    pub seed_catalog: bool,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            page_size: DEFAULT_PAGE_SIZE,
            seed_catalog: true,
            log_filter: "info".to_string(),
        }
    }
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_addr = match lookup(BIND_ADDR) {
            Some(v) => v.trim().parse().map_err(|_| invalid(BIND_ADDR, &v))?,
            None => defaults.bind_addr,
        };

        let page_size = match lookup(PAGE_SIZE) {
            Some(v) => match v.trim().parse::<u32>() {
                Ok(n) if n >= 1 => n,
                _ => return Err(invalid(PAGE_SIZE, &v)),
            },
            None => defaults.page_size,
        };

        let seed_catalog = match lookup(SEED_CATALOG) {
            Some(v) => parse_bool(&v).ok_or_else(|| invalid(SEED_CATALOG, &v))?,
            None => defaults.seed_catalog,
        };

        let log_filter = lookup(LOG_FILTER)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.log_filter);

        Ok(Self {
            bind_addr,
            page_size,
            seed_catalog,
            log_filter,
        })
    }
}

fn invalid(key: &'static str, value: &str) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
