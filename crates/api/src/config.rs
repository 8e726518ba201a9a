//! Environment-driven API configuration.

use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "CATALOG_BIND_ADDR";
pub const DATA_FILE_VAR: &str = "CATALOG_DATA_FILE";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_DATA_FILE: &str = "data/products.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}={value} is not a valid socket address: {source}")]
    InvalidBindAddr {
        var: &'static str,
        value: String,
        source: AddrParseError,
    },

    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// Settings read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub data_file: PathBuf,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable source (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = raw_addr
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                var: BIND_ADDR_VAR,
                value: raw_addr.clone(),
                source,
            })?;

        let data_file = lookup(DATA_FILE_VAR).unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());
        if data_file.trim().is_empty() {
            return Err(ConfigError::Empty(DATA_FILE_VAR));
        }

        Ok(Self {
            bind_addr,
            data_file: PathBuf::from(data_file),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR.parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.data_file, PathBuf::from(DEFAULT_DATA_FILE));
    }

    #[test]
    fn reads_overrides() {
        let cfg = ApiConfig::from_lookup(lookup(&[
            (BIND_ADDR_VAR, "127.0.0.1:9000"),
            (DATA_FILE_VAR, "/tmp/catalog.json"),
        ]))
        .unwrap();
        assert_eq!(cfg.bind_addr.port(), 9000);
        assert_eq!(cfg.data_file, PathBuf::from("/tmp/catalog.json"));
    }

    #[test]
    fn rejects_bad_bind_addr() {
        let err = ApiConfig::from_lookup(lookup(&[(BIND_ADDR_VAR, "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
    }

    #[test]
    fn rejects_empty_data_file() {
        let err = ApiConfig::from_lookup(lookup(&[(DATA_FILE_VAR, " ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Empty(DATA_FILE_VAR)));
    }
}
