//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;

use leptos::config::{LeptosOptions, get_configuration};

pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `GEOLEARN_ADDR` is not a `host:port` socket address.
    #[error("invalid GEOLEARN_ADDR {raw:?}: {reason}")]
    InvalidAddr { raw: String, reason: String },

    /// Leptos site options could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub leptos: LeptosOptions,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `GEOLEARN_ADDR`: bind address, default `0.0.0.0:3000`
    /// - `LEPTOS_OUTPUT_NAME`, `LEPTOS_SITE_ROOT`, `LEPTOS_SITE_PKG_DIR`:
    ///   exported by `cargo leptos`, defaults otherwise
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = parse_addr(std::env::var("GEOLEARN_ADDR").ok().as_deref())?;
        let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
        Ok(Self { addr, leptos: conf.leptos_options })
    }
}

fn parse_addr(raw: Option<&str>) -> Result<SocketAddr, ConfigError> {
    let raw = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_ADDR);
    raw.parse()
        .map_err(|e: std::net::AddrParseError| ConfigError::InvalidAddr { raw: raw.to_string(), reason: e.to_string() })
}
