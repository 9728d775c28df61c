//! Server configuration read from the environment

use std::net::{AddrParseError, SocketAddr};

use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "TODO_API_ADDR";
pub const CORS_VAR: &str = "TODO_API_CORS";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {name} value {value:?}: {source}")]
    InvalidAddr {
        name: &'static str,
        value: String,
        source: AddrParseError,
    },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Attach a permissive CORS layer. It answers every `OPTIONS`
    /// request itself, so it is off unless asked for.
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            cors: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidAddr {
                name: BIND_ADDR_VAR,
                value: raw_addr.clone(),
                source,
            })?;

        Ok(Self {
            bind_addr,
            cors: parse_flag(lookup(CORS_VAR), false),
        })
    }
}

fn parse_flag(raw: Option<String>, default: bool) -> bool {
    match raw {
        Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        None => default,
    }
}
