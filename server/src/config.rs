//! Server configuration loaded from the environment.
//!
//! `main` loads `.env` through `dotenvy` first, so values may come from either
//! place. Leptos build settings (site root, output name) are read separately
//! by `leptos::config::get_configuration`.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT {0:?}: expected an integer in 1..=65535")]
    InvalidPort(String),
    #[error("invalid {key} {value:?}: expected one of 1/0, true/false, yes/no, on/off")]
    InvalidFlag { key: &'static str, value: String },
}

/// Runtime settings for the HTTP host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// `PORT`, default 3000.
    pub port: u16,
    /// `PUBLIC_DIR`: static assets such as the brand logo.
    pub public_dir: PathBuf,
    /// `COMPRESSION`: gzip responses, default on.
    pub compression: bool,
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` or `COMPRESSION` is set to an unparsable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => parse_port(&raw)?,
            None => DEFAULT_PORT,
        };
        let public_dir = lookup("PUBLIC_DIR").map_or_else(default_public_dir, PathBuf::from);
        let compression = match lookup("COMPRESSION") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidFlag { key: "COMPRESSION", value: raw })?,
            None => true,
        };
        Ok(Self { port, public_dir, compression })
    }

    /// Listen on all interfaces at the configured port.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

fn default_public_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public")
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    match raw.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort(raw.to_owned())),
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
