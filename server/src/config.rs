//! Runtime configuration parsed from environment variables.
//!
//! Leptos build settings (site root, pkg dir, reload port) come from the
//! workspace `Cargo.toml` through `get_configuration`; this module only
//! covers what the server itself decides at startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} is not a valid {expected}")]
    Invalid { var: &'static str, value: String, expected: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen port; overrides the port in the Leptos `site-addr`.
    pub port: u16,
    /// Directory served under `/assets` (images, favicon).
    pub assets_dir: PathBuf,
    /// Gzip responses. On by default.
    pub compression: bool,
}

impl ServerConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `ASSETS_DIR`: default `<server crate>/../assets`
    /// - `COMPRESSION`: `1/true/yes/on` or `0/false/no/off`, default on
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                value: raw.clone(),
                expected: "port number",
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let assets_dir = std::env::var("ASSETS_DIR").map_or_else(|_| default_assets_dir(), PathBuf::from);

        let compression = match std::env::var("COMPRESSION") {
            Ok(raw) => parse_bool(&raw).ok_or_else(|| ConfigError::Invalid {
                var: "COMPRESSION",
                value: raw.clone(),
                expected: "boolean",
            })?,
            Err(_) => true,
        };

        Ok(Self { port, assets_dir, compression })
    }
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../assets")
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
