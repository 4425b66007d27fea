//! Server configuration from environment variables
//!
//! - `PORT`: listen port (default 3000)
//! - `EVALUATION_FORM_URL`: outbound evaluation form link
//! - `PKG_DIR`: directory holding the wasm-pack output served at `/pkg`
//! - `RUST_LOG`: tracing filter, see [`DEFAULT_LOG_FILTER`]

use std::path::PathBuf;

use thiserror::Error;

use crate::content::DEFAULT_EVALUATION_FORM_URL;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PKG_DIR: &str = "pkg";
pub const DEFAULT_LOG_FILTER: &str = "marching_fest=info,tower_http=debug,axum=debug,warn";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT value `{0}`")]
    InvalidPort(String),
    #[error("EVALUATION_FORM_URL must be an http(s) URL, got `{0}`")]
    InvalidFormUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub evaluation_form_url: String,
    pub pkg_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            evaluation_form_url: DEFAULT_EVALUATION_FORM_URL.to_string(),
            pkg_dir: PathBuf::from(DEFAULT_PKG_DIR),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };

        let evaluation_form_url = match get("EVALUATION_FORM_URL") {
            Some(url) if url.starts_with("https://") || url.starts_with("http://") => url,
            Some(url) => return Err(ConfigError::InvalidFormUrl(url)),
            None => defaults.evaluation_form_url,
        };

        let pkg_dir = get("PKG_DIR").map(PathBuf::from).unwrap_or(defaults.pkg_dir);

        Ok(Self {
            port,
            evaluation_form_url,
            pkg_dir,
        })
    }
}
