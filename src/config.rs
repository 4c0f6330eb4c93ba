//! Configuration management for spotdup.
//!
//! Configuration is read once at start-up and handed to every entry point as a
//! [`Config`] record. Values are resolved in this order:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)
//!
//! The Spotify client credentials have no default and must be provided.

use std::{env, io, path::PathBuf};

use thiserror::Error;

use crate::types::{ClientId, ClientSecret, RedirectUri};

pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:8080/callback/";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_ACCOUNTS_URL: &str = "https://accounts.spotify.com";
pub const DEFAULT_SCOPE: &str = "playlist-read-private playlist-modify-private user-read-private";
pub const DEFAULT_PAGE_LIMIT: u32 = 5;
/// Largest page Spotify serves for playlist listings.
pub const MAX_PAGE_LIMIT: u32 = 50;
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },

    #[error("cannot prepare configuration directory: {0}")]
    Io(#[from] io::Error),

    #[error("cannot read .env file: {0}")]
    DotEnv(#[from] dotenv::Error),
}

/// Process wide settings shared read-only by the client and the demo server.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: ClientId,
    pub client_secret: ClientSecret,
    pub redirect_uri: RedirectUri,
    /// Base URL of the Web API, without trailing slash.
    pub api_url: String,
    /// Base URL of the accounts service hosting `/authorize` and `/api/token`.
    pub accounts_url: String,
    pub scope: String,
    /// Items requested per page by the paginated fetcher, between 1 and
    /// [`MAX_PAGE_LIMIT`] when read from the environment.
    pub page_limit: u32,
    pub server_addr: String,
}

impl Config {
    /// Builds a configuration with the given credentials and defaults for
    /// everything else.
    pub fn new(client_id: ClientId, client_secret: ClientSecret, redirect_uri: RedirectUri) -> Self {
        Self {
            client_id,
            client_secret,
            redirect_uri,
            api_url: DEFAULT_API_URL.to_string(),
            accounts_url: DEFAULT_ACCOUNTS_URL.to_string(),
            scope: DEFAULT_SCOPE.to_string(),
            page_limit: DEFAULT_PAGE_LIMIT,
            server_addr: DEFAULT_SERVER_ADDRESS.to_string(),
        }
    }

    /// Reads the configuration from the process environment.
    ///
    /// Call [`load_env`] first to pick up the `.env` file.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Missing`] when a client credential is not set
    /// - [`ConfigError::Invalid`] when `SPOTIFY_PAGE_LIMIT` is not an integer
    ///   between 1 and [`MAX_PAGE_LIMIT`]
    ///
    /// # Example
    ///
    /// ```
    /// config::load_env().await?;
    /// let config = Config::from_env()?;
    /// println!("Serving on {}", config.server_addr);
    /// ```
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset. Credentials fall back to the
    /// lowercase `client_id` / `client_secret` variable names.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let client_id = get("SPOTIFY_CLIENT_ID")
            .or_else(|| get("client_id"))
            .ok_or(ConfigError::Missing("SPOTIFY_CLIENT_ID"))?;
        let client_secret = get("SPOTIFY_CLIENT_SECRET")
            .or_else(|| get("client_secret"))
            .ok_or(ConfigError::Missing("SPOTIFY_CLIENT_SECRET"))?;

        let page_limit = match get("SPOTIFY_PAGE_LIMIT") {
            Some(raw) => parse_page_limit(&raw)?,
            None => DEFAULT_PAGE_LIMIT,
        };

        Ok(Self {
            client_id: ClientId::new(client_id),
            client_secret: ClientSecret::new(client_secret),
            redirect_uri: RedirectUri::new(
                get("SPOTIFY_REDIRECT_URI").unwrap_or_else(|| DEFAULT_REDIRECT_URI.to_string()),
            ),
            api_url: trim_base(get("SPOTIFY_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string())),
            accounts_url: trim_base(
                get("SPOTIFY_ACCOUNTS_URL").unwrap_or_else(|| DEFAULT_ACCOUNTS_URL.to_string()),
            ),
            scope: get("SPOTIFY_SCOPE").unwrap_or_else(|| DEFAULT_SCOPE.to_string()),
            page_limit,
            server_addr: get("SERVER_ADDRESS").unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string()),
        })
    }
}

fn parse_page_limit(raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(ConfigError::Invalid {
            var: "SPOTIFY_PAGE_LIMIT",
            reason: "must be greater than zero".to_string(),
        }),
        Ok(limit) if limit > MAX_PAGE_LIMIT => Err(ConfigError::Invalid {
            var: "SPOTIFY_PAGE_LIMIT",
            reason: format!("must not exceed {}", MAX_PAGE_LIMIT),
        }),
        Ok(limit) => Ok(limit),
        Err(e) => Err(ConfigError::Invalid {
            var: "SPOTIFY_PAGE_LIMIT",
            reason: e.to_string(),
        }),
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file is looked up in:
/// - Linux: `~/.local/share/spotdup/.env`
/// - macOS: `~/Library/Application Support/spotdup/.env`
/// - Windows: `%LOCALAPPDATA%/spotdup/.env`
///
/// A missing file is not an error; variables may come from the environment
/// alone. Variables already set in the environment are never overridden.
pub async fn load_env() -> Result<(), ConfigError> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    match dotenv::from_path(&path) {
        Ok(()) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.into()),
    }
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotdup/.env");
    path
}
