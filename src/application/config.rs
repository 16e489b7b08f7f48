/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/25
******************************************************************************/
use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_STORAGE_DIR, SESSION_STORAGE_KEY};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the Educa API client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Session persistence configuration
    pub storage: StorageConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: String,
    /// Optional request timeout in seconds; `None` keeps the transport default
    pub timeout: Option<u64>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for session persistence
pub struct StorageConfig {
    /// Directory of the file-backed store
    pub dir: String,
    /// Key holding the serialized user session
    pub session_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration from the environment
    ///
    /// Loads `.env` when present, then reads:
    ///
    /// * `EDUCA_API_BASE_URL` - defaults to the production API
    /// * `EDUCA_REST_TIMEOUT` - seconds, unset means no client-side timeout
    /// * `EDUCA_STORAGE_DIR` - defaults to `.educa`
    /// * `EDUCA_SESSION_KEY` - defaults to `educa_user`
    ///
    /// # Returns
    ///
    /// A new `Config` instance
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let base_url = get_env_or_default("EDUCA_API_BASE_URL", String::from(DEFAULT_API_BASE_URL));
        if !base_url.starts_with("https://") {
            warn!("EDUCA_API_BASE_URL is not HTTPS: {}", base_url);
        }

        Config {
            rest_api: RestApiConfig {
                base_url,
                timeout: get_env_or_none("EDUCA_REST_TIMEOUT"),
            },
            storage: StorageConfig {
                dir: get_env_or_default("EDUCA_STORAGE_DIR", String::from(DEFAULT_STORAGE_DIR)),
                session_key: get_env_or_default(
                    "EDUCA_SESSION_KEY",
                    String::from(SESSION_STORAGE_KEY),
                ),
            },
        }
    }

    /// Configuration pointing at `base_url`, everything else at its default
    ///
    /// Does not read the environment; meant for tests and embedded use.
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: base_url.to_string(),
                timeout: None,
            },
            storage: StorageConfig {
                dir: String::from(DEFAULT_STORAGE_DIR),
                session_key: String::from(SESSION_STORAGE_KEY),
            },
        }
    }
}
