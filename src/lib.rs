/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/25
******************************************************************************/

//! # Educa Client
//!
//! Client library for the Educa school-management API.
//!
//! The crate is organised around two pieces:
//!
//! - A request layer ([`model::http::HttpClient`]) that wraps every call to the
//!   backend, parses responses leniently and detects expired sessions, whether
//!   the backend signals them with a 401/403 status or with an `error` string
//!   embedded in a 200 response.
//! - A time normalizer ([`utils::lima_time`]) that reads the backend's naive
//!   timestamps as America/Lima civil time (UTC-5) independently of the host
//!   timezone and answers deadline queries.
//!
//! On top of them sit the typed endpoint services
//! ([`application::interfaces`]) and the session manager
//! ([`application::auth::SessionManager`]) that persists the logged-in user.
//!
//! ## Example
//!
//! ```ignore
//! use educa_client::prelude::*;
//!
//! setup_logger();
//! let config = Config::new();
//! let store = Arc::new(FileStore::new(&config.storage.dir)?);
//! let http = Arc::new(HttpClient::new(&config)?);
//! let sessions = SessionManager::new(http.clone(), store, &config);
//! http.set_session_expired_handler(sessions.expiry_handler());
//!
//! let user = sessions.login("docente@colegio.pe", "secreto").await?;
//! let client = Client::from_http(http);
//! let courses = client.list_teacher_courses().await?;
//! ```

/// Application layer: configuration, client, session manager and services
pub mod application;

/// Global constants
pub mod constants;

/// Error types
pub mod error;

/// Wire models and the HTTP request layer
pub mod model;

/// Commonly used re-exports
pub mod prelude;

/// Session expiry hook and session persistence
pub mod session;

/// Utilities: configuration helpers, logging and Lima time handling
pub mod utils;

pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
