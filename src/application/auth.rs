/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/25
******************************************************************************/

//! Session management for the Educa API
//!
//! This module keeps the logged-in user record:
//! - Login against `logins.php` and persistence of the returned record
//! - Restoring the record once at start
//! - Logout, and the cleanup run when the backend reports an expired session

use crate::application::config::Config;
use crate::constants::LOGIN_PATH;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::LoginRequest;
use crate::model::responses::{UserSession, initial_route};
use crate::session::handler::SessionExpiredHandler;
use crate::session::store::KeyValueStore;
use serde_json::Value;
use std::sync::{Arc, RwLock};
use tracing::{debug, error, info, warn};

/// Cached user plus where it is persisted
struct SessionState {
    store: Arc<dyn KeyValueStore>,
    key: String,
    current: RwLock<Option<UserSession>>,
}

impl SessionState {
    fn set(&self, session: Option<UserSession>) {
        let mut current = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *current = session;
    }

    fn get(&self) -> Option<UserSession> {
        match self.current.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn clear(&self) -> Result<(), AppError> {
        self.set(None);
        self.store.remove_item(&self.key)
    }
}

/// Session manager for the Educa API
///
/// Handles:
/// - Login and persistence of the user record
/// - Restoring a persisted session
/// - Logout and session expiry cleanup
pub struct SessionManager {
    http: Arc<HttpClient>,
    state: Arc<SessionState>,
}

impl SessionManager {
    /// Creates a new session manager
    ///
    /// # Arguments
    /// * `http` - Request client used for login
    /// * `store` - Where the user record is persisted
    /// * `config` - Configuration holding the storage key
    pub fn new(http: Arc<HttpClient>, store: Arc<dyn KeyValueStore>, config: &Config) -> Self {
        Self {
            http,
            state: Arc::new(SessionState {
                store,
                key: config.storage.session_key.clone(),
                current: RwLock::new(None),
            }),
        }
    }

    /// Logs in and persists the returned user record
    ///
    /// Blank credentials are rejected before any request is made.
    ///
    /// # Returns
    /// * `Ok(UserSession)` - The logged-in user
    /// * `Err(AppError)` - If the credentials are blank, rejected or the record
    ///   cannot be stored
    pub async fn login(&self, email: &str, password: &str) -> Result<UserSession, AppError> {
        let request = LoginRequest::new(email, password)?;

        debug!("Sending login request for {}", request.email);
        let raw: Value = self
            .http
            .post_as(LOGIN_PATH, &request)
            .await
            .inspect_err(|e| error!("login error: {}", e))?;

        let session: UserSession = serde_json::from_value(raw.clone()).map_err(|e| {
            error!("Unexpected login response: {}", e);
            AppError::Json(e)
        })?;

        self.state
            .store
            .set_item(&self.state.key, &serde_json::to_string(&raw)?)?;
        self.state.set(Some(session.clone()));

        info!(
            "✓ Login successful: {} ({})",
            session.nombre, session.rol
        );
        Ok(session)
    }

    /// Loads the persisted session, if any
    ///
    /// A record that no longer parses is discarded and treated as logged out.
    pub fn restore(&self) -> Result<Option<UserSession>, AppError> {
        let Some(raw) = self.state.store.get_item(&self.state.key)? else {
            debug!("No persisted session");
            self.state.set(None);
            return Ok(None);
        };

        match serde_json::from_str::<UserSession>(&raw) {
            Ok(session) => {
                info!("Session restored: {} - {}", session.rol, session.nombre);
                self.state.set(Some(session.clone()));
                Ok(Some(session))
            }
            Err(e) => {
                warn!("Discarding unreadable persisted session: {}", e);
                self.state.clear()?;
                Ok(None)
            }
        }
    }

    /// The logged-in user, if any
    #[must_use]
    pub fn current(&self) -> Option<UserSession> {
        self.state.get()
    }

    /// Whether a user is logged in
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.state.get().is_some()
    }

    /// Screen to open for the current state
    #[must_use]
    pub fn initial_route(&self) -> &'static str {
        initial_route(self.state.get().as_ref())
    }

    /// Forgets the user locally
    pub fn logout(&self) -> Result<(), AppError> {
        info!("Logout");
        self.state.clear()
    }

    /// Handler that clears the session when the backend reports it expired
    ///
    /// Register it on the [`HttpClient`] at start.
    #[must_use]
    pub fn expiry_handler(&self) -> Arc<dyn SessionExpiredHandler> {
        let state = Arc::clone(&self.state);
        Arc::new(move || {
            info!("Clearing expired session");
            if let Err(e) = state.clear() {
                error!("Failed to clear expired session: {}", e);
            }
        })
    }
}
