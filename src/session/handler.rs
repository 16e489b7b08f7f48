/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 13/10/25
******************************************************************************/
use std::fmt;
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

/// Cleanup invoked when the backend reports that the session is gone
///
/// Implementations clear whatever the application keeps for the logged-in user
/// and send it back to an unauthenticated state. The request layer calls it
/// synchronously, right before returning [`crate::error::AppError::SessionExpired`],
/// so it should be cheap and must not panic.
pub trait SessionExpiredHandler: Send + Sync {
    /// Called once per failing request
    fn on_session_expired(&self);
}

impl<F> SessionExpiredHandler for F
where
    F: Fn() + Send + Sync,
{
    fn on_session_expired(&self) {
        self()
    }
}

/// Single slot holding the active [`SessionExpiredHandler`]
///
/// Registering a new handler replaces the previous one. Clones share the slot.
#[derive(Clone, Default)]
pub struct SessionExpiryHook {
    handler: Arc<RwLock<Option<Arc<dyn SessionExpiredHandler>>>>,
}

impl SessionExpiryHook {
    /// Creates an empty hook
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a hook with `handler` already registered
    #[must_use]
    pub fn with_handler(handler: Arc<dyn SessionExpiredHandler>) -> Self {
        let hook = Self::new();
        hook.register(handler);
        hook
    }

    /// Registers `handler`, replacing any previous one
    pub fn register(&self, handler: Arc<dyn SessionExpiredHandler>) {
        let mut slot = match self.handler.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if slot.replace(handler).is_some() {
            debug!("Replaced previous session expiry handler");
        }
    }

    /// Removes the registered handler
    pub fn clear(&self) {
        let mut slot = match self.handler.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *slot = None;
    }

    /// Whether a handler is registered
    #[must_use]
    pub fn is_registered(&self) -> bool {
        match self.handler.read() {
            Ok(guard) => guard.is_some(),
            Err(poisoned) => poisoned.into_inner().is_some(),
        }
    }

    /// Invokes the registered handler, if any
    ///
    /// # Returns
    /// `true` when a handler ran
    pub fn fire(&self) -> bool {
        // The lock is released before calling out so the handler may re-register.
        let handler = match self.handler.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };
        match handler {
            Some(handler) => {
                handler.on_session_expired();
                true
            }
            None => {
                warn!("Session expired but no handler is registered");
                false
            }
        }
    }
}

impl fmt::Debug for SessionExpiryHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionExpiryHook")
            .field("registered", &self.is_registered())
            .finish()
    }
}
