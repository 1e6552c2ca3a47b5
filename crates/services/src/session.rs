use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{info, warn};

use senti_core::model::SessionToken;

use crate::error::AuthError;
use crate::gateway::AuthGateway;

/// Owns the one optional bearer token for the client's lifetime.
///
/// This is the only place the token is written; the upload path reads a
/// clone per request.
pub struct SessionService {
    gateway: Arc<dyn AuthGateway>,
    token: RwLock<Option<SessionToken>>,
}

impl SessionService {
    #[must_use]
    pub fn new(gateway: Arc<dyn AuthGateway>) -> Self {
        Self {
            gateway,
            token: RwLock::new(None),
        }
    }

    /// Exchange credentials for a token and store it.
    ///
    /// A failed attempt clears any previously held token: the session is
    /// created on successful authentication and destroyed on auth failure.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` when the endpoint rejects the credentials or the
    /// exchange fails in transport.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), AuthError> {
        match self.gateway.request_token(username, password).await {
            Ok(token) => {
                *write_lock(&self.token) = Some(token);
                info!("session established");
                Ok(())
            }
            Err(err) => {
                *write_lock(&self.token) = None;
                warn!(error = %err, "login failed");
                Err(err)
            }
        }
    }

    /// Drop the token and return to the unauthenticated state. Never fails.
    pub fn logout(&self) {
        *write_lock(&self.token) = None;
        info!("session cleared");
    }

    /// A clone of the current token, if one is held.
    #[must_use]
    pub fn token(&self) -> Option<SessionToken> {
        read_lock(&self.token).clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        read_lock(&self.token).is_some()
    }
}

fn read_lock<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_lock<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
