//! services/app/src/auth.rs
//!
//! The session/auth gate: a two-state machine (anonymous, admin) driven
//! by a single credential check. There is no identity beyond the flag,
//! no expiry, and no persistence across restarts — a fresh process is
//! always anonymous.

use std::time::Duration;

use terminy_core::domain::SessionState;
use tracing::{info, warn};

use crate::config::AdminCredentials;

/// Returned when a login attempt does not match the configured pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
}

/// Holds the current session state and the credential pair it is
/// checked against. The pair comes from configuration so tests can
/// supply their own without touching global state.
pub struct AuthGate {
    session: SessionState,
    credentials: AdminCredentials,
    /// Cosmetic pause before a login attempt completes. Zero in tests.
    login_delay: Duration,
}

impl AuthGate {
    pub fn new(credentials: AdminCredentials, login_delay: Duration) -> Self {
        Self {
            session: SessionState::Anonymous,
            credentials,
            login_delay,
        }
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn is_admin(&self) -> bool {
        self.session == SessionState::Admin
    }

    /// Attempts the anonymous → admin transition. Both values must match
    /// the configured pair exactly; failure leaves the session anonymous.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), AuthError> {
        // Simulated latency carried over from the reference UI.
        if !self.login_delay.is_zero() {
            tokio::time::sleep(self.login_delay).await;
        }

        if username == self.credentials.username && password == self.credentials.password {
            self.session = SessionState::Admin;
            info!(username, "admin login succeeded");
            Ok(())
        } else {
            warn!(username, "admin login failed");
            Err(AuthError::InvalidCredentials)
        }
    }

    /// The admin → anonymous transition. Unconditional.
    pub fn logout(&mut self) {
        self.session = SessionState::Anonymous;
        info!("admin logged out");
    }
}
