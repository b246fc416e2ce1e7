//! Driving port for login/authentication use-cases.
//!
//! Inbound adapters call this port to authenticate credentials and to
//! resolve a session-held email back to an identity. The only production
//! implementation wraps an immutable [`CredentialStore`] snapshot injected
//! at startup — no ambient globals.

use async_trait::async_trait;

use crate::domain::{CredentialStore, Error, Identity, LoginCredentials};

/// Domain use-case port for authentication.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Validate credentials and return the authenticated identity.
    ///
    /// Failure is always the same generic `Unauthorized` error: callers
    /// cannot distinguish an unknown email from a wrong password.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Identity, Error>;

    /// Resolve a session-held email to an identity.
    ///
    /// Returns `None` when no credential record backs the email. Absence is
    /// a normal outcome meaning "anonymous", not an error.
    async fn resolve_identity(&self, email: &str) -> Result<Option<Identity>, Error>;
}

/// Authenticator backed by an in-memory credential snapshot.
///
/// Stored passwords are compared with plain equality; the reference
/// behaviour has no hashing.
#[derive(Debug, Clone)]
pub struct InMemoryAuthService {
    store: CredentialStore,
}

impl InMemoryAuthService {
    /// Wrap an immutable credential store snapshot.
    pub fn new(store: CredentialStore) -> Self {
        Self { store }
    }

    /// Service over the development credential set
    /// (`user@example.com` / `password`).
    pub fn fixture() -> Self {
        Self::new(CredentialStore::fixture())
    }
}

#[async_trait]
impl AuthService for InMemoryAuthService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Identity, Error> {
        match self.store.password_for(credentials.email()) {
            Some(stored) if stored == credentials.password() => {
                Ok(Identity::new(credentials.email()))
            }
            // Same error either way: no user-enumeration signal.
            _ => Err(Error::unauthorized("Invalid credentials")),
        }
    }

    async fn resolve_identity(&self, email: &str) -> Result<Option<Identity>, Error> {
        if self.store.contains(email) {
            Ok(Some(Identity::new(email)))
        } else {
            Ok(None)
        }
    }
}
