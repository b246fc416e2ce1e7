//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without real collaborators.

use std::sync::Arc;

use crate::domain::ports::{AuthService, PageRenderer};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub auth: Arc<dyn AuthService>,
    pub renderer: Arc<dyn PageRenderer>,
}

impl HttpState {
    /// Bundle the injected port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use site::domain::ports::{FixturePageRenderer, InMemoryAuthService};
    /// use site::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(InMemoryAuthService::fixture()),
    ///     Arc::new(FixturePageRenderer),
    /// );
    /// let _auth = state.auth.clone();
    /// ```
    pub fn new(auth: Arc<dyn AuthService>, renderer: Arc<dyn PageRenderer>) -> Self {
        Self { auth, renderer }
    }
}
