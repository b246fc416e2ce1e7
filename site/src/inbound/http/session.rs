//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Provides a thin wrapper around Actix sessions so handlers only deal with
//! domain-friendly operations: binding or clearing the authenticated
//! identity and passing one-shot flash messages between requests.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::{Error, Identity};

pub(crate) const IDENTITY_KEY: &str = "identity_email";
pub(crate) const FLASH_KEY: &str = "flash";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Bind the authenticated identity to the session cookie.
    pub fn persist_identity(&self, identity: &Identity) -> Result<(), Error> {
        self.0
            .insert(IDENTITY_KEY, identity.email())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Email bound to the current session, if any.
    ///
    /// The caller still has to resolve the email against the credential
    /// store; a value here only means the cookie carries one.
    pub fn identity_email(&self) -> Result<Option<String>, Error> {
        self.0
            .get::<String>(IDENTITY_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))
    }

    /// Remove the bound identity. A no-op on an anonymous session.
    pub fn clear_identity(&self) {
        let _ = self.0.remove(IDENTITY_KEY);
    }

    /// Attach a one-shot notice to the next rendered response.
    pub fn set_flash(&self, message: &str) -> Result<(), Error> {
        self.0
            .insert(FLASH_KEY, message)
            .map_err(|error| Error::internal(format!("failed to set flash message: {error}")))
    }

    /// Take the pending flash message, removing it from the session.
    pub fn take_flash(&self) -> Result<Option<String>, Error> {
        match self.0.remove_as::<String>(FLASH_KEY) {
            None => Ok(None),
            Some(Ok(message)) => Ok(Some(message)),
            Some(Err(raw)) => {
                tracing::warn!(%raw, "discarding undecodable flash message");
                Ok(None)
            }
        }
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
