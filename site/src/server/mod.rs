//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_session::{
    SessionMiddleware,
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use crate::domain::CredentialStore;
use crate::domain::ports::InMemoryAuthService;
use crate::inbound::http::auth::{dashboard, login_form, login_submit, logout};
use crate::inbound::http::pages::{contact, features, home, pricing};
use crate::inbound::http::signup::{signup_form, signup_submit};
use crate::inbound::http::state::HttpState;
use crate::outbound::MiniJinjaRenderer;

/// Assemble the application: session middleware plus the full route table.
pub fn build_app(
    state: web::Data<HttpState>,
    key: Key,
    cookie_secure: bool,
    same_site: SameSite,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(same_site)
        .session_lifecycle(
            PersistentSession::default().session_ttl(actix_web::cookie::time::Duration::hours(2)),
        )
        .build();

    App::new()
        .app_data(state)
        .wrap(session)
        .service(home)
        .service(features)
        .service(pricing)
        .service(contact)
        .service(login_form)
        .service(login_submit)
        .service(dashboard)
        .service(logout)
        .service(signup_form)
        .service(signup_submit)
}

/// Build the handler state over the development credential set and the
/// compiled-in templates.
///
/// # Errors
/// Returns [`std::io::Error`] when a template fails to parse.
pub fn build_default_state() -> std::io::Result<HttpState> {
    let renderer = MiniJinjaRenderer::new()
        .map_err(|error| std::io::Error::other(format!("renderer setup failed: {error}")))?;
    Ok(HttpState::new(
        Arc::new(InMemoryAuthService::new(CredentialStore::fixture())),
        Arc::new(renderer),
    ))
}

/// Construct an Actix HTTP server from the provided configuration and state.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig, state: HttpState) -> std::io::Result<Server> {
    let ServerConfig {
        key,
        cookie_secure,
        same_site,
        bind_addr,
    } = config;
    let state = web::Data::new(state);

    let server = HttpServer::new(move || {
        build_app(state.clone(), key.clone(), cookie_secure, same_site)
    })
    .bind(bind_addr)?
    .run();

    Ok(server)
}
