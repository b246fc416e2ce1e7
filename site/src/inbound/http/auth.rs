//! Login, logout, and dashboard handlers plus the route guard.
//!
//! Keep the handlers focused on request/response mapping: credential checks
//! live behind the `AuthService` port and session plumbing behind
//! [`SessionContext`].

use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::domain::ports::AuthService;
use crate::domain::{Error, ErrorCode, Identity, LoginCredentials, LoginValidationError};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, render_page, see_other};

/// Where a successful login always lands, regardless of the page that
/// triggered the redirect to the login form.
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Resolve the session-bound email to an identity or fail `Unauthorized`.
///
/// A session naming an email with no backing credential record is treated
/// as anonymous; the stale value is dropped so later requests start clean.
/// The HTTP error mapper turns the failure into a redirect to the login
/// form.
pub(crate) async fn require_identity(
    session: &SessionContext,
    auth: &dyn AuthService,
) -> ApiResult<Identity> {
    let Some(email) = session.identity_email()? else {
        return Err(Error::unauthorized("login required"));
    };
    match auth.resolve_identity(&email).await? {
        Some(identity) => Ok(identity),
        None => {
            session.clear_identity();
            Err(Error::unauthorized("login required"))
        }
    }
}

/// Login form body for `POST /login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Per-field validation annotations for the login view.
#[derive(Debug, Default)]
struct LoginErrors {
    email: Option<String>,
    password: Option<String>,
}

impl From<LoginValidationError> for LoginErrors {
    fn from(err: LoginValidationError) -> Self {
        let message = err.to_string();
        match err {
            LoginValidationError::EmptyEmail | LoginValidationError::InvalidEmail => Self {
                email: Some(message),
                ..Self::default()
            },
            LoginValidationError::EmptyPassword => Self {
                password: Some(message),
                ..Self::default()
            },
        }
    }
}

/// Context contract for the `login` view. Every key is always present so
/// the renderer can run with strict undefined behaviour.
fn login_context(email: &str, errors: &LoginErrors, flash: Option<String>) -> Value {
    json!({
        "form": { "email": email },
        "errors": { "email": errors.email, "password": errors.password },
        "flash": flash,
    })
}

/// Render the login form.
#[get("/login")]
pub async fn login_form(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let flash = session.take_flash()?;
    render_page(
        state.renderer.as_ref(),
        "login",
        &login_context("", &LoginErrors::default(), flash),
    )
}

/// Validate and authenticate a login submission.
///
/// - Malformed fields re-render the form with field-level annotations.
/// - A credential mismatch re-renders with a single "Invalid credentials"
///   notice, keeping the submitted email and clearing the password.
/// - Success binds the identity and redirects to the dashboard.
#[post("/login")]
pub async fn login_submit(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<LoginForm>,
) -> ApiResult<HttpResponse> {
    let form = form.into_inner();
    let credentials = match LoginCredentials::try_from_parts(&form.email, &form.password) {
        Ok(credentials) => credentials,
        Err(err) => {
            return render_page(
                state.renderer.as_ref(),
                "login",
                &login_context(&form.email, &err.into(), None),
            );
        }
    };

    match state.auth.authenticate(&credentials).await {
        Ok(identity) => {
            session.persist_identity(&identity)?;
            tracing::info!(email = identity.email(), "login succeeded");
            Ok(see_other(DASHBOARD_ROUTE))
        }
        Err(err) if err.code() == ErrorCode::Unauthorized => {
            tracing::debug!(email = credentials.email(), "login rejected");
            render_page(
                state.renderer.as_ref(),
                "login",
                &login_context(
                    credentials.email(),
                    &LoginErrors::default(),
                    Some(err.message().to_owned()),
                ),
            )
        }
        Err(err) => Err(err),
    }
}

/// Render the dashboard for the authenticated visitor.
#[get("/dashboard")]
pub async fn dashboard(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let identity = require_identity(&session, state.auth.as_ref()).await?;
    let flash = session.take_flash()?;
    render_page(
        state.renderer.as_ref(),
        "dashboard",
        &json!({
            "user": { "email": identity.email() },
            "flash": flash,
        }),
    )
}

/// Clear the bound identity and return to the home page.
#[get("/logout")]
pub async fn logout(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let identity = require_identity(&session, state.auth.as_ref()).await?;
    session.clear_identity();
    tracing::info!(email = identity.email(), "logged out");
    Ok(see_other("/"))
}
