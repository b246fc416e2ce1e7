//! Signup handlers: a post/redirect/get echo with no persistence.
//!
//! The POST classifies the submission by role, flashes the confirmation
//! message, and redirects back to the form so a refresh never resubmits.

use actix_web::{HttpResponse, get, post, web};
use serde_json::json;

use crate::domain::{SignupForm, SignupSubmission};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, render_page, see_other};

/// The signup route, both the form and the post-redirect target.
pub const SIGNUP_ROUTE: &str = "/signup";

/// Render the signup form, consuming any pending confirmation notice.
#[get("/signup")]
pub async fn signup_form(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let flash = session.take_flash()?;
    render_page(state.renderer.as_ref(), "signup", &json!({ "flash": flash }))
}

/// Acknowledge a signup submission.
///
/// Nothing is stored: the submission only produces its confirmation
/// message, set as a one-shot flash before redirecting to the form.
#[post("/signup")]
pub async fn signup_submit(
    session: SessionContext,
    form: web::Form<SignupForm>,
) -> ApiResult<HttpResponse> {
    let submission = SignupSubmission::from(form.into_inner());
    tracing::info!(role = submission.role_label(), "signup submission received");
    session.set_flash(&submission.confirmation())?;
    Ok(see_other(SIGNUP_ROUTE))
}
