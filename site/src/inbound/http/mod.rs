//! HTTP inbound adapter serving the site's HTML surface.
//!
//! ```text
//! GET  /            home
//! GET  /features    features
//! GET  /pricing     pricing
//! GET  /contact     contact
//! GET  /dashboard   dashboard (session required)
//! GET  /login       login form
//! POST /login       authenticate, redirect to /dashboard
//! GET  /logout      clear identity, redirect to / (session required)
//! GET  /signup      signup form
//! POST /signup      flash a confirmation, redirect to /signup
//! ```

pub mod auth;
pub mod error;
pub mod pages;
pub mod session;
pub mod signup;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;

use actix_web::HttpResponse;
use actix_web::http::header;
use serde_json::Value;

use crate::domain::ports::PageRenderer;

/// Render `view` through the injected renderer as an HTML response.
pub(crate) fn render_page(
    renderer: &dyn PageRenderer,
    view: &str,
    context: &Value,
) -> ApiResult<HttpResponse> {
    let body = renderer.render(view, context)?;
    Ok(HttpResponse::Ok()
        .content_type(header::ContentType::html())
        .body(body))
}

/// Redirect with `303 See Other` so a POST lands on a GET.
pub(crate) fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
