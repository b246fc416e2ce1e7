//! Informational page handlers.
//!
//! These routes have no business logic: each hands a view name to the
//! renderer port. `/pricing` is the canonical path for the pricing/FAQ
//! content; no `/faqs` alias is registered.

use actix_web::{HttpResponse, get, web};
use serde_json::json;

use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, render_page};

#[get("/")]
pub async fn home(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    render_page(state.renderer.as_ref(), "home", &json!({ "flash": null }))
}

#[get("/features")]
pub async fn features(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    render_page(state.renderer.as_ref(), "features", &json!({ "flash": null }))
}

#[get("/pricing")]
pub async fn pricing(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    render_page(state.renderer.as_ref(), "pricing", &json!({ "flash": null }))
}

#[get("/contact")]
pub async fn contact(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    render_page(state.renderer.as_ref(), "contact", &json!({ "flash": null }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::test_state;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test, web};
    use rstest::rstest;

    #[rstest]
    #[case("/", "home")]
    #[case("/features", "features")]
    #[case("/pricing", "pricing")]
    #[case("/contact", "contact")]
    #[actix_web::test]
    async fn informational_pages_render_without_a_session(
        #[case] path: &str,
        #[case] view: &str,
    ) {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .service(home)
                .service(features)
                .service(pricing)
                .service(contact),
        )
        .await;

        let res =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(path).to_request())
                .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = actix_test::read_body(res).await;
        let body = std::str::from_utf8(&body).expect("utf8 body");
        assert!(body.starts_with(&format!("view={view} ")));
    }

    #[actix_web::test]
    async fn unknown_paths_are_not_served() {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .service(home)
                .service(features)
                .service(pricing)
                .service(contact),
        )
        .await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/faqs").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
