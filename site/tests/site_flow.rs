//! Full-journey coverage over the real app composition: session middleware,
//! route table, in-memory credentials, and the MiniJinja renderer.

use actix_web::cookie::{Cookie, Key, SameSite};
use actix_web::dev::ServiceResponse;
use actix_web::http::{StatusCode, header};
use actix_web::{test, web};

use site::server::{build_app, build_default_state};

fn test_app() -> actix_web::App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = build_default_state().expect("templates parse");
    build_app(
        web::Data::new(state),
        Key::generate(),
        false,
        SameSite::Lax,
    )
}

fn location_of(res: &ServiceResponse) -> String {
    res.headers()
        .get(header::LOCATION)
        .expect("location header")
        .to_str()
        .expect("ascii header")
        .to_owned()
}

fn session_cookie(res: &ServiceResponse) -> Cookie<'static> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie set")
        .into_owned()
}

async fn login(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = ServiceResponse,
        Error = actix_web::Error,
    >,
    email: &str,
    password: &str,
) -> ServiceResponse {
    let req = test::TestRequest::post()
        .uri("/login")
        .set_form([("email", email), ("password", password)])
        .to_request();
    test::call_service(app, req).await
}

#[actix_web::test]
async fn anonymous_dashboard_requests_redirect_to_login() {
    let app = test::init_service(test_app()).await;
    let res = test::call_service(&app, test::TestRequest::get().uri("/dashboard").to_request()).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location_of(&res), "/login");
}

#[actix_web::test]
async fn login_logout_walks_the_session_state_machine() {
    let app = test::init_service(test_app()).await;

    // Anonymous -> Authenticated.
    let login_res = login(&app, "user@example.com", "password").await;
    assert_eq!(login_res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location_of(&login_res), "/dashboard");
    let cookie = session_cookie(&login_res);

    let dash = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/dashboard")
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    assert_eq!(dash.status(), StatusCode::OK);
    let body = test::read_body(dash).await;
    let body = std::str::from_utf8(&body).expect("utf8 body");
    assert!(body.contains("user@example.com"));

    // Authenticated -> Anonymous.
    let logout_res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/logout")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(logout_res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location_of(&logout_res), "/");

    // A second logout with the cleared cookie is anonymous: redirect to
    // the login form, no error.
    let cookie = session_cookie(&logout_res);
    let again = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/logout")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(again.status(), StatusCode::SEE_OTHER);
    assert_eq!(location_of(&again), "/login");
}

#[actix_web::test]
async fn failed_login_renders_the_notice_and_stays_anonymous() {
    let app = test::init_service(test_app()).await;

    let res = login(&app, "user@example.com", "wrong").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = test::read_body(res).await;
    let body = std::str::from_utf8(&body).expect("utf8 body");
    assert!(body.contains("Invalid credentials"));
    assert!(body.contains(r#"value="user@example.com""#));

    // Still anonymous.
    let res = test::call_service(&app, test::TestRequest::get().uri("/dashboard").to_request()).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location_of(&res), "/login");
}

#[actix_web::test]
async fn signup_flash_displays_once_through_real_templates() {
    let app = test::init_service(test_app()).await;

    let post_res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/signup")
            .set_form([
                ("role", "seller"),
                ("name", "Bo"),
                ("email", "bo@example.com"),
                ("sellerProduct", "tractor"),
                ("sellerDescription", "lightly used"),
                ("sellerPrice", "500"),
            ])
            .to_request(),
    )
    .await;
    assert_eq!(post_res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location_of(&post_res), "/signup");
    let cookie = session_cookie(&post_res);

    let first = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/signup")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(first.status(), StatusCode::OK);
    let cookie = session_cookie(&first);
    let body = test::read_body(first).await;
    let body = std::str::from_utf8(&body).expect("utf8 body");
    assert!(body.contains(
        "Thank you Bo, you have signed up as a seller listing tractor for 500."
    ));
    assert!(!body.contains("lightly used"));

    let second = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/signup")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    let body = test::read_body(second).await;
    let body = std::str::from_utf8(&body).expect("utf8 body");
    assert!(!body.contains("Thank you Bo"));
}

#[actix_web::test]
async fn informational_pages_are_public() {
    let app = test::init_service(test_app()).await;
    for path in ["/", "/features", "/pricing", "/contact"] {
        let res = test::call_service(&app, test::TestRequest::get().uri(path).to_request()).await;
        assert_eq!(res.status(), StatusCode::OK, "{path} should render");
    }
}
