//! HTTP flow through the real routes and middleware.

mod common;
mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use colorguess::infra::state::build_state;
use common::{assert_see_other, read_html, session_id_from_html};
use support::create_test_app;

fn guess_form(id: &str, round: u64, color: &str) -> [(&'static str, String); 3] {
    [
        ("id", id.to_string()),
        ("round", round.to_string()),
        ("color", color.to_string()),
    ]
}

#[actix_web::test]
async fn first_visit_starts_a_game_with_a_share_link() {
    let app = create_test_app(build_state().build().unwrap()).build().await;

    let req = test::TestRequest::get()
        .uri("/")
        .insert_header(("host", "colors.test:3001"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.headers().contains_key("x-request-id"));
    let html = read_html(resp).await;

    assert!(html.contains("Round 1"));
    assert!(html.contains("background-color: #000000"));
    let id = session_id_from_html(&html);
    assert_eq!(id.len(), 16);
    // minijinja escapes '/' inside attribute values and text.
    assert!(html.contains(&format!("colors.test:3001&#x2f;?id={id}")));
}

#[actix_web::test]
async fn configured_public_url_is_used_for_share_links() {
    let state = build_state()
        .with_public_url(Some("https://colors.example.com".into()))
        .build()
        .unwrap();
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::get().uri("/").to_request();
    let html = read_html(test::call_service(&app, req).await).await;
    let id = session_id_from_html(&html);
    assert!(html.contains(&format!("colors.example.com&#x2f;?id={id}")));
}

#[actix_web::test]
async fn matching_guesses_advance_and_the_waiter_is_redirected() {
    let app = create_test_app(build_state().build().unwrap()).build().await;

    let req = test::TestRequest::get().uri("/").to_request();
    let id = session_id_from_html(&read_html(test::call_service(&app, req).await).await);

    // Second player opens the share link and sees the same round.
    let req = test::TestRequest::get()
        .uri(&format!("/?id={id}"))
        .to_request();
    let html = read_html(test::call_service(&app, req).await).await;
    assert!(html.contains("Round 1"));
    assert!(!html.contains("Send this link"));

    // First guess waits.
    let req = test::TestRequest::post()
        .uri("/")
        .set_form(guess_form(&id, 1, "Black"))
        .to_request();
    let location = assert_see_other(&test::call_service(&app, req).await);
    assert_eq!(location, format!("/wait?id={id}&round=1"));

    let req = test::TestRequest::get().uri(&location).to_request();
    let html = read_html(test::call_service(&app, req).await).await;
    assert!(html.contains(r#"http-equiv="refresh""#));

    // Second guess matches and shows the next color.
    let req = test::TestRequest::post()
        .uri("/")
        .set_form(guess_form(&id, 1, "black"))
        .to_request();
    let html = read_html(test::call_service(&app, req).await).await;
    assert!(html.contains("Round 2"));
    assert!(html.contains("background-color: #ff0000"));

    // The waiter's next poll sends them to the new round.
    let req = test::TestRequest::get().uri(&location).to_request();
    let next = assert_see_other(&test::call_service(&app, req).await);
    assert_eq!(next, format!("/?id={id}&round=1"));

    let req = test::TestRequest::get().uri(&next).to_request();
    let html = read_html(test::call_service(&app, req).await).await;
    assert!(html.contains("background-color: #ff0000"));
}

#[actix_web::test]
async fn mismatched_guesses_lose_the_game() {
    let app = create_test_app(build_state().build().unwrap()).build().await;

    let req = test::TestRequest::get().uri("/").to_request();
    let id = session_id_from_html(&read_html(test::call_service(&app, req).await).await);

    let req = test::TestRequest::post()
        .uri("/")
        .set_form(guess_form(&id, 1, "black"))
        .to_request();
    assert_see_other(&test::call_service(&app, req).await);

    let req = test::TestRequest::get()
        .uri(&format!("/?id={id}&round=1&color=white"))
        .to_request();
    let html = read_html(test::call_service(&app, req).await).await;
    assert!(html.contains("You lost"));

    let req = test::TestRequest::get()
        .uri(&format!("/wait?id={id}&round=1"))
        .to_request();
    let html = read_html(test::call_service(&app, req).await).await;
    assert!(html.contains("You lost"));
}

#[actix_web::test]
async fn malformed_round_is_a_bad_request() {
    let app = create_test_app(build_state().build().unwrap()).build().await;

    let req = test::TestRequest::get().uri("/?round=two").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "MALFORMED_ROUND",
        StatusCode::BAD_REQUEST,
        Some("two"),
    )
    .await;
}

#[actix_web::test]
async fn missing_id_past_the_first_round_is_a_bad_request() {
    let app = create_test_app(build_state().build().unwrap()).build().await;

    let req = test::TestRequest::get()
        .uri("/?round=3&color=red")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "MISSING_SESSION_ID",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;

    let req = test::TestRequest::get().uri("/wait?round=1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "MISSING_SESSION_ID",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
}

#[actix_web::test]
async fn unknown_session_is_not_found() {
    let app = create_test_app(build_state().build().unwrap()).build().await;

    let req = test::TestRequest::get()
        .uri("/?id=0000000000000000&round=1&color=red")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "SESSION_NOT_FOUND",
        StatusCode::NOT_FOUND,
        Some("0000000000000000"),
    )
    .await;
}

#[actix_web::test]
async fn round_mismatches_conflict() {
    let app = create_test_app(build_state().build().unwrap()).build().await;

    let req = test::TestRequest::get().uri("/").to_request();
    let id = session_id_from_html(&read_html(test::call_service(&app, req).await).await);

    let req = test::TestRequest::post()
        .uri("/")
        .set_form(guess_form(&id, 4, "red"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let problem = assert_problem_details_from_service_response(
        resp,
        "INVALID_ROUND",
        StatusCode::CONFLICT,
        None,
    )
    .await;
    assert_ne!(problem.trace_id, "unknown");

    let req = test::TestRequest::get()
        .uri(&format!("/wait?id={id}&round=7"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "INCONSISTENT_ROUND",
        StatusCode::CONFLICT,
        None,
    )
    .await;
}

#[actix_web::test]
async fn health_reports_session_count() {
    let app = create_test_app(build_state().build().unwrap()).build().await;

    let req = test::TestRequest::get().uri("/").to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["sessions"], 1);
    assert_eq!(body["app_version"], env!("CARGO_PKG_VERSION"));
    assert!(body["time"].as_str().is_some());
}
