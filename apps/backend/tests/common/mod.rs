#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::{CONTENT_TYPE, LOCATION};
use actix_web::http::StatusCode;
use actix_web::test;

// Logging is auto-installed for every test binary that declares `mod common`
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Assert a `303 See Other` and return its `Location`.
pub fn assert_see_other(resp: &ServiceResponse<BoxBody>) -> String {
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    resp.headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("303 responses should carry a Location header")
        .to_string()
}

/// Assert a 200 HTML page and return its body.
pub async fn read_html(resp: ServiceResponse<BoxBody>) -> String {
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        content_type.starts_with("text/html"),
        "expected an HTML page (got {content_type})"
    );
    let body = test::read_body(resp).await;
    String::from_utf8(body.to_vec()).expect("HTML should be valid UTF-8")
}

/// Pull the session id out of a round page's share link or form.
pub fn session_id_from_html(html: &str) -> String {
    let marker = r#"name="id" value=""#;
    let start = html
        .find(marker)
        .map(|i| i + marker.len())
        .expect("round page should carry the session id in its form");
    html[start..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect()
}
