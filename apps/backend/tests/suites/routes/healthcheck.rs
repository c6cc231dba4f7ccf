use actix_web::test;
use serde_json::Value;

use crate::support::create_test_app;
use crate::support::test_state::{build_state_without_db, build_test_state};

#[actix_web::test]
async fn test_root_greets() {
    let state = build_test_state().await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body = test::read_body(resp).await;
    assert!(std::str::from_utf8(&body).unwrap().starts_with("Hello"));
}

#[actix_web::test]
async fn test_health_reports_db_and_migrations() {
    let state = build_test_state().await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let request_id = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .expect("x-request-id header");
    let trace_id = resp
        .headers()
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header");
    assert_eq!(request_id, trace_id);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert_eq!(body["migrations"], "m20251001_000001_booking");
    assert!(body.get("db_error").is_none());
    assert!(body["time"].as_str().is_some());
}

#[actix_web::test]
async fn test_health_without_db_still_answers() {
    let state = build_state_without_db().await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "error");
    assert_eq!(body["db_error"], "DB unavailable");
}
