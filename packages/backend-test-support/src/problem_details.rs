//! Assertions for problem-details error bodies, usable from unit tests
//! inside the backend crate without depending on its types.

use actix_web::body::{to_bytes, BoxBody};
use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Deserialize;

/// Mirror of the backend's error body.
#[derive(Debug, Deserialize)]
struct ProblemBody {
    #[serde(rename = "type")]
    type_: String,
    title: String,
    status: u16,
    detail: String,
    code: String,
    trace_id: String,
    success: bool,
    error: u16,
}

/// Check one rendered error against the contract: status, code, trace id
/// parity with `x-trace-id`, legacy envelope and an optional detail substring.
pub fn assert_problem_details_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
    expected_code: &str,
    expected_status: StatusCode,
    expected_detail_contains: Option<&str>,
) {
    assert_eq!(status, expected_status);

    let problem: ProblemBody = serde_json::from_slice(body).unwrap_or_else(|e| {
        panic!(
            "body is not problem details ({e}): {}",
            String::from_utf8_lossy(body)
        )
    });

    let header_trace = headers
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header");
    assert_eq!(problem.trace_id, header_trace, "body trace_id must equal x-trace-id");

    assert_eq!(problem.code, expected_code);
    assert_eq!(problem.status, expected_status.as_u16());
    assert_eq!(problem.error, expected_status.as_u16());
    assert!(!problem.success, "error bodies must carry success=false");
    assert!(problem.type_.ends_with(expected_code), "type {} should name the code", problem.type_);
    assert!(!problem.title.is_empty());

    if let Some(fragment) = expected_detail_contains {
        assert!(
            problem.detail.contains(fragment),
            "detail '{}' should contain '{fragment}'",
            problem.detail
        );
    }
}

/// [`assert_problem_details_parts`] for a response built by
/// `ResponseError::error_response`.
pub async fn assert_problem_details_from_http_response(
    resp: HttpResponse<BoxBody>,
    expected_code: &str,
    expected_status: StatusCode,
    expected_detail_contains: Option<&str>,
) {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = to_bytes(resp.into_body())
        .await
        .unwrap_or_else(|_| panic!("read error body"));

    assert_problem_details_parts(
        status,
        &headers,
        &body,
        expected_code,
        expected_status,
        expected_detail_contains,
    );
}
