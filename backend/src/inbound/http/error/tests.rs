//! Tests for HTTP error mapping.

use super::*;
use crate::domain::{ValidationReport, Violation, ViolationCode};
use actix_web::body::to_bytes;
use rstest::rstest;
use serde_json::{Value, json};

async fn body_json(response: HttpResponse) -> Value {
    let bytes = to_bytes(response.into_body()).await.expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[rstest]
#[case(ServiceError::not_found(5).into(), StatusCode::NOT_FOUND)]
#[case(
    ServiceError::Invalid(ValidationReport::default()).into(),
    StatusCode::BAD_REQUEST
)]
#[case(ServiceError::infrastructure("db down").into(), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(ApiError::Payload("EOF while parsing".into()), StatusCode::BAD_REQUEST)]
fn status_code_matches_error_kind(#[case] error: ApiError, #[case] expected: StatusCode) {
    assert_eq!(error.status_code(), expected);
}

#[actix_web::test]
async fn not_found_uses_the_id_key() {
    let response = ApiError::from(ServiceError::not_found(77)).error_response();
    assert_eq!(
        body_json(response).await,
        json!({"success": false, "errorKeys": ["id-not-found"]})
    );
}

#[actix_web::test]
async fn invalid_lists_every_violation() {
    let report = ValidationReport::from(vec![
        Violation::new("name", ViolationCode::MinLength(5)),
        Violation::new("age", ViolationCode::Range { min: 20, max: 60 }),
    ]);
    let response = ApiError::from(ServiceError::Invalid(report)).error_response();
    assert_eq!(
        body_json(response).await,
        json!({"success": false, "errorKeys": ["minlen-5:name", "range-20-60:age"]})
    );
}

#[actix_web::test]
async fn infrastructure_detail_is_redacted() {
    let error = ApiError::from(ServiceError::infrastructure(
        "country directory timed out: 10.0.0.7:443",
    ));

    let body = body_json(error.error_response()).await;

    assert_eq!(
        body,
        json!({"success": false, "errorKeys": ["internal-error"]})
    );
    assert!(!body.to_string().contains("10.0.0.7"));
}

#[actix_web::test]
async fn trace_id_header_is_attached_when_in_scope() {
    let trace_id: TraceId = "00000000-0000-0000-0000-000000000000"
        .parse()
        .expect("valid uuid");

    let response = TraceId::scope(trace_id, async {
        ApiError::from(ServiceError::infrastructure("boom")).error_response()
    })
    .await;

    assert_eq!(
        response
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok()),
        Some("00000000-0000-0000-0000-000000000000")
    );
}
