//! Tests for RSVP API handlers.

use super::*;
use crate::domain::{Error, LIST_FAILED_MESSAGE, RsvpId, SUBMIT_FAILED_MESSAGE};
use crate::inbound::http::test_utils::{MockPorts, test_app};
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::json;

async fn send(ports: MockPorts, request: actix_http::Request) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app(ports)).await;
    let response = actix_test::call_service(&app, request).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    (status, serde_json::from_slice(&body).expect("json body"))
}

fn post_rsvp(body: &Value) -> actix_http::Request {
    actix_test::TestRequest::post()
        .uri("/api/rsvp")
        .set_json(body)
        .to_request()
}

#[actix_web::test]
async fn created_rsvp_is_echoed_with_confirmation() {
    let mut ports = MockPorts::default();
    ports
        .rsvps
        .expect_submit()
        .withf(|rsvp| rsvp.name() == "Asha" && rsvp.guest_count() == 2)
        .times(1)
        .returning(|rsvp| Ok(rsvp.into_rsvp(RsvpId::new(1))));

    let (status, body) = send(
        ports,
        post_rsvp(&json!({ "name": "Asha", "attending": true, "guestCount": 2 })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "message": RSVP_RECEIVED_MESSAGE,
            "rsvp": { "id": 1, "name": "Asha", "attending": true, "guestCount": 2 },
        })
    );
}

#[rstest]
#[case::missing_name(json!({ "attending": true }), "Validation error: name is required")]
#[case::wrong_types(
    json!({ "name": 7, "attending": "yes" }),
    "Validation error: name must be a string; attending must be a boolean"
)]
#[actix_web::test]
async fn invalid_payloads_never_reach_the_store(#[case] payload: Value, #[case] message: &str) {
    let mut ports = MockPorts::default();
    ports.rsvps.expect_submit().never();

    let (status, body) = send(ports, post_rsvp(&payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["message"], message);
    assert!(body["details"]["violations"].is_array());
}

#[actix_web::test]
async fn malformed_json_is_a_bad_request() {
    let request = actix_test::TestRequest::post()
        .uri("/api/rsvp")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"name\": ")
        .to_request();

    let (status, body) = send(MockPorts::default(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Request body must be valid JSON");
}

#[actix_web::test]
async fn store_failures_are_generic_500s() {
    let mut ports = MockPorts::default();
    ports
        .rsvps
        .expect_submit()
        .times(1)
        .returning(|_| Err(Error::internal(SUBMIT_FAILED_MESSAGE)));

    let (status, body) = send(
        ports,
        post_rsvp(&json!({ "name": "Asha", "attending": false })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], SUBMIT_FAILED_MESSAGE);
    assert!(body.get("details").is_none());
}

#[actix_web::test]
async fn lists_stored_rsvps() {
    let stored = NewRsvp::parse(&json!({ "name": "Asha", "attending": true }))
        .expect("valid rsvp")
        .into_rsvp(RsvpId::new(1));
    let mut ports = MockPorts::default();
    ports
        .rsvps_query
        .expect_list()
        .times(1)
        .return_once(move || Ok(vec![stored]));

    let request = actix_test::TestRequest::get().uri("/api/rsvps").to_request();
    let (status, body) = send(ports, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{ "id": 1, "name": "Asha", "attending": true, "guestCount": 1 }])
    );
}

#[actix_web::test]
async fn list_failures_are_generic_500s() {
    let mut ports = MockPorts::default();
    ports
        .rsvps_query
        .expect_list()
        .times(1)
        .returning(|| Err(Error::internal(LIST_FAILED_MESSAGE)));

    let request = actix_test::TestRequest::get().uri("/api/rsvps").to_request();
    let (status, body) = send(ports, request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], LIST_FAILED_MESSAGE);
}

#[actix_web::test]
async fn unknown_routes_return_the_error_envelope() {
    let request = actix_test::TestRequest::get().uri("/api/guests").to_request();
    let (status, body) = send(MockPorts::default(), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
    assert_eq!(body["message"], "No route for GET /api/guests");
}
