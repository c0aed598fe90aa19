//! Wishes API handler.
//!
//! ```text
//! POST /api/wishes {"name":"Asha","message":"Congrats!","timestamp":"2025-05-01T06:30:00Z"}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, WishRequestSchema};
use crate::inbound::http::state::HttpState;

/// Response body for a forwarded wish.
#[derive(Debug, Serialize, ToSchema)]
pub struct WishAcceptedResponse {
    /// Always `true`; failures use the error envelope.
    pub success: bool,
}

/// Forward a wish to the external store.
///
/// Failures of the external store surface as a generic 500 and are never
/// retried; resubmitting is up to the guest.
#[utoipa::path(
    post,
    path = "/api/wishes",
    request_body = WishRequestSchema,
    responses(
        (status = 200, description = "Wish forwarded", body = WishAcceptedResponse),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 500, description = "Wish could not be saved", body = ErrorSchema)
    ),
    tags = ["wishes"],
    operation_id = "submitWish"
)]
#[post("/wishes")]
pub async fn submit_wish(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    state.wishes.send(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(WishAcceptedResponse { success: true }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Error, SAVE_FAILED_MESSAGE};
    use crate::inbound::http::test_utils::{MockPorts, test_app};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use serde_json::json;

    async fn post_wish(ports: MockPorts, body: Value) -> (StatusCode, Value) {
        let app = actix_test::init_service(test_app(ports)).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/wishes")
            .set_json(&body)
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        let status = response.status();
        let body = actix_test::read_body(response).await;
        (status, serde_json::from_slice(&body).expect("json body"))
    }

    #[actix_web::test]
    async fn forwards_payload_and_reports_success() {
        let mut ports = MockPorts::default();
        ports
            .wishes
            .expect_send()
            .withf(|payload| payload["name"] == "Asha")
            .times(1)
            .returning(|_| Ok(()));

        let (status, body) =
            post_wish(ports, json!({ "name": "Asha", "message": "Congrats!" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true }));
    }

    #[actix_web::test]
    async fn sink_failures_are_generic_500s() {
        let mut ports = MockPorts::default();
        ports
            .wishes
            .expect_send()
            .times(1)
            .returning(|_| Err(Error::internal(SAVE_FAILED_MESSAGE)));

        let (status, body) =
            post_wish(ports, json!({ "name": "Asha", "message": "Congrats!" })).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], SAVE_FAILED_MESSAGE);
        assert_eq!(body["code"], "internal_error");
    }
}
