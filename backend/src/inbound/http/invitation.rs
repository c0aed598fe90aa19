//! Invitation details: scheduled events and the countdown to the first.

use actix_web::{get, web};

use crate::domain::{Countdown, WeddingSchedule};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{CountdownSchema, ErrorSchema, WeddingEventSchema};
use crate::inbound::http::state::HttpState;

/// List the wedding events in start order.
#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "Scheduled events", body = [WeddingEventSchema])
    ),
    tags = ["invitation"],
    operation_id = "listEvents"
)]
#[get("/events")]
pub async fn list_events(state: web::Data<HttpState>) -> ApiResult<web::Json<WeddingSchedule>> {
    state.invitation.events().await.map(web::Json)
}

/// Time left until the first event.
#[utoipa::path(
    get,
    path = "/api/countdown",
    responses(
        (status = 200, description = "Countdown to the first event", body = CountdownSchema),
        (status = 404, description = "No events are scheduled", body = ErrorSchema)
    ),
    tags = ["invitation"],
    operation_id = "getCountdown"
)]
#[get("/countdown")]
pub async fn countdown(state: web::Data<HttpState>) -> ApiResult<web::Json<Countdown>> {
    state.invitation.countdown().await.map(web::Json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Error;
    use crate::inbound::http::test_utils::{MockPorts, test_app};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use chrono::{Duration, Utc};
    use serde_json::Value;

    async fn get_json(ports: MockPorts, uri: &str) -> (StatusCode, Value) {
        let app = actix_test::init_service(test_app(ports)).await;
        let request = actix_test::TestRequest::get().uri(uri).to_request();
        let response = actix_test::call_service(&app, request).await;
        let status = response.status();
        let body = actix_test::read_body(response).await;
        (status, serde_json::from_slice(&body).expect("json body"))
    }

    #[actix_web::test]
    async fn lists_events() {
        let mut ports = MockPorts::default();
        ports
            .invitation
            .expect_events()
            .times(1)
            .returning(|| Ok(WeddingSchedule::default()));

        let (status, body) = get_json(ports, "/api/events").await;
        assert_eq!(status, StatusCode::OK);
        let events = body.as_array().expect("array");
        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["location"], "Vairawar Valagam, Vairavanpatti");
    }

    #[actix_web::test]
    async fn returns_countdown_units() {
        let now = Utc::now();
        let target = (now + Duration::hours(26)).fixed_offset();
        let mut ports = MockPorts::default();
        ports
            .invitation
            .expect_countdown()
            .times(1)
            .returning(move || Ok(Countdown::measure("Wedding Ceremony", target, now)));

        let (status, body) = get_json(ports, "/api/countdown").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["days"], 1);
        assert_eq!(body["hours"], 2);
        assert_eq!(body["elapsed"], false);
    }

    #[actix_web::test]
    async fn empty_schedule_is_not_found() {
        let mut ports = MockPorts::default();
        ports
            .invitation
            .expect_countdown()
            .times(1)
            .returning(|| Err(Error::not_found("No events are scheduled")));

        let (status, body) = get_json(ports, "/api/countdown").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "not_found");
    }
}
