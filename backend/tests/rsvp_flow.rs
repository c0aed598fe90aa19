//! End-to-end RSVP and wishes flows against the in-memory guest store.
//!
//! These tests wire the real services and adapters together, so a regression
//! in any layer between the JSON body and the store shows up here.

use std::sync::Arc;

use actix_web::{App, http::StatusCode, test, web};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use rsvp_backend::domain::{InvitationService, RsvpService, WeddingSchedule, WishesService};
use rsvp_backend::inbound::http::configure_api;
use rsvp_backend::inbound::http::state::{HttpState, HttpStatePorts};
use rsvp_backend::outbound::memory::InMemoryGuestStore;
use rsvp_backend::outbound::sheets::UnconfiguredWishSink;

#[fixture]
fn state() -> web::Data<HttpState> {
    let rsvps = Arc::new(RsvpService::new(Arc::new(InMemoryGuestStore::new())));
    let clock = Arc::new(DefaultClock);
    web::Data::new(HttpState::new(HttpStatePorts {
        rsvps: rsvps.clone(),
        rsvps_query: rsvps,
        wishes: Arc::new(WishesService::new(
            Arc::new(UnconfiguredWishSink),
            clock.clone(),
        )),
        invitation: Arc::new(InvitationService::new(WeddingSchedule::default(), clock)),
    }))
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(App::new().app_data($state.clone()).configure(configure_api)).await
    };
}

macro_rules! list {
    ($app:expr) => {{
        let res = test::call_service(&$app, test::TestRequest::get().uri("/api/rsvps").to_request())
            .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        body
    }};
}

#[rstest]
#[actix_web::test]
async fn submitted_rsvps_are_listed_in_order(state: web::Data<HttpState>) {
    let app = app!(state);

    for (name, attending) in [("Asha", true), ("Bala", false)] {
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/rsvp")
                .set_json(json!({ "name": name, "attending": attending }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let listed = list!(app);
    assert_eq!(
        listed,
        json!([
            { "id": 1, "name": "Asha", "attending": true, "guestCount": 1 },
            { "id": 2, "name": "Bala", "attending": false, "guestCount": 0 },
        ])
    );
    assert_eq!(list!(app), listed, "listing does not change the store");
}

#[rstest]
#[actix_web::test]
async fn rejected_rsvps_are_not_stored(state: web::Data<HttpState>) {
    let app = app!(state);

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/rsvp")
            .set_json(json!({ "name": "", "attending": true, "guestCount": 40 }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
    let fields: Vec<&str> = body["details"]["violations"]
        .as_array()
        .expect("violations array")
        .iter()
        .filter_map(|violation| violation["field"].as_str())
        .collect();
    assert_eq!(fields, vec!["name", "guestCount"]);

    assert_eq!(list!(app), json!([]));
}

#[rstest]
#[actix_web::test]
async fn failed_wishes_leave_rsvps_untouched(state: web::Data<HttpState>) {
    let app = app!(state);

    let created = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/rsvp")
            .set_json(json!({ "name": "Asha", "attending": true, "guestCount": 2 }))
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/wishes")
            .set_json(json!({ "name": "Asha", "message": "Congratulations!" }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "internal_error");
    assert_eq!(body["message"], "Failed to save wish");

    let listed = list!(app);
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
}

#[rstest]
#[actix_web::test]
async fn schedule_is_served_in_start_order(state: web::Data<HttpState>) {
    let app = app!(state);

    let res = test::call_service(&app, test::TestRequest::get().uri("/api/events").to_request())
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    let titles: Vec<&str> = body
        .as_array()
        .expect("events array")
        .iter()
        .filter_map(|event| event["title"].as_str())
        .collect();
    assert_eq!(titles, vec!["Wedding Ceremony", "Wedding Reception"]);
}
