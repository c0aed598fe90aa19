//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::domain::ports::{
    MockInvitationQuery, MockRsvpCommand, MockRsvpQuery, MockWishesCommand,
};
use crate::inbound::http::configure_api;
use crate::inbound::http::state::{HttpState, HttpStatePorts};

/// Mocks backing each port; unset expectations panic when called.
#[derive(Default)]
pub struct MockPorts {
    pub rsvps: MockRsvpCommand,
    pub rsvps_query: MockRsvpQuery,
    pub wishes: MockWishesCommand,
    pub invitation: MockInvitationQuery,
}

impl MockPorts {
    pub fn into_state(self) -> HttpState {
        HttpState::new(HttpStatePorts {
            rsvps: Arc::new(self.rsvps),
            rsvps_query: Arc::new(self.rsvps_query),
            wishes: Arc::new(self.wishes),
            invitation: Arc::new(self.invitation),
        })
    }
}

/// Build the API app around the given port mocks.
pub fn test_app(
    ports: MockPorts,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(ports.into_state()))
        .configure(configure_api)
}
