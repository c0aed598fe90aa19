//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the schema wrappers that describe domain types without coupling
//! them to utoipa. The document backs Swagger UI in debug builds and is
//! exported by `cargo run --bin openapi-dump`.

use crate::inbound::http::rsvps::RsvpCreatedResponse;
use crate::inbound::http::schemas::{
    CountdownSchema, ErrorCodeSchema, ErrorSchema, RsvpRequestSchema, RsvpSchema,
    WeddingEventSchema, WishRequestSchema,
};
use crate::inbound::http::wishes::WishAcceptedResponse;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Wedding invitation API",
        description = "RSVP collection, wish forwarding, event details, and health checks."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::rsvps::submit_rsvp,
        crate::inbound::http::rsvps::list_rsvps,
        crate::inbound::http::wishes::submit_wish,
        crate::inbound::http::invitation::list_events,
        crate::inbound::http::invitation::countdown,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        RsvpSchema,
        RsvpRequestSchema,
        RsvpCreatedResponse,
        WishRequestSchema,
        WishAcceptedResponse,
        WeddingEventSchema,
        CountdownSchema,
    )),
    tags(
        (name = "rsvps", description = "Guest responses to the invitation"),
        (name = "wishes", description = "Well-wishes forwarded to the wishes sheet"),
        (name = "invitation", description = "Event schedule and countdown"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
