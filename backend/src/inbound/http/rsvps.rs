//! RSVP API handlers.
//!
//! ```text
//! POST /api/rsvp {"name":"Asha","attending":true,"guestCount":2}
//! GET /api/rsvps
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::{NewRsvp, Rsvp};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, RsvpRequestSchema, RsvpSchema};
use crate::inbound::http::state::HttpState;

/// Confirmation message returned with a stored RSVP.
pub const RSVP_RECEIVED_MESSAGE: &str = "RSVP received successfully";

/// Response body for `POST /api/rsvp`.
#[derive(Debug, Serialize, ToSchema)]
pub struct RsvpCreatedResponse {
    /// Fixed confirmation text.
    #[schema(example = "RSVP received successfully")]
    pub message: String,
    /// The stored record with its assigned id.
    #[schema(value_type = RsvpSchema)]
    pub rsvp: Rsvp,
}

/// Validate and store an RSVP.
///
/// Every field violation is reported at once in `details.violations`.
#[utoipa::path(
    post,
    path = "/api/rsvp",
    request_body = RsvpRequestSchema,
    responses(
        (status = 201, description = "RSVP stored", body = RsvpCreatedResponse),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 500, description = "RSVP could not be stored", body = ErrorSchema)
    ),
    tags = ["rsvps"],
    operation_id = "submitRsvp"
)]
#[post("/rsvp")]
pub async fn submit_rsvp(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let rsvp = NewRsvp::parse(&payload)?;
    let stored = state.rsvps.submit(rsvp).await?;
    Ok(HttpResponse::Created().json(RsvpCreatedResponse {
        message: RSVP_RECEIVED_MESSAGE.to_owned(),
        rsvp: stored,
    }))
}

/// List every stored RSVP.
#[utoipa::path(
    get,
    path = "/api/rsvps",
    responses(
        (status = 200, description = "Stored RSVPs", body = [RsvpSchema]),
        (status = 500, description = "RSVPs could not be read", body = ErrorSchema)
    ),
    tags = ["rsvps"],
    operation_id = "listRsvps"
)]
#[get("/rsvps")]
pub async fn list_rsvps(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Rsvp>>> {
    state.rsvps_query.list().await.map(web::Json)
}

#[cfg(test)]
mod tests;
