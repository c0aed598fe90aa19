//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A dependency is temporarily unavailable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// Validation failures list every violation under `details.violations`.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Validation error: name is required")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Rsvp`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Rsvp)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct RsvpSchema {
    /// Identifier assigned on creation, counting from 1.
    #[schema(example = 1)]
    id: u64,
    /// Guest name.
    #[schema(example = "Asha")]
    name: String,
    /// Whether the guest will attend.
    attending: bool,
    /// Number of guests in the party.
    #[schema(minimum = 0, maximum = 10, example = 2)]
    guest_count: u32,
    /// Contact address.
    #[schema(example = "asha@example.com")]
    email: Option<String>,
    /// Note for the couple.
    #[schema(example = "Congrats!")]
    message: Option<String>,
}

/// Request body accepted by `POST /api/rsvp`.
///
/// The body is validated field by field; unknown fields are dropped.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct RsvpRequestSchema {
    #[schema(min_length = 1, max_length = 100, example = "Asha")]
    name: String,
    attending: bool,
    /// Defaults to 1 when attending, 0 otherwise.
    #[schema(minimum = 0, maximum = 10)]
    guest_count: Option<u32>,
    #[schema(max_length = 254)]
    email: Option<String>,
    #[schema(max_length = 1000)]
    message: Option<String>,
}

/// Request body accepted by `POST /api/wishes`.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct WishRequestSchema {
    #[schema(min_length = 1, max_length = 100, example = "Asha")]
    name: String,
    #[schema(min_length = 1, max_length = 2000, example = "Congratulations!")]
    message: String,
    email: Option<String>,
    /// RFC 3339 timestamp; the server clock is used when absent.
    #[schema(format = DateTime, example = "2025-05-01T06:30:00.000Z")]
    timestamp: Option<String>,
}

/// OpenAPI schema for [`crate::domain::WeddingEvent`].
#[derive(ToSchema)]
#[schema(as = crate::domain::WeddingEvent)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct WeddingEventSchema {
    #[schema(example = "Wedding Ceremony")]
    title: String,
    #[schema(format = DateTime, example = "2025-06-08T07:00:00+05:30")]
    starts_at: String,
    #[schema(format = DateTime, example = "2025-06-08T08:30:00+05:30")]
    ends_at: String,
    location: String,
    /// `{ lat, lng }` in degrees.
    coordinates: serde_json::Value,
    map_link: String,
}

/// OpenAPI schema for [`crate::domain::Countdown`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Countdown)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CountdownSchema {
    title: String,
    #[schema(format = DateTime)]
    target: String,
    elapsed: bool,
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn error_schema_uses_camel_case_trace_id() {
        let schema_json = schema_to_json::<ErrorSchema>();
        assert_eq!(ErrorSchema::name(), "crate.domain.Error");
        assert!(schema_json.contains("traceId"));
    }

    #[test]
    fn rsvp_schema_has_expected_name_and_fields() {
        let schema_json = schema_to_json::<RsvpSchema>();
        assert_eq!(RsvpSchema::name(), "crate.domain.Rsvp");
        assert!(schema_json.contains("guestCount"));
    }

    #[test]
    fn error_code_schema_lists_codes() {
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        assert!(schema_json.contains("service_unavailable"));
    }
}
