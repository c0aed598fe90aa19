//! Request-shape handling shared by the HTTP handlers.
//!
//! Bodies are extracted as untyped JSON and validated in the domain. Bodies
//! that are not JSON at all never reach a handler; the extractor config
//! turns them into the standard `invalid_request` envelope.

use actix_web::{HttpRequest, HttpResponse, error::JsonPayloadError, web};
use serde_json::json;
use tracing::debug;

use crate::domain::Error;

/// Largest accepted JSON body in bytes.
pub const JSON_BODY_LIMIT: usize = 16 * 1024;

fn json_error_message(err: &JsonPayloadError) -> &'static str {
    match err {
        JsonPayloadError::ContentType => "Request body must be application/json",
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            "Request body is too large"
        }
        _ => "Request body must be valid JSON",
    }
}

/// JSON extractor configuration mapping payload errors to `Error`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, _req| {
            debug!(error = %err, "rejected request body");
            let message = json_error_message(&err);
            Error::invalid_request(message)
                .with_details(json!({
                    "violations": [{ "field": "body", "code": "invalid_type", "message": message }]
                }))
                .into()
        })
}

/// Fallback for unknown routes.
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, Error> {
    Err(Error::not_found(format!(
        "No route for {} {}",
        req.method(),
        req.path()
    )))
}
