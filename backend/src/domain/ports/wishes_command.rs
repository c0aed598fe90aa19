//! Driving port for forwarding wishes to the external store.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::Error;

/// Accepts wishes from guests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WishesCommand: Send + Sync {
    /// Validate an untyped wish payload and forward it once.
    ///
    /// # Errors
    ///
    /// Returns `invalid_request` with per-field violations for malformed
    /// payloads, and a generic internal error when forwarding fails.
    async fn send(&self, payload: Value) -> Result<(), Error>;
}
