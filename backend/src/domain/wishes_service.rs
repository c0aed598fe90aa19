//! Wish forwarding use-case.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::Value;
use tracing::{error, info};

use crate::domain::ports::{WishSink, WishesCommand};
use crate::domain::{Error, Wish};

/// Message returned when a wish cannot be forwarded.
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save wish";

/// Service implementing [`WishesCommand`] over a [`WishSink`].
#[derive(Clone)]
pub struct WishesService {
    sink: Arc<dyn WishSink>,
    clock: Arc<dyn Clock>,
}

impl WishesService {
    /// Create a service forwarding to `sink`, stamping wishes with `clock`.
    pub fn new(sink: Arc<dyn WishSink>, clock: Arc<dyn Clock>) -> Self {
        Self { sink, clock }
    }
}

#[async_trait]
impl WishesCommand for WishesService {
    async fn send(&self, payload: Value) -> Result<(), Error> {
        let wish = Wish::parse(&payload, self.clock.utc())?;
        match self.sink.append(&wish).await {
            Ok(()) => {
                info!(timestamp = %wish.timestamp(), "wish forwarded");
                Ok(())
            }
            Err(err) => {
                error!(error = %err, retryable = err.is_retryable(), "{SAVE_FAILED_MESSAGE}");
                Err(Error::internal(SAVE_FAILED_MESSAGE))
            }
        }
    }
}
