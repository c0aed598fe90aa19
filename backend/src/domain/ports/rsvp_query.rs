//! Driving port for reading RSVPs.

use async_trait::async_trait;

use crate::domain::{Error, Rsvp};

/// Lists stored RSVPs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RsvpQuery: Send + Sync {
    /// Every stored RSVP, in insertion order.
    async fn list(&self) -> Result<Vec<Rsvp>, Error>;
}
