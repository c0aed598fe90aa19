//! Driving port for accepting RSVPs.
//!
//! HTTP handlers validate the raw body into a [`NewRsvp`] and hand it to
//! this port; implementations own storage and failure translation.

use async_trait::async_trait;

use crate::domain::{Error, NewRsvp, Rsvp};

/// Records guest RSVPs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RsvpCommand: Send + Sync {
    /// Store a validated RSVP and return it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns an internal error when the store rejects the write. Nothing
    /// is stored in that case.
    async fn submit(&self, rsvp: NewRsvp) -> Result<Rsvp, Error>;
}
