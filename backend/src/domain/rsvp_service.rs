//! RSVP use-cases backed by a guest store.
//!
//! Store failures are logged in full and reach callers only as generic
//! internal errors.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::ports::{GuestStore, GuestStoreError, RsvpCommand, RsvpQuery};
use crate::domain::{Error, NewRsvp, Rsvp};

/// Message returned when an RSVP cannot be stored.
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to process RSVP";
/// Message returned when RSVPs cannot be listed.
pub const LIST_FAILED_MESSAGE: &str = "Failed to retrieve RSVPs";

/// Service implementing [`RsvpCommand`] and [`RsvpQuery`].
#[derive(Clone)]
pub struct RsvpService<S> {
    store: Arc<S>,
}

impl<S> RsvpService<S> {
    /// Create a service over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

fn internal(public_message: &'static str, cause: &GuestStoreError) -> Error {
    error!(error = %cause, "{public_message}");
    Error::internal(public_message)
}

#[async_trait]
impl<S> RsvpCommand for RsvpService<S>
where
    S: GuestStore,
{
    async fn submit(&self, rsvp: NewRsvp) -> Result<Rsvp, Error> {
        let stored = self
            .store
            .create_rsvp(rsvp)
            .await
            .map_err(|err| internal(SUBMIT_FAILED_MESSAGE, &err))?;
        info!(rsvp_id = %stored.id(), attending = stored.attending(), "rsvp stored");
        Ok(stored)
    }
}

#[async_trait]
impl<S> RsvpQuery for RsvpService<S>
where
    S: GuestStore,
{
    async fn list(&self) -> Result<Vec<Rsvp>, Error> {
        self.store
            .all_rsvps()
            .await
            .map_err(|err| internal(LIST_FAILED_MESSAGE, &err))
    }
}
