//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{InvitationQuery, RsvpCommand, RsvpQuery, WishesCommand};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    /// Records RSVP submissions.
    pub rsvps: Arc<dyn RsvpCommand>,
    /// Lists stored RSVPs.
    pub rsvps_query: Arc<dyn RsvpQuery>,
    /// Forwards guest wishes.
    pub wishes: Arc<dyn WishesCommand>,
    /// Serves the schedule and countdown.
    pub invitation: Arc<dyn InvitationQuery>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Records RSVP submissions.
    pub rsvps: Arc<dyn RsvpCommand>,
    /// Lists stored RSVPs.
    pub rsvps_query: Arc<dyn RsvpQuery>,
    /// Forwards guest wishes.
    pub wishes: Arc<dyn WishesCommand>,
    /// Serves the schedule and countdown.
    pub invitation: Arc<dyn InvitationQuery>,
}

impl HttpState {
    /// Construct state from the port bundle.
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            rsvps,
            rsvps_query,
            wishes,
            invitation,
        } = ports;
        Self {
            rsvps,
            rsvps_query,
            wishes,
            invitation,
        }
    }
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}
