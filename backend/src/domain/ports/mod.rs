//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`GuestStore`, `WishSink`) are implemented by outbound
//! adapters. Driving ports (`RsvpCommand`, `RsvpQuery`, `WishesCommand`,
//! `InvitationQuery`) are consumed by inbound HTTP handlers.

mod macros;
pub(crate) use macros::define_port_error;

mod guest_store;
mod invitation_query;
mod rsvp_command;
mod rsvp_query;
mod wish_sink;
mod wishes_command;

#[cfg(test)]
pub use guest_store::MockGuestStore;
pub use guest_store::{GuestStore, GuestStoreError};
pub use invitation_query::InvitationQuery;
#[cfg(test)]
pub use invitation_query::MockInvitationQuery;
pub use rsvp_command::RsvpCommand;
#[cfg(test)]
pub use rsvp_command::MockRsvpCommand;
#[cfg(test)]
pub use rsvp_query::MockRsvpQuery;
pub use rsvp_query::RsvpQuery;
#[cfg(test)]
pub use wish_sink::MockWishSink;
pub use wish_sink::{WishSink, WishSinkError};
#[cfg(test)]
pub use wishes_command::MockWishesCommand;
pub use wishes_command::WishesCommand;
