//! Driven port for the store that owns users and RSVPs.
//!
//! The store assigns identifiers. Each entity type has its own counter
//! starting at 1, and assignment plus insertion is atomic per type.

use async_trait::async_trait;

use crate::domain::{NewRsvp, NewUser, Rsvp, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by guest store adapters.
    pub enum GuestStoreError {
        /// The backing store could not be read or written.
        Unavailable { message: String } => "guest store unavailable: {message}",
        /// A user with the same username already exists.
        DuplicateUsername { username: String } => "username already taken: {username}",
        /// The identifier counter for an entity type cannot advance.
        IdentifiersExhausted { entity: String } => "{entity} identifiers exhausted",
    }
}

/// Storage for users and RSVPs. Identifier assignment and insertion are
/// atomic per entity type.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GuestStore: Send + Sync {
    /// Look up a user by identifier. Absence is `Ok(None)`.
    async fn get_user(&self, id: UserId) -> Result<Option<User>, GuestStoreError>;

    /// Return the first user whose username equals `username`.
    async fn get_user_by_username(&self, username: &str)
    -> Result<Option<User>, GuestStoreError>;

    /// Assign the next user identifier and store the record.
    async fn create_user(&self, user: NewUser) -> Result<User, GuestStoreError>;

    /// Assign the next RSVP identifier and store the record.
    async fn create_rsvp(&self, rsvp: NewRsvp) -> Result<Rsvp, GuestStoreError>;

    /// Snapshot of every stored RSVP in insertion order.
    async fn all_rsvps(&self) -> Result<Vec<Rsvp>, GuestStoreError>;
}
