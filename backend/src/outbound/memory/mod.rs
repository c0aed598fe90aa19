//! Process-lifetime guest store.
//!
//! All state sits behind one mutex, so identifier assignment and insertion
//! can never interleave with another creation. Nothing survives a restart.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{GuestStore, GuestStoreError};
use crate::domain::{NewRsvp, NewUser, Rsvp, RsvpId, User, UserId};

#[derive(Debug)]
struct Collections {
    users: BTreeMap<UserId, User>,
    rsvps: BTreeMap<RsvpId, Rsvp>,
    next_user_id: u64,
    next_rsvp_id: u64,
}

impl Default for Collections {
    fn default() -> Self {
        Self {
            users: BTreeMap::new(),
            rsvps: BTreeMap::new(),
            next_user_id: 1,
            next_rsvp_id: 1,
        }
    }
}

/// Take the current counter value and advance it.
fn claim(counter: &mut u64, entity: &str) -> Result<u64, GuestStoreError> {
    let id = *counter;
    *counter = id
        .checked_add(1)
        .ok_or_else(|| GuestStoreError::identifiers_exhausted(entity))?;
    Ok(id)
}

/// In-memory [`GuestStore`] holding users and RSVPs in identifier order.
///
/// Construct one per process at startup and share it by `Arc`; tests build
/// their own instance so runs stay isolated.
#[derive(Debug, Default)]
pub struct InMemoryGuestStore {
    inner: Mutex<Collections>,
}

impl InMemoryGuestStore {
    /// Empty store whose counters both start at 1.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Collections>, GuestStoreError> {
        self.inner
            .lock()
            .map_err(|_| GuestStoreError::unavailable("guest store lock poisoned"))
    }
}

#[async_trait]
impl GuestStore for InMemoryGuestStore {
    async fn get_user(&self, id: UserId) -> Result<Option<User>, GuestStoreError> {
        Ok(self.lock()?.users.get(&id).cloned())
    }

    async fn get_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, GuestStoreError> {
        Ok(self
            .lock()?
            .users
            .values()
            .find(|user| user.username() == username)
            .cloned())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, GuestStoreError> {
        let mut guard = self.lock()?;
        let collections = &mut *guard;
        if collections
            .users
            .values()
            .any(|existing| existing.username() == user.username())
        {
            return Err(GuestStoreError::duplicate_username(user.username()));
        }
        let id = UserId::new(claim(&mut collections.next_user_id, "user")?);
        let stored = user.into_user(id);
        collections.users.insert(id, stored.clone());
        Ok(stored)
    }

    async fn create_rsvp(&self, rsvp: NewRsvp) -> Result<Rsvp, GuestStoreError> {
        let mut guard = self.lock()?;
        let collections = &mut *guard;
        let id = RsvpId::new(claim(&mut collections.next_rsvp_id, "rsvp")?);
        let stored = rsvp.into_rsvp(id);
        collections.rsvps.insert(id, stored.clone());
        Ok(stored)
    }

    async fn all_rsvps(&self) -> Result<Vec<Rsvp>, GuestStoreError> {
        Ok(self.lock()?.rsvps.values().cloned().collect())
    }
}
