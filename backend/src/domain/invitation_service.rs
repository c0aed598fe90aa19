//! Read-only invitation details: the event schedule and its countdown.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;

use crate::domain::ports::InvitationQuery;
use crate::domain::{Countdown, Error, WeddingSchedule};

/// Service implementing [`InvitationQuery`] for a fixed schedule.
#[derive(Clone)]
pub struct InvitationService {
    schedule: WeddingSchedule,
    clock: Arc<dyn Clock>,
}

impl InvitationService {
    /// Serve `schedule`, measuring countdowns against `clock`.
    pub fn new(schedule: WeddingSchedule, clock: Arc<dyn Clock>) -> Self {
        Self { schedule, clock }
    }
}

#[async_trait]
impl InvitationQuery for InvitationService {
    async fn events(&self) -> Result<WeddingSchedule, Error> {
        Ok(self.schedule.clone())
    }

    async fn countdown(&self) -> Result<Countdown, Error> {
        let event = self
            .schedule
            .first()
            .ok_or_else(|| Error::not_found("No events are scheduled"))?;
        Ok(Countdown::measure(
            event.title(),
            event.starts_at(),
            self.clock.utc(),
        ))
    }
}
