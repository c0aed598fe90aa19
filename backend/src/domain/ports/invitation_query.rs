//! Driving port for the read-only invitation details.

use async_trait::async_trait;

use crate::domain::{Countdown, Error, WeddingSchedule};

/// Read access to the event schedule and countdown.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InvitationQuery: Send + Sync {
    /// Scheduled events in start order.
    async fn events(&self) -> Result<WeddingSchedule, Error>;

    /// Time left until the first event, measured now.
    async fn countdown(&self) -> Result<Countdown, Error>;
}
