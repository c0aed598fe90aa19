//! Driven port for the external store that collects wishes.

use async_trait::async_trait;

use crate::domain::Wish;

use super::define_port_error;

define_port_error! {
    /// Errors surfaced while forwarding a wish.
    pub enum WishSinkError {
        /// No destination or credentials were configured.
        Unconfigured => "wish sink is not configured",
        /// The destination refused the credentials.
        Credentials { message: String } => "wish sink rejected credentials: {message}",
        /// The call did not complete within the request timeout.
        Timeout { message: String } => "wish sink timed out: {message}",
        /// The network call failed before a response arrived.
        Transport { message: String } => "wish sink transport failed: {message}",
        /// The destination answered with a non-success status.
        Rejected { status: u16, message: String } =>
            "wish sink rejected append with status {status}: {message}",
    }
}

impl WishSinkError {
    /// Whether a later manual retry could succeed without reconfiguration.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Transport { .. })
    }
}

/// Port for appending wishes to an external store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WishSink: Send + Sync {
    /// Append one wish. A failure leaves nothing partially written.
    async fn append(&self, wish: &Wish) -> Result<(), WishSinkError>;
}
