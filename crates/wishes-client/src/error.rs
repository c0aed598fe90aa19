//! Error types for the wishes client.

use thiserror::Error;

/// Failure reported by a [`crate::WishTransport`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The endpoint URL could not be built.
    #[error("invalid wishes endpoint: {message}")]
    InvalidEndpoint {
        /// Parser or client builder message.
        message: String,
    },

    /// The request never produced a complete response.
    #[error("wish request failed: {message}")]
    Request {
        /// Description of the network or body-read failure.
        message: String,
    },

    /// The backend answered with a non-success status.
    #[error("wishes endpoint returned {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },
}

/// Reasons a submit is refused before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRefusal {
    /// A previous submit has not settled yet.
    #[error("a submission is already in flight")]
    InFlight,
    /// The name field is blank.
    #[error("name is required")]
    MissingName,
    /// The message field is blank.
    #[error("message is required")]
    MissingMessage,
}
