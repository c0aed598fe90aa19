//! Network transport for wish submissions.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{Client, Url};
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::TransportError;

/// Backend path accepting wishes, relative to the site root.
pub const WISHES_PATH: &str = "api/wishes";

/// JSON body posted for one wish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WishPayload {
    /// Guest name.
    pub name: String,
    /// Wish text.
    pub message: String,
    /// Contact address, omitted when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Time the guest pressed submit.
    #[serde(serialize_with = "millis_rfc3339")]
    pub timestamp: DateTime<Utc>,
}

fn millis_rfc3339<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Delivers a wish to the backend.
///
/// Any response outside `2xx` and any network error count as failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WishTransport: Send + Sync {
    /// Post `payload` once.
    async fn post_wish(&self, payload: &WishPayload) -> Result<(), TransportError>;
}

/// [`WishTransport`] posting JSON with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpWishTransport {
    client: Client,
    endpoint: Url,
}

impl HttpWishTransport {
    /// Transport posting to `endpoint` with a per-request `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidEndpoint`] when the HTTP client
    /// cannot be built.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| TransportError::InvalidEndpoint {
                message: err.to_string(),
            })?;
        Ok(Self { client, endpoint })
    }

    /// Transport posting to [`WISHES_PATH`] under the site root `base`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidEndpoint`] when `base` cannot carry
    /// a path or the client cannot be built.
    pub fn for_site(base: &Url, timeout: Duration) -> Result<Self, TransportError> {
        let endpoint = base
            .join(WISHES_PATH)
            .map_err(|err| TransportError::InvalidEndpoint {
                message: err.to_string(),
            })?;
        Self::new(endpoint, timeout)
    }

    /// Absolute URL wishes are posted to.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl WishTransport for HttpWishTransport {
    async fn post_wish(&self, payload: &WishPayload) -> Result<(), TransportError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await
            .map_err(|err| TransportError::Request {
                message: err.to_string(),
            })?;

        let status = response.status();
        if status.is_success() {
            debug!(%status, "wish accepted");
            return Ok(());
        }
        let body = response.text().await.map_err(|err| {
            debug!(%status, error = %err, "failed to read wish rejection body");
            TransportError::Request {
                message: format!("status {status} with unreadable body: {err}"),
            }
        })?;
        Err(TransportError::Status {
            status: status.as_u16(),
            body,
        })
    }
}
