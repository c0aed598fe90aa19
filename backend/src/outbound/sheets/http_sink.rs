//! Reqwest-backed wish sink appending rows to a Google Sheet.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, warn};

use super::dto::AppendRowDto;
use crate::domain::Wish;
use crate::domain::ports::{WishSink, WishSinkError};

/// Connection settings for [`SheetsWishSink`].
#[derive(Clone)]
pub struct SheetsConfig {
    /// API root, normally `https://sheets.googleapis.com`.
    pub api_base: Url,
    /// Target spreadsheet identifier.
    pub sheet_id: String,
    /// OAuth bearer token with the spreadsheets scope.
    pub access_token: String,
    /// A1 range of the table to append to, e.g. `Sheet1`.
    pub range: String,
    /// Request-level timeout for each append.
    pub timeout: Duration,
}

impl fmt::Debug for SheetsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SheetsConfig")
            .field("api_base", &self.api_base.as_str())
            .field("sheet_id", &self.sheet_id)
            .field("range", &self.range)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Errors raised while building a [`SheetsWishSink`].
#[derive(Debug, thiserror::Error)]
pub enum SheetsSinkBuildError {
    /// The API base is not a hierarchical URL.
    #[error("sheets api base cannot carry a path: {0}")]
    InvalidApiBase(String),
    /// reqwest rejected the client configuration.
    #[error("failed to build sheets http client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Wish sink that appends each wish as a spreadsheet row.
pub struct SheetsWishSink {
    client: Client,
    append_url: Url,
    access_token: String,
}

impl SheetsWishSink {
    /// Build the sink with a reqwest client bounded by `config.timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error when the API base cannot hold path segments or the
    /// reqwest client cannot be constructed.
    pub fn new(config: SheetsConfig) -> Result<Self, SheetsSinkBuildError> {
        let append_url = append_url(&config.api_base, &config.sheet_id, &config.range)?;
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            append_url,
            access_token: config.access_token,
        })
    }
}

#[async_trait]
impl WishSink for SheetsWishSink {
    async fn append(&self, wish: &Wish) -> Result<(), WishSinkError> {
        let response = self
            .client
            .post(self.append_url.clone())
            .bearer_auth(self.access_token.as_str())
            .json(&AppendRowDto::from(wish))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status.is_success() {
            debug!(status = status.as_u16(), "wish row appended");
            return Ok(());
        }
        let body = response.bytes().await.map_err(map_transport_error)?;
        let error = map_status_error(status, body.as_ref());
        warn!(status = status.as_u16(), error = %error, "sheets append failed");
        Err(error)
    }
}

/// Sink used when no spreadsheet or token is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredWishSink;

#[async_trait]
impl WishSink for UnconfiguredWishSink {
    async fn append(&self, _wish: &Wish) -> Result<(), WishSinkError> {
        Err(WishSinkError::unconfigured())
    }
}

fn append_url(api_base: &Url, sheet_id: &str, range: &str) -> Result<Url, SheetsSinkBuildError> {
    let target = format!("{range}:append");
    let mut url = api_base.clone();
    url.path_segments_mut()
        .map_err(|()| SheetsSinkBuildError::InvalidApiBase(api_base.to_string()))?
        .pop_if_empty()
        .extend([
            "v4",
            "spreadsheets",
            sheet_id,
            "values",
            target.as_str(),
        ]);
    url.query_pairs_mut()
        .clear()
        .append_pair("valueInputOption", "USER_ENTERED");
    Ok(url)
}

fn map_transport_error(error: reqwest::Error) -> WishSinkError {
    if error.is_timeout() {
        WishSinkError::timeout(error.to_string())
    } else {
        WishSinkError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> WishSinkError {
    let preview = body_preview(body);
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => WishSinkError::credentials(preview),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            WishSinkError::timeout(format!("status {}", status.as_u16()))
        }
        _ => WishSinkError::rejected(status.as_u16(), preview),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
