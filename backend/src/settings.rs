//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `INVITATION_*` environment variables, and an
//! optional configuration file, in that order of precedence.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_WORKERS: usize = 1;
const DEFAULT_TAB_RANGE: &str = "Sheet1";
const DEFAULT_GOOGLE_API_BASE: &str = "https://sheets.googleapis.com";
const DEFAULT_FORWARD_TIMEOUT_SECS: u64 = 10;

/// Settings for the invitation backend.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "INVITATION")]
pub struct AppSettings {
    /// Address the HTTP listener binds to.
    pub bind_host: Option<IpAddr>,
    /// Port the HTTP listener binds to.
    pub port: Option<u16>,
    /// Actix worker threads.
    pub workers: Option<usize>,
    /// Spreadsheet receiving wishes.
    pub sheet_id: Option<String>,
    /// OAuth bearer token for the Sheets API.
    pub access_token: Option<String>,
    /// A1 range rows are appended to.
    pub tab_range: Option<String>,
    /// Sheets API root.
    pub google_api_base: Option<String>,
    /// Timeout for each wish forward, in seconds.
    pub forward_timeout_secs: Option<u64>,
}

/// Where wishes go, derived from [`AppSettings`].
#[derive(Clone, PartialEq, Eq)]
pub enum WishDestination {
    /// Append to a spreadsheet.
    Sheets {
        /// Sheets API root.
        api_base: String,
        /// Target spreadsheet id.
        sheet_id: String,
        /// OAuth bearer token.
        access_token: String,
        /// A1 range rows are appended to.
        range: String,
        /// Per-request timeout.
        timeout: Duration,
    },
    /// No spreadsheet configured; every wish fails.
    Unconfigured,
}

impl fmt::Debug for WishDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sheets {
                api_base,
                sheet_id,
                range,
                timeout,
                ..
            } => f
                .debug_struct("Sheets")
                .field("api_base", api_base)
                .field("sheet_id", sheet_id)
                .field("access_token", &"<redacted>")
                .field("range", range)
                .field("timeout", timeout)
                .finish(),
            Self::Unconfigured => f.write_str("Unconfigured"),
        }
    }
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

impl AppSettings {
    /// Socket address for the listener.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.bind_host.unwrap_or(DEFAULT_BIND_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Worker thread count, at least one.
    pub fn workers(&self) -> usize {
        self.workers.unwrap_or(DEFAULT_WORKERS).max(1)
    }

    /// Request-level timeout applied to wish forwarding.
    pub fn forward_timeout(&self) -> Duration {
        Duration::from_secs(
            self.forward_timeout_secs
                .unwrap_or(DEFAULT_FORWARD_TIMEOUT_SECS)
                .max(1),
        )
    }

    /// Resolve the wish destination. Both a sheet id and a token are needed.
    pub fn wish_destination(&self) -> WishDestination {
        match (
            non_blank(self.sheet_id.as_ref()),
            non_blank(self.access_token.as_ref()),
        ) {
            (Some(sheet_id), Some(access_token)) => WishDestination::Sheets {
                api_base: self
                    .google_api_base
                    .clone()
                    .unwrap_or_else(|| DEFAULT_GOOGLE_API_BASE.to_owned()),
                sheet_id: sheet_id.to_owned(),
                access_token: access_token.to_owned(),
                range: non_blank(self.tab_range.as_ref())
                    .unwrap_or(DEFAULT_TAB_RANGE)
                    .to_owned(),
                timeout: self.forward_timeout(),
            },
            _ => WishDestination::Unconfigured,
        }
    }
}
