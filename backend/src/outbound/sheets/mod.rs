//! Google Sheets outbound adapter for the `WishSink` port.
//!
//! Each wish becomes one appended row. The adapter owns transport details
//! only: URL construction, bearer authorisation, timeouts, and status
//! mapping.

mod dto;
mod http_sink;

pub use http_sink::{SheetsConfig, SheetsSinkBuildError, SheetsWishSink, UnconfiguredWishSink};
