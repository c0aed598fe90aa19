//! Outbound adapters implementing domain ports.
//!
//! - **memory**: the process-lifetime guest store
//! - **sheets**: Google Sheets wish sink
//!
//! Adapters are thin translators between domain types and infrastructure.
//! They contain no business logic.

pub mod memory;
pub mod sheets;
