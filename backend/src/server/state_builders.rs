//! Builders wiring adapters into the HTTP state.

use std::io;
use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use reqwest::Url;
use tracing::{info, warn};

use rsvp_backend::domain::ports::WishSink;
use rsvp_backend::domain::{InvitationService, RsvpService, WeddingSchedule, WishesService};
use rsvp_backend::inbound::http::state::{HttpState, HttpStatePorts};
use rsvp_backend::outbound::memory::InMemoryGuestStore;
use rsvp_backend::outbound::sheets::{SheetsConfig, SheetsWishSink, UnconfiguredWishSink};
use rsvp_backend::settings::WishDestination;

use super::ServerConfig;

/// Build the wish sink selected by the configuration.
///
/// # Errors
/// Returns [`io::Error`] when the Sheets API base is not a valid URL or the
/// HTTP client cannot be built.
fn build_wish_sink(destination: &WishDestination) -> io::Result<Arc<dyn WishSink>> {
    match destination {
        WishDestination::Sheets {
            api_base,
            sheet_id,
            access_token,
            range,
            timeout,
        } => {
            let api_base = Url::parse(api_base)
                .map_err(|e| io::Error::other(format!("invalid sheets api base: {e}")))?;
            let sink = SheetsWishSink::new(SheetsConfig {
                api_base,
                sheet_id: sheet_id.clone(),
                access_token: access_token.clone(),
                range: range.clone(),
                timeout: *timeout,
            })
            .map_err(io::Error::other)?;
            info!(sheet_id = %sheet_id, range = %range, "forwarding wishes to sheets");
            Ok(Arc::new(sink))
        }
        WishDestination::Unconfigured => {
            warn!("no wishes sheet configured; wish submissions will fail");
            Ok(Arc::new(UnconfiguredWishSink))
        }
    }
}

/// Construct the shared HTTP state with a fresh guest store.
///
/// # Errors
/// Propagates wish sink construction failures.
pub(super) fn build_http_state(config: &ServerConfig) -> io::Result<web::Data<HttpState>> {
    let store = Arc::new(InMemoryGuestStore::new());
    let rsvps = Arc::new(RsvpService::new(store));
    let clock = Arc::new(DefaultClock);
    let wishes = WishesService::new(build_wish_sink(&config.wish_destination)?, clock.clone());
    let invitation = InvitationService::new(WeddingSchedule::default(), clock);

    Ok(web::Data::new(HttpState::new(HttpStatePorts {
        rsvps: rsvps.clone(),
        rsvps_query: rsvps,
        wishes: Arc::new(wishes),
        invitation: Arc::new(invitation),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn rejects_invalid_api_base() {
        let destination = WishDestination::Sheets {
            api_base: "not a url".to_owned(),
            sheet_id: "id".to_owned(),
            access_token: "token".to_owned(),
            range: "Sheet1".to_owned(),
            timeout: Duration::from_secs(1),
        };
        assert!(build_wish_sink(&destination).is_err());
    }

    #[test]
    fn unconfigured_destination_builds() {
        assert!(build_wish_sink(&WishDestination::Unconfigured).is_ok());
    }
}
