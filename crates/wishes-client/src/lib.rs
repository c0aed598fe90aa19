//! Client-side state for the wishes form on the invitation page.
//!
//! The form collects a name and a message, posts them once to the backend's
//! `POST /api/wishes` endpoint, and reports the outcome as a [`Notice`]. The
//! transport sits behind the [`WishTransport`] trait so form behaviour can be
//! exercised without a network.
//!
//! # Example
//!
//! ```no_run
//! use mockable::DefaultClock;
//! use reqwest::Url;
//! use std::time::Duration;
//! use wishes_client::{HttpWishTransport, WishesForm};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let site = Url::parse("https://invite.example")?;
//! let transport = HttpWishTransport::for_site(&site, Duration::from_secs(10))?;
//! let form = WishesForm::new();
//! form.set_name("Asha");
//! form.set_message("Congratulations!");
//! let notice = form.submit(&transport, &DefaultClock).await?;
//! assert_eq!(notice.title(), "Thank you!");
//! # Ok(())
//! # }
//! ```

mod error;
mod form;
mod notice;
mod transport;

pub use error::{SubmitRefusal, TransportError};
pub use form::WishesForm;
pub use notice::{NOTICE_DURATION, Notice, NoticeKind};
pub use transport::{HttpWishTransport, WISHES_PATH, WishPayload, WishTransport};
