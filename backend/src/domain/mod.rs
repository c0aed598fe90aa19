//! Domain primitives, use-cases, and ports.
//!
//! Purpose: define the invitation backend's records (RSVPs, users, wishes,
//! scheduled events) together with the validation rules that guard them.
//! Types here know nothing about HTTP or storage; adapters reach them
//! through [`ports`].
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - NewRsvp / Rsvp: validated submission and stored record.
//! - Wish: validated well-wish bound for the external store.
//! - RsvpService / WishesService / InvitationService: use-cases.

pub mod countdown;
pub mod error;
mod field_violation;
mod invitation_service;
pub mod ports;
pub mod rsvp;
mod rsvp_service;
pub mod schedule;
pub mod trace_id;
pub mod user;
pub mod wish;
mod wishes_service;

pub use self::countdown::{Countdown, TimeRemaining};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::field_violation::{EMAIL_MAX, FieldViolation, ViolationKind};
pub use self::invitation_service::InvitationService;
pub use self::rsvp::{NewRsvp, Rsvp, RsvpId, RsvpValidationError};
pub use self::rsvp_service::{LIST_FAILED_MESSAGE, RsvpService, SUBMIT_FAILED_MESSAGE};
pub use self::schedule::{Coordinates, WeddingEvent, WeddingSchedule};
pub use self::trace_id::TraceId;
pub use self::user::{NewUser, User, UserId, UserValidationError};
pub use self::wish::{Wish, WishValidationError};
pub use self::wishes_service::{SAVE_FAILED_MESSAGE, WishesService};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use rsvp_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("no such invitation"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
