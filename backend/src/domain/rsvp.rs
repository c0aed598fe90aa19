//! RSVP records and the schema that admits them.
//!
//! [`NewRsvp::parse`] is the only way to obtain a [`NewRsvp`], and the guest
//! store only accepts [`NewRsvp`] values, so every stored [`Rsvp`] has passed
//! validation.
//!
//! Accepted JSON shape:
//!
//! ```text
//! { "name": "Asha", "attending": true, "guestCount": 2,
//!   "email": "asha@example.com", "message": "Congrats!" }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Error;
use super::field_violation::{FieldReader, FieldViolation, combined_message, violations_error};

/// Maximum length of a guest name.
pub const NAME_MAX: usize = 100;
/// Maximum length of the free-text RSVP message.
pub const MESSAGE_MAX: usize = 1000;
/// Largest party size a single RSVP may declare.
pub const GUEST_COUNT_MAX: u32 = 10;

/// Identifier assigned by the guest store on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RsvpId(u64);

impl RsvpId {
    /// Wrap a raw identifier value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Raw identifier value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RsvpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Every violation found while validating an RSVP payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsvpValidationError {
    violations: Vec<FieldViolation>,
}

impl RsvpValidationError {
    /// Field-level violations, in declaration order.
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }
}

impl fmt::Display for RsvpValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&combined_message(&self.violations))
    }
}

impl std::error::Error for RsvpValidationError {}

impl From<RsvpValidationError> for Error {
    fn from(err: RsvpValidationError) -> Self {
        violations_error(&err.violations)
    }
}

/// A validated RSVP submission that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRsvp {
    name: String,
    attending: bool,
    guest_count: u32,
    email: Option<String>,
    message: Option<String>,
}

impl NewRsvp {
    /// Validate an untyped payload against the RSVP schema.
    ///
    /// Unrecognised fields are dropped. `guestCount` defaults to 1 for
    /// attending guests and 0 otherwise.
    ///
    /// # Examples
    /// ```
    /// use rsvp_backend::domain::NewRsvp;
    /// use serde_json::json;
    ///
    /// let rsvp = NewRsvp::parse(&json!({ "name": "Asha", "attending": true }))
    ///     .expect("valid payload");
    /// assert_eq!(rsvp.guest_count(), 1);
    ///
    /// let err = NewRsvp::parse(&json!({ "attending": "maybe" })).unwrap_err();
    /// assert_eq!(err.violations().len(), 2);
    /// ```
    pub fn parse(raw: &Value) -> Result<Self, RsvpValidationError> {
        let mut reader = FieldReader::new(raw).map_err(|violation| RsvpValidationError {
            violations: vec![violation],
        })?;

        let name = reader.string("name", true, NAME_MAX);
        let attending = reader.boolean("attending");
        let guest_count = reader.bounded_integer("guestCount", 0, GUEST_COUNT_MAX);
        let email = reader.email("email");
        let message = reader.string("message", false, MESSAGE_MAX);

        let violations = reader.finish();
        match (name, attending) {
            (Some(name), Some(attending)) if violations.is_empty() => Ok(Self {
                name,
                attending,
                guest_count: guest_count.unwrap_or(u32::from(attending)),
                email,
                message,
            }),
            _ => Err(RsvpValidationError { violations }),
        }
    }

    /// Guest name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Whether the guest will attend.
    pub fn attending(&self) -> bool {
        self.attending
    }

    /// Number of people covered by this response.
    pub fn guest_count(&self) -> u32 {
        self.guest_count
    }

    /// Optional contact address.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Optional note to the couple.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Combine the validated fields with a store-assigned identifier.
    pub fn into_rsvp(self, id: RsvpId) -> Rsvp {
        let Self {
            name,
            attending,
            guest_count,
            email,
            message,
        } = self;
        Rsvp {
            id,
            name,
            attending,
            guest_count,
            email,
            message,
        }
    }
}

/// A stored RSVP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rsvp {
    id: RsvpId,
    name: String,
    attending: bool,
    guest_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl Rsvp {
    /// Store-assigned identifier.
    pub fn id(&self) -> RsvpId {
        self.id
    }

    /// Guest name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Whether the guest will attend.
    pub fn attending(&self) -> bool {
        self.attending
    }

    /// Number of people covered by this response.
    pub fn guest_count(&self) -> u32 {
        self.guest_count
    }

    /// Optional contact address.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Optional note to the couple.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
