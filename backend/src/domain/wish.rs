//! Well-wishes left by guests through the wishes form.
//!
//! Wishes are not RSVPs: they are forwarded to an external spreadsheet and
//! never enter the guest store.

use std::fmt;

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::Error;
use super::field_violation::{
    FieldReader, FieldViolation, ViolationKind, combined_message, violations_error,
};

/// Maximum length of the wisher's name.
pub const WISH_NAME_MAX: usize = 100;
/// Maximum length of a wish message.
pub const WISH_MESSAGE_MAX: usize = 2000;

/// Every violation found while validating a wish payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishValidationError {
    violations: Vec<FieldViolation>,
}

impl WishValidationError {
    /// Field-level violations, in declaration order.
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }
}

impl fmt::Display for WishValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&combined_message(&self.violations))
    }
}

impl std::error::Error for WishValidationError {}

impl From<WishValidationError> for Error {
    fn from(err: WishValidationError) -> Self {
        violations_error(&err.violations)
    }
}

/// A validated wish ready to be forwarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wish {
    name: String,
    message: String,
    email: Option<String>,
    timestamp: DateTime<Utc>,
}

impl Wish {
    /// Validate an untyped `{ name, message, email, timestamp }` payload.
    ///
    /// `received_at` stamps wishes that arrive without a timestamp.
    pub fn parse(raw: &Value, received_at: DateTime<Utc>) -> Result<Self, WishValidationError> {
        let mut reader = FieldReader::new(raw).map_err(|violation| WishValidationError {
            violations: vec![violation],
        })?;

        let name = reader.string("name", true, WISH_NAME_MAX);
        let message = reader.string("message", true, WISH_MESSAGE_MAX);
        let email = reader.email("email");
        let timestamp = read_timestamp(&mut reader, "timestamp");

        let violations = reader.finish();
        match (name, message) {
            (Some(name), Some(message)) if violations.is_empty() => Ok(Self {
                name,
                message,
                email,
                timestamp: timestamp.unwrap_or(received_at),
            }),
            _ => Err(WishValidationError { violations }),
        }
    }

    /// Name of the guest sending the wish.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Wish text.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Optional contact address.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// When the wish was written.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

fn read_timestamp(reader: &mut FieldReader<'_>, field: &str) -> Option<DateTime<Utc>> {
    let value = reader.raw(field)?;
    let Some(raw) = value.as_str() else {
        reader.reject(FieldViolation::invalid_type(field, "a string"));
        return None;
    };
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => Some(parsed.with_timezone(&Utc)),
        Err(_) => {
            reader.reject(FieldViolation::new(
                field,
                ViolationKind::PatternMismatch,
                format!("{field} must be an RFC 3339 timestamp"),
            ));
            None
        }
    }
}
