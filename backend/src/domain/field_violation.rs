//! Field-level violations collected while validating untyped payloads.
//!
//! Validators walk every declared field and record one violation per failed
//! constraint, so callers can report the full set at once instead of the
//! first failure only.

use std::fmt;

use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value, json};
use std::sync::OnceLock;

use super::Error;

/// Category of a failed field constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// The field is required but absent or `null`.
    Required,
    /// The field is present with the wrong JSON type.
    InvalidType,
    /// The field is a string that does not match the expected pattern.
    PatternMismatch,
    /// The field is a string containing only whitespace.
    Blank,
    /// The field exceeds its maximum length.
    TooLong,
    /// The field is a number outside its allowed range.
    OutOfRange,
}

/// One failed constraint on a named field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    field: String,
    #[serde(rename = "code")]
    kind: ViolationKind,
    message: String,
}

impl FieldViolation {
    /// Build a violation for `field`.
    pub fn new(field: impl Into<String>, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn required(field: &str) -> Self {
        Self::new(field, ViolationKind::Required, format!("{field} is required"))
    }

    pub(crate) fn invalid_type(field: &str, expected: &str) -> Self {
        Self::new(
            field,
            ViolationKind::InvalidType,
            format!("{field} must be {expected}"),
        )
    }

    /// Name of the offending field in the wire payload.
    pub fn field(&self) -> &str {
        self.field.as_str()
    }

    /// Category of the violation.
    pub fn kind(&self) -> ViolationKind {
        self.kind
    }

    /// Human-readable description of the violation.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Join violations into the combined `Validation error: a; b` message.
pub(crate) fn combined_message(violations: &[FieldViolation]) -> String {
    let joined = violations
        .iter()
        .map(FieldViolation::message)
        .collect::<Vec<_>>()
        .join("; ");
    format!("Validation error: {joined}")
}

/// Build the `invalid_request` error for a failed validation.
///
/// The message is the combined message and `details.violations` lists
/// each violation as `{ field, code, message }`.
pub(crate) fn violations_error(violations: &[FieldViolation]) -> Error {
    Error::invalid_request(combined_message(violations))
        .with_details(json!({ "violations": violations }))
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Accumulates violations while reading fields out of a JSON object.
pub(crate) struct FieldReader<'a> {
    object: &'a Map<String, Value>,
    violations: Vec<FieldViolation>,
}

impl<'a> FieldReader<'a> {
    /// Start reading `raw`, which must be a JSON object.
    pub(crate) fn new(raw: &'a Value) -> Result<Self, FieldViolation> {
        match raw {
            Value::Object(object) => Ok(Self {
                object,
                violations: Vec::new(),
            }),
            _ => Err(FieldViolation::invalid_type("body", "a JSON object")),
        }
    }

    fn present(&self, field: &str) -> Option<&'a Value> {
        self.object.get(field).filter(|value| !value.is_null())
    }

    fn push(&mut self, violation: FieldViolation) {
        self.violations.push(violation);
    }

    /// Read a string field, trimming surrounding whitespace.
    pub(crate) fn string(&mut self, field: &str, required: bool, max: usize) -> Option<String> {
        let Some(value) = self.present(field) else {
            if required {
                self.push(FieldViolation::required(field));
            }
            return None;
        };
        let Some(raw) = value.as_str() else {
            self.push(FieldViolation::invalid_type(field, "a string"));
            return None;
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            if required {
                self.push(FieldViolation::new(
                    field,
                    ViolationKind::Blank,
                    format!("{field} must not be blank"),
                ));
            }
            return None;
        }
        if trimmed.chars().count() > max {
            self.push(FieldViolation::new(
                field,
                ViolationKind::TooLong,
                format!("{field} must be at most {max} characters"),
            ));
            return None;
        }
        Some(trimmed.to_owned())
    }

    /// Read an optional email address field.
    pub(crate) fn email(&mut self, field: &str) -> Option<String> {
        let email = self.string(field, false, EMAIL_MAX)?;
        if email_regex().is_match(&email) {
            Some(email)
        } else {
            self.push(FieldViolation::new(
                field,
                ViolationKind::PatternMismatch,
                format!("{field} must be a valid email address"),
            ));
            None
        }
    }

    /// Read a required boolean field.
    pub(crate) fn boolean(&mut self, field: &str) -> Option<bool> {
        let Some(value) = self.present(field) else {
            self.push(FieldViolation::required(field));
            return None;
        };
        match value.as_bool() {
            Some(flag) => Some(flag),
            None => {
                self.push(FieldViolation::invalid_type(field, "a boolean"));
                None
            }
        }
    }

    /// Read an optional integer field bounded by `min..=max`.
    ///
    /// Integral floats such as `2.0` count as integers. Integers too large
    /// for any native width are out of range rather than mistyped.
    pub(crate) fn bounded_integer(&mut self, field: &str, min: u32, max: u32) -> Option<u32> {
        let value = self.present(field)?;
        let accepted = if let Some(unsigned) = value.as_u64() {
            u32::try_from(unsigned)
                .ok()
                .filter(|candidate| (min..=max).contains(candidate))
        } else if value.is_i64() {
            None
        } else if let Some(integral) = value
            .as_f64()
            .filter(|float| float.trunc().total_cmp(float).is_eq())
        {
            (min..=max).find(|candidate| f64::from(*candidate).total_cmp(&integral).is_eq())
        } else {
            self.push(FieldViolation::invalid_type(field, "an integer"));
            return None;
        };
        if accepted.is_none() {
            self.push(FieldViolation::new(
                field,
                ViolationKind::OutOfRange,
                format!("{field} must be between {min} and {max}"),
            ));
        }
        accepted
    }

    /// Record a violation discovered outside the typed readers.
    pub(crate) fn reject(&mut self, violation: FieldViolation) {
        self.push(violation);
    }

    /// Raw access to an optional field for custom parsing.
    pub(crate) fn raw(&self, field: &str) -> Option<&'a Value> {
        self.present(field)
    }

    /// Finish reading, yielding the collected violations.
    pub(crate) fn finish(self) -> Vec<FieldViolation> {
        self.violations
    }
}

/// Maximum accepted email length.
pub const EMAIL_MAX: usize = 254;
