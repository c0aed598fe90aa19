//! User accounts held by the guest store.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by [`NewUser::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// Username was blank.
    EmptyUsername,
    /// Password was empty.
    EmptyPassword,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Identifier assigned by the guest store on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Wrap a raw identifier value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Raw identifier value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fields supplied when creating a user.
#[derive(Clone, PartialEq, Eq)]
pub struct NewUser {
    username: String,
    password: String,
}

impl NewUser {
    /// Validate and construct the creation request.
    ///
    /// # Examples
    /// ```
    /// use rsvp_backend::domain::NewUser;
    ///
    /// assert!(NewUser::new("host", "secret").is_ok());
    /// assert!(NewUser::new("  ", "secret").is_err());
    /// ```
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let username = username.into();
        let password = password.into();
        if username.trim().is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(UserValidationError::EmptyPassword);
        }
        Ok(Self { username, password })
    }

    /// Requested username.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Combine the fields with a store-assigned identifier.
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            username: self.username,
            password: self.password,
        }
    }
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// A stored user account.
///
/// ## Invariants
/// - `username` is unique among stored users.
/// - `password` is never serialised.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    username: String,
    #[serde(skip_serializing)]
    password: String,
}

impl User {
    /// Store-assigned identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Unique login name.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Stored password.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
