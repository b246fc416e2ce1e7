//! Authentication primitives such as login credentials and identities.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;

use regex::Regex;
use zeroize::Zeroizing;

/// Syntactic email shape: something before an `@`, a host part, and a dot.
const EMAIL_SHAPE: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

fn is_email_shaped(email: &str) -> bool {
    Regex::new(EMAIL_SHAPE).is_ok_and(|re| re.is_match(email))
}

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginValidationError {
    /// Email was missing or blank once trimmed.
    #[error("email must not be empty")]
    EmptyEmail,
    /// Email does not look like an email address.
    #[error("enter a valid email address")]
    InvalidEmail,
    /// Password was blank.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Validated login credentials used by authentication services.
///
/// ## Invariants
/// - `email` is trimmed, non-empty, and matches a syntactic email shape.
/// - `password` is required to be non-empty but retains caller-provided
///   whitespace to avoid surprising credential comparisons.
///
/// # Examples
/// ```
/// use site::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("user@example.com", "password").unwrap();
/// assert_eq!(creds.email(), "user@example.com");
/// assert_eq!(creds.password(), "password");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, LoginValidationError> {
        let normalized = email.trim();
        if normalized.is_empty() {
            return Err(LoginValidationError::EmptyEmail);
        }
        if !is_email_shaped(normalized) {
            return Err(LoginValidationError::InvalidEmail);
        }

        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            email: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email string suitable for credential lookups.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// The authenticated principal bound to a session, represented by its email.
///
/// Created by a successful login and destroyed on logout. An `Identity` is
/// only meaningful while its email resolves to a credential record; a
/// dangling email is treated as anonymous by the route guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    email: String,
}

impl Identity {
    /// Wrap an authenticated email address.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    /// Email address of the authenticated user.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.email)
    }
}
