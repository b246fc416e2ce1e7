//! Domain primitives and ports.
//!
//! Purpose: define the transport-agnostic core of the site — credential
//! records, validated login input, the signup submission sum type, and the
//! ports inbound adapters depend on. Keep types immutable and document
//! invariants in each type's Rustdoc.

pub mod auth;
pub mod credentials;
pub mod error;
pub mod ports;
pub mod signup;

pub use self::auth::{Identity, LoginCredentials, LoginValidationError};
pub use self::credentials::CredentialStore;
pub use self::error::{Error, ErrorCode};
pub use self::signup::{SignupForm, SignupSubmission};
