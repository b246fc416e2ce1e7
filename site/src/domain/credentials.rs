//! Fixed credential records backing the login flow.
//!
//! The store is populated once at startup and never mutated, so services can
//! share it behind an `Arc` without locking. There is deliberately no
//! persistence: restarting the process resets the store to its literal set.

use std::collections::HashMap;

/// Read-only mapping from email to stored password.
///
/// ## Invariants
/// - Emails are unique keys; construction keeps the last entry for a
///   duplicated email.
/// - Records are never added, changed, or removed after construction.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    records: HashMap<String, String>,
}

impl CredentialStore {
    /// Build a store from `(email, password)` pairs.
    pub fn from_records<I, S>(records: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let records = records
            .into_iter()
            .map(|(email, password)| (email.into(), password.into()))
            .collect();
        Self { records }
    }

    /// The development credential set: a single known user.
    pub fn fixture() -> Self {
        Self::from_records([("user@example.com", "password")])
    }

    /// Stored password for `email`, if a record exists.
    pub fn password_for(&self, email: &str) -> Option<&str> {
        self.records.get(email).map(String::as_str)
    }

    /// Whether a credential record exists for `email`.
    pub fn contains(&self, email: &str) -> bool {
        self.records.contains_key(email)
    }

    /// Number of credential records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn fixture_holds_the_known_user() {
        let store = CredentialStore::fixture();
        assert_eq!(store.len(), 1);
        assert_eq!(store.password_for("user@example.com"), Some("password"));
        assert!(store.contains("user@example.com"));
    }

    #[rstest]
    fn unknown_email_is_absent_not_an_error() {
        let store = CredentialStore::fixture();
        assert_eq!(store.password_for("nobody@example.com"), None);
        assert!(!store.contains("nobody@example.com"));
    }

    #[rstest]
    fn duplicate_emails_keep_the_last_record() {
        let store =
            CredentialStore::from_records([("a@example.com", "first"), ("a@example.com", "second")]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.password_for("a@example.com"), Some("second"));
    }

    #[rstest]
    fn empty_store_reports_empty() {
        let store = CredentialStore::from_records(Vec::<(String, String)>::new());
        assert!(store.is_empty());
    }
}
