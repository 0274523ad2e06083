mod email;
mod memory;
mod repository;

pub use email::*;
pub use memory::*;
pub use repository::*;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Minimum password length, in bytes.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Schema-free auxiliary account attributes.
pub type Metadata = Map<String, Value>;

/// User account, identified by its email.
///
/// Validity is not enforced on construction, call [`User::validate`] before
/// handing the value to a [`UserRepository`].
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    /// Plaintext password. Hashing belongs to the storage collaborator.
    #[serde(skip_serializing, default)]
    pub password: String,
    #[serde(default)]
    pub metadata: Metadata,
}

impl User {
    /// Create a new [`User`] without metadata.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            metadata: Metadata::new(),
        }
    }

    /// Insert `key` into `metadata` of [`User`].
    pub fn with_metadata(
        mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Returns [`Error::MalformedEntity`] if email or password is invalid.
    pub fn validate(&self) -> Result<()> {
        if !is_email(&self.email) {
            return Err(Error::MalformedEntity);
        }

        if self.password.len() < MIN_PASSWORD_LENGTH {
            tracing::debug!(rule = "password_length", "user rejected");
            return Err(Error::MalformedEntity);
        }

        Ok(())
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("metadata", &self.metadata)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate() {
        let user = User::new("user@example.com", "P$soW%920$n&");
        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_validate_default_user() {
        let err = User::default().validate().unwrap_err();
        assert!(matches!(err, Error::MalformedEntity));
    }

    #[test]
    fn test_validate_wrong_email() {
        for email in ["", "a@b@c.com", "a@bcom", ".a@b.com"] {
            let err = User::new(email, "password").validate().unwrap_err();
            assert!(matches!(err, Error::MalformedEntity));
        }
    }

    #[test]
    fn test_password_length_boundary() {
        let user = User::new("user@example.com", "1234567");
        assert!(matches!(user.validate(), Err(Error::MalformedEntity)));

        let user = User::new("user@example.com", "12345678");
        assert!(user.validate().is_ok());

        // Bytes are counted: four two-byte characters are enough.
        let user = User::new("user@example.com", "éééé");
        assert!(user.validate().is_ok());

        let user = User::new("user@example.com", "ééé");
        assert!(matches!(user.validate(), Err(Error::MalformedEntity)));
    }

    #[test]
    fn test_validate_is_idempotent() {
        let weak = User::new("user@example.com", "1234567");
        assert!(weak.validate().is_err());
        assert!(weak.validate().is_err());

        let strong = User::new("user@example.com", "12345678");
        assert!(strong.validate().is_ok());
        assert!(strong.validate().is_ok());
    }

    #[test]
    fn test_metadata_is_heterogeneous() {
        let user = User::new("user@example.com", "12345678")
            .with_metadata("name", "Jane")
            .with_metadata("age", 31)
            .with_metadata("verified", true)
            .with_metadata("address", json!({ "city": "Paris" }));

        assert_eq!(user.metadata.len(), 4);
        assert_eq!(user.metadata["address"]["city"], "Paris");
        // Metadata is never inspected by validation.
        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_password_is_hidden() {
        let user = User::new("user@example.com", "P$soW%920$n&");

        let debug = format!("{user:?}");
        assert!(!debug.contains("P$soW%920$n&"));

        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["email"], "user@example.com");
    }

    #[test]
    fn test_deserialize_without_metadata() {
        let user: User = serde_json::from_str(
            r#"{"email":"user@example.com","password":"12345678"}"#,
        )
        .unwrap();

        assert!(user.metadata.is_empty());
        assert_eq!(user.password, "12345678");
    }
}
