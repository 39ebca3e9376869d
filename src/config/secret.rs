//! Secure credential handling using the secrecy crate
//!
//! The platform API token is held in memory through a `Secret` wrapper which
//! zeroes the backing allocation on drop and redacts Debug output. Access to
//! the raw value requires an explicit `expose_secret()` call.
//!
//! # Example
//!
//! ```rust
//! use surveyor::config::{secret_string, SecretString};
//! use secrecy::ExposeSecret;
//!
//! let token: SecretString = secret_string("my-api-token".to_string());
//! assert_eq!(token.expose_secret().as_ref(), "my-api-token");
//! println!("{:?}", token); // Prints: Secret([REDACTED])
//! ```

use secrecy::{CloneableSecret, DebugSecret, Secret, SerializableSecret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroize;

/// Newtype wrapper for String that implements the required traits for Secret
#[derive(Clone, Debug, Zeroize)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}
impl SerializableSecret for SecretValue {}

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl From<SecretValue> for String {
    fn from(mut s: SecretValue) -> Self {
        std::mem::take(&mut s.0)
    }
}

impl PartialEq<str> for SecretValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SecretValue {
    /// Check if the secret value is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for SecretValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SecretValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(SecretValue)
    }
}

/// Type alias for a secret string
///
/// This wraps a `SecretValue` in a `Secret` container that:
/// - Zeros the memory when dropped
/// - Prevents accidental logging via Debug
/// - Requires explicit `expose_secret()` to access
pub type SecretString = Secret<SecretValue>;

/// Helper function to create a SecretString from a String
#[inline]
pub fn secret_string(value: String) -> SecretString {
    Secret::new(SecretValue::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_secret_string_creation() {
        let secret = secret_string("test-token".to_string());
        assert_eq!(secret.expose_secret().as_ref(), "test-token");
    }

    #[test]
    fn test_secret_debug_redacted() {
        let secret = secret_string("sensitive-data".to_string());
        let debug_output = format!("{secret:?}");

        assert!(!debug_output.contains("sensitive-data"));
        assert!(debug_output.contains("REDACTED") || debug_output.contains("Secret"));
    }

    #[test]
    fn test_secret_serde() {
        #[derive(Serialize, Deserialize)]
        struct TestConfig {
            api_token: SecretString,
        }

        let config = TestConfig {
            api_token: secret_string("tok123".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("tok123"));

        let deserialized: TestConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.api_token.expose_secret().as_ref(), "tok123");
    }

    #[test]
    fn test_secret_value_is_empty() {
        assert!(SecretValue::from(String::new()).is_empty());
        assert!(!SecretValue::from("x".to_string()).is_empty());
    }
}
