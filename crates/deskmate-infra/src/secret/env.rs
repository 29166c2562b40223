//! Environment variable secret lookup.
//!
//! The Completion Service API key is never written to `config.toml`; the
//! config only names the variable that holds it.

use secrecy::SecretString;

use super::SecretError;

/// Read-only secret source backed by process environment variables.
#[derive(Debug, Default)]
pub struct EnvSecretProvider;

impl EnvSecretProvider {
    pub fn new() -> Self {
        Self
    }

    /// Value of `key`, if set to a non-empty valid Unicode string.
    pub fn get(&self, key: &str) -> Option<SecretString> {
        match std::env::var(key) {
            Ok(val) if !val.trim().is_empty() => Some(SecretString::from(val)),
            // Unset, empty, or not valid Unicode: treat all as missing.
            _ => None,
        }
    }

    /// Like [`get`](Self::get), but a missing value is an error naming the variable.
    pub fn require(&self, key: &str) -> Result<SecretString, SecretError> {
        self.get(key).ok_or_else(|| SecretError::Missing {
            var: key.to_string(),
        })
    }
}
