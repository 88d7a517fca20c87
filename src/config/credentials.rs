//! Credential resolution for the search service.
//!
//! The API key is read from the environment variable named in config,
//! on demand and uncached, and wrapped so it can't leak through logs.

use super::types::SearchConfig;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when building a request.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to the API.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Status of credential resolution for the search service.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    /// API key resolved successfully.
    Configured(SecureString),
    /// API key is missing or empty.
    Unconfigured {
        /// Reason for missing configuration.
        reason: String,
    },
}

impl SearchConfig {
    /// Resolve the API key from the configured environment variable.
    ///
    /// Called on demand and NOT cached, so exporting the variable and
    /// re-running picks it up without a config change.
    pub fn resolve_credential(&self) -> CredentialStatus {
        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.trim().is_empty() => {
                CredentialStatus::Configured(SecureString::new(key))
            }
            Ok(_) => CredentialStatus::Unconfigured {
                reason: format!("{} is set but empty", self.api_key_env),
            },
            Err(_) => CredentialStatus::Unconfigured {
                reason: format!("{} is not set", self.api_key_env),
            },
        }
    }

    /// One-line setup guidance shown alongside a missing-credential error.
    pub fn setup_guidance(&self) -> String {
        format!(
            "Set {} in your environment (export {}=your_key_here) and run the search again.",
            self.api_key_env, self.api_key_env
        )
    }
}
