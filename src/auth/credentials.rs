//! Credential management for OKCoin API authentication.

use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;

/// Default environment variable holding the API key.
pub const API_KEY_VAR: &str = "OKCOIN_API_KEY";
/// Default environment variable holding the secret key.
pub const SECRET_KEY_VAR: &str = "OKCOIN_SECRET_KEY";
/// Default environment variable holding the passphrase.
pub const PASSPHRASE_VAR: &str = "OKCOIN_PASSPHRASE";

/// API credentials: the key, the signing secret and the passphrase chosen
/// when the key was created.
#[derive(Clone)]
pub struct Credentials {
    /// The API key (public identifier)
    pub api_key: String,
    /// The secret key, used for signing
    secret_key: SecretString,
    /// The passphrase, sent with every signed request
    passphrase: SecretString,
}

impl Credentials {
    /// Create new credentials.
    pub fn new(
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
        passphrase: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: SecretString::from(secret_key.into()),
            passphrase: SecretString::from(passphrase.into()),
        }
    }

    /// Get the secret key for signing.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.secret_key.expose_secret()
    }

    /// Get the passphrase for the `OK-ACCESS-PASSPHRASE` header.
    pub fn expose_passphrase(&self) -> &str {
        self.passphrase.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("secret_key", &"[REDACTED]")
            .field("passphrase", &"[REDACTED]")
            .finish()
    }
}

/// Trait for providing API credentials.
///
/// Implement this trait to customize how credentials are retrieved,
/// for example from a secrets manager.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

/// Static credentials provider that holds credentials directly.
#[derive(Clone)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider.
    pub fn new(
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
        passphrase: impl Into<String>,
    ) -> Self {
        Self {
            credentials: Credentials::new(api_key, secret_key, passphrase),
        }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

impl CredentialsProvider for Arc<StaticCredentials> {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Credentials provider that reads from environment variables.
///
/// By default, reads `OKCOIN_API_KEY`, `OKCOIN_SECRET_KEY` and `OKCOIN_PASSPHRASE`.
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Create credentials from the default environment variables.
    ///
    /// # Panics
    ///
    /// Panics if any of the environment variables is not set.
    pub fn from_env() -> Self {
        Self::from_env_vars(API_KEY_VAR, SECRET_KEY_VAR, PASSPHRASE_VAR)
    }

    /// Create credentials from custom environment variable names.
    ///
    /// # Panics
    ///
    /// Panics if any of the environment variables is not set.
    pub fn from_env_vars(key_var: &str, secret_var: &str, passphrase_var: &str) -> Self {
        Self::try_from_env_vars(key_var, secret_var, passphrase_var).unwrap_or_else(|| {
            panic!("Environment variables {key_var}, {secret_var} and {passphrase_var} must be set")
        })
    }

    /// Try to create credentials from the default environment variables.
    ///
    /// Returns `None` if any of the environment variables is not set.
    pub fn try_from_env() -> Option<Self> {
        Self::try_from_env_vars(API_KEY_VAR, SECRET_KEY_VAR, PASSPHRASE_VAR)
    }

    /// Try to create credentials from custom environment variable names.
    ///
    /// Returns `None` if any of the environment variables is not set.
    pub fn try_from_env_vars(key_var: &str, secret_var: &str, passphrase_var: &str) -> Option<Self> {
        let api_key = std::env::var(key_var).ok()?;
        let secret_key = std::env::var(secret_var).ok()?;
        let passphrase = std::env::var(passphrase_var).ok()?;

        Some(Self {
            credentials: Credentials::new(api_key, secret_key, passphrase),
        })
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}
