//! SDK configuration.
//!
//! [`VaultConfig`] mirrors the environment variables an application sets to
//! talk to Collective Vault. [`WebhookConfig`] is the immutable piece handed to
//! the webhook authenticator.
//!
//! # Security Notes
//! - Sensitive fields are redacted from `Debug` output and must never be logged
//! - The webhook secret cannot be read back out of a [`WebhookConfig`]
//! - Rotating the secret means building a new [`WebhookConfig`]

use crate::{consts, errors::ConfigError, webhook::security::MacAlgorithm};
use envconfig::Envconfig;
use std::fmt;

/// Environment backed settings for the SDK.
#[derive(Envconfig, Clone)]
pub struct VaultConfig {
    /// Base URL of the Collective Vault API (NON-SENSITIVE)
    /// Example: "https://vault.example.com"
    #[envconfig(from = "COLLECTIVE_VAULT_BASE_URL")]
    pub base_url: String,

    /// 🔒 SENSITIVE: API key sent as the `Authorization` header
    #[envconfig(from = "COLLECTIVE_VAULT_API_KEY")]
    pub api_key: String,

    /// 🔒 SENSITIVE: shared secret used to sign webhook deliveries
    #[envconfig(from = "COLLECTIVE_VAULT_WEBHOOK_SECRET")]
    pub webhook_secret: String,

    /// Header carrying the hex signature (NON-SENSITIVE)
    #[envconfig(
        from = "COLLECTIVE_VAULT_SIGNATURE_HEADER",
        default = "x-vault-signature"
    )]
    pub signature_header: String,

    /// MAC algorithm identifier (NON-SENSITIVE)
    /// Values: "sha256", "sha384", "sha512"
    #[envconfig(from = "COLLECTIVE_VAULT_SIGNATURE_ALGORITHM", default = "sha256")]
    pub signature_algorithm: String,
}

impl VaultConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::init_from_env()?)
    }

    /// Builds the webhook half of the configuration, validating the algorithm
    /// and header name.
    pub fn webhook_config(&self) -> Result<WebhookConfig, ConfigError> {
        WebhookConfig::with_algorithm(
            self.webhook_secret.as_bytes(),
            self.signature_header.as_str(),
            self.signature_algorithm.parse()?,
        )
    }
}

impl fmt::Debug for VaultConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VaultConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &consts::REDACTED)
            .field("webhook_secret", &consts::REDACTED)
            .field("signature_header", &self.signature_header)
            .field("signature_algorithm", &self.signature_algorithm)
            .finish()
    }
}

/// Immutable webhook authentication settings.
///
/// Created once and moved into a [`crate::webhook::Webhook`]; there is no way
/// to change the secret afterwards.
pub struct WebhookConfig {
    secret: Box<[u8]>,
    signature_header: String,
    algorithm: MacAlgorithm,
}

impl WebhookConfig {
    /// Config using the default algorithm (HMAC-SHA256)
    pub fn new(
        secret: impl AsRef<[u8]>,
        signature_header: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Self::with_algorithm(secret, signature_header, MacAlgorithm::default())
    }

    pub fn with_algorithm(
        secret: impl AsRef<[u8]>,
        signature_header: impl Into<String>,
        algorithm: MacAlgorithm,
    ) -> Result<Self, ConfigError> {
        let signature_header = signature_header.into();
        if signature_header.trim().is_empty() {
            return Err(ConfigError::EmptySignatureHeader);
        }

        Ok(Self {
            secret: secret.as_ref().into(),
            signature_header,
            algorithm,
        })
    }

    pub fn signature_header(&self) -> &str {
        &self.signature_header
    }

    pub fn algorithm(&self) -> MacAlgorithm {
        self.algorithm
    }

    pub(crate) fn secret(&self) -> &[u8] {
        &self.secret
    }
}

impl fmt::Debug for WebhookConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookConfig")
            .field("secret", &consts::REDACTED)
            .field("signature_header", &self.signature_header)
            .field("algorithm", &self.algorithm)
            .finish()
    }
}
