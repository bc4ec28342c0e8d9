//! The SDK entry point.
//!
//! [`CollectiveVault`] owns the connection settings the REST resources need and
//! the webhook authenticator. The resources themselves are thin passthroughs to
//! an HTTP client supplied by the application.

use crate::{
    config::{VaultConfig, WebhookConfig},
    consts,
    errors::ConfigError,
    webhook::Webhook,
};
use log::info;
use std::fmt;

/// Options for [`CollectiveVault::new`]
pub struct ClientOptions {
    /// 🔒 SENSITIVE: sent as the `Authorization` header
    pub api_key: String,
    /// 🔒 SENSITIVE: shared webhook signing secret
    pub webhook_secret: String,
}

pub struct CollectiveVault {
    base_url: String,
    api_key: String,
    pub webhook: Webhook,
}

impl CollectiveVault {
    /// Client using the default signature header and algorithm
    pub fn new(base_url: impl Into<String>, options: ClientOptions) -> Result<Self, ConfigError> {
        let webhook_config =
            WebhookConfig::new(options.webhook_secret, consts::DEFAULT_SIGNATURE_HEADER)?;

        Ok(Self::with_webhook_config(base_url, options.api_key, webhook_config))
    }

    pub fn with_webhook_config(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        webhook_config: WebhookConfig,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            webhook: Webhook::new(webhook_config),
        }
    }

    /// Client configured from `COLLECTIVE_VAULT_*` environment variables
    pub fn from_config(config: &VaultConfig) -> Result<Self, ConfigError> {
        let webhook_config = config.webhook_config()?;
        info!(
            "Collective Vault client configured for {base_url} (signature header: {header}, algorithm: {algorithm})",
            base_url = config.base_url,
            header = webhook_config.signature_header(),
            algorithm = webhook_config.algorithm(),
        );

        Ok(Self::with_webhook_config(
            config.base_url.as_str(),
            config.api_key.as_str(),
            webhook_config,
        ))
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_config(&VaultConfig::from_env()?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Value for the `Authorization` header of API requests
    pub fn authorization(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for CollectiveVault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectiveVault")
            .field("base_url", &self.base_url)
            .field("api_key", &consts::REDACTED)
            .field("webhook", &self.webhook)
            .finish()
    }
}
