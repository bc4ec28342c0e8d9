//! # Collective Vault SDK
//!
//! Client side helpers for the Collective Vault commerce API. The part with
//! real logic is [`webhook`]: authenticating inbound webhook deliveries and
//! decoding them into typed [`webhook::WebhookEvent`]s.
//!
//! ```
//! use collective_vault::{ClientOptions, CollectiveVault, WebhookEvent};
//!
//! let vault = CollectiveVault::new(
//!     "https://vault.example.com",
//!     ClientOptions { api_key: "key".into(), webhook_secret: "s3cr3t".into() },
//! )?;
//!
//! let body = r#"{"event":"currency.update","payload":{"currency":"EUR"}}"#;
//! let headers = vec![("x-vault-signature", vault.webhook.sign(body))];
//!
//! match vault.webhook.unwrap(body, &headers)? {
//!     WebhookEvent::CurrencyUpdate(update) => println!("currency is now {}", update.currency),
//!     other => println!("ignoring {}", other.name()),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod client;
pub mod config;
pub mod consts;
pub mod errors;
pub mod models;
pub mod webhook;

pub use client::{ClientOptions, CollectiveVault};
pub use config::{VaultConfig, WebhookConfig};
pub use errors::{ConfigError, WebhookError};
pub use webhook::{MacAlgorithm, SignatureHeaders, Webhook, WebhookEvent};
