//! Inbound webhook authentication
//!
//! Collective Vault signs every webhook delivery with an HMAC of the raw body.
//! This module checks that signature and decodes authentic bodies into typed
//! events.
//!
//! ## Modules
//!
//! - [`security`] - HMAC computation and constant-time signature checks
//! - [`handler`] - The [`Webhook`] authenticator (header lookup, verify, decode)
//! - [`events`] - The closed set of webhook events and their payloads
//! - [`headers`] - Header lookup over the transport's header container

pub mod events;
pub mod handler;
pub mod headers;
#[cfg(feature = "ntex")]
pub mod ntex;
pub mod security;

pub use events::WebhookEvent;
pub use handler::Webhook;
pub use headers::SignatureHeaders;
pub use security::{MacAlgorithm, SignatureVerifier};
