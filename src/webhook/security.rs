//! Signature verification for incoming Collective Vault webhook requests
//!
//! The sender signs every delivery with an HMAC of the raw request body keyed
//! by the shared webhook secret, and sends the hex encoded digest in the
//! signature header (`x-vault-signature` by default).
//!
//! # Important Notes
//!
//! - The MAC MUST be computed on the raw request body bytes, not parsed JSON
//! - The comparison is constant-time, and so is every rejection path: a
//!   malformed or wrong-length signature costs the same as a wrong one
//! - Nothing in this module logs; callers decide what to report

use crate::{config::WebhookConfig, errors::ConfigError};
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};
use std::{fmt, hint::black_box, str::FromStr};
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

/// HMAC flavours a sender may sign with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MacAlgorithm {
    #[default]
    Sha256,
    Sha384,
    Sha512,
}

impl MacAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            MacAlgorithm::Sha256 => "sha256",
            MacAlgorithm::Sha384 => "sha384",
            MacAlgorithm::Sha512 => "sha512",
        }
    }

    /// Size in bytes of the digest this algorithm produces
    pub fn output_len(&self) -> usize {
        match self {
            MacAlgorithm::Sha256 => 32,
            MacAlgorithm::Sha384 => 48,
            MacAlgorithm::Sha512 => 64,
        }
    }

    fn compute(&self, secret: &[u8], body: &[u8]) -> Vec<u8> {
        match self {
            MacAlgorithm::Sha256 => keyed_digest::<HmacSha256>(secret, body),
            MacAlgorithm::Sha384 => keyed_digest::<HmacSha384>(secret, body),
            MacAlgorithm::Sha512 => keyed_digest::<HmacSha512>(secret, body),
        }
    }
}

impl fmt::Display for MacAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MacAlgorithm {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        let name = normalized.strip_prefix("hmac-").unwrap_or(&normalized);

        match name {
            "sha256" | "sha-256" => Ok(MacAlgorithm::Sha256),
            "sha384" | "sha-384" => Ok(MacAlgorithm::Sha384),
            "sha512" | "sha-512" => Ok(MacAlgorithm::Sha512),
            _ => Err(ConfigError::UnsupportedAlgorithm(value.to_string())),
        }
    }
}

fn keyed_digest<M>(secret: &[u8], body: &[u8]) -> Vec<u8>
where
    M: Mac + hmac::digest::KeyInit,
{
    // HMAC hashes or pads the key, so `InvalidLength` is never returned
    let mut mac = <M as Mac>::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(body);
    mac.finalize().into_bytes().to_vec()
}

/// Computes and checks webhook signatures for one [`WebhookConfig`].
#[derive(Debug)]
pub struct SignatureVerifier {
    config: WebhookConfig,
}

impl SignatureVerifier {
    pub fn new(config: WebhookConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WebhookConfig {
        &self.config
    }

    /// Lowercase hex signature the sender would attach to `body`
    pub fn sign(&self, body: &[u8]) -> String {
        hex::encode(self.expected_mac(body))
    }

    /// Verifies `provided_signature` (hex) against the HMAC of `body`
    ///
    /// # Returns
    ///
    /// * `true` if the signature matches the raw body bytes
    /// * `false` for a wrong signature, non-hex input or a digest of the wrong
    ///   length, all of which take the same comparison work
    pub fn verify(&self, body: &[u8], provided_signature: &str) -> bool {
        let expected = self.expected_mac(body);

        let provided = match hex::decode(provided_signature) {
            Ok(bytes) if bytes.len() == expected.len() => bytes,
            _ => {
                // same comparison cost as a full-length mismatch
                black_box(expected.as_slice().ct_eq(expected.as_slice()));
                return false;
            }
        };

        expected.as_slice().ct_eq(provided.as_slice()).into()
    }

    fn expected_mac(&self, body: &[u8]) -> Vec<u8> {
        self.config.algorithm().compute(self.config.secret(), body)
    }
}
