//! # Webhook unwrapping
//!
//! Turns a raw `(body, headers)` pair into a typed event. Each call walks
//! `header lookup → signature check → decode`, stopping at the first failure:
//!
//! - no signature header: [`WebhookError::MissingSignatureHeader`]
//! - signature does not match the raw body: [`WebhookError::InvalidSignature`]
//! - authentic body that is not a known envelope: [`WebhookError::InvalidPayload`]
//!
//! The body is never handed to the JSON decoder before its signature checks out.

use super::{events::WebhookEvent, headers::SignatureHeaders, security::SignatureVerifier};
use crate::{config::WebhookConfig, errors::WebhookError};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// Inbound webhook authenticator.
///
/// Holds only the immutable [`WebhookConfig`], so one instance can be shared
/// across threads and used for any number of concurrent calls.
#[derive(Debug)]
pub struct Webhook<E = WebhookEvent> {
    verifier: SignatureVerifier,
    _event: PhantomData<fn() -> E>,
}

impl<E: DeserializeOwned> Webhook<E> {
    pub fn new(config: WebhookConfig) -> Self {
        Self {
            verifier: SignatureVerifier::new(config),
            _event: PhantomData,
        }
    }

    pub fn signature_header(&self) -> &str {
        self.verifier.config().signature_header()
    }

    /// Hex signature for `body`, as the sender computes it
    pub fn sign(&self, body: impl AsRef<[u8]>) -> String {
        self.verifier.sign(body.as_ref())
    }

    /// Constant-time check of `signature` against the raw `body`
    pub fn verify_signature(&self, body: impl AsRef<[u8]>, signature: &str) -> bool {
        self.verifier.verify(body.as_ref(), signature)
    }

    /// Authenticates and decodes a webhook delivery
    ///
    /// # Arguments
    ///
    /// * `body` - The raw request body exactly as received
    /// * `headers` - The request headers
    ///
    /// # Returns
    ///
    /// The decoded event, or the first failure encountered
    pub fn unwrap<H>(&self, body: impl AsRef<[u8]>, headers: &H) -> Result<E, WebhookError>
    where
        H: SignatureHeaders + ?Sized,
    {
        let body = body.as_ref();
        let header_name = self.signature_header();

        let signature = match headers.header(header_name) {
            Some(value) if !value.is_empty() => value,
            _ => {
                warn!("Webhook rejected: signature header '{header_name}' was not provided");
                return Err(WebhookError::MissingSignatureHeader(header_name.to_string()));
            }
        };

        if !self.verifier.verify(body, signature) {
            warn!("Webhook rejected: signature in '{header_name}' does not match the body");
            return Err(WebhookError::InvalidSignature);
        }

        let event = serde_json::from_slice(body).map_err(|err| {
            warn!("Webhook signature verified but payload could not be decoded: {err}");
            WebhookError::InvalidPayload(err)
        })?;

        debug!("Webhook payload verified with '{header_name}' and decoded");
        Ok(event)
    }
}

impl Webhook<WebhookEvent> {
    /// Like [`Webhook::unwrap`], logging the name of the decoded event
    pub fn unwrap_event<H>(
        &self,
        body: impl AsRef<[u8]>,
        headers: &H,
    ) -> Result<WebhookEvent, WebhookError>
    where
        H: SignatureHeaders + ?Sized,
    {
        let event = self.unwrap(body, headers)?;
        debug!("Webhook event received: {}", event.name());
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Currency;
    use serde::Deserialize;
    use serde_json::json;
    use log::{Level, LevelFilter};
    use std::{
        collections::HashMap,
        sync::{Arc, Mutex},
        thread,
    };

    const SECRET: &str = "s3cr3t";
    const WAITLIST_BODY: &str = r#"{"event":"waitlist.created","payload":{"id":"w1","name":"Ann","email":"a@x.com","createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"}}"#;

    fn webhook() -> Webhook {
        Webhook::new(WebhookConfig::new(SECRET, "x-vault-signature").unwrap())
    }

    fn signed_headers(webhook: &Webhook, body: &str) -> HashMap<String, String> {
        HashMap::from([("x-vault-signature".to_string(), webhook.sign(body))])
    }

    fn flip_last_char(signature: &str) -> String {
        let (head, last) = signature.split_at(signature.len() - 1);
        let flipped = if last == "0" { "1" } else { "0" };
        format!("{head}{flipped}")
    }

    #[test]
    fn test_unwrap_waitlist_created() {
        let webhook = webhook();
        let headers = signed_headers(&webhook, WAITLIST_BODY);

        let event = webhook.unwrap(WAITLIST_BODY, &headers).unwrap();

        assert_eq!(event.name(), "waitlist.created");
        let expected: serde_json::Value = serde_json::from_str(WAITLIST_BODY).unwrap();
        assert_eq!(event.payload_json().unwrap(), expected["payload"]);
        match event {
            WebhookEvent::WaitlistCreated(waitlist) => {
                assert_eq!(waitlist.id, "w1");
                assert_eq!(waitlist.name, "Ann");
                assert_eq!(waitlist.email, "a@x.com");
            }
            other => panic!("unexpected event {}", other.name()),
        }
    }

    #[test]
    fn test_unwrap_flipped_signature() {
        let webhook = webhook();
        let signature = flip_last_char(&webhook.sign(WAITLIST_BODY));
        let headers = HashMap::from([("x-vault-signature".to_string(), signature)]);

        let result = webhook.unwrap(WAITLIST_BODY, &headers);

        assert!(matches!(result, Err(WebhookError::InvalidSignature)));
    }

    #[test]
    fn test_unwrap_missing_header() {
        let webhook = webhook();
        let headers: HashMap<String, String> = HashMap::new();

        let result = webhook.unwrap(WAITLIST_BODY, &headers);

        assert!(matches!(
            result,
            Err(WebhookError::MissingSignatureHeader(name)) if name == "x-vault-signature"
        ));
    }

    #[test]
    fn test_unwrap_empty_header_counts_as_missing() {
        let webhook = webhook();
        let headers = vec![("x-vault-signature", "")];

        let result = webhook.unwrap("not json", &headers);

        assert!(matches!(result, Err(WebhookError::MissingSignatureHeader(_))));
    }

    #[test]
    fn test_unwrap_other_header_does_not_count() {
        let webhook = webhook();
        let headers = vec![("x-hub-signature-256", webhook.sign(WAITLIST_BODY))];

        let result = webhook.unwrap(WAITLIST_BODY, &headers);

        assert!(matches!(result, Err(WebhookError::MissingSignatureHeader(_))));
    }

    #[test]
    fn test_unwrap_header_name_is_case_insensitive() {
        let webhook = webhook();
        let headers = vec![("X-Vault-Signature", webhook.sign(WAITLIST_BODY))];

        assert!(webhook.unwrap(WAITLIST_BODY, &headers).is_ok());
    }

    #[test]
    fn test_unwrap_wrong_signature_never_parses_body() {
        let webhook = webhook();
        let headers = vec![("x-vault-signature", "deadbeef")];

        let result = webhook.unwrap("not json", &headers);

        assert!(matches!(result, Err(WebhookError::InvalidSignature)));
    }

    #[test]
    fn test_unwrap_malformed_signature() {
        let webhook = webhook();
        let headers = vec![("x-vault-signature", "not-hex-at-all")];

        let result = webhook.unwrap(WAITLIST_BODY, &headers);

        assert!(matches!(result, Err(WebhookError::InvalidSignature)));
    }

    #[test]
    fn test_unwrap_valid_signature_invalid_json() {
        let webhook = webhook();
        let headers = signed_headers(&webhook, "not json");

        let result = webhook.unwrap("not json", &headers);

        assert!(matches!(result, Err(WebhookError::InvalidPayload(_))));
    }

    #[test]
    fn test_unwrap_valid_signature_unknown_event() {
        let webhook = webhook();
        let body = r#"{"event":"unknown.event","payload":{}}"#;
        let headers = signed_headers(&webhook, body);

        let result = webhook.unwrap(body, &headers);

        assert!(matches!(result, Err(WebhookError::InvalidPayload(_))));
    }

    #[test]
    fn test_unwrap_verifies_raw_bytes_not_normalized_json() {
        let webhook = webhook();
        let body = r#"{ "event": "currency.update", "payload": { "currency": "GBP" } }"#;
        let compact = serde_json::to_string(&serde_json::from_str::<serde_json::Value>(body).unwrap())
            .unwrap();
        let headers = signed_headers(&webhook, &compact);

        let result = webhook.unwrap(body, &headers);

        assert!(matches!(result, Err(WebhookError::InvalidSignature)));
    }

    #[test]
    fn test_unwrap_event_currency() {
        let webhook = webhook();
        let body = json!({"event": "currency.update", "payload": {"currency": "GBP"}}).to_string();
        let headers = signed_headers(&webhook, &body);

        match webhook.unwrap_event(&body, &headers).unwrap() {
            WebhookEvent::CurrencyUpdate(update) => assert_eq!(update.currency, Currency::Gbp),
            other => panic!("unexpected event {}", other.name()),
        }
    }

    #[test]
    fn test_unwrap_custom_event_type() {
        #[derive(Debug, Deserialize, PartialEq)]
        #[serde(tag = "event", content = "payload")]
        enum PingEvent {
            #[serde(rename = "ping")]
            Ping { nonce: u64 },
        }

        let webhook: Webhook<PingEvent> =
            Webhook::new(WebhookConfig::new(SECRET, "x-ping-signature").unwrap());
        let body = br#"{"event":"ping","payload":{"nonce":7}}"#;
        let headers = vec![("x-ping-signature".to_string(), webhook.sign(body))];

        assert_eq!(
            webhook.unwrap(body, &headers).unwrap(),
            PingEvent::Ping { nonce: 7 }
        );
    }

    #[test]
    fn test_unwrap_shared_across_threads() {
        let webhook = Arc::new(webhook());
        let good = signed_headers(&webhook, WAITLIST_BODY);

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let webhook = Arc::clone(&webhook);
                let headers = if i % 2 == 0 {
                    good.clone()
                } else {
                    HashMap::from([("x-vault-signature".to_string(), "00".repeat(32))])
                };
                thread::spawn(move || webhook.unwrap(WAITLIST_BODY, &headers).is_ok())
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), i % 2 == 0);
        }
    }

    struct CapturedLogs(Mutex<Vec<(Level, String)>>);

    impl log::Log for CapturedLogs {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if let Ok(mut records) = self.0.lock() {
                records.push((record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static CAPTURED_LOGS: CapturedLogs = CapturedLogs(Mutex::new(Vec::new()));

    #[test]
    fn test_unwrap_logs_success_at_debug() {
        let _ = log::set_logger(&CAPTURED_LOGS);
        log::set_max_level(LevelFilter::Debug);

        let webhook: Webhook =
            Webhook::new(WebhookConfig::new(SECRET, "x-logged-signature").unwrap());
        let headers = vec![("x-logged-signature", webhook.sign(WAITLIST_BODY))];

        assert!(webhook.unwrap(WAITLIST_BODY, &headers).is_ok());

        let records = CAPTURED_LOGS.0.lock().unwrap();
        assert!(records.iter().any(|(level, message)| {
            *level == Level::Debug
                && message.contains("x-logged-signature")
                && message.contains("decoded")
        }));
        assert!(records.iter().all(|(_, message)| !message.contains(SECRET)));
    }

    #[test]
    fn test_verify_signature_round_trip() {
        let webhook = webhook();
        let signature = webhook.sign(WAITLIST_BODY);

        assert!(webhook.verify_signature(WAITLIST_BODY, &signature));
        assert!(!webhook.verify_signature(WAITLIST_BODY, &flip_last_char(&signature)));
    }
}
