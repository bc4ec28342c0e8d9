//! ntex integration
//!
//! Lets an ntex app pass request headers straight to [`Webhook::unwrap`] and
//! return a [`WebhookError`] from a handler.
//!
//! # Returns
//! - 400 when the signature header is missing or the payload is unreadable
//! - 401 when the signature does not match

use super::{
    Webhook,
    headers::{SignatureHeaders, UNREADABLE_HEADER_VALUE},
};
use crate::errors::WebhookError;
use ntex::{http, web};
use serde::de::DeserializeOwned;

impl SignatureHeaders for http::HeaderMap {
    fn header(&self, name: &str) -> Option<&str> {
        let value = self
            .get(name)
            .or_else(|| self.get(name.to_ascii_lowercase().as_str()))?;

        Some(value.to_str().unwrap_or(UNREADABLE_HEADER_VALUE))
    }
}

impl<E: DeserializeOwned> Webhook<E> {
    /// Authenticates and decodes the body of an ntex request
    pub fn unwrap_request(&self, req: &web::HttpRequest, body: &[u8]) -> Result<E, WebhookError> {
        self.unwrap(body, req.headers())
    }
}

impl web::error::WebResponseError for WebhookError {
    fn error_response(&self, _: &web::HttpRequest) -> web::HttpResponse {
        web::HttpResponse::build(self.status_code()).json(&serde_json::json!({
            "error": self.to_string()
        }))
    }

    fn status_code(&self) -> http::StatusCode {
        match *self {
            WebhookError::MissingSignatureHeader(_) => http::StatusCode::BAD_REQUEST,
            WebhookError::InvalidSignature => http::StatusCode::UNAUTHORIZED,
            WebhookError::InvalidPayload(_) => http::StatusCode::BAD_REQUEST,
        }
    }
}
