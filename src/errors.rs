use derive_more::{Display, Error};

/// Failure of a single webhook authentication attempt.
///
/// None of these are retried internally: a failed verification signals either
/// corruption or an adversarial request.
#[derive(Debug, Display, Error)]
pub enum WebhookError {
    /// The configured signature header was absent (or empty) in the request
    #[display("signature header '{_0}' was not provided")]
    MissingSignatureHeader(#[error(not(source))] String),

    /// Malformed hex, wrong length and byte mismatch all collapse into this
    /// variant so the caller cannot tell them apart.
    #[display("invalid webhook signature")]
    InvalidSignature,

    /// The body was authentic but is not a known `{event, payload}` envelope
    #[display("invalid webhook payload: {_0}")]
    InvalidPayload(#[error(source)] serde_json::Error),
}

#[derive(Debug, Display, Error)]
pub enum ConfigError {
    #[display("failed to read configuration from environment: {_0}")]
    Env(#[error(not(source))] envconfig::Error),

    #[display("unsupported signature algorithm '{_0}'")]
    UnsupportedAlgorithm(#[error(not(source))] String),

    #[display("signature header name must not be empty")]
    EmptySignatureHeader,
}

impl From<envconfig::Error> for ConfigError {
    fn from(err: envconfig::Error) -> Self {
        ConfigError::Env(err)
    }
}
