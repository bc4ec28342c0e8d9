pub const DEFAULT_SIGNATURE_HEADER: &str = "x-vault-signature";
pub const DEFAULT_SIGNATURE_ALGORITHM: &str = "sha256";

pub const ENV_BASE_URL: &str = "COLLECTIVE_VAULT_BASE_URL";
pub const ENV_API_KEY: &str = "COLLECTIVE_VAULT_API_KEY";
pub const ENV_WEBHOOK_SECRET: &str = "COLLECTIVE_VAULT_WEBHOOK_SECRET";
pub const ENV_SIGNATURE_HEADER: &str = "COLLECTIVE_VAULT_SIGNATURE_HEADER";
pub const ENV_SIGNATURE_ALGORITHM: &str = "COLLECTIVE_VAULT_SIGNATURE_ALGORITHM";

pub const REDACTED: &str = "[REDACTED]";
