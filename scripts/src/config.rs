use collective_vault::{WebhookConfig, consts};
use envconfig::Envconfig;

/// Webhook settings for local tooling. Only the signing half of
/// `COLLECTIVE_VAULT_*` is needed here, so no base URL or API key.
#[derive(Envconfig, Clone)]
pub struct ScriptsConfig {
    #[envconfig(from = "COLLECTIVE_VAULT_WEBHOOK_SECRET")]
    pub webhook_secret: String,

    #[envconfig(
        from = "COLLECTIVE_VAULT_SIGNATURE_HEADER",
        default = "x-vault-signature"
    )]
    pub signature_header: String,

    #[envconfig(from = "COLLECTIVE_VAULT_SIGNATURE_ALGORITHM", default = "sha256")]
    pub signature_algorithm: String,
}

impl ScriptsConfig {
    pub fn webhook_config(&self) -> anyhow::Result<WebhookConfig> {
        Ok(WebhookConfig::with_algorithm(
            self.webhook_secret.as_bytes(),
            self.signature_header.as_str(),
            self.signature_algorithm.parse()?,
        )?)
    }
}

pub fn load() -> anyhow::Result<ScriptsConfig> {
    ScriptsConfig::init_from_env().map_err(|err| {
        anyhow::anyhow!(
            "failed to load config, is {} set? {err}",
            consts::ENV_WEBHOOK_SECRET
        )
    })
}
