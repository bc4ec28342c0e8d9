use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use collective_vault::Webhook;
use log::info;
use std::path::{Path, PathBuf};

use crate::config;

#[derive(Args, Debug, Clone)]
pub struct SignArgs {
    /// File holding the raw webhook body
    #[arg(short, long)]
    file: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// File holding the raw webhook body
    #[arg(short, long)]
    file: PathBuf,

    /// Hex signature as found in the signature header
    #[arg(short, long)]
    signature: String,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Action {
    /// Print the signature Collective Vault would send for a body
    Sign(SignArgs),
    /// Check a signature against a body
    Verify(CheckArgs),
    /// Verify and decode a body into a webhook event
    Unwrap(CheckArgs),
}

/// Local tooling for Collective Vault webhooks
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct AppArgs {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub action: Action,
}

impl AppArgs {
    pub fn run(&self) -> anyhow::Result<()> {
        let webhook: Webhook = Webhook::new(config::load()?.webhook_config()?);

        match &self.action {
            Action::Sign(SignArgs { file }) => {
                let body = read_body(file)?;
                println!("{}", webhook.sign(&body));
            }
            Action::Verify(CheckArgs { file, signature }) => {
                let body = read_body(file)?;
                if !webhook.verify_signature(&body, signature) {
                    bail!("invalid signature for {}", file.display());
                }
                println!("valid");
            }
            Action::Unwrap(CheckArgs { file, signature }) => {
                let body = read_body(file)?;
                let headers = [(webhook.signature_header(), signature.as_str())];
                let event = webhook.unwrap_event(&body, &headers[..])?;

                info!("{} decoded as {}", file.display(), event.name());
                println!("{}", event.name());
                println!("{}", serde_json::to_string_pretty(&event.payload_json()?)?);
            }
        }

        Ok(())
    }
}

fn read_body(path: &Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}
