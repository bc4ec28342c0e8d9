use super::Metadata;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub discord_id: Option<String>,
    #[serde(default)]
    pub metadata: Metadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The `{id, name, email}` subset embedded in payments, subscriptions and sign-ins
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CustomerSummary {
    pub id: String,
    pub name: String,
    pub email: String,
}
