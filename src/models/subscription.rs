use super::{CustomerSummary, Metadata, ProductSummary};
use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Display)]
#[serde(rename_all = "UPPERCASE")]
pub enum CustomerSubscriptionStatus {
    #[display("ACTIVE")]
    Active,
    #[display("CANCELLED")]
    Cancelled,
    #[display("EXPIRED")]
    Expired,
}

/// Payload of every `customer.subscription.*` event
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSubscription {
    pub id: String,
    pub customer: CustomerSummary,
    pub product: ProductSummary,
    pub status: CustomerSubscriptionStatus,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub metadata: Metadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CustomerSubscription {
    pub fn is_active(&self) -> bool {
        self.status == CustomerSubscriptionStatus::Active
    }
}

/// Subscription as embedded in a payment (no customer or product)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionSummary {
    pub id: String,
    pub status: CustomerSubscriptionStatus,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub metadata: Metadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
