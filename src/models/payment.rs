use super::{CustomerSummary, Metadata, ProductSummary, SubscriptionSummary};
use chrono::{DateTime, Utc};
use derive_more::Display;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Display)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    #[display("COMPLETED")]
    Completed,
    #[display("FAILED")]
    Failed,
    #[display("CANCELLED")]
    Cancelled,
    #[display("REFUNDED")]
    Refunded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentReason {
    #[display("SUBSCRIPTION")]
    Subscription,
    #[display("CREDIT_PURCHASE")]
    CreditPurchase,
    #[display("ONE_TIME")]
    OneTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
    Cancelled,
    Processing,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LedgerAccountType {
    System,
    User,
    Discord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LedgerEntryType {
    Deposit,
    Withdraw,
    Referral,
    Equity,
    System,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub id: String,
    pub account_type: LedgerAccountType,
    pub account_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub entry_type: LedgerEntryType,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Transaction {
    pub id: String,
    pub status: TransactionStatus,
    #[serde(default)]
    pub entries: Vec<LedgerEntry>,
}

/// Payload of the `payment.*` events
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub idempotent_key: String,
    pub customer: CustomerSummary,
    pub product: ProductSummary,
    /// Payment processor, e.g. "stripe" or "paypal"
    pub provider: String,
    /// Processor specific payment id
    pub provider_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub status: PaymentStatus,
    pub reason: PaymentReason,
    #[serde(default)]
    pub metadata: Metadata,
    pub transaction: Transaction,
    pub subscription: Option<SubscriptionSummary>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Payment {
    pub fn is_completed(&self) -> bool {
        self.status == PaymentStatus::Completed
    }
}
