use super::Metadata;
use chrono::{DateTime, Utc};
use derive_more::Display;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    #[display("SUBSCRIPTION")]
    Subscription,
    #[display("ONE_TIME")]
    OneTime,
    #[display("CREDIT")]
    Credit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Display)]
#[serde(rename_all = "UPPERCASE")]
pub enum SubscriptionInterval {
    #[display("DAY")]
    Day,
    #[display("WEEK")]
    Week,
    #[display("MONTH")]
    Month,
}

/// Billing terms of a `SUBSCRIPTION` product
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSubscription {
    pub seats: u32,
    pub interval: SubscriptionInterval,
    pub interval_count: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub sku: String,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub compare_at_price: Option<Decimal>,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub subscription: Option<ProductSubscription>,
    #[serde(default)]
    pub metadata: Metadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn is_subscription(&self) -> bool {
        self.product_type == ProductType::Subscription
    }
}

/// The `{id, sku, name, price, type}` subset embedded in payments and subscriptions
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProductSummary {
    pub id: String,
    pub sku: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(rename = "type")]
    pub product_type: ProductType,
}
