//! # Collective Vault webhook events
//!
//! Every delivery is an `{event, payload}` envelope. The set of event names is
//! closed: an unknown name fails to deserialize instead of producing a
//! catch-all variant.

use crate::models::{
    CurrencyUpdate, Customer, CustomerSubscription, OAuthSignIn, Payment, Product, Waitlist,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "event", content = "payload")]
pub enum WebhookEvent {
    #[serde(rename = "user.signin.oauth2")]
    UserSignInOAuth2(OAuthSignIn),
    /// Some senders spell this one `currency.updated`
    #[serde(rename = "currency.update", alias = "currency.updated")]
    CurrencyUpdate(CurrencyUpdate),

    #[serde(rename = "waitlist.created")]
    WaitlistCreated(Waitlist),
    #[serde(rename = "waitlist.updated")]
    WaitlistUpdated(Waitlist),
    #[serde(rename = "waitlist.deleted")]
    WaitlistDeleted(Waitlist),

    #[serde(rename = "product.created")]
    ProductCreated(Product),
    #[serde(rename = "product.updated")]
    ProductUpdated(Product),
    #[serde(rename = "product.deleted")]
    ProductDeleted(Product),

    #[serde(rename = "customer.created")]
    CustomerCreated(Customer),
    #[serde(rename = "customer.updated")]
    CustomerUpdated(Customer),
    #[serde(rename = "customer.deleted")]
    CustomerDeleted(Customer),

    #[serde(rename = "customer.subscription.created")]
    SubscriptionCreated(CustomerSubscription),
    #[serde(rename = "customer.subscription.renewed")]
    SubscriptionRenewed(CustomerSubscription),
    #[serde(rename = "customer.subscription.grace_started")]
    SubscriptionGraceStarted(CustomerSubscription),
    #[serde(rename = "customer.subscription.cancelled")]
    SubscriptionCancelled(CustomerSubscription),
    #[serde(rename = "customer.subscription.expired")]
    SubscriptionExpired(CustomerSubscription),
    #[serde(rename = "customer.subscription.deleted")]
    SubscriptionDeleted(CustomerSubscription),

    #[serde(rename = "payment.created")]
    PaymentCreated(Payment),
    #[serde(rename = "payment.updated")]
    PaymentUpdated(Payment),
    #[serde(rename = "payment.deleted")]
    PaymentDeleted(Payment),
}

impl WebhookEvent {
    /// Every event name this crate accepts, in declaration order
    pub const NAMES: [&'static str; 20] = [
        "user.signin.oauth2",
        "currency.update",
        "waitlist.created",
        "waitlist.updated",
        "waitlist.deleted",
        "product.created",
        "product.updated",
        "product.deleted",
        "customer.created",
        "customer.updated",
        "customer.deleted",
        "customer.subscription.created",
        "customer.subscription.renewed",
        "customer.subscription.grace_started",
        "customer.subscription.cancelled",
        "customer.subscription.expired",
        "customer.subscription.deleted",
        "payment.created",
        "payment.updated",
        "payment.deleted",
    ];

    /// Wire name of the event, as found in the envelope's `event` field
    pub fn name(&self) -> &'static str {
        match self {
            WebhookEvent::UserSignInOAuth2(_) => "user.signin.oauth2",
            WebhookEvent::CurrencyUpdate(_) => "currency.update",
            WebhookEvent::WaitlistCreated(_) => "waitlist.created",
            WebhookEvent::WaitlistUpdated(_) => "waitlist.updated",
            WebhookEvent::WaitlistDeleted(_) => "waitlist.deleted",
            WebhookEvent::ProductCreated(_) => "product.created",
            WebhookEvent::ProductUpdated(_) => "product.updated",
            WebhookEvent::ProductDeleted(_) => "product.deleted",
            WebhookEvent::CustomerCreated(_) => "customer.created",
            WebhookEvent::CustomerUpdated(_) => "customer.updated",
            WebhookEvent::CustomerDeleted(_) => "customer.deleted",
            WebhookEvent::SubscriptionCreated(_) => "customer.subscription.created",
            WebhookEvent::SubscriptionRenewed(_) => "customer.subscription.renewed",
            WebhookEvent::SubscriptionGraceStarted(_) => "customer.subscription.grace_started",
            WebhookEvent::SubscriptionCancelled(_) => "customer.subscription.cancelled",
            WebhookEvent::SubscriptionExpired(_) => "customer.subscription.expired",
            WebhookEvent::SubscriptionDeleted(_) => "customer.subscription.deleted",
            WebhookEvent::PaymentCreated(_) => "payment.created",
            WebhookEvent::PaymentUpdated(_) => "payment.updated",
            WebhookEvent::PaymentDeleted(_) => "payment.deleted",
        }
    }

    /// Payload as a JSON value, without the envelope
    pub fn payload_json(&self) -> serde_json::Result<serde_json::Value> {
        let mut envelope = serde_json::to_value(self)?;
        Ok(envelope
            .get_mut("payload")
            .map(serde_json::Value::take)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn waitlist_payload() -> serde_json::Value {
        json!({
            "id": "w1",
            "name": "Ann",
            "email": "a@x.com",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        })
    }

    fn subscription_payload() -> serde_json::Value {
        json!({
            "id": "s1",
            "customer": {"id": "c1", "name": "Ann", "email": "a@x.com"},
            "product": {"id": "p1", "sku": "PRO", "name": "Pro", "price": 9.99, "type": "SUBSCRIPTION"},
            "status": "ACTIVE",
            "startDate": "2024-01-01T00:00:00Z",
            "endDate": "2024-02-01T00:00:00Z",
            "metadata": {},
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        })
    }

    #[test]
    fn test_waitlist_events_share_payload_shape() {
        for name in ["waitlist.created", "waitlist.updated", "waitlist.deleted"] {
            let event: WebhookEvent =
                serde_json::from_value(json!({"event": name, "payload": waitlist_payload()}))
                    .unwrap();

            assert_eq!(event.name(), name);
            assert_eq!(event.payload_json().unwrap(), waitlist_payload());
        }
    }

    #[test]
    fn test_subscription_events() {
        let names = WebhookEvent::NAMES
            .iter()
            .filter(|name| name.starts_with("customer.subscription."));

        for name in names {
            let event: WebhookEvent =
                serde_json::from_value(json!({"event": name, "payload": subscription_payload()}))
                    .unwrap();

            assert_eq!(event.name(), *name);
        }
    }

    #[test]
    fn test_grace_started_event() {
        let event: WebhookEvent = serde_json::from_value(json!({
            "event": "customer.subscription.grace_started",
            "payload": subscription_payload()
        }))
        .unwrap();

        match event {
            WebhookEvent::SubscriptionGraceStarted(subscription) => {
                assert!(subscription.is_active());
                assert_eq!(subscription.product.sku, "PRO");
            }
            other => panic!("unexpected event {}", other.name()),
        }
    }

    #[test]
    fn test_currency_event_accepts_both_spellings() {
        for name in ["currency.update", "currency.updated"] {
            let event: WebhookEvent = serde_json::from_value(json!({
                "event": name,
                "payload": {"currency": "EUR"}
            }))
            .unwrap();

            assert_eq!(event.name(), "currency.update");
        }
    }

    #[test]
    fn test_payload_before_event_field() {
        let body = r#"{"payload":{"currency":"USD"},"event":"currency.update"}"#;
        let event: WebhookEvent = serde_json::from_str(body).unwrap();

        assert!(matches!(event, WebhookEvent::CurrencyUpdate(_)));
    }

    #[test]
    fn test_unknown_event_is_rejected() {
        let result = serde_json::from_value::<WebhookEvent>(json!({
            "event": "unknown.event",
            "payload": waitlist_payload()
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_payload_shape_mismatch_is_rejected() {
        let result = serde_json::from_value::<WebhookEvent>(json!({
            "event": "customer.subscription.created",
            "payload": waitlist_payload()
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_missing_payload_is_rejected() {
        let result = serde_json::from_value::<WebhookEvent>(json!({"event": "waitlist.created"}));

        assert!(result.is_err());
    }

    #[test]
    fn test_names_are_unique() {
        let mut names = WebhookEvent::NAMES.to_vec();
        names.sort_unstable();
        names.dedup();

        assert_eq!(names.len(), WebhookEvent::NAMES.len());
    }
}
