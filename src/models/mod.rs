//! Payload shapes carried by webhook events.
//!
//! These mirror the entities the Collective Vault API exposes. Only what a
//! webhook receiver needs to read is modelled; the CRUD surface lives outside
//! this crate.

pub mod currency;
pub mod customer;
pub mod payment;
pub mod product;
pub mod subscription;
pub mod user;
pub mod waitlist;

pub use currency::{Currency, CurrencyUpdate};
pub use customer::{Customer, CustomerSummary};
pub use payment::{LedgerEntry, Payment, PaymentReason, PaymentStatus, Transaction};
pub use product::{Product, ProductSubscription, ProductSummary, ProductType, SubscriptionInterval};
pub use subscription::{CustomerSubscription, CustomerSubscriptionStatus, SubscriptionSummary};
pub use user::{DiscordAccount, OAuthSignIn, VaultUser};
pub use waitlist::Waitlist;

/// Free form string pairs attached to most entities
pub type Metadata = std::collections::HashMap<String, String>;
