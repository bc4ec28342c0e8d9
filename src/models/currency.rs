use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Display)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[display("USD")]
    Usd,
    #[display("EUR")]
    Eur,
    #[display("GBP")]
    Gbp,
    #[display("PHP")]
    Php,
}

/// Payload of the `currency.update` event
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CurrencyUpdate {
    pub currency: Currency,
}
