//! Order types exchanged with callers: the raw submission request before any
//! validation, and the canonical order reconstructed from a settled
//! transaction.

use {
    crate::amount::Amount,
    bigdecimal::BigDecimal,
    number::serialization::{DecimalStr, StringOrNumber},
    serde::{Deserialize, Serialize},
    serde_with::serde_as,
};

/// Lifecycle state of an order derived from a settled transaction.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderState {
    Active,
    PartiallyFilled,
    Filled,
    Cancelled,
    Failed,
}

/// One side of a submission request. Unlike ledger amounts, nothing here is
/// trusted yet: the value may be absent and the currency arbitrary text.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RequestAmount {
    #[serde_as(as = "Option<StringOrNumber>")]
    pub value: Option<String>,
    pub currency: String,
    pub issuer: String,
}

/// An order submission request exactly as the caller sent it. Every field is
/// optional so that validation can report which required fields are missing
/// rather than rejecting the whole document at the parsing boundary.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OrderRequest {
    pub account: Option<String>,
    pub is_bid: Option<bool>,
    pub base_amount: Option<RequestAmount>,
    pub counter_amount: Option<RequestAmount>,
    #[serde_as(as = "Option<StringOrNumber>")]
    pub exchange_rate: Option<String>,
    pub expiration_timestamp: Option<String>,
    #[serde_as(as = "Option<StringOrNumber>")]
    pub ledger_timeout: Option<String>,
    pub passive: Option<bool>,
    pub immediate_or_cancel: Option<bool>,
    pub fill_or_kill: Option<bool>,
    pub maximize_buy_or_sell: Option<bool>,
    #[serde_as(as = "Option<StringOrNumber>")]
    pub cancel_replace: Option<String>,
}

/// The canonical order derived from a settled transaction's mutation records.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ReconstructedOrder {
    pub account: String,
    pub is_bid: bool,
    pub base_amount: Amount,
    pub counter_amount: Amount,
    #[serde_as(as = "DecimalStr")]
    pub exchange_rate: BigDecimal,
    pub state: OrderState,
    pub passive: bool,
    pub immediate_or_cancel: bool,
    pub fill_or_kill: bool,
    pub maximize_buy_or_sell: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}
