//! Amounts as the ledger encodes them on the wire and in the canonical
//! normalized shape used everywhere else.

use {
    bigdecimal::BigDecimal,
    number::{serialization::DecimalStr, units},
    serde::{Deserialize, Serialize},
    serde_with::serde_as,
    std::fmt,
};

/// Currency code of the network's native asset.
pub const NATIVE_CURRENCY: &str = "XRP";

/// A canonical (uppercase) currency code.
#[derive(
    Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize,
)]
#[serde(from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_native(&self) -> bool {
        self.0 == NATIVE_CURRENCY
    }
}

impl From<String> for CurrencyCode {
    fn from(code: String) -> Self {
        Self(code.to_ascii_uppercase())
    }
}

impl From<&str> for CurrencyCode {
    fn from(code: &str) -> Self {
        Self(code.to_ascii_uppercase())
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An issued-asset amount as it appears on the ledger. Currency and issuer
/// are kept verbatim; canonicalization happens in [`LedgerAmount::normalize`].
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct IssuedAmount {
    #[serde_as(as = "DecimalStr")]
    pub value: BigDecimal,
    pub currency: String,
    #[serde(default)]
    pub issuer: String,
}

/// An amount in one of the ledger's two wire encodings: the native asset as
/// a bare drop-count string, issued assets as an object. A JSON value that is
/// neither fails at the deserialization boundary.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum LedgerAmount {
    Drops(#[serde_as(as = "DecimalStr")] BigDecimal),
    Issued(IssuedAmount),
}

impl LedgerAmount {
    /// The numeric value in the record's own units: drops for the native
    /// asset, issued units otherwise.
    pub fn raw_value(&self) -> &BigDecimal {
        match self {
            Self::Drops(value) => value,
            Self::Issued(amount) => &amount.value,
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Self::Drops(_))
    }

    /// Whether two amounts denominate the same asset: both native, or issued
    /// with equal currency and issuer.
    pub fn same_asset(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Drops(_), Self::Drops(_)) => true,
            (Self::Issued(a), Self::Issued(b)) => {
                a.currency == b.currency && a.issuer == b.issuer
            }
            _ => false,
        }
    }

    /// Replaces the numeric value, keeping the shape and asset identity.
    pub fn with_value(&self, value: BigDecimal) -> Self {
        match self {
            Self::Drops(_) => Self::Drops(value),
            Self::Issued(amount) => Self::Issued(IssuedAmount {
                value,
                currency: amount.currency.clone(),
                issuer: amount.issuer.clone(),
            }),
        }
    }

    /// Converts to the canonical shape: drops become major units of the
    /// native asset with an empty issuer, issued currencies are uppercased.
    pub fn normalize(&self) -> Amount {
        match self {
            Self::Drops(drops) => Amount {
                value: units::drops_to_native(drops),
                currency: CurrencyCode::from(NATIVE_CURRENCY),
                issuer: String::new(),
            },
            Self::Issued(amount) => Amount {
                value: amount.value.clone(),
                currency: CurrencyCode::from(amount.currency.as_str()),
                issuer: amount.issuer.clone(),
            },
        }
    }
}

/// A normalized amount: value in major units, canonical currency code, and
/// an issuer that is empty exactly when the currency is the native asset.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Amount {
    #[serde_as(as = "DecimalStr")]
    pub value: BigDecimal,
    pub currency: CurrencyCode,
    pub issuer: String,
}
