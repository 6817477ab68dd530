//! Syntactic checks on caller-supplied identifiers. These validate shape
//! only; whether an account actually exists is a different question answered
//! elsewhere.

use chrono::DateTime;

/// The alphabet used by the ledger's base58 address encoding. Notably absent:
/// `0`, `O`, `I` and `l`.
const ADDRESS_ALPHABET: &str = "rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz";

/// Seam for the syntactic checks the validator relies on, so that callers
/// with stricter requirements (for instance full address checksum
/// verification) can swap in their own.
pub trait Syntax {
    fn is_valid_address(&self, address: &str) -> bool;
    fn is_valid_currency(&self, currency: &str) -> bool;
    fn is_valid_timestamp(&self, timestamp: &str) -> bool;
}

/// Default syntax: address shape without checksum verification, the two
/// standard currency code formats, and RFC 3339 timestamps.
#[derive(Clone, Copy, Debug, Default)]
pub struct BasicSyntax;

impl Syntax for BasicSyntax {
    fn is_valid_address(&self, address: &str) -> bool {
        address.starts_with('r')
            && (25..=35).contains(&address.len())
            && address.chars().all(|c| ADDRESS_ALPHABET.contains(c))
    }

    fn is_valid_currency(&self, currency: &str) -> bool {
        let three_letter = currency.len() == 3 && currency.chars().all(|c| c.is_ascii_alphanumeric());
        let hex = currency.len() == 40 && currency.chars().all(|c| c.is_ascii_hexdigit());
        three_letter || hex
    }

    fn is_valid_timestamp(&self, timestamp: &str) -> bool {
        DateTime::parse_from_rfc3339(timestamp).is_ok()
    }
}
