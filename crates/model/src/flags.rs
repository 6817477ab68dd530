//! Flag bit tables for offers.
//!
//! The same semantic flag lives at different bit positions depending on the
//! record carrying it, so the transaction-level and ledger-entry-level tables
//! are kept separate.

/// Flags on an offer-creating transaction.
pub mod tx_offer {
    pub const PASSIVE: u32 = 0x0001_0000;
    /// Never produces a ledger entry; readable only from the transaction.
    pub const IMMEDIATE_OR_CANCEL: u32 = 0x0002_0000;
    /// Never produces a ledger entry; readable only from the transaction.
    pub const FILL_OR_KILL: u32 = 0x0004_0000;
    pub const SELL: u32 = 0x0008_0000;
}

/// Flags on a resting offer ledger entry.
pub mod ledger_offer {
    pub const PASSIVE: u32 = 0x0001_0000;
    pub const SELL: u32 = 0x0008_0000;
}
