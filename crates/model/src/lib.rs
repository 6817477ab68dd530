//! Data model shared between order validation and order reconstruction:
//! amounts in the ledger's wire encodings and in normalized form, settled
//! transactions with their mutation records, and the order types exchanged
//! with callers.

pub mod amount;
pub mod flags;
pub mod order;
pub mod transaction;
