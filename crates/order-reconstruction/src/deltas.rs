//! Summing the amounts a transaction removed from other resting offers.
//!
//! When an offer is consumed the moment it is created it leaves no ledger
//! entry of its own; its effect is visible only as shrinkage of the resting
//! offers it crossed. Summing those deltas recovers how much of the order the
//! ledger actually exercised.

use {
    bigdecimal::BigDecimal,
    model::{
        amount::LedgerAmount,
        transaction::{LedgerEntryType, Transaction},
    },
    number::{SIGNIFICANT_DIGITS, to_precision},
};

/// Exercised totals from the transaction owner's perspective, mirroring the
/// shapes of the transaction's own `TakerGets`/`TakerPays`.
#[derive(Clone, Debug, PartialEq)]
pub struct ExercisedTotals {
    pub taker_gets: LedgerAmount,
    pub taker_pays: LedgerAmount,
}

/// Sums the value deltas of every resting offer this transaction exercised.
///
/// Only modified or deleted offer entries whose prior snapshot includes a
/// `TakerPays` count; a resting offer's `TakerPays` shrinking in the asset
/// the transaction takes contributes to the "gets" total, and symmetrically
/// for its `TakerGets`. Totals are rounded to 15 significant digits after
/// each addition to bound representation error.
pub fn sum_exercised_deltas(tx: &Transaction) -> ExercisedTotals {
    let gets_shape = tx.taker_gets.clone().unwrap_or_else(zero_native);
    let pays_shape = tx.taker_pays.clone().unwrap_or_else(zero_native);

    let mut gets_total = BigDecimal::default();
    let mut pays_total = BigDecimal::default();

    for node in &tx.meta.affected_nodes {
        if node.ledger_entry_type() != LedgerEntryType::Offer {
            continue;
        }
        let Some(previous) = node.previous_fields() else {
            continue;
        };
        if previous.taker_pays.is_none() {
            continue;
        }
        let fields = node.fields();

        if let (Some(prev_pays), Some(final_pays)) = (&previous.taker_pays, &fields.taker_pays) {
            if final_pays.same_asset(&gets_shape) {
                let delta = prev_pays.raw_value() - final_pays.raw_value();
                gets_total = to_precision(&(gets_total + delta), SIGNIFICANT_DIGITS);
            }
        }
        if let (Some(prev_gets), Some(final_gets)) = (&previous.taker_gets, &fields.taker_gets) {
            if final_gets.same_asset(&pays_shape) {
                let delta = prev_gets.raw_value() - final_gets.raw_value();
                pays_total = to_precision(&(pays_total + delta), SIGNIFICANT_DIGITS);
            }
        }
    }

    ExercisedTotals {
        taker_gets: gets_shape.with_value(gets_total),
        taker_pays: pays_shape.with_value(pays_total),
    }
}

fn zero_native() -> LedgerAmount {
    LedgerAmount::Drops(BigDecimal::default())
}
