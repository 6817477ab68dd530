//! Reconstruction of a canonical order from a settled transaction.
//!
//! The ledger never records an "order state" directly. The reconstructor
//! infers it from the offer's mutation record when one exists, and otherwise
//! from the aggregate effect the transaction had on the resting offers it
//! crossed.

use {
    crate::{
        deltas::{self, ExercisedTotals},
        pair::PairPreferences,
        quality,
    },
    bigdecimal::{BigDecimal, One, Zero},
    model::{
        amount::LedgerAmount,
        flags::{ledger_offer, tx_offer},
        order::{OrderState, ReconstructedOrder},
        transaction::{AffectedNode, LedgerEntryType, NodeFields, Transaction, TransactionType},
    },
    number::{SIGNIFICANT_DIGITS, to_precision, units},
    thiserror::Error,
};

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// The queried account and sequence had no corresponding effect in this
    /// transaction. Definitive; retrying the same query cannot succeed.
    #[error("transaction does not contain an order matching the supplied parameters")]
    OrderNotFound,
    /// The transaction record violates an invariant the ledger guarantees,
    /// which means the caller handed us a corrupted or truncated record.
    #[error("inconsistent transaction record: {0}")]
    Inconsistent(&'static str),
}

/// Parameters of a reconstruction query.
#[derive(Clone, Debug, Default)]
pub struct ReconstructOptions {
    pub account: String,
    pub sequence: Option<u32>,
    pub preferences: PairPreferences,
}

/// Reconstructs the canonical order the given account had in this settled
/// transaction.
pub fn reconstruct_order(
    tx: &Transaction,
    options: &ReconstructOptions,
) -> Result<ReconstructedOrder, Error> {
    let located = locate_offer(tx, options);

    let mut immediate_or_cancel = false;
    let mut fill_or_kill = false;
    let mut state = None;

    let (fields, entry) = match located {
        Some(node) => (node.fields().clone(), Some(node)),
        None => {
            // The order left no entry of its own. That is only plausible if
            // the queried account created it with this very transaction and
            // it was consumed (or dropped) on arrival.
            if tx.account.as_deref() != Some(options.account.as_str())
                || tx.transaction_type != Some(TransactionType::OfferCreate)
            {
                return Err(Error::OrderNotFound);
            }

            // These two flags never produce a ledger entry, so they are only
            // readable from the transaction itself.
            immediate_or_cancel = tx.flags & tx_offer::IMMEDIATE_OR_CANCEL != 0;
            fill_or_kill = tx.flags & tx_offer::FILL_OR_KILL != 0;

            let totals = deltas::sum_exercised_deltas(tx);
            let derived = fallback_state(tx, &totals)?;
            tracing::debug!(
                account = %options.account,
                state = ?derived,
                "offer left no ledger entry, synthesized exercised totals"
            );
            state = Some(derived);

            let fields = NodeFields {
                account: Some(options.account.clone()),
                sequence: tx.sequence,
                flags: Some(tx.flags),
                taker_gets: Some(totals.taker_gets),
                taker_pays: Some(totals.taker_pays),
                book_directory: None,
                expiration: None,
            };
            (fields, None)
        }
    };

    let taker_gets = fields
        .taker_gets
        .as_ref()
        .ok_or(Error::Inconsistent("offer record without TakerGets"))?;
    let taker_pays = fields
        .taker_pays
        .as_ref()
        .ok_or(Error::Inconsistent("offer record without TakerPays"))?;

    // A resting offer carries its rate in the directory key; synthesized
    // fields derive it from the amounts instead.
    let mut exchange_rate = match &fields.book_directory {
        Some(key) => quality::decode_book_directory(key)
            .map_err(|_| Error::Inconsistent("undecodable book directory"))?,
        None if taker_gets.raw_value().is_zero() => BigDecimal::default(),
        None => to_precision(
            &(taker_pays.raw_value() / taker_gets.raw_value()),
            SIGNIFICANT_DIGITS,
        ),
    };

    // The ledger's rate convention counts the native asset in its smallest
    // unit. Scale a native side back to major units.
    let scale = BigDecimal::from(units::DROPS_PER_NATIVE_UNIT);
    if taker_gets.is_native() {
        exchange_rate = to_precision(&(&exchange_rate * &scale), SIGNIFICANT_DIGITS);
    }
    if taker_pays.is_native() {
        exchange_rate = to_precision(&(&exchange_rate / &scale), SIGNIFICANT_DIGITS);
    }

    let (is_bid, base_amount, counter_amount) =
        if options.preferences.base_is_taker_gets(taker_gets, taker_pays) {
            // The ledger rate is pays over gets, which already reads as
            // counter over base here.
            (false, taker_gets.normalize(), taker_pays.normalize())
        } else {
            if !exchange_rate.is_zero() {
                exchange_rate =
                    to_precision(&(BigDecimal::one() / &exchange_rate), SIGNIFICANT_DIGITS);
            }
            (true, taker_pays.normalize(), taker_gets.normalize())
        };

    let state = match state {
        Some(state) => state,
        None => entry_state(tx, options, entry, taker_gets, taker_pays),
    };

    // Passive and sell only take effect once the offer rests on the ledger,
    // so they are read from the entry rather than the transaction.
    let entry_flags = fields.flags.unwrap_or_default();

    Ok(ReconstructedOrder {
        account: options.account.clone(),
        is_bid,
        base_amount,
        counter_amount,
        exchange_rate,
        state,
        passive: entry_flags & ledger_offer::PASSIVE != 0,
        immediate_or_cancel,
        fill_or_kill,
        maximize_buy_or_sell: entry_flags & ledger_offer::SELL != 0,
        sequence: fields.sequence,
        ledger: tx.ledger_index,
        hash: tx.hash.clone(),
    })
}

/// Finds the offer entry owned by the queried account, narrowing by sequence
/// when one was supplied.
fn locate_offer<'a>(tx: &'a Transaction, options: &ReconstructOptions) -> Option<&'a AffectedNode> {
    tx.meta.affected_nodes.iter().find(|node| {
        if node.ledger_entry_type() != LedgerEntryType::Offer {
            return false;
        }
        let fields = node.fields();
        fields.account.as_deref() == Some(options.account.as_str())
            && options
                .sequence
                .is_none_or(|sequence| fields.sequence == Some(sequence))
    })
}

/// Derives the lifecycle state when the offer left no ledger entry, by
/// comparing what the transaction asked for with what it exercised.
fn fallback_state(tx: &Transaction, totals: &ExercisedTotals) -> Result<OrderState, Error> {
    let exercised_gets = totals.taker_gets.raw_value();
    let exercised_pays = totals.taker_pays.raw_value();
    if exercised_gets.is_zero() || exercised_pays.is_zero() {
        return Ok(OrderState::Failed);
    }

    let requested_gets = tx
        .taker_gets
        .as_ref()
        .ok_or(Error::Inconsistent("offer creation without TakerGets"))?;
    let requested_pays = tx
        .taker_pays
        .as_ref()
        .ok_or(Error::Inconsistent("offer creation without TakerPays"))?;

    // The exercised total may nominally exceed the request by sub-drop
    // rounding noise; meeting or exceeding it counts as filled.
    if requested_gets.raw_value() > exercised_gets || requested_pays.raw_value() > exercised_pays {
        Ok(OrderState::PartiallyFilled)
    } else {
        Ok(OrderState::Filled)
    }
}

/// Derives the lifecycle state from a located offer entry.
fn entry_state(
    tx: &Transaction,
    options: &ReconstructOptions,
    entry: Option<&AffectedNode>,
    taker_gets: &LedgerAmount,
    taker_pays: &LedgerAmount,
) -> OrderState {
    if tx.account.as_deref() == Some(options.account.as_str())
        && tx.transaction_type == Some(TransactionType::OfferCancel)
    {
        return OrderState::Cancelled;
    }

    let had_prior_amounts = entry
        .and_then(AffectedNode::previous_fields)
        .is_some_and(|previous| previous.taker_gets.is_some() && previous.taker_pays.is_some());

    if had_prior_amounts
        && entry.is_some_and(AffectedNode::is_deleted)
        && taker_gets.raw_value().is_zero()
        && taker_pays.raw_value().is_zero()
    {
        OrderState::Filled
    } else if had_prior_amounts {
        OrderState::PartiallyFilled
    } else {
        OrderState::Active
    }
}
