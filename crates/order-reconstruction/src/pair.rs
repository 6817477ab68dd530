//! Deciding which side of a currency pair is the base currency.

use model::amount::{CurrencyCode, LedgerAmount};

/// Market conventions for base/counter classification: an ordered priority
/// list plus an explicit exception list for known-irregular pairs.
///
/// Classification is a total order over currencies, so for distinct pairs the
/// answer is antisymmetric regardless of which side the question is asked
/// from.
#[derive(Clone, Debug, Default)]
pub struct PairPreferences {
    priority: Vec<CurrencyCode>,
    exceptions: Vec<(CurrencyCode, CurrencyCode)>,
}

impl PairPreferences {
    pub fn new(
        priority: Vec<CurrencyCode>,
        exceptions: Vec<(CurrencyCode, CurrencyCode)>,
    ) -> Self {
        Self {
            priority,
            exceptions,
        }
    }

    /// Builds preferences from configuration lists. Exception entries are
    /// written as `"BASE/COUNTER"`; malformed entries are skipped.
    pub fn from_config(priority: &[String], exceptions: &[String]) -> Self {
        let exceptions = exceptions
            .iter()
            .filter_map(|entry| match entry.split_once('/') {
                Some((base, counter)) => Some((base.into(), counter.into())),
                None => {
                    tracing::warn!(%entry, "ignoring malformed currency pair exception");
                    None
                }
            })
            .collect();
        Self {
            priority: priority
                .iter()
                .map(|currency| CurrencyCode::from(currency.as_str()))
                .collect(),
            exceptions,
        }
    }

    /// Answers whether the `TakerGets` side of an offer denominates the base
    /// currency of the pair. Precedence: equal-currency issuer tie-break,
    /// then the exception list, then the priority list, then lexicographic
    /// order of the currency codes.
    pub fn base_is_taker_gets(
        &self,
        taker_gets: &LedgerAmount,
        taker_pays: &LedgerAmount,
    ) -> bool {
        let gets = taker_gets.normalize();
        let pays = taker_pays.normalize();

        // Re-exchange of one currency code under different issuers.
        if gets.currency == pays.currency {
            return gets.issuer <= pays.issuer;
        }

        if self
            .exceptions
            .iter()
            .any(|(base, counter)| *base == gets.currency && *counter == pays.currency)
        {
            return true;
        }
        if self
            .exceptions
            .iter()
            .any(|(base, counter)| *base == pays.currency && *counter == gets.currency)
        {
            return false;
        }

        let gets_priority = self.priority.iter().position(|c| *c == gets.currency);
        let pays_priority = self.priority.iter().position(|c| *c == pays.currency);
        match (gets_priority, pays_priority) {
            (Some(gets), Some(pays)) => gets < pays,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => gets.currency <= pays.currency,
        }
    }
}
