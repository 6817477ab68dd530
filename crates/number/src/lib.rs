pub mod serialization;
pub mod units;

use bigdecimal::BigDecimal;

/// Number of significant digits the ledger's decimal representation is good
/// for. Monetary values and rates are re-rounded to this precision after
/// every arithmetic step that could widen them.
pub const SIGNIFICANT_DIGITS: u64 = 15;

/// Rounds `value` to `digits` significant digits and strips trailing zeros.
pub fn to_precision(value: &BigDecimal, digits: u64) -> BigDecimal {
    value.with_prec(digits).normalized()
}

#[cfg(test)]
mod tests {
    use {super::*, std::str::FromStr};

    #[test]
    fn rounds_to_significant_digits() {
        let value = BigDecimal::from_str("64.999999999999985").unwrap();
        assert_eq!(
            to_precision(&value, SIGNIFICANT_DIGITS),
            BigDecimal::from_str("65").unwrap()
        );

        let value = BigDecimal::from_str("32.005075025047855").unwrap();
        assert_eq!(
            to_precision(&value, SIGNIFICANT_DIGITS),
            BigDecimal::from_str("32.0050750250479").unwrap()
        );
    }

    #[test]
    fn short_values_are_untouched() {
        let value = BigDecimal::from_str("0.5").unwrap();
        assert_eq!(to_precision(&value, SIGNIFICANT_DIGITS).to_string(), "0.5");
    }
}
