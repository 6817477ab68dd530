use bigdecimal::BigDecimal;

/// Drops (the ledger's smallest indivisible unit) per major unit of the
/// native asset.
pub const DROPS_PER_NATIVE_UNIT: i64 = 1_000_000;

/// Converts a drop count into major units of the native asset.
pub fn drops_to_native(drops: &BigDecimal) -> BigDecimal {
    (drops / BigDecimal::from(DROPS_PER_NATIVE_UNIT)).normalized()
}
