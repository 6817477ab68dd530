//! Decoding of the exchange rate embedded in an offer directory key.
//!
//! The low 64 bits of the key encode the resting offer's quality: one byte of
//! exponent biased by 100, then a 56 bit mantissa. The encoded value is
//! `mantissa * 10^(exponent - 100)`.

use {bigdecimal::BigDecimal, num::BigInt, thiserror::Error};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum DecodeError {
    #[error("directory key does not end in a 16 digit quality field")]
    MissingQuality,
    #[error("quality field is not hexadecimal")]
    NotHex,
}

/// Decodes the quality suffix of an offer directory key into the offer's
/// exchange rate, expressed in the ledger's raw-unit convention.
pub fn decode_book_directory(key: &str) -> Result<BigDecimal, DecodeError> {
    let tail = key
        .get(key.len().wrapping_sub(16)..)
        .filter(|tail| tail.len() == 16 && tail.is_ascii())
        .ok_or(DecodeError::MissingQuality)?;
    let exponent =
        i64::from(u8::from_str_radix(&tail[..2], 16).map_err(|_| DecodeError::NotHex)?) - 100;
    let mantissa = u64::from_str_radix(&tail[2..], 16).map_err(|_| DecodeError::NotHex)?;
    if mantissa == 0 {
        return Ok(BigDecimal::default());
    }
    Ok(BigDecimal::new(BigInt::from(mantissa), -exponent))
}
