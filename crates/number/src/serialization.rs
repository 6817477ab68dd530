use {
    bigdecimal::BigDecimal,
    serde::{
        Deserializer, Serializer,
        de::{self, Visitor},
    },
    serde_with::{DeserializeAs, SerializeAs},
    std::{fmt, str::FromStr},
};

/// Serialize [`BigDecimal`] as a plain decimal string and deserialize it from
/// a decimal string or a bare JSON number.
#[derive(Debug, Default, Clone, Copy)]
pub struct DecimalStr;

impl SerializeAs<BigDecimal> for DecimalStr {
    fn serialize_as<S: Serializer>(
        source: &BigDecimal,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&source.normalized().to_string())
    }
}

impl<'de> DeserializeAs<'de, BigDecimal> for DecimalStr {
    fn deserialize_as<D>(deserializer: D) -> Result<BigDecimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DecimalVisitor;

        impl Visitor<'_> for DecimalVisitor {
            type Value = BigDecimal;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a decimal encoded as a string or a number")
            }

            fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                BigDecimal::from_str(s)
                    .map_err(|err| E::custom(format!("failed to decode {s:?} as a decimal: {err}")))
            }

            fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                // Go through the shortest decimal representation instead of
                // the raw bits so that 0.1 stays 0.1.
                self.visit_str(&v.to_string())
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(BigDecimal::from(v))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(BigDecimal::from(v))
            }
        }

        deserializer.deserialize_any(DecimalVisitor)
    }
}

/// Deserialize a field that callers may send as either a JSON string or a
/// bare number into the raw string, leaving semantic checks to the caller.
#[derive(Debug, Default, Clone, Copy)]
pub struct StringOrNumber;

impl SerializeAs<String> for StringOrNumber {
    fn serialize_as<S: Serializer>(source: &String, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(source)
    }
}

impl<'de> DeserializeAs<'de, String> for StringOrNumber {
    fn deserialize_as<D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StringOrNumberVisitor;

        impl Visitor<'_> for StringOrNumberVisitor {
            type Value = String;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a string or a number")
            }

            fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(s.to_owned())
            }

            fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v.to_string())
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v.to_string())
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v.to_string())
            }
        }

        deserializer.deserialize_any(StringOrNumberVisitor)
    }
}
