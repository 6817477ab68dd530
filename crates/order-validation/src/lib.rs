//! Submission-side validation of order requests.
//!
//! Validation is purely syntactic and semantic over the request document
//! itself; it never consults ledger state. Checks run in a fixed order and
//! the first failure wins, so callers always get a single error naming the
//! offending field and the shape it expected.

pub mod syntax;

use {
    bigdecimal::{BigDecimal, Zero},
    model::{
        amount::NATIVE_CURRENCY,
        order::{OrderRequest, RequestAmount},
    },
    std::str::FromStr,
    syntax::Syntax,
    thiserror::Error,
};

pub use syntax::BasicSyntax;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum FieldError {
    #[error("Missing parameter: {field}. {expected}")]
    Missing {
        field: &'static str,
        expected: &'static str,
    },
    #[error("Invalid parameter: {field}. {expected}")]
    Invalid {
        field: &'static str,
        expected: &'static str,
    },
    #[error(
        "Must supply base_amount and counter_amount complete with values for each. One of the \
         amount value fields may be omitted if exchange_rate is supplied"
    )]
    IncompleteAmounts,
}

const EXPECTED_ADDRESS: &str = "Must be a valid account address";
const EXPECTED_IS_BID: &str =
    "Boolean required to determine whether the order is a bid or an ask";
const EXPECTED_AMOUNT: &str =
    "Must be a valid amount, though \"value\" can be omitted if exchange_rate is specified";
const EXPECTED_RATE: &str = "Must be a string representation of a floating point number";
const EXPECTED_TIMESTAMP: &str = "Must be a valid timestamp";
const EXPECTED_TIMEOUT: &str = "Must be a positive integer";
const EXPECTED_CANCEL_REPLACE: &str =
    "Must be a positive integer representing the sequence number of an order to replace";

/// Validates an order request against the given syntax rules, returning the
/// first violation encountered.
///
/// Field type mismatches (a number where a boolean belongs, an array where an
/// object belongs) are rejected earlier, when the request document is
/// deserialized; this function assumes a shape-correct request and checks
/// presence and content.
pub fn validate(request: &OrderRequest, syntax: &impl Syntax) -> Result<(), FieldError> {
    let account = request.account.as_deref().ok_or(FieldError::Missing {
        field: "account",
        expected: EXPECTED_ADDRESS,
    })?;
    if !syntax.is_valid_address(account) {
        return Err(FieldError::Invalid {
            field: "account",
            expected: EXPECTED_ADDRESS,
        });
    }

    if request.is_bid.is_none() {
        return Err(FieldError::Missing {
            field: "is_bid",
            expected: EXPECTED_IS_BID,
        });
    }

    let base_amount = request.base_amount.as_ref().ok_or(FieldError::Missing {
        field: "base_amount",
        expected: EXPECTED_AMOUNT,
    })?;
    if !amount_is_well_formed(base_amount, syntax) {
        return Err(FieldError::Invalid {
            field: "base_amount",
            expected: EXPECTED_AMOUNT,
        });
    }

    let counter_amount = request.counter_amount.as_ref().ok_or(FieldError::Missing {
        field: "counter_amount",
        expected: EXPECTED_AMOUNT,
    })?;
    if !amount_is_well_formed(counter_amount, syntax) {
        return Err(FieldError::Invalid {
            field: "counter_amount",
            expected: EXPECTED_AMOUNT,
        });
    }

    if request
        .exchange_rate
        .as_deref()
        .is_some_and(|rate| !is_float(rate))
    {
        return Err(FieldError::Invalid {
            field: "exchange_rate",
            expected: EXPECTED_RATE,
        });
    }

    // Either amount may omit its value, but only when a usable exchange rate
    // makes the missing side derivable.
    let rate_supplied = request.exchange_rate.as_deref().is_some_and(is_float);
    for amount in [base_amount, counter_amount] {
        let has_value = amount.value.as_deref().is_some_and(is_float);
        if !has_value && !rate_supplied {
            return Err(FieldError::IncompleteAmounts);
        }
    }

    if request
        .expiration_timestamp
        .as_deref()
        .is_some_and(|timestamp| !syntax.is_valid_timestamp(timestamp))
    {
        return Err(FieldError::Invalid {
            field: "expiration_timestamp",
            expected: EXPECTED_TIMESTAMP,
        });
    }

    if request
        .ledger_timeout
        .as_deref()
        .is_some_and(|timeout| !is_nonnegative_integer(timeout))
    {
        return Err(FieldError::Invalid {
            field: "ledger_timeout",
            expected: EXPECTED_TIMEOUT,
        });
    }

    if request
        .cancel_replace
        .as_deref()
        .is_some_and(|sequence| !is_nonnegative_integer(sequence))
    {
        return Err(FieldError::Invalid {
            field: "cancel_replace",
            expected: EXPECTED_CANCEL_REPLACE,
        });
    }

    Ok(())
}

/// A request amount is well formed when its currency parses and its issuer
/// matches the currency: empty for the native asset, a valid address for
/// everything else.
fn amount_is_well_formed(amount: &RequestAmount, syntax: &impl Syntax) -> bool {
    if !syntax.is_valid_currency(&amount.currency) {
        return false;
    }
    if amount.currency.eq_ignore_ascii_case(NATIVE_CURRENCY) {
        amount.issuer.is_empty()
    } else {
        syntax.is_valid_address(&amount.issuer)
    }
}

fn is_float(value: &str) -> bool {
    BigDecimal::from_str(value).is_ok()
}

fn is_nonnegative_integer(value: &str) -> bool {
    match BigDecimal::from_str(value) {
        Ok(parsed) => parsed.is_integer() && parsed >= BigDecimal::zero(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use {super::*, model::order::OrderRequest, serde_json::json};

    fn request(value: serde_json::Value) -> OrderRequest {
        serde_json::from_value(value).unwrap()
    }

    fn valid_order() -> serde_json::Value {
        json!({
            "account": "rLpq5RcRzA8FU1yUqEPW4xfsdwon7casuM",
            "is_bid": true,
            "base_amount": {
                "value": "100",
                "currency": "FAK",
                "issuer": "r4nkJpL9se94ASQut4eXRRtnBPtDpY2PZ6",
            },
            "counter_amount": {
                "value": "50",
                "currency": "XRP",
                "issuer": "",
            },
        })
    }

    #[test]
    fn accepts_complete_order() {
        assert_eq!(validate(&request(valid_order()), &BasicSyntax), Ok(()));
    }

    #[test]
    fn rejects_missing_account() {
        let mut order = valid_order();
        order.as_object_mut().unwrap().remove("account");
        assert_eq!(
            validate(&request(order), &BasicSyntax),
            Err(FieldError::Missing {
                field: "account",
                expected: EXPECTED_ADDRESS,
            })
        );
    }

    #[test]
    fn rejects_malformed_account() {
        let mut order = valid_order();
        order["account"] = json!("not an address");
        assert_eq!(
            validate(&request(order), &BasicSyntax),
            Err(FieldError::Invalid {
                field: "account",
                expected: EXPECTED_ADDRESS,
            })
        );
    }

    #[test]
    fn rejects_missing_is_bid() {
        let mut order = valid_order();
        order.as_object_mut().unwrap().remove("is_bid");
        assert_eq!(
            validate(&request(order), &BasicSyntax),
            Err(FieldError::Missing {
                field: "is_bid",
                expected: EXPECTED_IS_BID,
            })
        );
    }

    #[test]
    fn rejects_missing_base_amount() {
        let mut order = valid_order();
        order.as_object_mut().unwrap().remove("base_amount");
        assert_eq!(
            validate(&request(order), &BasicSyntax),
            Err(FieldError::Missing {
                field: "base_amount",
                expected: EXPECTED_AMOUNT,
            })
        );
    }

    #[test]
    fn rejects_bad_currency() {
        let mut order = valid_order();
        order["base_amount"]["currency"] = json!("FAKE");
        assert_eq!(
            validate(&request(order), &BasicSyntax),
            Err(FieldError::Invalid {
                field: "base_amount",
                expected: EXPECTED_AMOUNT,
            })
        );
    }

    #[test]
    fn rejects_native_amount_with_issuer() {
        let mut order = valid_order();
        order["counter_amount"]["issuer"] = json!("r4nkJpL9se94ASQut4eXRRtnBPtDpY2PZ6");
        assert_eq!(
            validate(&request(order), &BasicSyntax),
            Err(FieldError::Invalid {
                field: "counter_amount",
                expected: EXPECTED_AMOUNT,
            })
        );
    }

    #[test]
    fn rejects_issued_amount_without_issuer() {
        let mut order = valid_order();
        order["base_amount"]["issuer"] = json!("");
        assert_eq!(
            validate(&request(order), &BasicSyntax),
            Err(FieldError::Invalid {
                field: "base_amount",
                expected: EXPECTED_AMOUNT,
            })
        );
    }

    #[test]
    fn rejects_unparsable_exchange_rate() {
        let mut order = valid_order();
        order["exchange_rate"] = json!("fast");
        assert_eq!(
            validate(&request(order), &BasicSyntax),
            Err(FieldError::Invalid {
                field: "exchange_rate",
                expected: EXPECTED_RATE,
            })
        );
    }

    #[test]
    fn allows_omitted_value_when_rate_is_supplied() {
        let mut order = valid_order();
        order["base_amount"].as_object_mut().unwrap().remove("value");
        order["exchange_rate"] = json!("0.5");
        assert_eq!(validate(&request(order), &BasicSyntax), Ok(()));
    }

    #[test]
    fn rejects_omitted_value_without_rate() {
        let mut order = valid_order();
        order["counter_amount"]
            .as_object_mut()
            .unwrap()
            .remove("value");
        assert_eq!(
            validate(&request(order), &BasicSyntax),
            Err(FieldError::IncompleteAmounts)
        );
    }

    #[test]
    fn rejects_bad_expiration_timestamp() {
        let mut order = valid_order();
        order["expiration_timestamp"] = json!("tomorrow");
        assert_eq!(
            validate(&request(order), &BasicSyntax),
            Err(FieldError::Invalid {
                field: "expiration_timestamp",
                expected: EXPECTED_TIMESTAMP,
            })
        );
    }

    #[test]
    fn ledger_timeout_must_be_a_nonnegative_integer() {
        for (timeout, ok) in [
            (json!("10"), true),
            (json!(10), true),
            (json!("10.0"), true),
            (json!("0"), true),
            (json!("10.5"), false),
            (json!("-10"), false),
            (json!("soon"), false),
        ] {
            let mut order = valid_order();
            order["ledger_timeout"] = timeout.clone();
            let result = validate(&request(order), &BasicSyntax);
            assert_eq!(result.is_ok(), ok, "ledger_timeout = {timeout}");
        }
    }

    #[test]
    fn cancel_replace_must_be_a_nonnegative_integer() {
        let mut order = valid_order();
        order["cancel_replace"] = json!("28.5");
        assert_eq!(
            validate(&request(order), &BasicSyntax),
            Err(FieldError::Invalid {
                field: "cancel_replace",
                expected: EXPECTED_CANCEL_REPLACE,
            })
        );

        let mut order = valid_order();
        order["cancel_replace"] = json!(28);
        assert_eq!(validate(&request(order), &BasicSyntax), Ok(()));
    }

    #[test]
    fn errors_render_field_and_expectation() {
        let error = FieldError::Invalid {
            field: "exchange_rate",
            expected: EXPECTED_RATE,
        };
        assert_eq!(
            error.to_string(),
            "Invalid parameter: exchange_rate. Must be a string representation of a floating \
             point number"
        );
    }
}
