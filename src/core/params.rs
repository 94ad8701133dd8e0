//! Position parameters
//!
//! The scalar inputs of a payoff comparison: a purchased call option and the
//! alternative of buying the underlying outright.

use serde::{Deserialize, Serialize};

use super::error::{PayoffError, PayoffResult};

/// A purchased call option
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionParameters {
    /// Strike price
    pub strike_price: f64,
    /// Premium paid for the contract
    pub contract_price: f64,
}

impl OptionParameters {
    pub fn new(strike_price: f64, contract_price: f64) -> Self {
        Self {
            strike_price,
            contract_price,
        }
    }

    /// Price at expiry where the option neither gains nor loses
    pub fn break_even(&self) -> f64 {
        self.strike_price + self.contract_price
    }
}

/// Outright ownership of the underlying
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StockParameters {
    /// Price paid for one unit today
    pub current_price: f64,
}

impl StockParameters {
    pub fn new(current_price: f64) -> Self {
        Self { current_price }
    }
}

/// Parsed inputs for one refresh
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoffInputs {
    pub option: OptionParameters,
    pub stock: StockParameters,
}

impl PayoffInputs {
    pub fn new(strike_price: f64, contract_price: f64, current_price: f64) -> Self {
        Self {
            option: OptionParameters::new(strike_price, contract_price),
            stock: StockParameters::new(current_price),
        }
    }

    /// Largest of strike, premium and current price.
    ///
    /// NaN in any input makes the result NaN (`f64::max` would drop it).
    pub fn max_price(&self) -> f64 {
        [
            self.option.strike_price,
            self.option.contract_price,
            self.stock.current_price,
        ]
        .into_iter()
        .fold(f64::NEG_INFINITY, |acc, x| if x.is_nan() || x > acc { x } else { acc })
    }
}

/// Field names shown in validation errors
pub const STRIKE_PRICE_FIELD: &str = "strike_price";
pub const CONTRACT_PRICE_FIELD: &str = "contract_price";
pub const CURRENT_PRICE_FIELD: &str = "current_price";

/// Unparsed text as typed into the input fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInputs {
    pub strike_price: String,
    pub contract_price: String,
    pub current_price: String,
}

impl RawInputs {
    pub fn new(
        strike_price: impl Into<String>,
        contract_price: impl Into<String>,
        current_price: impl Into<String>,
    ) -> Self {
        Self {
            strike_price: strike_price.into(),
            contract_price: contract_price.into(),
            current_price: current_price.into(),
        }
    }

    /// Format parsed values back into field text
    pub fn from_inputs(inputs: &PayoffInputs) -> Self {
        Self::new(
            format!("{:?}", inputs.option.strike_price),
            format!("{:?}", inputs.option.contract_price),
            format!("{:?}", inputs.stock.current_price),
        )
    }

    /// Parse all three fields, stopping at the first one that fails
    pub fn parse(&self) -> PayoffResult<PayoffInputs> {
        let strike_price = parse_field(STRIKE_PRICE_FIELD, &self.strike_price)?;
        let contract_price = parse_field(CONTRACT_PRICE_FIELD, &self.contract_price)?;
        let current_price = parse_field(CURRENT_PRICE_FIELD, &self.current_price)?;

        Ok(PayoffInputs::new(strike_price, contract_price, current_price))
    }
}

/// Parse one field as a floating point number, ignoring surrounding whitespace
pub fn parse_field(field: &'static str, text: &str) -> PayoffResult<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| PayoffError::invalid_input(field, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let raw = RawInputs::new("16.0", "4.0", "19.25");
        let inputs = raw.parse().unwrap();

        assert_eq!(inputs.option.strike_price, 16.0);
        assert_eq!(inputs.option.contract_price, 4.0);
        assert_eq!(inputs.stock.current_price, 19.25);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let raw = RawInputs::new(" 16 ", "\t4\n", "19.25 ");
        let inputs = raw.parse().unwrap();
        assert_eq!(inputs, PayoffInputs::new(16.0, 4.0, 19.25));
    }

    #[test]
    fn test_parse_accepts_exponent_and_sign() {
        let raw = RawInputs::new("1.6e1", "-4", "+19.25");
        let inputs = raw.parse().unwrap();
        assert_eq!(inputs, PayoffInputs::new(16.0, -4.0, 19.25));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        for (raw, field) in [
            (RawInputs::new("abc", "4.0", "19.25"), STRIKE_PRICE_FIELD),
            (RawInputs::new("16.0", "four", "19.25"), CONTRACT_PRICE_FIELD),
            (RawInputs::new("16.0", "4.0", ""), CURRENT_PRICE_FIELD),
        ] {
            match raw.parse() {
                Err(PayoffError::InvalidInputFormat { field: f, .. }) => assert_eq!(f, field),
                other => panic!("expected invalid input for {}, got {:?}", field, other),
            }
        }
    }

    #[test]
    fn test_parse_rejects_digit_separators() {
        let err = parse_field(STRIKE_PRICE_FIELD, "1_6.0").unwrap_err();
        assert_eq!(err, PayoffError::invalid_input(STRIKE_PRICE_FIELD, "1_6.0"));
    }

    #[test]
    fn test_parse_reports_first_failure() {
        let raw = RawInputs::new("x", "y", "z");
        match raw.parse() {
            Err(PayoffError::InvalidInputFormat { field, value }) => {
                assert_eq!(field, STRIKE_PRICE_FIELD);
                assert_eq!(value, "x");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_from_inputs_round_trips_text() {
        let inputs = PayoffInputs::new(16.0, 4.0, 19.25);
        let raw = RawInputs::from_inputs(&inputs);
        assert_eq!(raw, RawInputs::new("16.0", "4.0", "19.25"));
    }

    #[test]
    fn test_max_price_and_break_even() {
        let inputs = PayoffInputs::new(16.0, 4.0, 19.25);
        assert_eq!(inputs.max_price(), 19.25);
        assert_eq!(inputs.option.break_even(), 20.0);

        let premium_heavy = PayoffInputs::new(1.0, 30.0, 2.0);
        assert_eq!(premium_heavy.max_price(), 30.0);
    }

    #[test]
    fn test_max_price_propagates_nan() {
        assert!(PayoffInputs::new(f64::NAN, 4.0, 19.25).max_price().is_nan());
        assert!(PayoffInputs::new(16.0, f64::NAN, 19.25).max_price().is_nan());
        assert!(PayoffInputs::new(16.0, 4.0, f64::NAN).max_price().is_nan());
        assert_eq!(PayoffInputs::new(16.0, 4.0, f64::INFINITY).max_price(), f64::INFINITY);
    }
}
