//! Break-even analysis
//!
//! Where each position stops losing money, and where the two gain curves
//! cross.

use serde::{Deserialize, Serialize};

use crate::core::PayoffInputs;

/// Break-even prices for the option and stock positions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakEven {
    /// Price at which the call's gain is zero (strike + premium)
    pub option: f64,
    /// Price at which the stock's gain is zero (purchase price)
    pub stock: f64,
    /// Price where the option and stock curves intersect.
    ///
    /// Below it the option loses less than the stock, above it the stock
    /// gains more. `None` when the curves never meet at a single price.
    pub crossover: Option<f64>,
}

/// Break-even prices for the given inputs.
///
/// Under the strike the call's gain is the flat `-premium`, which meets the
/// stock line at `current - premium`. Over the strike the two lines are
/// parallel, so that is the only candidate intersection.
pub fn break_even(inputs: &PayoffInputs) -> BreakEven {
    let strike = inputs.option.strike_price;
    let premium = inputs.option.contract_price;
    let current = inputs.stock.current_price;

    let candidate = current - premium;
    let crossover = if candidate >= 0.0 && candidate < strike {
        Some(candidate)
    } else {
        None
    };

    BreakEven {
        option: inputs.option.break_even(),
        stock: current,
        crossover,
    }
}
