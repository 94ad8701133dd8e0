//! Application configuration
//!
//! Startup defaults for the input fields and the constants that shape the
//! price sweep. Compiled in; nothing is read from or written to disk.

use serde::{Deserialize, Serialize};

use crate::core::{PayoffInputs, RawInputs};
use crate::payoff::{DEFAULT_RANGE_MULTIPLIER, DEFAULT_SAMPLES};

/// Plot and window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Initial strike price field
    pub strike_price: f64,
    /// Initial contract price field
    pub contract_price: f64,
    /// Initial current price field
    pub current_price: f64,
    /// Number of prices in the sweep
    /// Default: 200
    pub samples: usize,
    /// Sweep upper bound as a multiple of the largest input
    /// Default: 3.0
    pub range_multiplier: f64,
    /// Initial window size in points
    pub window_size: [f32; 2],
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            strike_price: 16.0,
            contract_price: 4.0,
            current_price: 19.25,
            samples: DEFAULT_SAMPLES,
            range_multiplier: DEFAULT_RANGE_MULTIPLIER,
            window_size: [800.0, 720.0],
        }
    }
}

impl PlotConfig {
    /// Default inputs as parsed values
    pub fn default_inputs(&self) -> PayoffInputs {
        PayoffInputs::new(self.strike_price, self.contract_price, self.current_price)
    }

    /// Default inputs as field text
    pub fn default_raw_inputs(&self) -> RawInputs {
        RawInputs::from_inputs(&self.default_inputs())
    }
}
