//! Evaluation range
//!
//! Evenly spaced hypothetical future prices swept from zero up to a multiple
//! of the largest input price.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::core::PayoffInputs;

/// Number of prices in the sweep
pub const DEFAULT_SAMPLES: usize = 200;

/// Upper bound of the sweep as a multiple of the largest input price
pub const DEFAULT_RANGE_MULTIPLIER: f64 = 3.0;

/// Swept price grid, ordered from 0 to `x_max` inclusive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRange {
    prices: Vec<f64>,
    x_max: f64,
}

impl EvaluationRange {
    /// `samples` evenly spaced prices over `[0, x_max]`
    pub fn linspace(x_max: f64, samples: usize) -> Self {
        let mut prices = Array1::linspace(0.0, x_max, samples).to_vec();

        // Pin the endpoint so accumulated step error never drops it
        if samples > 1 {
            prices[samples - 1] = x_max;
        }

        Self { prices, x_max }
    }

    /// Sweep for the given inputs: `[0, multiplier * max(strike, contract, current)]`
    pub fn for_inputs(inputs: &PayoffInputs, multiplier: f64, samples: usize) -> Self {
        Self::linspace(multiplier * inputs.max_price(), samples)
    }

    /// Default sweep: 200 prices up to three times the largest input
    pub fn standard(inputs: &PayoffInputs) -> Self {
        Self::for_inputs(inputs, DEFAULT_RANGE_MULTIPLIER, DEFAULT_SAMPLES)
    }

    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Distance between neighbouring prices
    pub fn step(&self) -> f64 {
        if self.prices.len() > 1 {
            self.x_max / (self.prices.len() - 1) as f64
        } else {
            0.0
        }
    }
}
