//! Payoff calculations
//!
//! Piecewise-linear gain curves at expiry, evaluated over a sweep of
//! hypothetical future prices:
//! - Calculator: call option and stock ownership gain
//! - Range: the swept price grid
//! - Break-even: where each position stops losing money

pub mod break_even;
pub mod calculator;
pub mod range;

pub use break_even::{break_even, BreakEven};
pub use calculator::{option_gain, owning_stock_gain, PayoffSeries};
pub use range::{EvaluationRange, DEFAULT_RANGE_MULTIPLIER, DEFAULT_SAMPLES};
