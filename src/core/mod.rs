//! Core data types for the payoff analyser
//!
//! Defines fundamental types:
//! - OptionParameters: strike and premium of a purchased call
//! - StockParameters: purchase price of the underlying
//! - RawInputs / PayoffInputs: user text and its parsed form

pub mod params;
pub mod error;

pub use params::*;
pub use error::*;
