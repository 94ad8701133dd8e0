//! # Option Payoff - Call Option vs Stock Ownership
//!
//! Compares the gain at expiry of buying a call option against buying the
//! underlying outright, over a sweep of hypothetical future prices.
//!
//! ## Key Components
//!
//! - **Core**: Position parameters, field parsing, errors
//! - **Payoff**: Gain curves, evaluation range, break-even prices
//! - **Plot**: Refresh from raw field text into a chart description
//! - **Config**: Startup defaults and sweep settings
//!
//! ## Usage
//!
//! ```rust
//! use option_payoff::prelude::*;
//!
//! let raw = RawInputs::new("16.0", "4.0", "19.25");
//! let chart = refresh(&raw).unwrap();
//!
//! assert_eq!(chart.prices().len(), 200);
//! assert_eq!(chart.range.x_max(), 57.75);
//!
//! // Every tenth row of the comparison table
//! for (i, &p) in chart.prices().iter().enumerate().step_by(10) {
//!     println!("{:>7.2} | {:>7.2} | {:>7.2}", p, chart.option_gain[i], chart.stock_gain[i]);
//! }
//!
//! let be = chart.break_even;
//! assert_eq!(be.option, 20.0);
//! assert_eq!(be.crossover, Some(15.25));
//! ```
//!
//! ## What This Does NOT Do
//!
//! - Price options before expiry (no volatility or time value)
//! - Put options or multi-leg strategies
//! - Fetch market data

pub mod config;
pub mod core;
pub mod payoff;
pub mod plot;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{
        OptionParameters, PayoffError, PayoffInputs, PayoffResult, RawInputs, StockParameters,
    };

    // Payoff
    pub use crate::payoff::{
        break_even, option_gain, owning_stock_gain, BreakEven, EvaluationRange, PayoffSeries,
    };

    // Plot
    pub use crate::plot::{
        refresh, refresh_with_config, status_message, PayoffChart, PlotState, ReferenceLine,
    };

    pub use crate::config::PlotConfig;
}

// Re-export main types at crate root
pub use crate::core::{PayoffError, PayoffResult};
pub use crate::payoff::{option_gain, owning_stock_gain};
