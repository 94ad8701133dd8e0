//! Plot refresh
//!
//! Turns raw field text into a complete chart description. Nothing here
//! touches widgets; the GUI binary applies the result.

pub mod chart;
pub mod refresh;
pub mod state;

pub use chart::{
    PayoffChart, ReferenceLine, OPTION_SERIES_NAME, STOCK_SERIES_NAME, TITLE, X_AXIS_LABEL,
    Y_AXIS_LABEL,
};
pub use refresh::{refresh, refresh_with_config, status_message, INVALID_INPUT_MESSAGE};
pub use state::PlotState;
