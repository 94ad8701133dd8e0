//! Refresh: validate field text and compute a new chart
//!
//! Pure request/response. The caller decides what to do with the result;
//! a failed refresh carries no partial chart.

use chrono::Utc;

use crate::config::PlotConfig;
use crate::core::{PayoffError, PayoffResult, RawInputs};
use crate::payoff::{break_even, option_gain, owning_stock_gain, EvaluationRange};

use super::chart::PayoffChart;

/// Status text shown when any field fails to parse
pub const INVALID_INPUT_MESSAGE: &str = "Please enter valid floating point values!";

/// Refresh with the default sweep (200 prices up to 3x the largest input)
pub fn refresh(raw: &RawInputs) -> PayoffResult<PayoffChart> {
    refresh_with_config(raw, &PlotConfig::default())
}

/// Refresh using the sweep settings from `config`
pub fn refresh_with_config(raw: &RawInputs, config: &PlotConfig) -> PayoffResult<PayoffChart> {
    let inputs = match raw.parse() {
        Ok(inputs) => inputs,
        Err(e) => {
            tracing::warn!("Rejected plot inputs: {}", e);
            return Err(e);
        }
    };

    let range = EvaluationRange::for_inputs(&inputs, config.range_multiplier, config.samples);

    let option = option_gain(
        inputs.option.strike_price,
        inputs.option.contract_price,
        range.prices(),
    );
    let stock = owning_stock_gain(inputs.stock.current_price, range.prices());

    tracing::debug!(
        "Refreshed payoff chart: {} prices over [0, {}]",
        range.len(),
        range.x_max()
    );

    Ok(PayoffChart {
        inputs,
        break_even: break_even(&inputs),
        range,
        option_gain: option,
        stock_gain: stock,
        generated_at: Utc::now(),
    })
}

/// Status line for a refresh result
pub fn status_message(result: &PayoffResult<PayoffChart>) -> String {
    match result {
        Ok(chart) => {
            let be = &chart.break_even;
            let mut msg = format!(
                "Updated {} | break-even: option {:.2}, stock {:.2}",
                chart.generated_at.format("%H:%M:%S UTC"),
                be.option,
                be.stock
            );
            if let Some(x) = be.crossover {
                msg.push_str(&format!(" | curves cross at {:.2}", x));
            }
            msg
        }
        Err(PayoffError::InvalidInputFormat { .. }) => INVALID_INPUT_MESSAGE.to_string(),
    }
}
