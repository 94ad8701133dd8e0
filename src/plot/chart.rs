//! Chart description
//!
//! Everything needed to draw one payoff comparison: the swept prices, both
//! gain series, fixed labels and the zero reference lines.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::PayoffInputs;
use crate::payoff::{BreakEven, EvaluationRange, PayoffSeries};

pub const TITLE: &str = "Option Gain vs owning an stock name";
pub const X_AXIS_LABEL: &str = "Stock price at execution time";
pub const Y_AXIS_LABEL: &str = "Gain for each unit of the stock";
pub const OPTION_SERIES_NAME: &str = "Option Gain";
pub const STOCK_SERIES_NAME: &str = "Owning a stock";

/// Axis-parallel reference line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ReferenceLine {
    /// y = value
    Horizontal(f64),
    /// x = value
    Vertical(f64),
}

/// A fully computed payoff chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffChart {
    pub inputs: PayoffInputs,
    pub range: EvaluationRange,
    pub option_gain: PayoffSeries,
    pub stock_gain: PayoffSeries,
    pub break_even: BreakEven,
    pub generated_at: DateTime<Utc>,
}

impl PayoffChart {
    pub fn title(&self) -> &'static str {
        TITLE
    }

    pub fn prices(&self) -> &[f64] {
        self.range.prices()
    }

    /// Lines through the origin on both axes
    pub fn reference_lines(&self) -> [ReferenceLine; 2] {
        [ReferenceLine::Horizontal(0.0), ReferenceLine::Vertical(0.0)]
    }

    /// (price, gain) pairs for the option curve
    pub fn option_points(&self) -> Vec<[f64; 2]> {
        zip_points(self.prices(), &self.option_gain)
    }

    /// (price, gain) pairs for the stock curve
    pub fn stock_points(&self) -> Vec<[f64; 2]> {
        zip_points(self.prices(), &self.stock_gain)
    }

    /// Named series in drawing order
    pub fn series(&self) -> [(&'static str, Vec<[f64; 2]>); 2] {
        [
            (OPTION_SERIES_NAME, self.option_points()),
            (STOCK_SERIES_NAME, self.stock_points()),
        ]
    }
}

fn zip_points(xs: &[f64], ys: &[f64]) -> Vec<[f64; 2]> {
    xs.iter().zip(ys).map(|(&x, &y)| [x, y]).collect()
}
