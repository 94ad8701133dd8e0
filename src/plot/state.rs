//! Displayed plot state
//!
//! What the window currently shows. Only a successful refresh replaces the
//! chart; a failed one updates the status line and nothing else.

use crate::core::PayoffResult;

use super::chart::PayoffChart;
use super::refresh::status_message;

#[derive(Debug, Clone, Default)]
pub struct PlotState {
    chart: Option<PayoffChart>,
    status: String,
}

impl PlotState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chart(&self) -> Option<&PayoffChart> {
        self.chart.as_ref()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Apply a refresh result. Returns true if the chart was replaced.
    pub fn apply(&mut self, result: PayoffResult<PayoffChart>) -> bool {
        self.status = status_message(&result);
        match result {
            Ok(chart) => {
                self.chart = Some(chart);
                true
            }
            Err(_) => false,
        }
    }
}
