//! Dashboard panel state
//!
//! The refresh cycle mutates this struct: begin sets the busy flag, apply
//! writes the readout and chart, finish clears the flag on both outcomes.
//! The frontend renders it; nothing reads the readout strings back.

use crate::reading::{format_humidity, format_temperature, Conditions};
use crate::series::ChartSeries;

/// Marker written into all three readout fields on a failed refresh
pub const ERROR_MARKER: &str = "Error";

/// The numeric readout fields, write-only projection for the UI
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Readout {
    pub temperature: String,
    pub humidity: String,
    pub last_updated: String,
}

/// Everything the dashboard page displays
#[derive(Debug, Clone, Default)]
pub struct Panel {
    pub readout: Readout,
    /// None until the history bootstrap succeeds; appends are skipped until then
    pub chart: Option<ChartSeries>,
    /// True while a refresh is in flight: loader visible, button disabled
    pub busy: bool,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the bootstrapped chart window. Called once, at startup.
    pub fn install_chart(&mut self, series: ChartSeries) {
        self.chart = Some(series);
    }

    /// Pre-step of a refresh: show the loader, disable the manual trigger
    pub fn begin_refresh(&mut self) {
        self.busy = true;
    }

    /// Successful refresh: update the readout and append to the chart window
    /// if it exists. `label` is derived from local receipt time, not from
    /// the server.
    pub fn apply_reading(&mut self, conditions: &Conditions, label: String) {
        self.readout.temperature = format_temperature(conditions.temperature);
        self.readout.humidity = format_humidity(conditions.humidity);
        self.readout.last_updated = label.clone();

        if let Some(chart) = self.chart.as_mut() {
            chart.push(label, conditions.temperature, conditions.humidity);
        }
    }

    /// Failed refresh: all three fields show the error marker together, the
    /// chart window is left unmodified
    pub fn apply_failure(&mut self) {
        self.readout.temperature = ERROR_MARKER.to_string();
        self.readout.humidity = ERROR_MARKER.to_string();
        self.readout.last_updated = ERROR_MARKER.to_string();
    }

    /// Post-step of a refresh, runs on success and failure
    pub fn finish_refresh(&mut self) {
        self.busy = false;
    }
}
