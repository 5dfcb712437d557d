//! Bounded chart window
//!
//! Three parallel sequences (labels, temperature, humidity) that always have
//! equal length. Appends evict the oldest entry once the window is full.

use std::collections::VecDeque;

use crate::reading::Reading;

/// Maximum number of points kept in the chart window
pub const WINDOW_SIZE: usize = 60;

/// Sliding window of chart points, index-aligned across the three sequences
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    labels: VecDeque<String>,
    temperature: VecDeque<f64>,
    humidity: VecDeque<f64>,
}

impl ChartSeries {
    pub fn new() -> Self {
        Self {
            labels: VecDeque::with_capacity(WINDOW_SIZE),
            temperature: VecDeque::with_capacity(WINDOW_SIZE),
            humidity: VecDeque::with_capacity(WINDOW_SIZE),
        }
    }

    /// Build a window from historical readings, preserving response order.
    /// An oversized history keeps its newest `WINDOW_SIZE` entries.
    pub fn from_history(history: &[Reading]) -> Self {
        let mut series = Self::new();
        for reading in history {
            series.push(reading.label(), reading.temperature, reading.humidity);
        }
        series
    }

    /// Append a point, evicting the oldest entry from all three sequences
    /// when the window is full
    pub fn push(&mut self, label: String, temperature: f64, humidity: f64) {
        if self.labels.len() >= WINDOW_SIZE {
            self.labels.pop_front();
            self.temperature.pop_front();
            self.humidity.pop_front();
        }
        self.labels.push_back(label);
        self.temperature.push_back(temperature);
        self.humidity.push_back(humidity);
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn temperature(&self) -> impl Iterator<Item = f64> + '_ {
        self.temperature.iter().copied()
    }

    pub fn humidity(&self) -> impl Iterator<Item = f64> + '_ {
        self.humidity.iter().copied()
    }
}
