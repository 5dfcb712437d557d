//! Sensor reading types and display formatting
//!
//! These types mirror the JSON the firmware serves. Temperatures arrive in
//! degrees Fahrenheit (the firmware converts before serving).

use chrono::{DateTime, Local, LocalResult, TimeZone};
use serde::{Deserialize, Serialize};

/// A single historical reading as returned by /dht_history
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Seconds since the Unix epoch
    pub timestamp: i64,
    pub temperature: f64,
    pub humidity: f64,
}

/// Response body of /dht_history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub history: Vec<Reading>,
}

/// Response body of /dht_data
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Conditions {
    pub temperature: f64,
    pub humidity: f64,
}

impl Reading {
    /// Chart label for this reading, local time
    pub fn label(&self) -> String {
        match Local.timestamp_opt(self.timestamp, 0) {
            LocalResult::Single(dt) => time_label(dt),
            _ => self.timestamp.to_string(),
        }
    }
}

/// Readout format for temperatures: fixed two decimals
pub fn format_temperature(value: f64) -> String {
    format!("{value:.2}")
}

/// Readout format for humidity: fixed one decimal
pub fn format_humidity(value: f64) -> String {
    format!("{value:.1}")
}

/// Time-of-day label used for the x axis and the last-updated field
pub fn time_label(when: DateTime<Local>) -> String {
    when.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_formats_to_two_decimals() {
        assert_eq!(format_temperature(72.456), "72.46");
        assert_eq!(format_temperature(70.0), "70.00");
    }

    #[test]
    fn humidity_formats_to_one_decimal() {
        assert_eq!(format_humidity(41.23), "41.2");
        assert_eq!(format_humidity(45.0), "45.0");
    }

    #[test]
    fn parses_history_response() {
        let json = r#"{"history":[
            {"temperature":70.25,"humidity":40.5,"timestamp":1000},
            {"temperature":71.00,"humidity":41.0,"timestamp":1060}
        ]}"#;

        let parsed: HistoryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.history.len(), 2);
        assert_eq!(parsed.history[0].timestamp, 1000);
        assert_eq!(parsed.history[0].temperature, 70.25);
        assert_eq!(parsed.history[1].humidity, 41.0);
    }

    #[test]
    fn parses_current_conditions() {
        let json = r#"{"temperature": 72.46, "humidity": 41.2}"#;
        let parsed: Conditions = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.temperature, 72.46);
        assert_eq!(parsed.humidity, 41.2);
    }

    #[test]
    fn reading_label_is_time_of_day() {
        let reading = Reading {
            timestamp: 1000,
            temperature: 70.0,
            humidity: 40.0,
        };
        let label = reading.label();
        // HH:MM:SS, timezone-dependent digits
        assert_eq!(label.len(), 8);
        assert_eq!(label.matches(':').count(), 2);
    }

    #[test]
    fn time_label_formats_hms() {
        let now = Local::now();
        let label = time_label(now);
        assert_eq!(label.len(), 8);
        assert_eq!(label.matches(':').count(), 2);
    }
}
