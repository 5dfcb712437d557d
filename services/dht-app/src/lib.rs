//! DHT Sensor Dashboard - Leptos frontend
//!
//! Reactive web UI for the temperature/humidity sensor: bounded live chart
//! plus a numeric readout, refreshed by timer and on demand.

pub mod app;
pub mod components;

pub use app::App;

/// Entry point for the WASM client
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    leptos::mount::mount_to_body(App);
}
