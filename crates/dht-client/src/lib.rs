//! Client core for the DHT sensor dashboard
//!
//! Fetches current and historical readings over HTTP and maintains the
//! bounded chart window and readout state the frontend renders.

pub mod client;
pub mod error;
pub mod io;
pub mod panel;
pub mod reading;
pub mod series;

pub use client::DhtClient;
pub use error::{DhtError, Result};
