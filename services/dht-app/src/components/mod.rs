pub mod chart;
pub mod readout;
