//! Trade signal generation.

pub mod signal_generator;

pub use signal_generator::SignalGenerator;
