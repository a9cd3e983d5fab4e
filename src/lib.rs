//! Signalbench: indicator, signal, backtest and direction-accuracy pipeline
//! for daily equity price series.

pub mod backtest;
pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod prediction;
pub mod services;
pub mod signals;

pub use error::AnalysisError;
