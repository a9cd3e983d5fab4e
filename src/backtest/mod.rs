//! Historical simulation of the signal strategy.

pub mod engine;

pub use engine::Backtester;
