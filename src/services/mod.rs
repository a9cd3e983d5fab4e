//! Collaborator seams: market data in, result records out

pub mod market_data;
pub mod sink;
pub mod summary;

pub use market_data::{CsvMarketDataProvider, MarketDataProvider, StaticMarketDataProvider};
pub use sink::{JsonLinesSink, MemorySink, ResultSink};
pub use summary::RunSummary;
