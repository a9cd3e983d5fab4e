//! Unit tests for CSV price parsing and the static provider

use chrono::NaiveDate;
use signalbench::models::bars::PriceBar;
use signalbench::services::market_data::{
    CsvMarketDataProvider, MarketDataProvider, StaticMarketDataProvider,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_parse_daily_history_export() {
    let csv = "\
Date,Open,High,Low,Close,Adj Close,Volume
2024-01-02,100.0,101.5,99.0,101.0,100.2,120000
2024-01-03,101.0,102.0,100.5,101.8,101.0,98000
";
    let bars = CsvMarketDataProvider::parse_csv(csv.as_bytes()).unwrap();
    assert_eq!(bars.len(), 2);
    assert_eq!(
        bars[0],
        PriceBar::new(date(2024, 1, 2), 100.0, 101.5, 99.0, 101.0, 120000)
    );
    // Close, not Adj Close, is the price used downstream.
    assert_eq!(bars[1].close, 101.8);
}

#[test]
fn test_incomplete_rows_are_dropped() {
    let csv = "\
Date,Open,High,Low,Close,Volume
2024-01-02,100,101,99,100.5,1000
2024-01-03,,,,,
2024-01-04,101,102,100,null,1200
2024-01-05,102,103,101,102.5,1300
";
    let bars = CsvMarketDataProvider::parse_csv(csv.as_bytes()).unwrap();
    let dates: Vec<NaiveDate> = bars.iter().map(|b| b.timestamp).collect();
    assert_eq!(dates, vec![date(2024, 1, 2), date(2024, 1, 5)]);
}

#[test]
fn test_rows_sorted_by_date() {
    let csv = "\
date,open,high,low,close,volume
2024-01-05,3,3,3,3,10
2024-01-02,1,1,1,1,10
2024-01-03,2,2,2,2,10
";
    let bars = CsvMarketDataProvider::parse_csv(csv.as_bytes()).unwrap();
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    assert_eq!(closes, vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_timestamp_strings_use_date_part() {
    let csv = "\
Date,Open,High,Low,Close,Volume
2024-01-02 00:00:00+05:30,100,101,99,100,500
";
    let bars = CsvMarketDataProvider::parse_csv(csv.as_bytes()).unwrap();
    assert_eq!(bars[0].timestamp, date(2024, 1, 2));
}

#[test]
fn test_path_uses_exchange_suffix() {
    let provider = CsvMarketDataProvider::new("data").with_suffix(".NS");
    assert_eq!(
        provider.path_for("TCS"),
        std::path::PathBuf::from("data").join("TCS.NS.csv")
    );
}

#[tokio::test]
async fn test_static_provider() {
    let bar = PriceBar::flat(date(2024, 1, 2), 10.0, 1);
    let provider = StaticMarketDataProvider::new().with_bars("ABC", vec![bar.clone()]);

    assert_eq!(provider.get_bars("ABC").await.unwrap(), vec![bar]);
    assert!(provider.get_bars("XYZ").await.is_err());
}
