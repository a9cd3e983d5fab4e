use chrono::{Duration, NaiveDate};
use signalbench::models::bars::PriceBar;

pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 2).unwrap()
}

/// Flat OHLC bars on consecutive days for the given closes
pub fn create_test_bars(closes: &[f64]) -> Vec<PriceBar> {
    closes
        .iter()
        .enumerate()
        .map(|(i, close)| PriceBar::flat(start_date() + Duration::days(i as i64), *close, 10_000))
        .collect()
}

/// Geometric path: `len` bars starting at `start`, each moving by `rate`
pub fn geometric(start: f64, rate: f64, len: usize) -> Vec<f64> {
    let mut closes = Vec::with_capacity(len);
    let mut price = start;
    for _ in 0..len {
        closes.push(price);
        price *= 1.0 + rate;
    }
    closes
}

/// 60 bars falling 1% a day from 200, then 20 bars rallying 2.5% a day
pub fn decline_then_rally() -> Vec<f64> {
    let mut closes = geometric(200.0, -0.01, 60);
    let last = *closes.last().unwrap();
    closes.extend(geometric(last * 1.025, 0.025, 20));
    closes
}

/// 60 bars rising 1% a day from 100, then 20 bars dropping 2.5% a day
pub fn rally_then_decline() -> Vec<f64> {
    let mut closes = geometric(100.0, 0.01, 60);
    let last = *closes.last().unwrap();
    closes.extend(geometric(last * 0.975, -0.025, 20));
    closes
}

/// Render bars as a daily-history CSV export
pub fn to_csv(bars: &[PriceBar]) -> String {
    let mut out = String::from("Date,Open,High,Low,Close,Adj Close,Volume\n");
    for bar in bars {
        out.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            bar.timestamp, bar.open, bar.high, bar.low, bar.close, bar.close, bar.volume
        ));
    }
    out
}
