//! Unit tests for the per-ticker pipeline

use chrono::{Duration, NaiveDate};
use signalbench::config::StrategyConfig;
use signalbench::core::pipeline::TickerPipeline;
use signalbench::error::AnalysisError;
use signalbench::models::bars::{PriceBar, PriceSeries};
use signalbench::models::signal::Signal;

fn create_test_series(closes: &[f64]) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let bars = closes
        .iter()
        .enumerate()
        .map(|(i, c)| PriceBar::flat(start + Duration::days(i as i64), *c, 1_000))
        .collect();
    PriceSeries::new("TEST", bars).unwrap()
}

#[test]
fn test_invalid_config_rejected() {
    let config = StrategyConfig {
        ma_short_window: 60,
        ..StrategyConfig::default()
    };
    assert!(matches!(
        TickerPipeline::new(&config),
        Err(AnalysisError::InvalidConfig(_))
    ));
}

#[test]
fn test_short_history_is_insufficient() {
    let pipeline = TickerPipeline::new(&StrategyConfig::default()).unwrap();
    let closes: Vec<f64> = (0..10).map(|i| 100.0 + i as f64).collect();
    let err = pipeline.analyze(&create_test_series(&closes)).unwrap_err();
    assert_eq!(
        err,
        AnalysisError::InsufficientData {
            stage: "indicators",
            required: 51,
            available: 10,
        }
    );
}

#[test]
fn test_flat_prices_hold_everywhere() {
    let pipeline = TickerPipeline::new(&StrategyConfig::default()).unwrap();
    let analysis = pipeline
        .analyze(&create_test_series(&vec![100.0; 120]))
        .unwrap();

    assert_eq!(analysis.symbol, "TEST");
    // Warm-up bars are trimmed before signals are generated.
    assert_eq!(analysis.signals.len(), 120 - 49);
    assert!(analysis.signals.iter().all(|s| *s == Signal::Hold));
    assert_eq!(analysis.backtest.total_return_pct, 0.0);
    assert_eq!(analysis.backtest.win_ratio_pct, 0.0);
    assert!((0.0..=100.0).contains(&analysis.prediction.accuracy_pct));
}

#[test]
fn test_record_is_rounded() {
    let pipeline = TickerPipeline::new(&StrategyConfig::default()).unwrap();
    let closes: Vec<f64> = (0..120)
        .map(|i| 100.0 + (i as f64 * 0.4).sin() * 8.0)
        .collect();
    let record = pipeline
        .analyze(&create_test_series(&closes))
        .unwrap()
        .to_record();

    assert_eq!(record.stock, "TEST");
    for value in [record.total_return_pct, record.win_ratio_pct, record.accuracy_pct] {
        assert!(((value * 100.0).round() - value * 100.0).abs() < 1e-6);
    }
}
