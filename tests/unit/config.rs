//! Unit tests for strategy and runner configuration

use signalbench::config::{parse_tickers, PredictorConfig, RunnerConfig, StrategyConfig};
use signalbench::error::AnalysisError;

#[test]
fn test_defaults_validate() {
    let config = StrategyConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.min_bars(), 51);
}

#[test]
fn test_rejects_inverted_windows() {
    let config = StrategyConfig {
        ma_short_window: 50,
        ma_long_window: 20,
        ..StrategyConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(AnalysisError::InvalidConfig(_))
    ));
}

#[test]
fn test_rejects_bad_thresholds_and_ratio() {
    let thresholds = StrategyConfig {
        rsi_oversold: 80.0,
        ..StrategyConfig::default()
    };
    assert!(thresholds.validate().is_err());

    let ratio = StrategyConfig {
        train_ratio: 1.0,
        ..StrategyConfig::default()
    };
    assert!(ratio.validate().is_err());
}

#[test]
fn test_rejects_bad_predictor_settings() {
    let config = StrategyConfig {
        predictor: PredictorConfig {
            learning_rate: 0.0,
            ..PredictorConfig::default()
        },
        ..StrategyConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_runner_defaults() {
    let config = RunnerConfig::default();
    assert_eq!(config.tickers, vec!["RELIANCE", "TCS", "HDFCBANK"]);
    assert_eq!(config.ticker_suffix, ".NS");
    assert_eq!(config.lookback_bars, 126);
    assert_eq!(config.concurrency, 3);
}

#[test]
fn test_parses_ticker_list() {
    assert_eq!(
        parse_tickers(" reliance, TCS,,hdfcbank "),
        vec!["RELIANCE", "TCS", "HDFCBANK"]
    );
    assert!(parse_tickers(" , ").is_empty());
}
