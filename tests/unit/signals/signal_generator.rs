//! Unit tests for the signal generator

use signalbench::config::StrategyConfig;
use signalbench::models::indicators::{IndicatorRow, IndicatorValues};
use signalbench::models::signal::Signal;
use signalbench::signals::SignalGenerator;

fn values(rsi: f64, ma_short: f64, ma_long: f64) -> IndicatorValues {
    IndicatorValues::new(rsi, ma_short, ma_long)
}

#[test]
fn test_buy_when_oversold_in_uptrend() {
    let generator = SignalGenerator::default();
    assert_eq!(generator.generate_signal(&values(25.0, 105.0, 100.0)), Signal::Buy);
}

#[test]
fn test_sell_when_overbought_in_downtrend() {
    let generator = SignalGenerator::default();
    assert_eq!(generator.generate_signal(&values(75.0, 95.0, 100.0)), Signal::Sell);
}

#[test]
fn test_hold_without_trend_confirmation() {
    let generator = SignalGenerator::default();
    assert_eq!(generator.generate_signal(&values(25.0, 95.0, 100.0)), Signal::Hold);
    assert_eq!(generator.generate_signal(&values(75.0, 105.0, 100.0)), Signal::Hold);
    assert_eq!(generator.generate_signal(&values(50.0, 105.0, 100.0)), Signal::Hold);
    assert_eq!(generator.generate_signal(&values(50.0, 95.0, 100.0)), Signal::Hold);
}

#[test]
fn test_thresholds_are_strict() {
    let generator = SignalGenerator::default();
    assert_eq!(generator.generate_signal(&values(30.0, 105.0, 100.0)), Signal::Hold);
    assert_eq!(generator.generate_signal(&values(70.0, 95.0, 100.0)), Signal::Hold);
    assert_eq!(generator.generate_signal(&values(10.0, 100.0, 100.0)), Signal::Hold);
    assert_eq!(generator.generate_signal(&values(90.0, 100.0, 100.0)), Signal::Hold);
}

#[test]
fn test_undefined_row_is_hold() {
    let generator = SignalGenerator::default();
    let row = IndicatorRow {
        rsi: Some(10.0),
        ma_short: Some(105.0),
        ma_long: None,
    };
    assert_eq!(generator.generate_for_row(&row), Signal::Hold);
    assert_eq!(generator.generate_for_row(&IndicatorRow::default()), Signal::Hold);

    let complete = IndicatorRow {
        ma_long: Some(100.0),
        ..row
    };
    assert_eq!(generator.generate_for_row(&complete), Signal::Buy);
}

#[test]
fn test_signal_is_pure_function_of_indicators() {
    let generator = SignalGenerator::default();
    let triples = [
        values(25.0, 105.0, 100.0),
        values(75.0, 95.0, 100.0),
        values(50.0, 100.0, 101.0),
    ];
    let first: Vec<Signal> = triples.iter().map(|v| generator.generate_signal(v)).collect();
    // Evaluate in reverse order: no state may carry across calls.
    let mut second: Vec<Signal> = triples
        .iter()
        .rev()
        .map(|v| generator.generate_signal(v))
        .collect();
    second.reverse();
    assert_eq!(first, second);
}

#[test]
fn test_custom_thresholds() {
    let config = StrategyConfig {
        rsi_oversold: 40.0,
        rsi_overbought: 60.0,
        ..StrategyConfig::default()
    };
    let generator = SignalGenerator::new(&config);
    assert_eq!(generator.generate_signal(&values(35.0, 105.0, 100.0)), Signal::Buy);
    assert_eq!(generator.generate_signal(&values(65.0, 95.0, 100.0)), Signal::Sell);
}

#[test]
fn test_signal_positions() {
    assert_eq!(Signal::Buy.position(), 1.0);
    assert_eq!(Signal::Sell.position(), -1.0);
    assert_eq!(Signal::Hold.position(), 0.0);
    assert_eq!(i8::from(Signal::Sell), -1);
    assert!(!Signal::Hold.is_active());
    assert_eq!(Signal::default(), Signal::Hold);
}
