//! Runtime configuration
//!
//! Strategy parameters carry defaults matching the classic RSI(14) with
//! 20/50 moving-average trend filter. Every value can be overridden from the
//! environment (a `.env` file is loaded by the binary via `dotenvy`).

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::AnalysisError;

/// Deployment environment name (`ENVIRONMENT`, default `sandbox`)
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Indicator windows, signal thresholds and the train/test split
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyConfig {
    pub rsi_period: usize,
    pub ma_short_window: usize,
    pub ma_long_window: usize,
    pub rsi_oversold: f64,
    pub rsi_overbought: f64,
    /// Leading fraction of labelled bars used for training
    pub train_ratio: f64,
    pub predictor: PredictorConfig,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            ma_short_window: 20,
            ma_long_window: 50,
            rsi_oversold: 30.0,
            rsi_overbought: 70.0,
            train_ratio: 0.8,
            predictor: PredictorConfig::default(),
        }
    }
}

impl StrategyConfig {
    /// Apply `RSI_PERIOD`, `MA_SHORT_WINDOW`, `MA_LONG_WINDOW`, `RSI_OVERSOLD`,
    /// `RSI_OVERBOUGHT` and `TRAIN_RATIO` overrides on top of the defaults
    pub fn from_env() -> Result<Self, AnalysisError> {
        let defaults = Self::default();
        let config = Self {
            rsi_period: env_or("RSI_PERIOD", defaults.rsi_period)?,
            ma_short_window: env_or("MA_SHORT_WINDOW", defaults.ma_short_window)?,
            ma_long_window: env_or("MA_LONG_WINDOW", defaults.ma_long_window)?,
            rsi_oversold: env_or("RSI_OVERSOLD", defaults.rsi_oversold)?,
            rsi_overbought: env_or("RSI_OVERBOUGHT", defaults.rsi_overbought)?,
            train_ratio: env_or("TRAIN_RATIO", defaults.train_ratio)?,
            predictor: defaults.predictor,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.rsi_period == 0 || self.ma_short_window == 0 || self.ma_long_window == 0 {
            return Err(AnalysisError::InvalidConfig(
                "indicator windows must be positive".to_string(),
            ));
        }
        if self.ma_short_window >= self.ma_long_window {
            return Err(AnalysisError::InvalidConfig(format!(
                "short MA window ({}) must be below long MA window ({})",
                self.ma_short_window, self.ma_long_window
            )));
        }
        let in_range = |v: f64| (0.0..=100.0).contains(&v);
        if !in_range(self.rsi_oversold)
            || !in_range(self.rsi_overbought)
            || self.rsi_oversold >= self.rsi_overbought
        {
            return Err(AnalysisError::InvalidConfig(format!(
                "RSI thresholds must satisfy 0 <= oversold ({}) < overbought ({}) <= 100",
                self.rsi_oversold, self.rsi_overbought
            )));
        }
        if !(self.train_ratio > 0.0 && self.train_ratio < 1.0) {
            return Err(AnalysisError::InvalidConfig(format!(
                "train ratio must be in (0, 1), got {}",
                self.train_ratio
            )));
        }
        self.predictor.validate()
    }

    /// Bars needed before the indicator engine emits anything:
    /// `max(rsi_period, ma_long_window) + 1`
    pub fn min_bars(&self) -> usize {
        self.rsi_period.max(self.ma_long_window) + 1
    }
}

/// Gradient-descent settings for the logistic direction classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictorConfig {
    pub learning_rate: f64,
    pub max_iter: usize,
    pub tolerance: f64,
    pub l2_penalty: f64,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            max_iter: 1000,
            tolerance: 1e-7,
            l2_penalty: 1e-3,
        }
    }
}

impl PredictorConfig {
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if !(self.learning_rate > 0.0) || self.max_iter == 0 || self.l2_penalty < 0.0 {
            return Err(AnalysisError::InvalidConfig(
                "predictor needs learning_rate > 0, max_iter > 0 and l2_penalty >= 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Orchestration settings for the `analyzer` binary
#[derive(Debug, Clone, PartialEq)]
pub struct RunnerConfig {
    pub tickers: Vec<String>,
    /// Exchange suffix appended to each ticker when locating its data file
    pub ticker_suffix: String,
    pub data_dir: PathBuf,
    pub results_path: PathBuf,
    /// Keep only the most recent N bars (0 keeps everything)
    pub lookback_bars: usize,
    pub concurrency: usize,
    pub strategy: StrategyConfig,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        let tickers: Vec<String> = ["RELIANCE", "TCS", "HDFCBANK"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        Self {
            concurrency: tickers.len(),
            tickers,
            ticker_suffix: ".NS".to_string(),
            data_dir: PathBuf::from("data"),
            results_path: PathBuf::from("results/trade_log.jsonl"),
            lookback_bars: 126,
            strategy: StrategyConfig::default(),
        }
    }
}

impl RunnerConfig {
    pub fn from_env() -> Result<Self, AnalysisError> {
        let defaults = Self::default();

        let tickers = match env::var("TICKERS") {
            Ok(raw) => parse_tickers(&raw),
            Err(_) => defaults.tickers,
        };
        if tickers.is_empty() {
            return Err(AnalysisError::InvalidConfig(
                "TICKERS must name at least one symbol".to_string(),
            ));
        }

        let concurrency = env_or("WORKER_CONCURRENCY", tickers.len().max(1))?.max(1);

        Ok(Self {
            ticker_suffix: env::var("TICKER_SUFFIX").unwrap_or(defaults.ticker_suffix),
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            results_path: env::var("RESULTS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.results_path),
            lookback_bars: env_or("LOOKBACK_BARS", defaults.lookback_bars)?,
            strategy: StrategyConfig::from_env()?,
            tickers,
            concurrency,
        })
    }
}

/// Split a comma-separated ticker list, trimming blanks and upper-casing
pub fn parse_tickers(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .collect()
}

fn env_or<T>(key: &str, default: T) -> Result<T, AnalysisError>
where
    T: FromStr,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().map_err(|_| {
            AnalysisError::InvalidConfig(format!("{key} has an unparseable value '{raw}'"))
        }),
        Err(_) => Ok(default),
    }
}
