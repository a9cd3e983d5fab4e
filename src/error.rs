//! Error taxonomy shared by every analysis stage

use thiserror::Error;

/// Errors raised by the core analysis stages.
///
/// The core never logs or recovers from these; they are surfaced to the
/// orchestrator that owns the ticker being processed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("insufficient data for {stage}: need at least {required} rows, got {available}")]
    InsufficientData {
        stage: &'static str,
        required: usize,
        available: usize,
    },

    #[error("alignment violation in {context}: expected length {expected}, got {actual}")]
    AlignmentViolation {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

/// Errors for the direction classifier
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("model has not been fitted yet")]
    NotFitted,

    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("cannot fit on an empty training set")]
    EmptyTrainingSet,
}

impl AnalysisError {
    /// True for the "not enough bars" condition callers report as missing data
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, AnalysisError::InsufficientData { .. })
    }
}
