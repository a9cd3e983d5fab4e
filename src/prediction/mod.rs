//! Next-bar direction classifier and its out-of-sample evaluation

pub mod dataset;
pub mod logistic;
pub mod predictor;

pub use dataset::{Dataset, StandardScaler};
pub use logistic::LogisticRegression;
pub use predictor::DirectionPredictor;
