//! Unit tests for logistic regression

use ndarray::{array, Array1, Array2};
use signalbench::config::PredictorConfig;
use signalbench::error::ModelError;
use signalbench::prediction::LogisticRegression;

#[test]
fn test_predict_before_fit() {
    let model = LogisticRegression::default();
    let err = model.predict(&array![[1.0]]).unwrap_err();
    assert_eq!(err, ModelError::NotFitted);
}

#[test]
fn test_empty_training_set() {
    let mut model = LogisticRegression::default();
    let x = Array2::<f64>::zeros((0, 3));
    let err = model.fit(&x, &Array1::<f64>::zeros(0)).unwrap_err();
    assert_eq!(err, ModelError::EmptyTrainingSet);
}

#[test]
fn test_label_length_mismatch() {
    let mut model = LogisticRegression::default();
    let err = model
        .fit(&array![[1.0], [2.0]], &array![1.0])
        .unwrap_err();
    assert_eq!(err, ModelError::DimensionMismatch { expected: 2, got: 1 });
}

#[test]
fn test_separable_data() {
    let x = array![[-2.0], [-1.0], [1.0], [2.0]];
    let y = array![0.0, 0.0, 1.0, 1.0];
    let mut model = LogisticRegression::default();
    model.fit(&x, &y).unwrap();

    assert_eq!(model.predict(&x).unwrap(), y);
    assert!(model.coefficients.as_ref().unwrap()[0] > 0.0);

    let proba = model.predict_proba(&array![[3.0], [-3.0]]).unwrap();
    assert!(proba[0] > 0.5 && proba[1] < 0.5);
}

#[test]
fn test_cost_decreases() {
    let x = array![[-2.0, 0.5], [-1.0, 0.1], [1.0, -0.3], [2.0, 0.2]];
    let y = array![0.0, 0.0, 1.0, 1.0];
    let mut model = LogisticRegression::default();
    model.fit(&x, &y).unwrap();

    let first = model.cost_history[0];
    let last = *model.cost_history.last().unwrap();
    assert!(last < first);
    assert!(model.cost_history.len() <= PredictorConfig::default().max_iter);
}

#[test]
fn test_feature_count_mismatch_on_predict() {
    let mut model = LogisticRegression::default();
    model.fit(&array![[0.0, 1.0], [1.0, 0.0]], &array![0.0, 1.0]).unwrap();
    let err = model.predict(&array![[1.0]]).unwrap_err();
    assert_eq!(err, ModelError::DimensionMismatch { expected: 2, got: 1 });
}
