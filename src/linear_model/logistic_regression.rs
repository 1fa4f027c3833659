use log::{debug, info};
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Normal;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::algebra::{diff_vv, mult_mv, mult_vs, norm, sum_vv};
use crate::error::{LearnError, Result, ensure_binary_labels, ensure_size};
use crate::model::{Hypothesis, Model};
use crate::stop_conditions::StopConditions;
use crate::x::X;
use crate::Vector;

#[derive(Clone, Debug)]
pub struct LogisticRegression {
    init_std: f64,
    learning_rate: f64,
    stop_conditions: StopConditions,
    random_state: Option<u64>,
    iterations: Option<usize>,
    hypothesis: Option<LogisticHypothesis>,
}

impl LogisticRegression {
    pub fn new() -> Self {
        Self {
            init_std: 1.0,
            learning_rate: 0.0005,
            stop_conditions: StopConditions::default(),
            random_state: None,
            iterations: None,
            hypothesis: None,
        }
    }

    /// Standard deviation of the normal distribution the weights start from.
    pub fn init_std(mut self, init_std: f64) -> Self {
        if !(init_std > 0.0 && init_std.is_finite()) {
            panic!("init_std must be positive, got {}", init_std);
        }
        self.init_std = init_std;
        self
    }

    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        if !(learning_rate > 0.0 && learning_rate.is_finite()) {
            panic!("learning_rate must be positive, got {}", learning_rate);
        }
        self.learning_rate = learning_rate;
        self
    }

    pub fn stop_conditions(mut self, stop_conditions: StopConditions) -> Self {
        self.stop_conditions = stop_conditions;
        self
    }

    pub fn random_state(mut self, random_state: u64) -> Self {
        self.random_state = Some(random_state);
        self
    }

    /// Number of gradient steps taken by the last training run.
    pub fn iterations(&self) -> Option<usize> {
        self.iterations
    }

    pub fn predict_proba(&self, x: &X) -> Result<Vector> {
        self.hypothesis
            .as_ref()
            .ok_or(LearnError::NotTrained)?
            .predict_proba(x)
    }

    fn generate_rng(&self) -> StdRng {
        match self.random_state {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for LogisticRegression {
    type Hypothesis = LogisticHypothesis;

    /// Batch gradient ascent on the log-likelihood.
    fn train(&mut self, x: &X, y: &Vector) -> Result<LogisticHypothesis> {
        self.hypothesis = None;
        self.iterations = None;

        ensure_size("labels", "samples", y.len(), x.nsamples())?;
        ensure_binary_labels(y)?;

        let x = x.append_ones();

        let normal = Normal::new(0.0, self.init_std).map_err(|_| LearnError::InvalidParameter {
            name: "init_std",
            value: self.init_std,
        })?;
        let mut rng = self.generate_rng();
        let mut theta = Vector::random_using(x.nfeatures(), normal, &mut rng);

        let mut stop_conditions = self.stop_conditions;
        let mut stop = false;
        let mut iteration = 0;
        let mut error = 1.0;

        while !stop {
            let prediction = probabilities(&x, &theta)?;
            let diff = diff_vv(y, &prediction)?;
            let gradient = mult_mv(&x.by_feature(), &diff)?;

            theta = sum_vv(&theta, &mult_vs(&gradient, self.learning_rate))?;

            error = compute_error(&prediction, y)?;
            (stop_conditions, stop) = stop_conditions.update(&gradient, error);
            iteration += 1;

            debug!(
                "iteration={iteration} error={error:.4} gradient_norm={:.6}",
                norm(&gradient)
            );
        }

        info!("logistic regression trained: iterations={iteration} error={error:.4}");

        let hypothesis = LogisticHypothesis { theta };
        self.iterations = Some(iteration);
        self.hypothesis = Some(hypothesis.clone());
        Ok(hypothesis)
    }

    fn hypothesis(&self) -> Option<&LogisticHypothesis> {
        self.hypothesis.as_ref()
    }
}

/// Weights of a trained logistic model, the bias last.
#[derive(Clone, Debug, PartialEq)]
pub struct LogisticHypothesis {
    theta: Vector,
}

impl LogisticHypothesis {
    pub fn theta(&self) -> &Vector {
        &self.theta
    }

    pub fn predict_proba(&self, x: &X) -> Result<Vector> {
        ensure_size("x features + bias", "theta", x.nfeatures() + 1, self.theta.len())?;
        probabilities(&x.append_ones(), &self.theta)
    }
}

impl Hypothesis for LogisticHypothesis {
    fn predict(&self, x: &X) -> Result<Vector> {
        Ok(self.predict_proba(x)?.mapv(threshold))
    }
}

pub fn sigmoid(z: f64) -> f64 {
    if z > 500.0 {
        1.0
    } else if z < -500.0 {
        0.0
    } else {
        1.0 / (1.0 + (-z).exp())
    }
}

/// Fraction of `pred` that disagrees with `y` once thresholded at 0.5.
pub fn compute_error(pred: &Vector, y: &Vector) -> Result<f64> {
    ensure_size("predictions", "labels", pred.len(), y.len())?;
    if y.is_empty() {
        return Err(LearnError::EmptyDataset);
    }

    let same = pred
        .iter()
        .zip(y.iter())
        .filter(|&(&p, &label)| threshold(p) == label)
        .count();

    Ok(1.0 - same as f64 / y.len() as f64)
}

/// `x` must already carry the bias column.
fn probabilities(x: &X, theta: &Vector) -> Result<Vector> {
    Ok(mult_mv(&x.by_sample(), theta)?.mapv(sigmoid))
}

// 0.5 itself goes to class 0
fn threshold(p: f64) -> f64 {
    if p > 0.5 { 1.0 } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn separable() -> (X, Vector) {
        let x = X::new(array![[-2.0], [-1.5], [-1.0], [1.0], [1.5], [2.0]]);
        let y = array![0.0, 0.0, 0.0, 1.0, 1.0, 1.0];
        (x, y)
    }

    #[test]
    fn test_compute_error() {
        let pred = array![0.9, 0.1, 0.6];
        let y = array![1.0, 0.0, 0.0];

        let error = compute_error(&pred, &y).unwrap();
        assert!((error - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_compute_error_mismatch() {
        assert!(compute_error(&array![0.9], &array![1.0, 0.0]).is_err());
        assert!(compute_error(&Vector::zeros(0), &Vector::zeros(0)).is_err());
    }

    #[test]
    fn test_sigmoid_function() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-10);
        assert!(sigmoid(1000.0) > 0.99);
        assert!(sigmoid(-1000.0) < 0.01);
        assert!((sigmoid(2.0) + sigmoid(-2.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_logistic_regression_separable() {
        let (x, y) = separable();

        let mut model = LogisticRegression::new()
            .learning_rate(0.1)
            .stop_conditions(StopConditions::new(1e-6, None, 2000))
            .random_state(7);
        let hypothesis = model.train(&x, &y).unwrap();

        assert_eq!(hypothesis.theta().len(), 2);
        assert_eq!(model.predict(&x).unwrap(), y);

        let probabilities = model.predict_proba(&x).unwrap();
        assert!(probabilities[0] < 0.5);
        assert!(probabilities[5] > 0.5);
    }

    #[test]
    fn test_default_configuration() {
        let (x, y) = separable();

        let mut model = LogisticRegression::new().random_state(3);
        let hypothesis = model.train(&x, &y).unwrap();

        let iterations = model.iterations().unwrap();
        assert!(iterations >= 1 && iterations <= 800);
        assert_eq!(hypothesis.predict(&x).unwrap().len(), 6);
    }

    #[test]
    fn test_iteration_budget_is_respected() {
        let (x, y) = separable();

        let mut model = LogisticRegression::new()
            .stop_conditions(StopConditions::new(0.0, None, 7))
            .random_state(1);
        model.train(&x, &y).unwrap();

        assert_eq!(model.iterations(), Some(7));
    }

    #[test]
    fn test_error_tolerance_stops_early() {
        let (x, y) = separable();

        let mut model = LogisticRegression::new()
            .learning_rate(0.1)
            .stop_conditions(StopConditions::new(0.0, Some(0.01), 10_000))
            .random_state(11);
        model.train(&x, &y).unwrap();

        assert!(model.iterations().unwrap() < 10_000);
    }

    #[test]
    fn test_seed_makes_training_reproducible() {
        let (x, y) = separable();

        let mut a = LogisticRegression::new().random_state(42);
        let mut b = LogisticRegression::new().random_state(42);

        assert_eq!(a.train(&x, &y).unwrap(), b.train(&x, &y).unwrap());
    }

    #[test]
    fn test_threshold_ties_favor_class_zero() {
        let hypothesis = LogisticHypothesis {
            theta: array![0.0, 0.0],
        };
        let x = X::new(array![[3.0], [-3.0]]);

        assert_eq!(hypothesis.predict_proba(&x).unwrap(), array![0.5, 0.5]);
        assert_eq!(hypothesis.predict(&x).unwrap(), array![0.0, 0.0]);
    }

    #[test]
    fn test_predict_without_train() {
        let (x, _) = separable();
        let model = LogisticRegression::new();

        assert!(matches!(model.predict(&x), Err(LearnError::NotTrained)));
        assert!(matches!(model.predict_proba(&x), Err(LearnError::NotTrained)));
    }

    #[test]
    fn test_feature_count_mismatch() {
        let (x, y) = separable();

        let mut model = LogisticRegression::new()
            .stop_conditions(StopConditions::new(1e-6, None, 5))
            .random_state(0);
        model.train(&x, &y).unwrap();

        let wrong = X::new(array![[1.0, 2.0]]);
        assert!(matches!(
            model.predict(&wrong),
            Err(LearnError::SizeMismatch { .. })
        ));
    }

    #[test]
    fn test_invalid_labels() {
        let x = X::new(array![[1.0], [2.0]]);

        let mut model = LogisticRegression::new();
        assert!(model.train(&x, &array![0.5, 2.0]).is_err());
        assert!(model.train(&x, &array![0.0]).is_err());
    }

    #[test]
    #[should_panic]
    fn test_negative_learning_rate() {
        let _ = LogisticRegression::new().learning_rate(-0.1);
    }
}
