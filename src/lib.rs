//! Binary classifiers over tabular data.
//!
//! A dataset is wrapped in an [`X`] view, handed to a [`Model`] together with
//! its 0/1 labels, and training yields a [`Hypothesis`] that predicts labels
//! for new samples.

pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod algebra;
pub mod dataset;
pub mod error;
pub mod linear_model;
pub mod metrics;
pub mod model;
pub mod naive_bayes;
pub mod stop_conditions;
pub mod x;

pub use dataset::Dataset;
pub use error::{LearnError, Result};
pub use linear_model::{
    LinearHypothesis, LinearRegression, LogisticHypothesis, LogisticRegression, compute_error,
};
pub use model::{Hypothesis, Model};
pub use naive_bayes::{NaiveBayes, NaiveBayesHypothesis};
pub use stop_conditions::StopConditions;
pub use x::X;

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn basic_types_work() {
        let vec = Vector::zeros(5);
        let mat = Matrix::zeros((3, 4));
        assert_eq!(vec.len(), 5);
        assert_eq!(mat.shape(), &[3, 4]);
    }

    #[test]
    fn naive_bayes_end_to_end() {
        let x = X::new(array![[0.0], [0.0], [1.0], [1.0]]);
        let y = array![0.0, 0.0, 1.0, 1.0];

        let mut model = NaiveBayes::new(1, 2);
        let hypothesis = model.train(&x, &y).unwrap();

        assert_eq!(hypothesis.predict(&x).unwrap(), y);
    }

    #[test]
    fn models_share_one_interface() {
        fn fit_and_score<M: Model>(model: &mut M, x: &X, y: &Vector) -> f64 {
            model.train(x, y).unwrap();
            metrics::accuracy_score(y, &model.predict(x).unwrap()).unwrap()
        }

        let x = X::new(array![[0.0, 1.0], [0.0, 0.0], [1.0, 1.0], [1.0, 0.0]]);
        let y = array![0.0, 0.0, 1.0, 1.0];

        let mut bayes = NaiveBayes::new(2, 2);
        let mut logistic = LogisticRegression::new()
            .learning_rate(0.5)
            .stop_conditions(StopConditions::new(1e-6, None, 2000))
            .random_state(9);

        assert_eq!(fit_and_score(&mut bayes, &x, &y), 1.0);
        assert_eq!(fit_and_score(&mut logistic, &x, &y), 1.0);
    }
}
