//! Linear models for regression and classification.
//!
//! Both models fold the intercept into their weight vector by training on
//! [`X::append_ones`](crate::X::append_ones):
//! - `LinearRegression`: ordinary least squares via the normal equations
//! - `LogisticRegression`: binary classification by gradient ascent on the
//!   log-likelihood, stopped by a [`StopConditions`](crate::StopConditions)
//!
//! # Examples
//!
//! ## Linear Regression
//! ```rust
//! use binclass::{LinearRegression, Model, X};
//! use ndarray::array;
//!
//! let x = X::new(array![[1.0], [2.0], [3.0]]);
//! let y = array![2.0, 4.0, 6.0];
//!
//! let mut model = LinearRegression::new();
//! model.train(&x, &y).unwrap();
//! let predictions = model.predict(&x).unwrap();
//! ```
//!
//! ## Logistic Regression
//! ```rust
//! use binclass::{LogisticRegression, Model, StopConditions, X};
//! use ndarray::array;
//!
//! let x = X::new(array![[-2.0], [-1.0], [1.0], [2.0]]);
//! let y = array![0.0, 0.0, 1.0, 1.0];
//!
//! let mut model = LogisticRegression::new()
//!     .learning_rate(0.1)
//!     .stop_conditions(StopConditions::new(1e-6, None, 500))
//!     .random_state(42);
//! model.train(&x, &y).unwrap();
//! let predictions = model.predict(&x).unwrap();
//! let probabilities = model.predict_proba(&x).unwrap();
//! ```

mod linear_regression;
mod logistic_regression;

pub use linear_regression::{LinearHypothesis, LinearRegression};
pub use logistic_regression::{LogisticHypothesis, LogisticRegression, compute_error, sigmoid};
