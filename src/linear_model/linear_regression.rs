use log::info;
use ndarray::s;

use crate::algebra::{mult_mv, solve};
use crate::error::{Result, ensure_size};
use crate::model::{Hypothesis, Model};
use crate::x::X;
use crate::Vector;

/// Ordinary least squares, solved in closed form through the normal
/// equations on the bias-augmented dataset.
#[derive(Clone, Debug, Default)]
pub struct LinearRegression {
    hypothesis: Option<LinearHypothesis>,
}

impl LinearRegression {
    pub fn new() -> Self {
        Self { hypothesis: None }
    }
}

impl Model for LinearRegression {
    type Hypothesis = LinearHypothesis;

    fn train(&mut self, x: &X, y: &Vector) -> Result<LinearHypothesis> {
        self.hypothesis = None;

        ensure_size("labels", "samples", y.len(), x.nsamples())?;

        let x = x.append_ones();
        let xt = x.by_feature();
        let xtx = xt.dot(&x.by_sample());
        let xty = mult_mv(&xt, y)?;

        let theta = solve(&xtx, &xty)?;
        info!(
            "linear regression trained: samples={} features={}",
            x.nsamples(),
            x.nfeatures() - 1
        );

        let hypothesis = LinearHypothesis { theta };
        self.hypothesis = Some(hypothesis.clone());
        Ok(hypothesis)
    }

    fn hypothesis(&self) -> Option<&LinearHypothesis> {
        self.hypothesis.as_ref()
    }
}

/// `theta` holds one weight per feature followed by the intercept.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearHypothesis {
    theta: Vector,
}

impl LinearHypothesis {
    pub fn new(theta: Vector) -> Self {
        Self { theta }
    }

    pub fn theta(&self) -> &Vector {
        &self.theta
    }

    pub fn coefficients(&self) -> Vector {
        self.theta.slice(s![..-1]).to_owned()
    }

    pub fn intercept(&self) -> f64 {
        self.theta[self.theta.len() - 1]
    }
}

impl Hypothesis for LinearHypothesis {
    fn predict(&self, x: &X) -> Result<Vector> {
        ensure_size("x features + bias", "theta", x.nfeatures() + 1, self.theta.len())?;
        mult_mv(&x.append_ones().by_sample(), &self.theta)
    }
}
