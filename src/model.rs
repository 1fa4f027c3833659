//! The two traits every learner in the crate implements.
//!
//! A [`Model`] is a trainer: it holds its configuration, consumes a dataset
//! and labels, and produces a [`Hypothesis`]. The hypothesis is the trained,
//! immutable predictor and holds only the parameters it was fitted with. The
//! model keeps the last hypothesis it produced, so it can answer predictions
//! itself once trained.

use crate::error::{LearnError, Result};
use crate::x::X;
use crate::Vector;

pub trait Hypothesis {
    /// One prediction per sample of `x`.
    fn predict(&self, x: &X) -> Result<Vector>;
}

pub trait Model {
    type Hypothesis: Hypothesis + Clone;

    /// Fits the model to `x` and `y`, replacing anything learned before.
    fn train(&mut self, x: &X, y: &Vector) -> Result<Self::Hypothesis>;

    /// The hypothesis produced by the last successful `train`.
    fn hypothesis(&self) -> Option<&Self::Hypothesis>;

    fn predict(&self, x: &X) -> Result<Vector> {
        self.hypothesis().ok_or(LearnError::NotTrained)?.predict(x)
    }

    fn is_trained(&self) -> bool {
        self.hypothesis().is_some()
    }
}
