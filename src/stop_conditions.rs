use crate::algebra::norm;
use crate::Vector;

/// Convergence policy of an iterative optimizer.
///
/// A snapshot is never modified: [`StopConditions::update`] returns the next
/// snapshot together with whether the optimizer should stop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StopConditions {
    gradient_tolerance: f64,
    error_tolerance: Option<f64>,
    iterations_remaining: usize,
}

impl StopConditions {
    pub fn new(gradient_tolerance: f64, error_tolerance: Option<f64>, iterations: usize) -> Self {
        Self {
            gradient_tolerance,
            error_tolerance,
            iterations_remaining: iterations,
        }
    }

    pub fn gradient_tolerance(&self) -> f64 {
        self.gradient_tolerance
    }

    pub fn error_tolerance(&self) -> Option<f64> {
        self.error_tolerance
    }

    pub fn iterations_remaining(&self) -> usize {
        self.iterations_remaining
    }

    pub fn update(&self, gradient: &Vector, error: f64) -> (StopConditions, bool) {
        let next = StopConditions {
            iterations_remaining: self.iterations_remaining.saturating_sub(1),
            ..*self
        };

        let stop = norm(gradient) < self.gradient_tolerance
            || next.iterations_remaining == 0
            || self.error_tolerance.is_some_and(|tolerance| error < tolerance);

        (next, stop)
    }
}

impl Default for StopConditions {
    fn default() -> Self {
        Self::new(1e-6, None, 800)
    }
}
