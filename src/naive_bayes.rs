//! Categorical Naive Bayes for binary labels.
//!
//! Features are integer codes in `[0, domain_size)`. Training estimates the
//! prior `P(y = 1)` and the per-feature tables `P(x_f = v | y)` with add-one
//! (Laplace) smoothing, so every estimate is strictly positive and the
//! log-likelihoods computed at prediction time are always finite.
//!
//! # Examples
//! ```rust
//! use binclass::{Model, NaiveBayes, X};
//! use ndarray::array;
//!
//! let x = X::new(array![[0.0], [0.0], [1.0], [1.0]]);
//! let y = array![0.0, 0.0, 1.0, 1.0];
//!
//! let mut model = NaiveBayes::new(1, 2);
//! let hypothesis = model.train(&x, &y).unwrap();
//! assert_eq!(model.predict(&x).unwrap(), y);
//! assert!(hypothesis.py() > 0.0 && hypothesis.py() < 1.0);
//! ```

use log::{debug, info};
use ndarray::{Array3, ArrayView1, ArrayView3};

use crate::error::{LearnError, Result, ensure_binary_labels, ensure_size};
use crate::model::{Hypothesis, Model};
use crate::x::X;
use crate::{Matrix, Vector};

#[derive(Clone, Debug)]
pub struct NaiveBayes {
    nfeatures: usize,
    domain_size: usize,
    hypothesis: Option<NaiveBayesHypothesis>,
}

impl NaiveBayes {
    pub fn new(nfeatures: usize, domain_size: usize) -> Self {
        if domain_size == 0 {
            panic!("domain_size must be > 0, got {}", domain_size);
        }

        Self {
            nfeatures,
            domain_size,
            hypothesis: None,
        }
    }

    pub fn nfeatures(&self) -> usize {
        self.nfeatures
    }

    pub fn domain_size(&self) -> usize {
        self.domain_size
    }
}

impl Model for NaiveBayes {
    type Hypothesis = NaiveBayesHypothesis;

    fn train(&mut self, x: &X, y: &Vector) -> Result<NaiveBayesHypothesis> {
        self.hypothesis = None;

        ensure_size("x features", "model features", x.nfeatures(), self.nfeatures)?;
        ensure_size("labels", "samples", y.len(), x.nsamples())?;
        ensure_binary_labels(y)?;

        let m = y.len();
        let ones = y.iter().filter(|&&label| label == 1.0).count();
        let zeros = m - ones;

        let py = (1.0 + ones as f64) / (m as f64 + 2.0);

        let mut counts = Array3::<usize>::zeros((2, self.nfeatures, self.domain_size));
        for (i, (xi, &yi)) in x.by_sample().rows().into_iter().zip(y.iter()).enumerate() {
            let label = yi as usize;
            for (j, &xij) in xi.iter().enumerate() {
                let v = value_index(i, j, xij, self.domain_size)?;
                counts[(label, j, v)] += 1;
            }
        }

        let domain_size = self.domain_size;
        let pi = Array3::from_shape_fn(counts.raw_dim(), |(label, f, v)| {
            let seen = if label == 1 { ones } else { zeros };
            (1 + counts[(label, f, v)]) as f64 / (domain_size + seen) as f64
        });

        info!(
            "naive bayes trained: samples={m} positives={ones} features={} py={py:.4}",
            self.nfeatures
        );

        let hypothesis = NaiveBayesHypothesis { py, pi };
        self.hypothesis = Some(hypothesis.clone());
        Ok(hypothesis)
    }

    fn hypothesis(&self) -> Option<&NaiveBayesHypothesis> {
        self.hypothesis.as_ref()
    }
}

/// Smoothed probability tables learned by [`NaiveBayes`].
#[derive(Clone, Debug, PartialEq)]
pub struct NaiveBayesHypothesis {
    py: f64,
    /// `pi[(y, feature, value)] = P(x_feature = value | y)`
    pi: Array3<f64>,
}

impl NaiveBayesHypothesis {
    /// Prior probability of label 1.
    pub fn py(&self) -> f64 {
        self.py
    }

    pub fn pi(&self) -> ArrayView3<'_, f64> {
        self.pi.view()
    }

    pub fn nfeatures(&self) -> usize {
        self.pi.dim().1
    }

    pub fn domain_size(&self) -> usize {
        self.pi.dim().2
    }

    /// Joint log-likelihoods `(ln P(x, y = 0), ln P(x, y = 1))`, one row per sample.
    pub fn predict_log_likelihoods(&self, x: &X) -> Result<Matrix> {
        ensure_size("x features", "model features", x.nfeatures(), self.nfeatures())?;

        let mut out = Matrix::zeros((x.nsamples(), 2));
        for (i, xi) in x.by_sample().rows().into_iter().enumerate() {
            out[(i, 0)] = (1.0 - self.py).ln() + self.log_likelihood(i, xi, 0)?;
            out[(i, 1)] = self.py.ln() + self.log_likelihood(i, xi, 1)?;
        }

        Ok(out)
    }

    fn log_likelihood(&self, sample: usize, xi: ArrayView1<'_, f64>, label: usize) -> Result<f64> {
        let domain_size = self.domain_size();
        xi.iter().enumerate().try_fold(0.0, |acc, (f, &value)| -> Result<f64> {
            let v = value_index(sample, f, value, domain_size)?;
            Ok(acc + self.pi[(label, f, v)].ln())
        })
    }
}

impl Hypothesis for NaiveBayesHypothesis {
    fn predict(&self, x: &X) -> Result<Vector> {
        let likelihoods = self.predict_log_likelihoods(x)?;
        debug!("naive bayes predicting {} samples", x.nsamples());

        // ties go to class 0
        Ok(likelihoods
            .rows()
            .into_iter()
            .map(|l| if l[0] >= l[1] { 0.0 } else { 1.0 })
            .collect())
    }
}

fn value_index(sample: usize, feature: usize, value: f64, domain_size: usize) -> Result<usize> {
    if value.fract() != 0.0 || value < 0.0 || value >= domain_size as f64 {
        return Err(LearnError::DomainViolation {
            sample,
            feature,
            value,
            domain_size,
        });
    }

    Ok(value as usize)
}
