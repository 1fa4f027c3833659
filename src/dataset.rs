use std::fs;
use std::path::Path;

use log::debug;
use ndarray::Axis;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{LearnError, Result, ensure_binary_labels, ensure_size};
use crate::x::X;
use crate::{Matrix, Vector};

/// Feature rows paired with their 0/1 labels.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub features: Matrix,
    pub labels: Vector,
}

impl Dataset {
    pub fn new(features: Matrix, labels: Vector) -> Result<Self> {
        ensure_size("labels", "samples", labels.len(), features.nrows())?;
        ensure_binary_labels(&labels)?;

        Ok(Self { features, labels })
    }

    /// Reads a dataset file: one sample per line, whitespace-separated
    /// integers, the label last.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let dataset = Self::parse(&text)?;

        debug!(
            "loaded {} samples with {} features from {}",
            dataset.n_samples(),
            dataset.n_features(),
            path.display()
        );
        Ok(dataset)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let mut rows = Vec::new();
        let mut labels = Vec::new();

        for (i, line) in text.lines().enumerate() {
            let values = line
                .split_whitespace()
                .map(|token| {
                    token.parse::<i64>().map_err(|_| LearnError::Parse {
                        line: i + 1,
                        token: token.to_string(),
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            let Some((&label, features)) = values.split_last() else {
                continue;
            };

            rows.push(features.iter().map(|&v| v as f64).collect::<Vec<_>>());
            labels.push(label as f64);
        }

        let x = X::from_rows(rows)?;
        Self::new(x.by_sample().to_owned(), Vector::from(labels))
    }

    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    pub fn x(&self) -> X {
        X::new(self.features.clone())
    }

    /// Shuffles the samples and splits them in two disjoint parts, the first
    /// holding a `p` share of each class and the second the remainder.
    pub fn stratified_split<R: Rng + ?Sized>(&self, p: f64, rng: &mut R) -> Result<(Self, Self)> {
        if !(p > 0.0 && p < 1.0) {
            return Err(LearnError::InvalidSplit(p));
        }

        let mut indices: Vec<usize> = (0..self.n_samples()).collect();
        indices.shuffle(rng);

        let (ones, zeros): (Vec<usize>, Vec<usize>) =
            indices.into_iter().partition(|&i| self.labels[i] == 1.0);

        let n_zeros = (p * zeros.len() as f64) as usize;
        let n_ones = (p * ones.len() as f64) as usize;

        let mut first: Vec<usize> = zeros[..n_zeros].iter().chain(&ones[..n_ones]).copied().collect();
        let mut second: Vec<usize> = zeros[n_zeros..].iter().chain(&ones[n_ones..]).copied().collect();
        first.shuffle(rng);
        second.shuffle(rng);

        Ok((self.select(&first), self.select(&second)))
    }

    fn select(&self, indices: &[usize]) -> Self {
        Self {
            features: self.features.select(Axis(0), indices),
            labels: self.labels.select(Axis(0), indices),
        }
    }
}
