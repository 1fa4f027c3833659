use ndarray::{ArrayView2, s};

use crate::Matrix;
use crate::error::{LearnError, Result};

/// A dataset of `nsamples` rows by `nfeatures` columns.
///
/// The data is exposed sample-major (`by_sample`, one row per sample) or
/// feature-major (`by_feature`, one row per feature). Neither view is cached,
/// `by_feature` is a transposed view computed on every call.
#[derive(Clone, Debug, PartialEq)]
pub struct X {
    data: Matrix,
}

impl X {
    pub fn new(data: Matrix) -> Self {
        Self { data }
    }

    /// Builds a dataset from nested rows, every one of which must have as
    /// many values as the first.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let k = rows.first().ok_or(LearnError::EmptyDataset)?.len();

        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != k) {
            return Err(LearnError::RaggedRows {
                row,
                got: r.len(),
                expected: k,
            });
        }

        let m = rows.len();
        let flat: Vec<f64> = rows.into_iter().flatten().collect();
        let data = Matrix::from_shape_vec((m, k), flat).map_err(|_| LearnError::SizeMismatch {
            a: "rows",
            b: "matrix shape",
            got: m,
            expected: m * k,
        })?;

        Ok(Self { data })
    }

    pub fn nsamples(&self) -> usize {
        self.data.nrows()
    }

    pub fn nfeatures(&self) -> usize {
        self.data.ncols()
    }

    pub fn by_sample(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    pub fn by_feature(&self) -> ArrayView2<'_, f64> {
        self.data.t()
    }

    /// Returns a new dataset with a trailing feature fixed at 1.0, so that a
    /// single weight vector can carry the intercept.
    pub fn append_ones(&self) -> X {
        let (m, k) = self.data.dim();
        let mut extended = Matrix::ones((m, k + 1));
        extended.slice_mut(s![.., ..k]).assign(&self.data);
        X::new(extended)
    }
}

impl From<Matrix> for X {
    fn from(data: Matrix) -> Self {
        X::new(data)
    }
}
