//! Vector and matrix arithmetic with explicit shape checks.
//!
//! Every operation allocates and returns a fresh container; inputs are never
//! mutated. Shape disagreements are reported as [`LearnError::SizeMismatch`]
//! instead of the panics ndarray would raise.

use ndarray::{ArrayBase, Data, Ix1, Ix2};

use crate::error::{LearnError, Result, ensure_size};
use crate::{Matrix, Vector};

pub fn dot<S1, S2>(a: &ArrayBase<S1, Ix1>, b: &ArrayBase<S2, Ix1>) -> Result<f64>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    ensure_size("left vector", "right vector", b.len(), a.len())?;
    Ok(a.dot(b))
}

pub fn sum_vv<S1, S2>(a: &ArrayBase<S1, Ix1>, b: &ArrayBase<S2, Ix1>) -> Result<Vector>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    ensure_size("left vector", "right vector", b.len(), a.len())?;
    Ok(a + b)
}

pub fn diff_vv<S1, S2>(a: &ArrayBase<S1, Ix1>, b: &ArrayBase<S2, Ix1>) -> Result<Vector>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    ensure_size("left vector", "right vector", b.len(), a.len())?;
    Ok(a - b)
}

pub fn mult_vs<S>(a: &ArrayBase<S, Ix1>, s: f64) -> Vector
where
    S: Data<Elem = f64>,
{
    a.mapv(|v| v * s)
}

/// Dot product of every row of `m` with `v`.
///
/// Works for either orientation of a dataset: with a sample-major matrix the
/// result has one entry per sample, with a feature-major one an entry per
/// feature.
pub fn mult_mv<S1, S2>(m: &ArrayBase<S1, Ix2>, v: &ArrayBase<S2, Ix1>) -> Result<Vector>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    ensure_size("vector", "matrix row", v.len(), m.ncols())?;
    Ok(m.dot(v))
}

/// Euclidean norm.
pub fn norm<S>(v: &ArrayBase<S, Ix1>) -> f64
where
    S: Data<Elem = f64>,
{
    v.dot(v).sqrt()
}

/// Solves `a · x = b` by Gaussian elimination with partial pivoting.
pub fn solve<S1, S2>(a: &ArrayBase<S1, Ix2>, b: &ArrayBase<S2, Ix1>) -> Result<Vector>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    let n = a.nrows();
    ensure_size("matrix columns", "matrix rows", a.ncols(), n)?;
    ensure_size("right-hand side", "matrix rows", b.len(), n)?;

    let mut aug = Matrix::zeros((n, n + 1));
    aug.slice_mut(ndarray::s![.., ..n]).assign(a);
    aug.column_mut(n).assign(b);

    for i in 0..n {
        let mut max_row = i;
        for k in (i + 1)..n {
            if aug[(k, i)].abs() > aug[(max_row, i)].abs() {
                max_row = k;
            }
        }

        if aug[(max_row, i)].abs() < 1e-10 {
            return Err(LearnError::SingularMatrix);
        }

        if max_row != i {
            for j in 0..=n {
                aug.swap((i, j), (max_row, j));
            }
        }

        for k in (i + 1)..n {
            let factor = aug[(k, i)] / aug[(i, i)];
            for j in i..=n {
                aug[(k, j)] -= factor * aug[(i, j)];
            }
        }
    }

    let mut x = Vector::zeros(n);
    for i in (0..n).rev() {
        x[i] = aug[(i, n)];
        for j in (i + 1)..n {
            x[i] -= aug[(i, j)] * x[j];
        }
        x[i] /= aug[(i, i)];
    }

    Ok(x)
}
