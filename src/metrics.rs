//! Scores for comparing predictions against known targets.

use crate::error::{LearnError, Result, ensure_binary_labels, ensure_size};
use crate::{Matrix, Vector};

fn check_pair(y_true: &Vector, y_pred: &Vector) -> Result<()> {
    ensure_size("y_pred", "y_true", y_pred.len(), y_true.len())?;
    if y_true.is_empty() {
        return Err(LearnError::EmptyDataset);
    }
    Ok(())
}

pub fn mean_squared_error(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_pair(y_true, y_pred)?;

    let diff = y_true - y_pred;
    Ok(diff.mapv(|x| x * x).sum() / y_true.len() as f64)
}

pub fn r2_score(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_pair(y_true, y_pred)?;

    let y_mean = y_true.sum() / y_true.len() as f64;
    let ss_res = (y_true - y_pred).mapv(|x| x * x).sum();
    let ss_tot = y_true.mapv(|x| (x - y_mean) * (x - y_mean)).sum();

    if ss_tot == 0.0 {
        return Ok(1.0);
    }

    Ok(1.0 - ss_res / ss_tot)
}

pub fn accuracy_score(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_pair(y_true, y_pred)?;

    let same = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|&(a, b)| a == b)
        .count();
    Ok(same as f64 / y_true.len() as f64)
}

/// Share of misclassified samples.
pub fn error_rate(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    Ok(1.0 - accuracy_score(y_true, y_pred)?)
}

/// `[[TN, FP], [FN, TP]]` for 0/1 labels.
pub fn confusion_matrix(y_true: &Vector, y_pred: &Vector) -> Result<Matrix> {
    check_pair(y_true, y_pred)?;
    ensure_binary_labels(y_true)?;
    ensure_binary_labels(y_pred)?;

    let mut cm = Matrix::zeros((2, 2));
    for (&t, &p) in y_true.iter().zip(y_pred.iter()) {
        cm[(t as usize, p as usize)] += 1.0;
    }
    Ok(cm)
}

pub fn precision_score(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    let cm = confusion_matrix(y_true, y_pred)?;
    let predicted_positive = cm[(1, 1)] + cm[(0, 1)];
    if predicted_positive == 0.0 {
        return Ok(0.0);
    }
    Ok(cm[(1, 1)] / predicted_positive)
}

pub fn recall_score(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    let cm = confusion_matrix(y_true, y_pred)?;
    let actual_positive = cm[(1, 1)] + cm[(1, 0)];
    if actual_positive == 0.0 {
        return Ok(0.0);
    }
    Ok(cm[(1, 1)] / actual_positive)
}

pub fn f1_score(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    let precision = precision_score(y_true, y_pred)?;
    let recall = recall_score(y_true, y_pred)?;
    if precision + recall == 0.0 {
        return Ok(0.0);
    }
    Ok(2.0 * precision * recall / (precision + recall))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_mean_squared_error() {
        let y_true = array![1.0, 2.0, 3.0];
        let y_pred = array![1.0, 2.0, 5.0];

        let mse = mean_squared_error(&y_true, &y_pred).unwrap();
        assert!((mse - 4.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_r2_score() {
        let y_true = array![1.0, 2.0, 3.0, 4.0];
        let y_pred = array![1.0, 2.0, 3.0, 4.0];

        let r2 = r2_score(&y_true, &y_pred).unwrap();
        assert!((r2 - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_classification_scores() {
        let y_true = array![0.0, 0.0, 1.0, 1.0, 1.0];
        let y_pred = array![0.0, 1.0, 1.0, 1.0, 0.0];

        assert!((accuracy_score(&y_true, &y_pred).unwrap() - 0.6).abs() < 1e-10);
        assert!((error_rate(&y_true, &y_pred).unwrap() - 0.4).abs() < 1e-10);

        let cm = confusion_matrix(&y_true, &y_pred).unwrap();
        assert_eq!(cm, array![[1.0, 1.0], [1.0, 2.0]]);

        assert!((precision_score(&y_true, &y_pred).unwrap() - 2.0 / 3.0).abs() < 1e-10);
        assert!((recall_score(&y_true, &y_pred).unwrap() - 2.0 / 3.0).abs() < 1e-10);
        assert!((f1_score(&y_true, &y_pred).unwrap() - 2.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_no_positive_predictions() {
        let y_true = array![0.0, 1.0];
        let y_pred = array![0.0, 0.0];

        assert_eq!(precision_score(&y_true, &y_pred).unwrap(), 0.0);
        assert_eq!(f1_score(&y_true, &y_pred).unwrap(), 0.0);
    }

    #[test]
    fn test_length_mismatch() {
        let y_true = array![0.0, 1.0];
        let y_pred = array![0.0];

        assert!(accuracy_score(&y_true, &y_pred).is_err());
        assert!(confusion_matrix(&y_true, &y_pred).is_err());
        assert!(mean_squared_error(&y_true, &y_pred).is_err());
    }
}
