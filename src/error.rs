use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

/// The result type used across the crate.
pub type Result<T> = std::result::Result<T, LearnError>;

/// Everything that can go wrong while building, training or querying a model.
#[derive(Debug)]
pub enum LearnError {
    SizeMismatch {
        a: &'static str,
        b: &'static str,
        got: usize,
        expected: usize,
    },
    RaggedRows {
        row: usize,
        got: usize,
        expected: usize,
    },
    EmptyDataset,
    NotTrained,
    DomainViolation {
        sample: usize,
        feature: usize,
        value: f64,
        domain_size: usize,
    },
    InvalidLabel {
        index: usize,
        value: f64,
    },
    SingularMatrix,
    InvalidParameter {
        name: &'static str,
        value: f64,
    },
    InvalidSplit(f64),
    Io(io::Error),
    Parse {
        line: usize,
        token: String,
    },
}

impl Display for LearnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LearnError::SizeMismatch {
                a,
                b,
                got,
                expected,
            } => write!(
                f,
                "There's a size mismatch between {a} and {b}, got {got} and expected {expected}"
            ),
            LearnError::RaggedRows { row, got, expected } => write!(
                f,
                "Row {row} has {got} values but the first row has {expected}"
            ),
            LearnError::EmptyDataset => write!(f, "The dataset has no samples"),
            LearnError::NotTrained => write!(f, "Model not trained. Call train() first."),
            LearnError::DomainViolation {
                sample,
                feature,
                value,
                domain_size,
            } => write!(
                f,
                "Feature {feature} of sample {sample} is {value}, expected an integer in [0, {domain_size})"
            ),
            LearnError::InvalidLabel { index, value } => {
                write!(f, "Label {index} is {value}, labels must be 0 or 1")
            }
            LearnError::SingularMatrix => write!(f, "Matrix is singular or nearly singular"),
            LearnError::InvalidParameter { name, value } => {
                write!(f, "Invalid value {value} for parameter {name}")
            }
            LearnError::InvalidSplit(p) => {
                write!(f, "Split proportion must be between 0 and 1, got {p}")
            }
            LearnError::Io(err) => write!(f, "Failed to read dataset: {err}"),
            LearnError::Parse { line, token } => {
                write!(f, "Line {line}: cannot parse {token:?} as an integer")
            }
        }
    }
}

impl Error for LearnError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LearnError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for LearnError {
    fn from(err: io::Error) -> Self {
        LearnError::Io(err)
    }
}

/// Fails with [`LearnError::SizeMismatch`] unless `got == expected`.
pub(crate) fn ensure_size(
    a: &'static str,
    b: &'static str,
    got: usize,
    expected: usize,
) -> Result<()> {
    if got != expected {
        return Err(LearnError::SizeMismatch {
            a,
            b,
            got,
            expected,
        });
    }

    Ok(())
}

/// Fails with [`LearnError::InvalidLabel`] on the first label that is neither 0 nor 1.
pub(crate) fn ensure_binary_labels(y: &crate::Vector) -> Result<()> {
    match y
        .iter()
        .enumerate()
        .find(|&(_, &label)| label != 0.0 && label != 1.0)
    {
        Some((index, &value)) => Err(LearnError::InvalidLabel { index, value }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn size_mismatch_message_names_both_sides() {
        let err = ensure_size("x", "y", 3, 4).unwrap_err();
        assert_eq!(
            err.to_string(),
            "There's a size mismatch between x and y, got 3 and expected 4"
        );
        assert!(ensure_size("x", "y", 4, 4).is_ok());
    }

    #[test]
    fn binary_labels_are_checked() {
        assert!(ensure_binary_labels(&array![0.0, 1.0, 1.0]).is_ok());
        match ensure_binary_labels(&array![0.0, 2.0]) {
            Err(LearnError::InvalidLabel { index, value }) => {
                assert_eq!(index, 1);
                assert_eq!(value, 2.0);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
