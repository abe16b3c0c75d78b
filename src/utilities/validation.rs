use crate::concordance::error::ConcordanceError;
use crate::constants::MIN_SAMPLES;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} length mismatch: expected {expected}, got {got}")]
    LengthMismatch {
        expected: usize,
        got: usize,
        field: &'static str,
    },
    #[error("{field} cannot be empty")]
    EmptyInput { field: &'static str },
    #[error("invalid value for {field}: {message}")]
    InvalidValue {
        field: &'static str,
        message: String,
    },
    #[error("{field} contains negative value {value} at index {index}")]
    NegativeValue {
        field: &'static str,
        index: usize,
        value: f64,
    },
    #[error("event indicator must be 0 or 1, got {value} at index {index}")]
    InvalidStatus { index: usize, value: f64 },
    #[error("{field} contains NaN at index {index}")]
    NaNValue { field: &'static str, index: usize },
    #[error("{field} contains infinite value at index {index}")]
    InfiniteValue { field: &'static str, index: usize },
    #[error("{field} must have {expected} columns, got {got}")]
    ShapeMismatch {
        field: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("prediction type '{requested}' does not apply to predictions with {columns} column(s)")]
    PredictionTypeMismatch {
        requested: &'static str,
        columns: usize,
    },
}

#[cfg(feature = "python")]
impl From<ValidationError> for pyo3::PyErr {
    fn from(err: ValidationError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}

pub fn validate_length(
    expected: usize,
    got: usize,
    field: &'static str,
) -> Result<(), ValidationError> {
    if expected != got {
        return Err(ValidationError::LengthMismatch {
            expected,
            got,
            field,
        });
    }
    Ok(())
}

pub fn validate_non_negative(slice: &[f64], field: &'static str) -> Result<(), ValidationError> {
    for (i, &val) in slice.iter().enumerate() {
        if val < 0.0 {
            return Err(ValidationError::NegativeValue {
                field,
                index: i,
                value: val,
            });
        }
    }
    Ok(())
}

pub fn validate_no_nan(slice: &[f64], field: &'static str) -> Result<(), ValidationError> {
    for (i, &val) in slice.iter().enumerate() {
        if val.is_nan() {
            return Err(ValidationError::NaNValue { field, index: i });
        }
    }
    Ok(())
}

/// Rejects NaN and infinite values, reporting NaN first.
pub fn validate_finite(slice: &[f64], field: &'static str) -> Result<(), ValidationError> {
    validate_no_nan(slice, field)?;
    for (i, &val) in slice.iter().enumerate() {
        if val.is_infinite() {
            return Err(ValidationError::InfiniteValue { field, index: i });
        }
    }
    Ok(())
}

/// A risk tie tolerance must be finite and non-negative.
pub fn validate_tied_tol(tied_tol: f64) -> Result<(), ValidationError> {
    if !tied_tol.is_finite() || tied_tol < 0.0 {
        return Err(ValidationError::InvalidValue {
            field: "tied_tol",
            message: format!("expected a finite non-negative tolerance, got {tied_tol}"),
        });
    }
    Ok(())
}

/// Checks shared by every censored concordance entry point.
///
/// Shape and value problems surface as [`ValidationError`]; too few samples and
/// an all-censored indicator are data-adequacy failures reported through their
/// own [`ConcordanceError`] variants.
pub fn check_censored_inputs(
    event_indicator: &[bool],
    event_time: &[f64],
    estimate: &[f64],
    weights: Option<&[f64]>,
    tied_tol: f64,
) -> Result<(), ConcordanceError> {
    let n = event_time.len();
    validate_length(n, event_indicator.len(), "event_indicator")?;
    validate_length(n, estimate.len(), "estimate")?;
    validate_finite(event_time, "event_time")?;
    validate_non_negative(event_time, "event_time")?;
    validate_finite(estimate, "estimate")?;
    if let Some(w) = weights {
        validate_length(n, w.len(), "weights")?;
        validate_finite(w, "weights")?;
        validate_non_negative(w, "weights")?;
    }
    validate_tied_tol(tied_tol)?;

    if n < MIN_SAMPLES {
        return Err(ConcordanceError::InsufficientSamples { got: n });
    }
    if !event_indicator.iter().any(|&e| e) {
        return Err(ConcordanceError::AllCensored);
    }
    Ok(())
}
