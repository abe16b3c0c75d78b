use crate::utilities::validation::ValidationError;
use thiserror::Error;

/// Failures of a concordance computation.
///
/// `Validation` wraps malformed input (caller bugs). The remaining variants are
/// data-adequacy failures: the input is well-formed but cannot support the
/// statistic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConcordanceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("need a minimum of two samples, got {got}")]
    InsufficientSamples { got: usize },
    #[error("all samples are censored")]
    AllCensored,
    #[error("data has no comparable pairs, cannot estimate concordance index")]
    NoComparablePairs,
    #[error("comparable pairs carry zero total weight, cannot estimate concordance index")]
    ZeroWeight,
}

#[cfg(feature = "python")]
pyo3::create_exception!(
    survival_concordance,
    NoComparablePairError,
    pyo3::exceptions::PyValueError,
    "Data of censored event times does not contain one or more comparable pairs."
);

#[cfg(feature = "python")]
impl From<ConcordanceError> for pyo3::PyErr {
    fn from(err: ConcordanceError) -> pyo3::PyErr {
        match err {
            ConcordanceError::NoComparablePairs => NoComparablePairError::new_err(err.to_string()),
            ConcordanceError::Validation(inner) => inner.into(),
            _ => pyo3::exceptions::PyValueError::new_err(err.to_string()),
        }
    }
}
