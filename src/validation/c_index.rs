//! Concordance of a fitted model's predictions against observed outcomes.

use crate::concordance::censored::{concordance_index_censored_core, ConcordanceResult};
use crate::concordance::error::ConcordanceError;
use crate::constants::DEFAULT_TIED_TOL;
use crate::utilities::validation::validate_length;
use crate::validation::outcome::Outcomes;
use crate::validation::prediction::{Prediction, PredictionType};
use log::debug;
use ndarray::ArrayView2;
#[cfg(feature = "python")]
use pyo3::prelude::*;

pub fn compute_concordance_result_core(
    outcomes: &Outcomes,
    prediction: &Prediction,
) -> Result<ConcordanceResult, ConcordanceError> {
    validate_length(outcomes.len(), prediction.len(), "predictions")?;
    let risk = prediction.predicted_survival().into_risk();
    let result = concordance_index_censored_core(
        outcomes.event(),
        outcomes.time(),
        risk.as_slice(),
        DEFAULT_TIED_TOL,
    )?;
    debug!(
        "c-index {:.6} from {} samples ({} events)",
        result.c_index,
        outcomes.len(),
        outcomes.n_events()
    );
    Ok(result)
}

pub fn compute_concordance_index_core(
    outcomes: &Outcomes,
    prediction: &Prediction,
) -> Result<f64, ConcordanceError> {
    compute_concordance_result_core(outcomes, prediction).map(|r| r.c_index)
}

/// Matrix form: `y_true` is `n x 2` (time, event) and `y_pred` is `n x T`.
pub fn concordance_index_core(
    y_true: ArrayView2<'_, f64>,
    y_pred: ArrayView2<'_, f64>,
    prediction_type: Option<PredictionType>,
) -> Result<f64, ConcordanceError> {
    let outcomes = Outcomes::from_matrix(y_true)?;
    let prediction = Prediction::from_matrix(y_pred, prediction_type)?;
    compute_concordance_index_core(&outcomes, &prediction)
}

#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(signature = (y_true, y_pred, type_pred=None))]
pub fn concordance_index(
    y_true: &Bound<'_, PyAny>,
    y_pred: &Bound<'_, PyAny>,
    type_pred: Option<&str>,
) -> PyResult<f64> {
    use crate::utilities::numpy_utils::extract_2d_array_f64;

    let prediction_type = type_pred.map(str::parse::<PredictionType>).transpose()?;
    let y_true = extract_2d_array_f64(y_true)?;
    let y_pred = extract_2d_array_f64(y_pred)?;
    Ok(concordance_index_core(
        y_true.view(),
        y_pred.view(),
        prediction_type,
    )?)
}
