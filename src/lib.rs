//! Harrell's concordance index for right-censored survival data.
//!
//! The [`concordance`] module holds the pair-counting core; [`validation`]
//! adapts model predictions (proportional-hazard scores or discrete hazard and
//! incidence sequences) into the risk scores the core ranks.

pub mod concordance;
pub mod constants;
pub mod utilities;
pub mod validation;

#[cfg(test)]
mod tests;

pub use concordance::censored::{
    concordance_index_censored_core, concordance_index_censored_weighted_core, harrell_c_index,
    ConcordanceResult,
};
pub use concordance::error::ConcordanceError;
pub use utilities::validation::ValidationError;
pub use validation::c_index::{
    compute_concordance_index_core, compute_concordance_result_core, concordance_index_core,
};
pub use validation::outcome::{Outcomes, SurvivalOutcome};
pub use validation::prediction::{
    DiscreteKind, PredictedSurvival, Prediction, PredictionType, RiskScore,
};

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn survival_concordance(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(
        concordance::censored::concordance_index_censored,
        m
    )?)?;
    m.add_function(wrap_pyfunction!(validation::c_index::concordance_index, m)?)?;
    m.add_class::<ConcordanceResult>()?;
    m.add(
        "NoComparablePairError",
        m.py().get_type::<concordance::error::NoComparablePairError>(),
    )?;
    m.add("DEFAULT_TIED_TOL", constants::DEFAULT_TIED_TOL)?;
    Ok(())
}
