//! Harrell's concordance index for right-censored data.
//!
//! `estimate` is a risk score: a higher value means the sample is expected to
//! experience the event sooner. A comparable pair is concordant when the
//! uncensored sample of the pair carries the higher estimate; estimates within
//! `tied_tol` of each other earn half credit.

use crate::concordance::comparable::{find_comparable, sort_order, ComparablePairs};
use crate::concordance::error::ConcordanceError;
use crate::constants::{DEFAULT_TIED_TOL, TIE_CREDIT};
use crate::utilities::validation::check_censored_inputs;
use itertools::izip;
use log::debug;
#[cfg(feature = "python")]
use pyo3::prelude::*;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "python", pyclass(frozen, get_all))]
pub struct ConcordanceResult {
    pub c_index: f64,
    pub concordant: usize,
    pub discordant: usize,
    pub tied_risk: usize,
    pub tied_time: usize,
    pub numerator: f64,
    pub denominator: f64,
}

impl ConcordanceResult {
    /// Unweighted number of comparable pairs.
    pub fn comparable_pairs(&self) -> usize {
        self.concordant + self.discordant + self.tied_risk
    }
}

#[cfg(feature = "python")]
#[pymethods]
impl ConcordanceResult {
    #[getter]
    fn get_comparable_pairs(&self) -> usize {
        self.comparable_pairs()
    }

    fn __repr__(&self) -> String {
        format!(
            "ConcordanceResult(c_index={}, concordant={}, discordant={}, tied_risk={}, tied_time={})",
            self.c_index, self.concordant, self.discordant, self.tied_risk, self.tied_time
        )
    }
}

/// Accumulates weighted concordance over precomputed comparable pairs.
///
/// Inputs are assumed validated. Panics if a mask is keyed by a censored sample,
/// which can only come from a broken [`ComparablePairs`].
pub fn accumulate_concordance(
    comparable: &ComparablePairs,
    event_indicator: &[bool],
    estimate: &[f64],
    weights: &[f64],
    order: &[usize],
    tied_tol: f64,
) -> Result<ConcordanceResult, ConcordanceError> {
    if comparable.is_empty() {
        return Err(ConcordanceError::NoComparablePairs);
    }

    let mut concordant = 0;
    let mut discordant = 0;
    let mut tied_risk = 0;
    let mut numerator = 0.0;
    let mut denominator = 0.0;

    for (pos, mask) in comparable.iter() {
        let idx = order[pos];
        assert!(
            event_indicator[idx],
            "got censored sample at index {idx}, but expected uncensored"
        );
        let est_i = estimate[idx];
        let w_i = weights[idx];

        let mut n_pairs = 0;
        let mut n_ties = 0;
        let mut n_con = 0;
        for (_, &other) in izip!(mask, order).filter(|&(&c, _)| c) {
            let est = estimate[other];
            n_pairs += 1;
            if (est - est_i).abs() <= tied_tol {
                n_ties += 1;
            } else if est < est_i {
                n_con += 1;
            }
        }

        numerator += w_i * n_con as f64 + TIE_CREDIT * w_i * n_ties as f64;
        denominator += w_i * n_pairs as f64;

        concordant += n_con;
        discordant += n_pairs - n_con - n_ties;
        tied_risk += n_ties;
    }

    if denominator <= 0.0 {
        return Err(ConcordanceError::ZeroWeight);
    }

    Ok(ConcordanceResult {
        c_index: numerator / denominator,
        concordant,
        discordant,
        tied_risk,
        tied_time: comparable.tied_time(),
        numerator,
        denominator,
    })
}

/// Sorts, enumerates comparable pairs and accumulates. Inputs are assumed
/// validated; see [`concordance_index_censored_weighted_core`] for the checked
/// entry point.
pub fn estimate_concordance_index(
    event_indicator: &[bool],
    event_time: &[f64],
    estimate: &[f64],
    weights: &[f64],
    tied_tol: f64,
) -> Result<ConcordanceResult, ConcordanceError> {
    let order = sort_order(event_time);
    let comparable = find_comparable(event_indicator, event_time, &order);
    debug!(
        "concordance over {} samples: {} events with comparable pairs, {} pairs, {} tied on time",
        event_time.len(),
        comparable.len(),
        comparable.pair_count(),
        comparable.tied_time()
    );
    accumulate_concordance(
        &comparable,
        event_indicator,
        estimate,
        weights,
        &order,
        tied_tol,
    )
}

pub fn concordance_index_censored_core(
    event_indicator: &[bool],
    event_time: &[f64],
    estimate: &[f64],
    tied_tol: f64,
) -> Result<ConcordanceResult, ConcordanceError> {
    check_censored_inputs(event_indicator, event_time, estimate, None, tied_tol)?;
    let weights = vec![1.0; event_time.len()];
    estimate_concordance_index(event_indicator, event_time, estimate, &weights, tied_tol)
}

pub fn concordance_index_censored_weighted_core(
    event_indicator: &[bool],
    event_time: &[f64],
    estimate: &[f64],
    weights: &[f64],
    tied_tol: f64,
) -> Result<ConcordanceResult, ConcordanceError> {
    check_censored_inputs(event_indicator, event_time, estimate, Some(weights), tied_tol)?;
    estimate_concordance_index(event_indicator, event_time, estimate, weights, tied_tol)
}

#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(signature = (event_indicator, event_time, estimate, tied_tol=DEFAULT_TIED_TOL, weights=None))]
pub fn concordance_index_censored(
    event_indicator: &Bound<'_, PyAny>,
    event_time: &Bound<'_, PyAny>,
    estimate: &Bound<'_, PyAny>,
    tied_tol: f64,
    weights: Option<&Bound<'_, PyAny>>,
) -> PyResult<ConcordanceResult> {
    use crate::utilities::numpy_utils::{
        extract_optional_vec_f64, extract_vec_bool, extract_vec_f64,
    };

    let event_indicator = extract_vec_bool(event_indicator)?;
    let event_time = extract_vec_f64(event_time)?;
    let estimate = extract_vec_f64(estimate)?;
    let result = match extract_optional_vec_f64(weights)? {
        Some(w) => concordance_index_censored_weighted_core(
            &event_indicator,
            &event_time,
            &estimate,
            &w,
            tied_tol,
        ),
        None => concordance_index_censored_core(&event_indicator, &event_time, &estimate, tied_tol),
    };
    Ok(result?)
}

/// Unit-weight concordance with the default tie tolerance.
pub fn harrell_c_index(
    event_indicator: &[bool],
    event_time: &[f64],
    estimate: &[f64],
) -> Result<f64, ConcordanceError> {
    concordance_index_censored_core(event_indicator, event_time, estimate, DEFAULT_TIED_TOL)
        .map(|r| r.c_index)
}
