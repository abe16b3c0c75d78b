//! Model prediction shapes and the single sign boundary into the concordance core.
//!
//! Every prediction is first reduced to a [`PredictedSurvival`] (higher means the
//! model expects the sample to live longer) and then negated exactly once by
//! [`PredictedSurvival::into_risk`] to obtain the [`RiskScore`] the core ranks.

use crate::utilities::validation::ValidationError;
use log::trace;
use ndarray::{Array2, ArrayView2, Axis};
use std::fmt;
use std::str::FromStr;

/// Caller hint describing what a prediction matrix holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionType {
    HazardRatio,
    Incidence,
}

impl PredictionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PredictionType::HazardRatio => "hazard_ratio",
            PredictionType::Incidence => "incidence",
        }
    }
}

impl fmt::Display for PredictionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PredictionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hazard_ratio" => Ok(PredictionType::HazardRatio),
            "incidence" => Ok(PredictionType::Incidence),
            other => Err(ValidationError::InvalidValue {
                field: "type_pred",
                message: format!("expected 'hazard_ratio' or 'incidence', got '{other}'"),
            }),
        }
    }
}

/// How a discrete-time prediction sequence is collapsed into expected survival.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscreteKind {
    /// Rows hold per-bin event probabilities; survival is `1 - cumsum`.
    CumulativeIncidence,
    /// Rows hold per-bin conditional hazards; survival is `cumprod(1 - h)`.
    SurvivalProduct,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Prediction {
    ProportionalHazard(Vec<f64>),
    Discrete {
        values: Array2<f64>,
        kind: DiscreteKind,
    },
}

impl Prediction {
    /// Resolves an `n x T` prediction matrix into its variant.
    ///
    /// A single column is a proportional-hazard score and rejects an explicit
    /// `Incidence` hint. Wider matrices are discrete sequences, read as
    /// incidences only when asked to. Non-finite entries are reported by row.
    pub fn from_matrix(
        y_pred: ArrayView2<'_, f64>,
        prediction_type: Option<PredictionType>,
    ) -> Result<Self, ValidationError> {
        let columns = y_pred.ncols();
        trace!(
            "resolving {} x {} prediction matrix with hint {:?}",
            y_pred.nrows(),
            columns,
            prediction_type
        );
        for (row, values) in y_pred.outer_iter().enumerate() {
            if values.iter().any(|v| v.is_nan()) {
                return Err(ValidationError::NaNValue {
                    field: "y_pred",
                    index: row,
                });
            }
            if values.iter().any(|v| v.is_infinite()) {
                return Err(ValidationError::InfiniteValue {
                    field: "y_pred",
                    index: row,
                });
            }
        }
        match (columns, prediction_type) {
            (0, _) => Err(ValidationError::EmptyInput { field: "y_pred" }),
            (1, Some(PredictionType::Incidence)) => Err(ValidationError::PredictionTypeMismatch {
                requested: PredictionType::Incidence.as_str(),
                columns,
            }),
            (1, _) => Ok(Prediction::ProportionalHazard(y_pred.column(0).to_vec())),
            (_, Some(PredictionType::Incidence)) => Ok(Prediction::Discrete {
                values: y_pred.to_owned(),
                kind: DiscreteKind::CumulativeIncidence,
            }),
            (_, _) => Ok(Prediction::Discrete {
                values: y_pred.to_owned(),
                kind: DiscreteKind::SurvivalProduct,
            }),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Prediction::ProportionalHazard(scores) => scores.len(),
            Prediction::Discrete { values, .. } => values.nrows(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn predicted_survival(&self) -> PredictedSurvival {
        match self {
            Prediction::ProportionalHazard(scores) => PredictedSurvival(scores.clone()),
            Prediction::Discrete { values, kind } => {
                PredictedSurvival(expected_survival(values, *kind))
            }
        }
    }
}

/// Sum of the survival curve over the prediction bins.
fn expected_survival(values: &Array2<f64>, kind: DiscreteKind) -> Vec<f64> {
    let survival = match kind {
        DiscreteKind::CumulativeIncidence => {
            let mut cumulative = values.clone();
            cumulative.accumulate_axis_inplace(Axis(1), |&prev, curr| *curr += prev);
            cumulative.mapv_into(|c| 1.0 - c)
        }
        DiscreteKind::SurvivalProduct => {
            let mut survival = values.mapv(|h| 1.0 - h);
            survival.accumulate_axis_inplace(Axis(1), |&prev, curr| *curr *= prev);
            survival
        }
    };
    survival.sum_axis(Axis(1)).to_vec()
}

/// Per-sample scalar where a higher value predicts longer survival.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictedSurvival(Vec<f64>);

impl PredictedSurvival {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_risk(self) -> RiskScore {
        RiskScore(self.0.into_iter().map(|s| -s).collect())
    }
}

/// Per-sample scalar where a higher value predicts an earlier event.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskScore(Vec<f64>);

impl RiskScore {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TEST_STRICT_TOL;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_prediction_type_from_str() {
        assert_eq!("hazard_ratio".parse::<PredictionType>().unwrap(), PredictionType::HazardRatio);
        assert_eq!("incidence".parse::<PredictionType>().unwrap(), PredictionType::Incidence);
        assert!(matches!(
            "hazard".parse::<PredictionType>(),
            Err(ValidationError::InvalidValue { field: "type_pred", .. })
        ));
    }

    #[test]
    fn test_single_column_is_proportional_hazard() {
        let y = array![[0.3], [1.2]];
        let p = Prediction::from_matrix(y.view(), None).unwrap();
        assert_eq!(p, Prediction::ProportionalHazard(vec![0.3, 1.2]));
        let p = Prediction::from_matrix(y.view(), Some(PredictionType::HazardRatio)).unwrap();
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn test_single_column_rejects_incidence_hint() {
        let y = array![[0.3], [1.2]];
        let err = Prediction::from_matrix(y.view(), Some(PredictionType::Incidence)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::PredictionTypeMismatch {
                requested: "incidence",
                columns: 1
            }
        );
    }

    #[test]
    fn test_zero_columns() {
        let y = Array2::<f64>::zeros((3, 0));
        assert!(matches!(
            Prediction::from_matrix(y.view(), None),
            Err(ValidationError::EmptyInput { field: "y_pred" })
        ));
    }

    #[test]
    fn test_non_finite_prediction_reported_by_row() {
        let y_pred = array![[0.1, 0.2], [0.3, f64::NAN], [0.1, 0.1]];
        assert_eq!(
            Prediction::from_matrix(y_pred.view(), None).unwrap_err(),
            ValidationError::NaNValue {
                field: "y_pred",
                index: 1
            }
        );
        let y_pred = array![[0.5], [f64::NEG_INFINITY]];
        assert_eq!(
            Prediction::from_matrix(y_pred.view(), Some(PredictionType::HazardRatio)).unwrap_err(),
            ValidationError::InfiniteValue {
                field: "y_pred",
                index: 1
            }
        );
    }

    #[test]
    fn test_hazard_sequence_survival_product() {
        let y = array![[0.5, 0.5], [0.1, 0.1]];
        let p = Prediction::from_matrix(y.view(), None).unwrap();
        let s = p.predicted_survival();
        assert_abs_diff_eq!(s.as_slice()[0], 0.75, epsilon = TEST_STRICT_TOL);
        assert_abs_diff_eq!(s.as_slice()[1], 1.71, epsilon = TEST_STRICT_TOL);
    }

    #[test]
    fn test_hazard_ratio_hint_on_sequence_uses_survival_product() {
        let y = array![[0.5, 0.5]];
        let p = Prediction::from_matrix(y.view(), Some(PredictionType::HazardRatio)).unwrap();
        assert!(matches!(
            p,
            Prediction::Discrete {
                kind: DiscreteKind::SurvivalProduct,
                ..
            }
        ));
    }

    #[test]
    fn test_incidence_sequence() {
        let y = array![[0.2, 0.3], [0.0, 0.1]];
        let p = Prediction::from_matrix(y.view(), Some(PredictionType::Incidence)).unwrap();
        let s = p.predicted_survival();
        assert_abs_diff_eq!(s.as_slice()[0], 1.3, epsilon = TEST_STRICT_TOL);
        assert_abs_diff_eq!(s.as_slice()[1], 1.9, epsilon = TEST_STRICT_TOL);
    }

    #[test]
    fn test_into_risk_negates_once() {
        let risk = PredictedSurvival::new(vec![2.0, -1.0, 0.0]).into_risk();
        assert_eq!(risk.as_slice(), &[-2.0, 1.0, -0.0]);
    }
}
