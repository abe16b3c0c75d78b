use crate::utilities::validation::{validate_length, ValidationError};
use itertools::izip;
use ndarray::ArrayView2;

/// Observed time paired with whether the event was seen at that time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurvivalOutcome {
    pub time: f64,
    pub event: bool,
}

/// Column-split outcomes, aligned by sample index.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Outcomes {
    time: Vec<f64>,
    event: Vec<bool>,
}

impl Outcomes {
    pub fn new(time: Vec<f64>, event: Vec<bool>) -> Result<Self, ValidationError> {
        validate_length(time.len(), event.len(), "event")?;
        Ok(Self { time, event })
    }

    pub fn from_pairs(pairs: &[SurvivalOutcome]) -> Self {
        Self {
            time: pairs.iter().map(|o| o.time).collect(),
            event: pairs.iter().map(|o| o.event).collect(),
        }
    }

    /// Reads an `n x 2` matrix whose first column is time and second column is
    /// the event indicator coded as 0 or 1.
    pub fn from_matrix(y_true: ArrayView2<'_, f64>) -> Result<Self, ValidationError> {
        if y_true.ncols() != 2 {
            return Err(ValidationError::ShapeMismatch {
                field: "y_true",
                expected: 2,
                got: y_true.ncols(),
            });
        }
        let time: Vec<f64> = y_true.column(0).to_vec();
        let event = y_true
            .column(1)
            .iter()
            .enumerate()
            .map(|(index, &value)| match value {
                v if v == 1.0 => Ok(true),
                v if v == 0.0 => Ok(false),
                _ => Err(ValidationError::InvalidStatus { index, value }),
            })
            .collect::<Result<Vec<bool>, _>>()?;
        Ok(Self { time, event })
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn event(&self) -> &[bool] {
        &self.event
    }

    pub fn n_events(&self) -> usize {
        self.event.iter().filter(|&&e| e).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = SurvivalOutcome> + '_ {
        izip!(&self.time, &self.event).map(|(&time, &event)| SurvivalOutcome { time, event })
    }
}
