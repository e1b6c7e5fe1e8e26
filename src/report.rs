//! Dataset summary reporting.

use std::fmt;

use serde::Serialize;
use strum_macros::Display;

use crate::models::{DeterministicDataset, ProbabilisticDataset};

/// Dataset kinds
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DatasetKind {
    /// Ensemble projections per RCP emissions scenario
    Probabilistic,
    /// One trajectory per NOAA interagency scenario
    Deterministic,
}

/// Metadata summary of a loaded dataset
///
/// Implements serde serialise for machine-readable output; [fmt::Display]
/// renders the human-readable report text.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DatasetSummary {
    /// Dataset kind
    pub kind: DatasetKind,
    /// Minimum and maximum year on the time axis, if non-empty
    pub year_range: Option<(i32, i32)>,
    /// Number of time steps
    pub time_steps: usize,
    /// Number of ensemble members, for probabilistic datasets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ensemble_members: Option<usize>,
    /// Scenario labels, in scenario axis order
    pub scenarios: &'static [&'static str],
}

impl DatasetSummary {
    /// Summarise a probabilistic dataset.
    pub fn probabilistic(dataset: &ProbabilisticDataset) -> Self {
        DatasetSummary {
            kind: DatasetKind::Probabilistic,
            year_range: dataset.year_range(),
            time_steps: dataset.years().len(),
            ensemble_members: Some(dataset.ensemble_ids().len()),
            scenarios: dataset.scenarios(),
        }
    }

    /// Summarise a deterministic dataset.
    pub fn deterministic(dataset: &DeterministicDataset) -> Self {
        DatasetSummary {
            kind: DatasetKind::Deterministic,
            year_range: dataset.year_range(),
            time_steps: dataset.years().len(),
            ensemble_members: None,
            scenarios: dataset.scenarios(),
        }
    }
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} sea level projections", self.kind)?;
        match self.year_range {
            Some((min, max)) => {
                writeln!(f, "  years: {min}..={max} ({} time steps)", self.time_steps)?
            }
            None => writeln!(f, "  years: none")?,
        }
        if let Some(members) = self.ensemble_members {
            writeln!(f, "  ensemble members: {members}")?;
        }
        write!(f, "  scenarios: {}", self.scenarios.join(", "))
    }
}

/// Render the report for both datasets held in a projection data file.
///
/// # Arguments
///
/// * `probabilistic`: The BRICK ensemble dataset
/// * `deterministic`: The NOAA scenario dataset
pub fn file_report(
    probabilistic: &ProbabilisticDataset,
    deterministic: &DeterministicDataset,
) -> String {
    format!(
        "{}\n\n{}\n",
        DatasetSummary::probabilistic(probabilistic),
        DatasetSummary::deterministic(deterministic)
    )
}
