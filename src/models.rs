//! Data types and associated functions and methods.

use ndarray::{Array2, Array3, ArrayView1, ArrayView2, Axis};

use crate::error::ProjectionError;

/// Scenario labels of the probabilistic (RCP ensemble) dataset, in scenario
/// axis order.
pub const RCP_SCENARIOS: [&str; 4] = ["rcp26", "rcp45", "rcp60", "rcp85"];

/// Scenario labels of the deterministic (NOAA) dataset, in scenario axis
/// order, from lowest to highest projected rise.
pub const NOAA_SCENARIOS: [&str; 5] = ["low", "int_low", "intermediate", "int_high", "high"];

/// Resolve a scenario label to its index on the scenario axis.
fn scenario_index(valid: &'static [&'static str], name: &str) -> Result<usize, ProjectionError> {
    valid
        .iter()
        .position(|label| *label == name)
        .ok_or_else(|| ProjectionError::UnknownScenario {
            name: name.to_string(),
            valid,
        })
}

/// Resolve a year to its index on the time axis.
fn year_index(years: &[i32], year: i32) -> Result<usize, ProjectionError> {
    years.iter().position(|&entry| entry == year).ok_or_else(|| {
        let min = years.iter().copied().min().unwrap_or_default();
        let max = years.iter().copied().max().unwrap_or_default();
        ProjectionError::YearOutOfRange { year, min, max }
    })
}

/// Validate one extent of a values array against the matching axis length.
fn check_axis(
    axis: usize,
    axis_name: &'static str,
    actual: usize,
    expected: usize,
) -> Result<(), ProjectionError> {
    if actual == expected {
        Ok(())
    } else {
        Err(ProjectionError::AxisLength {
            axis,
            axis_name,
            actual,
            expected,
        })
    }
}

/// Probabilistic sea level projections
///
/// Holds an ensemble of simulated sea level trajectories (in metres) for each
/// RCP emissions scenario. `values` is indexed `[time, ensemble, scenario]`
/// and the scenario axis order matches [RCP_SCENARIOS]. Immutable once
/// constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct ProbabilisticDataset {
    years: Vec<i32>,
    ensemble_ids: Vec<i32>,
    values: Array3<f64>,
}

impl ProbabilisticDataset {
    /// Return a new ProbabilisticDataset.
    ///
    /// Validates the extents of `values` against the axis vectors and the
    /// fixed scenario label count, so every constructed dataset is internally
    /// consistent.
    ///
    /// # Arguments
    ///
    /// * `years`: Time axis, one entry per time step
    /// * `ensemble_ids`: Ensemble member identifiers
    /// * `values`: Projection values indexed `[time, ensemble, scenario]`
    pub fn new(
        years: Vec<i32>,
        ensemble_ids: Vec<i32>,
        values: Array3<f64>,
    ) -> Result<Self, ProjectionError> {
        let (time, ensemble, scenario) = values.dim();
        check_axis(0, "time", time, years.len())?;
        check_axis(1, "ensemble", ensemble, ensemble_ids.len())?;
        check_axis(2, "scenario", scenario, RCP_SCENARIOS.len())?;
        Ok(ProbabilisticDataset {
            years,
            ensemble_ids,
            values,
        })
    }

    /// Time axis years.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Ensemble member identifiers.
    pub fn ensemble_ids(&self) -> &[i32] {
        &self.ensemble_ids
    }

    /// Projection values indexed `[time, ensemble, scenario]`.
    pub fn values(&self) -> &Array3<f64> {
        &self.values
    }

    /// Scenario labels, in scenario axis order.
    pub fn scenarios(&self) -> &'static [&'static str] {
        &RCP_SCENARIOS
    }

    /// Minimum and maximum year on the time axis, or `None` if it is empty.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let min = self.years.iter().copied().min()?;
        let max = self.years.iter().copied().max()?;
        Some((min, max))
    }

    /// Extract the `(time, ensemble)` slice for the named scenario.
    ///
    /// The view borrows the dataset without copying, so repeated extraction
    /// always yields identical values.
    ///
    /// # Arguments
    ///
    /// * `scenario`: One of [RCP_SCENARIOS]
    pub fn extract(&self, scenario: &str) -> Result<ArrayView2<'_, f64>, ProjectionError> {
        let index = scenario_index(&RCP_SCENARIOS, scenario)?;
        Ok(self.values.index_axis(Axis(2), index))
    }

    /// Return the ensemble distribution for the named scenario at a year.
    ///
    /// # Arguments
    ///
    /// * `scenario`: One of [RCP_SCENARIOS]
    /// * `year`: A year present on the time axis
    pub fn at_year(&self, scenario: &str, year: i32) -> Result<ArrayView1<'_, f64>, ProjectionError> {
        let slice = self.extract(scenario)?;
        let index = year_index(&self.years, year)?;
        Ok(slice.index_axis_move(Axis(0), index))
    }
}

/// Deterministic sea level projections
///
/// Holds one sea level trajectory (in metres) per NOAA interagency scenario.
/// `values` is indexed `[time, scenario]` and the scenario axis order matches
/// [NOAA_SCENARIOS]. Immutable once constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct DeterministicDataset {
    years: Vec<i32>,
    values: Array2<f64>,
}

impl DeterministicDataset {
    /// Return a new DeterministicDataset.
    ///
    /// # Arguments
    ///
    /// * `years`: Time axis, one entry per time step
    /// * `values`: Projection values indexed `[time, scenario]`
    pub fn new(years: Vec<i32>, values: Array2<f64>) -> Result<Self, ProjectionError> {
        let (time, scenario) = values.dim();
        check_axis(0, "time", time, years.len())?;
        check_axis(1, "scenario", scenario, NOAA_SCENARIOS.len())?;
        Ok(DeterministicDataset { years, values })
    }

    /// Time axis years.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Projection values indexed `[time, scenario]`.
    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// Scenario labels, in scenario axis order.
    pub fn scenarios(&self) -> &'static [&'static str] {
        &NOAA_SCENARIOS
    }

    /// Minimum and maximum year on the time axis, or `None` if it is empty.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let min = self.years.iter().copied().min()?;
        let max = self.years.iter().copied().max()?;
        Some((min, max))
    }

    /// Extract the trajectory over time for the named scenario.
    ///
    /// # Arguments
    ///
    /// * `scenario`: One of [NOAA_SCENARIOS]
    pub fn extract(&self, scenario: &str) -> Result<ArrayView1<'_, f64>, ProjectionError> {
        let index = scenario_index(&NOAA_SCENARIOS, scenario)?;
        Ok(self.values.index_axis(Axis(1), index))
    }
}
