//! Dataset loaders.
//!
//! Loaders turn named arrays from an [ArrayStore] into the immutable dataset
//! records in [crate::models], validating ranks, integer axes and extents on
//! the way in so downstream operations never see an inconsistent dataset.

use std::fs::File;
use std::path::PathBuf;

use ndarray::{ArrayD, Ix2, Ix3};
use serde::Deserialize;

use crate::error::ProjectionError;
use crate::models::{DeterministicDataset, ProbabilisticDataset};
use crate::store::{ArrayStore, NpzStore};

/// Name of the time axis array.
pub const TIME_ARRAY: &str = "time";
/// Name of the ensemble member identifier axis array.
pub const ENSEMBLE_ARRAY: &str = "ensemble";
/// Name of the probabilistic `[time, ensemble, scenario]` values array.
pub const BRICK_ARRAY: &str = "brick_slr";
/// Name of the deterministic `[time, scenario]` values array.
pub const NOAA_ARRAY: &str = "noaa_slr";

/// Location of a projection data archive
///
/// Passed explicitly to the loaders rather than read from process-wide state,
/// so an analysis can point different loads at different files. Implements
/// serde deserialise for use in workflow configuration.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DataSource {
    /// Path of the NPZ archive holding the named projection arrays
    pub path: PathBuf,
}

impl DataSource {
    /// Return a new DataSource.
    ///
    /// # Arguments
    ///
    /// * `path`: Path of the NPZ archive
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DataSource { path: path.into() }
    }

    /// Open the archive as an [NpzStore].
    pub fn open(&self) -> Result<NpzStore<File>, ProjectionError> {
        NpzStore::open(&self.path)
    }

    /// Load the probabilistic dataset from the archive.
    pub fn load_probabilistic(&self) -> Result<ProbabilisticDataset, ProjectionError> {
        load_probabilistic(&mut self.open()?)
    }

    /// Load the deterministic dataset from the archive.
    pub fn load_deterministic(&self) -> Result<DeterministicDataset, ProjectionError> {
        load_deterministic(&mut self.open()?)
    }
}

/// Convert a 1-D axis array to integers.
fn int_axis(name: &str, array: &ArrayD<f64>) -> Result<Vec<i32>, ProjectionError> {
    if array.ndim() != 1 {
        return Err(ProjectionError::ArrayRank {
            name: name.to_string(),
            expected: 1,
            actual: array.ndim(),
        });
    }
    array
        .iter()
        .map(|&value| {
            num_traits::cast::<f64, i32>(value)
                .filter(|_| value.fract() == 0.0)
                .ok_or_else(|| ProjectionError::NonIntegralAxis {
                    name: name.to_string(),
                    value,
                })
        })
        .collect()
}

/// Validate the rank of a values array.
fn check_rank(
    name: &str,
    expected: usize,
    array: &ArrayD<f64>,
) -> Result<(), ProjectionError> {
    if array.ndim() == expected {
        Ok(())
    } else {
        Err(ProjectionError::ArrayRank {
            name: name.to_string(),
            expected,
            actual: array.ndim(),
        })
    }
}

/// Load the probabilistic (BRICK ensemble) dataset from a store.
///
/// Reads the `time` and `ensemble` axis arrays and the 3-D `brick_slr` values
/// array, then validates the extents against the axes.
///
/// # Arguments
///
/// * `store`: Store holding the named projection arrays
#[tracing::instrument(level = "DEBUG", skip(store))]
pub fn load_probabilistic<S: ArrayStore>(
    store: &mut S,
) -> Result<ProbabilisticDataset, ProjectionError> {
    let years = int_axis(TIME_ARRAY, &store.read(TIME_ARRAY)?)?;
    let ensemble_ids = int_axis(ENSEMBLE_ARRAY, &store.read(ENSEMBLE_ARRAY)?)?;
    let values = store.read(BRICK_ARRAY)?;
    check_rank(BRICK_ARRAY, 3, &values)?;
    let values = values.into_dimensionality::<Ix3>()?;
    let dataset = ProbabilisticDataset::new(years, ensemble_ids, values)?;
    tracing::debug!(
        time_steps = dataset.years().len(),
        ensemble_members = dataset.ensemble_ids().len(),
        "loaded probabilistic projections"
    );
    Ok(dataset)
}

/// Load the deterministic (NOAA scenario) dataset from a store.
///
/// Reads the `time` axis array and the 2-D `noaa_slr` values array, then
/// validates the extents against the axis and the scenario label count.
///
/// # Arguments
///
/// * `store`: Store holding the named projection arrays
#[tracing::instrument(level = "DEBUG", skip(store))]
pub fn load_deterministic<S: ArrayStore>(
    store: &mut S,
) -> Result<DeterministicDataset, ProjectionError> {
    let years = int_axis(TIME_ARRAY, &store.read(TIME_ARRAY)?)?;
    let values = store.read(NOAA_ARRAY)?;
    check_rank(NOAA_ARRAY, 2, &values)?;
    let dataset = DeterministicDataset::new(years, values.into_dimensionality::<Ix2>()?)?;
    tracing::debug!(
        time_steps = dataset.years().len(),
        "loaded deterministic projections"
    );
    Ok(dataset)
}
