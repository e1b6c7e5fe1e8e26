//! Utilities for use in test code.

use std::io::Cursor;

use ndarray::{Array1, Array2, Array3};
use ndarray_npy::NpzWriter;

use crate::models::{DeterministicDataset, ProbabilisticDataset};

/// Years covered by the test fixtures.
pub(crate) const TEST_YEARS: [i32; 3] = [2000, 2001, 2002];

/// Create a small probabilistic dataset.
///
/// Three years, three ensemble members and the four RCP scenarios, with
/// distinct values throughout. The rcp45 ensemble at year 2001 is
/// `[0.1, 0.2, 0.3]`.
pub(crate) fn probabilistic_fixture() -> ProbabilisticDataset {
    let mut values = Array3::from_shape_fn((3, 3, 4), |(time, member, scenario)| {
        scenario as f64 + time as f64 * 0.1 + member as f64 * 0.01
    });
    values[[1, 0, 1]] = 0.1;
    values[[1, 1, 1]] = 0.2;
    values[[1, 2, 1]] = 0.3;
    ProbabilisticDataset::new(TEST_YEARS.to_vec(), vec![1, 2, 3], values).unwrap()
}

/// Create a small deterministic dataset covering the five NOAA scenarios.
pub(crate) fn deterministic_fixture() -> DeterministicDataset {
    let values = Array2::from_shape_fn((3, 5), |(time, scenario)| {
        scenario as f64 * 0.5 + time as f64 * 0.05
    });
    DeterministicDataset::new(TEST_YEARS.to_vec(), values).unwrap()
}

/// NPZ archive bytes holding the four named projection arrays for both
/// fixture datasets.
pub(crate) fn npz_fixture_bytes() -> Vec<u8> {
    let years = Array1::from_iter(TEST_YEARS.iter().map(|&year| year as f64));
    let ensemble = Array1::from(vec![1.0, 2.0, 3.0]);
    let mut npz = NpzWriter::new(Cursor::new(Vec::new()));
    npz.add_array("time", &years).unwrap();
    npz.add_array("ensemble", &ensemble).unwrap();
    npz.add_array("brick_slr", probabilistic_fixture().values())
        .unwrap();
    npz.add_array("noaa_slr", deterministic_fixture().values())
        .unwrap();
    npz.finish().unwrap().into_inner()
}
