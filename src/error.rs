//! Error handling.

use std::path::PathBuf;

use ndarray::ShapeError;
use ndarray_npy::ReadNpzError;
use strum_macros::Display;
use thiserror::Error;

/// Projection library error type
///
/// This type encapsulates the various errors that may occur while loading a
/// projection dataset or querying it. Each variant belongs to one of the
/// [ErrorKind] failure kinds.
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// Error opening the projection data file
    #[error("failed to open projection data file {}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error reading the archive container
    #[error("failed to read projection data archive")]
    ArchiveRead(#[from] ReadNpzError),

    /// Named array absent from the archive
    #[error("projection data archive has no array named {name:?}")]
    ArrayMissing { name: String },

    /// Error decoding a named array
    #[error("failed to decode array {name:?}")]
    ArrayDecode {
        name: String,
        #[source]
        source: ReadNpzError,
    },

    /// Array with an unexpected number of dimensions
    #[error("array {name:?} has {actual} dimension(s), expected {expected}")]
    ArrayRank {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// Error converting an array to a concrete dimensionality
    #[error("failed to create array from shape")]
    ShapeInvalid(#[from] ShapeError),

    /// Axis vector containing a value that is not convertible to an integer
    #[error("cannot convert value {value} in axis array {name:?} to an integer")]
    NonIntegralAxis { name: String, value: f64 },

    /// Values array extent inconsistent with an axis vector
    #[error(
        "values array axis {axis} has length {actual}, expected {expected} to match the {axis_name} axis"
    )]
    AxisLength {
        axis: usize,
        axis_name: &'static str,
        actual: usize,
        expected: usize,
    },

    /// Requested scenario name not in the fixed label set
    #[error("unknown scenario {name:?}, valid scenarios are: {}", .valid.join(", "))]
    UnknownScenario {
        name: String,
        valid: &'static [&'static str],
    },

    /// Requested year not present on the dataset's time axis
    #[error("year {year} is outside the available range {min}..={max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    /// Attempt to compute a statistic over an empty ensemble axis
    #[error("cannot compute {operation} over an empty ensemble axis")]
    EmptyEnsemble { operation: &'static str },
}

/// Failure kinds
///
/// Groups [ProjectionError] variants into the four classes callers typically
/// distinguish: load failures, unknown scenario labels, out-of-range years
/// and statistics over insufficient data.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum ErrorKind {
    /// The data file or one of its arrays could not be loaded
    DataLoad,
    /// The scenario label is not in the fixed label set
    UnknownScenario,
    /// The year is not present on the time axis
    YearOutOfRange,
    /// The ensemble axis holds too few members for the statistic
    InsufficientData,
}

impl ProjectionError {
    /// Return the [ErrorKind] this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProjectionError::FileOpen { .. }
            | ProjectionError::ArchiveRead(_)
            | ProjectionError::ArrayMissing { .. }
            | ProjectionError::ArrayDecode { .. }
            | ProjectionError::ArrayRank { .. }
            | ProjectionError::ShapeInvalid(_)
            | ProjectionError::NonIntegralAxis { .. }
            | ProjectionError::AxisLength { .. } => ErrorKind::DataLoad,

            ProjectionError::UnknownScenario { .. } => ErrorKind::UnknownScenario,

            ProjectionError::YearOutOfRange { .. } => ErrorKind::YearOutOfRange,

            ProjectionError::EmptyEnsemble { .. } => ErrorKind::InsufficientData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_error(error: ProjectionError, kind: ErrorKind, message: &str) {
        assert_eq!(kind, error.kind());
        assert_eq!(message, error.to_string());
    }

    #[test]
    fn file_open_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let error = ProjectionError::FileOpen {
            path: PathBuf::from("/data/slr.npz"),
            source: io_error,
        };
        assert_error(
            error,
            ErrorKind::DataLoad,
            "failed to open projection data file /data/slr.npz",
        );
    }

    #[test]
    fn array_missing_error() {
        let error = ProjectionError::ArrayMissing {
            name: "brick_slr".to_string(),
        };
        assert_error(
            error,
            ErrorKind::DataLoad,
            "projection data archive has no array named \"brick_slr\"",
        );
    }

    #[test]
    fn array_rank_error() {
        let error = ProjectionError::ArrayRank {
            name: "noaa_slr".to_string(),
            expected: 2,
            actual: 3,
        };
        assert_error(
            error,
            ErrorKind::DataLoad,
            "array \"noaa_slr\" has 3 dimension(s), expected 2",
        );
    }

    #[test]
    fn shape_invalid_error() {
        let error = ProjectionError::ShapeInvalid(ShapeError::from_kind(
            ndarray::ErrorKind::IncompatibleShape,
        ));
        assert_eq!(ErrorKind::DataLoad, error.kind());
        assert_eq!("failed to create array from shape", error.to_string());
    }

    #[test]
    fn non_integral_axis_error() {
        let error = ProjectionError::NonIntegralAxis {
            name: "time".to_string(),
            value: 2000.5,
        };
        assert_error(
            error,
            ErrorKind::DataLoad,
            "cannot convert value 2000.5 in axis array \"time\" to an integer",
        );
    }

    #[test]
    fn axis_length_error() {
        let error = ProjectionError::AxisLength {
            axis: 1,
            axis_name: "ensemble",
            actual: 10,
            expected: 12,
        };
        assert_error(
            error,
            ErrorKind::DataLoad,
            "values array axis 1 has length 10, expected 12 to match the ensemble axis",
        );
    }

    #[test]
    fn unknown_scenario_error() {
        let error = ProjectionError::UnknownScenario {
            name: "rcp99".to_string(),
            valid: &["rcp26", "rcp45", "rcp60", "rcp85"],
        };
        assert_error(
            error,
            ErrorKind::UnknownScenario,
            "unknown scenario \"rcp99\", valid scenarios are: rcp26, rcp45, rcp60, rcp85",
        );
    }

    #[test]
    fn year_out_of_range_error() {
        let error = ProjectionError::YearOutOfRange {
            year: 1999,
            min: 2000,
            max: 2100,
        };
        assert_error(
            error,
            ErrorKind::YearOutOfRange,
            "year 1999 is outside the available range 2000..=2100",
        );
    }

    #[test]
    fn empty_ensemble_error() {
        let error = ProjectionError::EmptyEnsemble {
            operation: "quantiles",
        };
        assert_error(
            error,
            ErrorKind::InsufficientData,
            "cannot compute quantiles over an empty ensemble axis",
        );
    }

    #[test]
    fn error_kind_display() {
        assert_eq!("DataLoad", ErrorKind::DataLoad.to_string());
        assert_eq!("InsufficientData", ErrorKind::InsufficientData.to_string());
    }
}
