//! Unit conversion.

use ndarray::{Array, ArrayBase, Data, Dimension};

/// Feet per metre.
pub const FEET_PER_METER: f64 = 3.28084;

/// Convert a sea level value in metres to feet.
pub fn meters_to_feet(meters: f64) -> f64 {
    meters * FEET_PER_METER
}

/// Convert an array of sea level values in metres to feet, elementwise.
///
/// Accepts owned arrays and views of any dimensionality, so it applies
/// equally to full datasets, scenario slices and quantile summaries.
pub fn meters_to_feet_array<S, D>(values: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    values.mapv(meters_to_feet)
}
