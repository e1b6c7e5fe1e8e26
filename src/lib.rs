//! This crate provides access to sea level rise projection datasets: a
//! probabilistic set of BRICK model ensemble trajectories per RCP emissions
//! scenario and a deterministic set of NOAA interagency scenario curves, both
//! read from NPZ archives. It offers typed dataset records with validated
//! axes, zero-copy scenario extraction, year lookup, per-timestep ensemble
//! quantiles and metadata summaries for downstream analyses.
//!
//! The crate is built on top of a number of open source components.
//!
//! * [ndarray] provides NumPy-like n-dimensional arrays used in numerical
//!   computation.
//! * [ndarray-npy](ndarray_npy) reads and writes the NPZ archives holding the
//!   projection arrays.
//! * [Serde](serde) performs (de)serialisation of configuration and summary
//!   data.
//! * [thiserror] derives the error taxonomy.
//! * [tracing] provides structured logging of dataset loads.

pub mod error;
pub mod loader;
pub mod models;
pub mod report;
pub mod stats;
pub mod store;
#[cfg(test)]
pub mod test_utils;
pub mod tracing;
pub mod units;
