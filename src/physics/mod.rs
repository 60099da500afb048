//! Radiance evaluation.
//!
//! Everything here is pure: constants are immutable, the grid is built once, and curves are
//! recomputed from scratch every time they are requested.

pub mod constants;
pub mod grid;
pub mod planck;

pub use {
  constants::{PhysicalConstants, CGS, SI},
  grid::{FrequencyGrid, TemperatureSet},
  planck::{b_nu, wien_peak_frequency, Peak, RadianceCurve}
};
