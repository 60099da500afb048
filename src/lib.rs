//! Planck blackbody spectral radiance, evaluated and plotted.
//!
//! The crate is split into two stages: [`physics`] evaluates
//! `B(ν, T) = (2hν³/c²) / (exp(hν/(k_B·T)) - 1)` over a frequency grid, and [`render`] turns the
//! resulting curves into a figure through the backends in [`drawing`].
//!
//! # Basic usage
//! ```no_run
//! # use planck_spectrum::{config::PlotConfig, error::Result, render};
//! # fn main() -> Result<()> {
//! let config = PlotConfig::default();
//! // three curves, 3000 K to 5000 K, x axis labelled as `a × 10ⁿ`
//! let axes = render::figure(&config);
//! render::show(&axes, &config.output)?; // write HTML, open it in the default viewer
//! #   Ok(())
//! # }
//! ```
//! Single values are available directly:
//! ```
//! use planck_spectrum::physics::{b_nu, CGS};
//!
//! let b = b_nu(1e14, 5000.0, &CGS); // erg s⁻¹ cm⁻² Hz⁻¹ sr⁻¹
//! assert!(b.is_finite() && b > 0.0);
//! ```
//!
//! Temperatures are not validated. `T = 0` produces NaN or zero and a frequency of exactly zero
//! produces NaN; both flow through to the figure unchanged.

pub mod error;
pub mod util;
pub mod config;
pub mod physics;
pub mod chart;
pub mod drawing;
#[cfg(feature = "raster")]
pub mod geometry;
pub mod render;

#[cfg(test)] mod tests;
