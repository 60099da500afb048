use {
  super::{
    constants::{PhysicalConstants, WIEN_FREQUENCY_X},
    grid::FrequencyGrid
  },
  ndarray::{Array1, Zip},
  num_traits::Float
};

/// Planck spectral radiance `B(ν, T) = (2hν³/c²) / (exp(hν/(k_B·T)) - 1)`.
///
/// Temperature must be strictly positive and frequency non-negative; neither is checked.
/// `T = 0` yields NaN or zero, `ν → 0` makes the denominator vanish. Both propagate silently.
pub fn b_nu<F: Float>(nu: F, temperature: F, constants: &PhysicalConstants<F>) -> F {
  let PhysicalConstants { h, c, k_b } = *constants;
  let two = F::one() + F::one();
  // (ν/c)² keeps every intermediate inside f32 range
  (two * h * nu * (nu / c).powi(2)) / ((h * nu / (k_b * temperature)).exp() - F::one())
}

/// Frequency of the radiance maximum, from Wien's displacement law.
pub fn wien_peak_frequency(temperature: f64, constants: &PhysicalConstants) -> f64 {
  WIEN_FREQUENCY_X * constants.k_b * temperature / constants.h
}

/// Radiance sampled on a frequency grid for a single temperature.
#[derive(Debug, Clone)]
pub struct RadianceCurve {
  pub temperature: f64,
  pub frequencies: Array1<f64>,
  pub radiance: Array1<f64>
}

/// Sample of a curve with the highest radiance.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Peak {
  pub index: usize,
  pub frequency: f64,
  pub radiance: f64
}

impl RadianceCurve {
  /// Evaluate [`b_nu`] elementwise over the whole grid.
  pub fn evaluate(grid: &FrequencyGrid, temperature: f64, constants: &PhysicalConstants) -> Self {
    Self {
      temperature,
      frequencies: grid.values().clone(),
      radiance: grid.mapv(|nu| b_nu(nu, temperature, constants))
    }
  }

  pub fn len(&self) -> usize { self.radiance.len() }
  pub fn is_empty(&self) -> bool { self.radiance.is_empty() }

  /// Largest finite sample. `None` when the curve has no finite values.
  pub fn peak(&self) -> Option<Peak> {
    Zip::indexed(&self.frequencies)
      .and(&self.radiance)
      .fold(None, |best: Option<Peak>, index, &frequency, &radiance| {
        match best {
          _ if !radiance.is_finite() => best,
          Some(peak) if peak.radiance >= radiance => best,
          _ => Some(Peak { index, frequency, radiance })
        }
      })
  }
}
