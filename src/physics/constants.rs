use num_traits::Float;

/// Planck constant, speed of light and Boltzmann constant, in one consistent unit system.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PhysicalConstants<F = f64> {
  /// Planck constant
  pub h: F,
  /// Speed of light
  pub c: F,
  /// Boltzmann constant
  pub k_b: F
}

/// CGS units: erg·s, cm/s, erg/K.
pub const CGS: PhysicalConstants = PhysicalConstants {
  h: 6.626196e-27,
  c: 2.997924562e10,
  k_b: 1.380649e-16
};

/// SI units: J·s, m/s, J/K.
pub const SI: PhysicalConstants = PhysicalConstants {
  h: 6.62607015e-34,
  c: 2.99792458e8,
  k_b: 1.380649e-23
};

/// Root of `3(1 - e^-x) = x`; the Planck maximum in frequency sits at `x·k_B·T/h`.
pub const WIEN_FREQUENCY_X: f64 = 2.821439372122079;

impl Default for PhysicalConstants {
  fn default() -> Self { CGS }
}

impl PhysicalConstants<f64> {
  /// Convert to another float type. `None` if a value is not representable.
  pub fn cast<F: Float>(&self) -> Option<PhysicalConstants<F>> {
    Some(PhysicalConstants {
      h: F::from(self.h)?,
      c: F::from(self.c)?,
      k_b: F::from(self.k_b)?
    })
  }
}
