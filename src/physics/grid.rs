use {
  ndarray::Array1,
  std::ops::Deref
};

/// Evenly spaced frequencies, both endpoints included.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyGrid {
  values: Array1<f64>
}

impl FrequencyGrid {
  pub const START: f64 = 1e10;
  pub const END: f64 = 1e15;
  pub const SAMPLES: usize = 1000;

  pub fn linspace(start: f64, end: f64, samples: usize) -> Self {
    Self { values: Array1::linspace(start, end, samples) }
  }

  pub fn values(&self) -> &Array1<f64> {
    &self.values
  }
}

impl Default for FrequencyGrid {
  fn default() -> Self {
    Self::linspace(Self::START, Self::END, Self::SAMPLES)
  }
}

impl Deref for FrequencyGrid {
  type Target = Array1<f64>;
  fn deref(&self) -> &Self::Target { &self.values }
}

/// Temperatures in kelvin, one curve each.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureSet(Vec<f64>);

impl TemperatureSet {
  pub fn new(temperatures: impl IntoIterator<Item = f64>) -> Self {
    Self(temperatures.into_iter().collect())
  }

  pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
    self.0.iter().copied()
  }
}

impl Default for TemperatureSet {
  fn default() -> Self {
    Self::new([3000.0, 4000.0, 5000.0])
  }
}
