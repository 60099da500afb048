use {
  crate::{
    chart::ticks::{sci_notation, TickFormatter},
    physics::{FrequencyGrid, PhysicalConstants, TemperatureSet, CGS}
  },
  log::LevelFilter,
  std::path::PathBuf
};

/// Every parameter of the figure. [`PlotConfig::default`] is the program as shipped:
/// CGS constants, 1000 samples over `[1e10, 1e15]` Hz, curves for 3000, 4000 and 5000 K.
#[derive(Debug, Clone)]
pub struct PlotConfig {
  pub constants: PhysicalConstants,
  /// Frequency sweep `(start, end)`, Hz
  pub frequency_range: (f64, f64),
  pub samples: usize,
  pub temperatures: TemperatureSet,
  pub x_limits: (f64, f64),
  pub title: String,
  pub x_label: String,
  pub y_label: String,
  pub legend_frame: bool,
  pub tight_layout: bool,
  pub x_formatter: TickFormatter,
  /// Where the interactive figure is written before it is opened
  pub output: PathBuf,
  /// Raster export size `(width, height)`, pixels
  pub raster_size: (u32, u32),
  pub log_level: LevelFilter
}

impl Default for PlotConfig {
  fn default() -> Self {
    Self {
      constants: CGS,
      frequency_range: (FrequencyGrid::START, FrequencyGrid::END),
      samples: FrequencyGrid::SAMPLES,
      temperatures: TemperatureSet::default(),
      x_limits: (0.0, 1e15),
      title: "Blackbody Spectral Radiance vs Frequency".into(),
      x_label: "Frequency (Hz)".into(),
      y_label: "B<sub>ν</sub>(T) (erg sr<sup>-1</sup> cm<sup>-2</sup> Hz<sup>-1</sup>)".into(),
      legend_frame: false,
      tight_layout: true,
      x_formatter: sci_notation,
      output: std::env::temp_dir().join("planck_spectrum.html"),
      raster_size: (640, 480),
      log_level: LevelFilter::Info
    }
  }
}

impl PlotConfig {
  pub fn with_constants(mut self, constants: PhysicalConstants) -> Self {
    self.constants = constants;
    self
  }

  pub fn with_temperatures(mut self, temperatures: impl IntoIterator<Item = f64>) -> Self {
    self.temperatures = TemperatureSet::new(temperatures);
    self
  }

  pub fn with_frequencies(mut self, start: f64, end: f64, samples: usize) -> Self {
    self.frequency_range = (start, end);
    self.samples = samples;
    self
  }

  pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
    self.output = output.into();
    self
  }

  pub fn grid(&self) -> FrequencyGrid {
    let (start, end) = self.frequency_range;
    FrequencyGrid::linspace(start, end, self.samples)
  }
}
