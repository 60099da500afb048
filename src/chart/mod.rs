//! Backend-agnostic figure description.
//!
//! [`Axes`] collects lines and decorations the same way a plotting session would
//! (`plot`, `set_xlabel`, `legend`, ...). Nothing is drawn here; backends in
//! [`drawing`](crate::drawing) turn an `Axes` into pixels or an interactive figure.

pub mod ticks;

use {
  itertools::{Itertools, MinMaxResult},
  ndarray::Array1,
  ticks::TickFormatter
};

pub use ticks::{locate, sci_notation};

/// Matplotlib's default colour cycle (tab10).
pub const COLOR_CYCLE: [[u8; 3]; 10] = [
  [0x1f, 0x77, 0xb4],
  [0xff, 0x7f, 0x0e],
  [0x2c, 0xa0, 0x2c],
  [0xd6, 0x27, 0x28],
  [0x94, 0x67, 0xbd],
  [0x8c, 0x56, 0x4b],
  [0xe3, 0x77, 0xc2],
  [0x7f, 0x7f, 0x7f],
  [0xbc, 0xbd, 0x22],
  [0x17, 0xbe, 0xcf]
];

/// Maximum number of intervals between major ticks.
pub const MAX_BINS: usize = 9;

#[derive(Debug, Clone)]
pub struct Line {
  pub x: Array1<f64>,
  pub y: Array1<f64>,
  pub label: String,
  pub color: [u8; 3]
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Legend {
  /// Draw a border around the legend
  pub frame: bool
}

#[derive(Debug, Clone, Default)]
pub struct Axes {
  pub lines: Vec<Line>,
  pub title: Option<String>,
  pub x_label: Option<String>,
  pub y_label: Option<String>,
  pub x_limits: Option<(f64, f64)>,
  pub y_limits: Option<(f64, f64)>,
  pub legend: Option<Legend>,
  /// Custom x tick labels; backends pick their own labels when unset.
  pub x_formatter: Option<TickFormatter>,
  pub tight: bool
}

impl Axes {
  pub fn new() -> Self { Self::default() }

  /// Add a line. `x` and `y` must have the same length. Colour follows [`COLOR_CYCLE`].
  pub fn plot(&mut self, x: Array1<f64>, y: Array1<f64>, label: impl Into<String>) -> &mut Self {
    debug_assert_eq!(x.len(), y.len());
    let color = COLOR_CYCLE[self.lines.len() % COLOR_CYCLE.len()];
    self.lines.push(Line { x, y, label: label.into(), color });
    self
  }

  pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
    self.title = Some(title.into());
    self
  }

  pub fn set_xlabel(&mut self, label: impl Into<String>) -> &mut Self {
    self.x_label = Some(label.into());
    self
  }

  pub fn set_ylabel(&mut self, label: impl Into<String>) -> &mut Self {
    self.y_label = Some(label.into());
    self
  }

  pub fn set_xlim(&mut self, min: f64, max: f64) -> &mut Self {
    self.x_limits = Some((min, max));
    self
  }

  pub fn set_ylim(&mut self, min: f64, max: f64) -> &mut Self {
    self.y_limits = Some((min, max));
    self
  }

  pub fn legend(&mut self, frame: bool) -> &mut Self {
    self.legend = Some(Legend { frame });
    self
  }

  /// Attach the x-axis major tick formatter.
  pub fn set_major_formatter(&mut self, formatter: TickFormatter) -> &mut Self {
    self.x_formatter = Some(formatter);
    self
  }

  pub fn tight_layout(&mut self) -> &mut Self {
    self.tight = true;
    self
  }

  /// Explicit x limits, or the extent of the data.
  pub fn x_range(&self) -> Option<(f64, f64)> {
    self.x_limits.or_else(|| data_range(self.lines.iter().map(|line| &line.x)))
  }

  /// Explicit y limits, or `[0, 1.05 · max]` of the data.
  pub fn y_range(&self) -> Option<(f64, f64)> {
    self.y_limits.or_else(|| {
      data_range(self.lines.iter().map(|line| &line.y))
        .map(|(min, max)| (min.min(0.0), max * 1.05))
    })
  }

  /// Major x ticks inside the x range, labelled by the attached formatter
  /// (plain decimals without one).
  pub fn x_ticks(&self) -> Vec<(f64, String)> {
    let formatter = self.x_formatter.unwrap_or(ticks::plain);
    major_ticks(self.x_range())
      .into_iter()
      .enumerate()
      .map(|(pos, value)| (value, formatter(value, pos)))
      .collect()
  }

  pub fn y_ticks(&self) -> Vec<f64> {
    major_ticks(self.y_range())
  }
}

fn major_ticks(range: Option<(f64, f64)>) -> Vec<f64> {
  range
    .map(|(min, max)| locate(min, max, MAX_BINS))
    .unwrap_or_default()
}

fn data_range<'a>(series: impl Iterator<Item = &'a Array1<f64>>) -> Option<(f64, f64)> {
  match series.flatten().filter(|v| v.is_finite()).minmax() {
    MinMaxResult::NoElements => None,
    MinMaxResult::OneElement(v) => Some((*v, *v)),
    MinMaxResult::MinMax(min, max) => Some((*min, *max))
  }
}

#[cfg(test)] mod tests;
