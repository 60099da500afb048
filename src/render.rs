//! Chart Renderer: evaluate one curve per temperature, decorate the axes, present the figure.

use {
  crate::{
    chart::Axes,
    config::PlotConfig,
    drawing::Draw,
    error::Result,
    physics::RadianceCurve,
    profile
  },
  anyhow::{bail, Context},
  plotly::Plot,
  std::path::Path
};

/// Build the annotated figure described by `config`.
pub fn figure(config: &PlotConfig) -> Axes {
  let grid = config.grid();
  let mut axes = Axes::new();

  config.temperatures.iter().for_each(|t| {
    let curve = RadianceCurve::evaluate(&grid, t, &config.constants);
    if let Some(peak) = curve.peak() {
      log::debug!("T = {} K: peak {:.3e} Hz, B = {:.3e}", t, peak.frequency, peak.radiance);
    }
    axes.plot(curve.frequencies, curve.radiance, format!("T = {} K", t));
  });

  let (x_min, x_max) = config.x_limits;
  axes.set_xlabel(config.x_label.as_str())
    .set_ylabel(config.y_label.as_str())
    .set_title(config.title.as_str())
    .set_xlim(x_min, x_max)
    .legend(config.legend_frame)
    .set_major_formatter(config.x_formatter);
  if config.tight_layout {
    axes.tight_layout();
  }
  axes
}

pub fn to_plot(axes: &Axes) -> Plot {
  let mut plot = Plot::new();
  axes.draw(&mut plot);
  plot
}

/// Write the interactive figure as a standalone HTML page.
pub fn write_html(axes: &Axes, path: impl AsRef<Path>) -> Result<()> {
  let path = path.as_ref();
  std::fs::write(path, to_plot(axes).to_html())
    .with_context(|| format!("unable to write {}", path.display()))?;
  log::info!("figure written to {}", path.display());
  Ok(())
}

/// Write the figure and hand it to the platform's default viewer.
pub fn show(axes: &Axes, path: impl AsRef<Path>) -> Result<()> {
  let path = path.as_ref();
  write_html(axes, path)?;
  log::info!("opening {}", path.display());
  let status = open::that(path)
    .with_context(|| format!("unable to open {}", path.display()))?;
  if !status.success() {
    bail!("viewer exited with {}", status);
  }
  Ok(())
}

/// Rasterize the figure geometry and save it as an image (format from the extension).
#[cfg(feature = "raster")]
pub fn save_png(axes: &Axes, path: impl AsRef<Path>, (width, height): (u32, u32)) -> Result<()> {
  let path = path.as_ref();
  let image = crate::drawing::rasterize(axes, width, height);
  image.save(path)
    .with_context(|| format!("unable to save {}", path.display()))?;
  log::info!("raster written to {}", path.display());
  Ok(())
}

/// The whole program: compute, render, display.
pub fn run(config: &PlotConfig) -> Result<()> {
  let axes = profile!("figure", figure(config));
  show(&axes, &config.output)
}
