use {
  crate::{
    chart::COLOR_CYCLE,
    config::PlotConfig,
    error::Result,
    physics::{FrequencyGrid, SI},
    render
  },
  approx::assert_relative_eq,
  regex::Regex,
  std::path::PathBuf
};

fn temp_path(name: &str) -> PathBuf {
  std::env::temp_dir().join(format!("planck_spectrum_{}_{}", std::process::id(), name))
}

#[test] fn default_figure() {
  let axes = render::figure(&PlotConfig::default());
  let labels = axes.lines.iter().map(|l| l.label.as_str()).collect::<Vec<_>>();
  assert_eq!(labels, ["T = 3000 K", "T = 4000 K", "T = 5000 K"]);
  assert!(axes.lines.iter().all(|l| l.x.len() == FrequencyGrid::SAMPLES && l.y.len() == FrequencyGrid::SAMPLES));
  assert_eq!(axes.lines[1].color, COLOR_CYCLE[1]);
  assert_eq!(axes.x_limits, Some((0.0, 1e15)));
  assert_eq!(axes.title.as_deref(), Some("Blackbody Spectral Radiance vs Frequency"));
  assert_eq!(axes.x_label.as_deref(), Some("Frequency (Hz)"));
  assert!(axes.y_label.as_deref().unwrap().starts_with("B<sub>ν</sub>(T)"));
  assert_eq!(axes.legend.map(|l| l.frame), Some(false));
  assert!(axes.tight);
  assert_eq!(axes.x_ticks()[3].1, "6 × 10<sup>14</sup>");
}

#[test] fn config_variants() {
  let config = PlotConfig::default()
    .with_constants(SI)
    .with_temperatures([6000.0])
    .with_frequencies(1e12, 1e14, 50);
  let axes = render::figure(&config);
  assert_eq!(axes.lines.len(), 1);
  assert_eq!(axes.lines[0].label, "T = 6000 K");
  assert_eq!(axes.lines[0].x.len(), 50);
  assert_relative_eq!(config.grid()[49], 1e14, max_relative = 1e-12);
}

#[test] fn plot_layout() {
  let plot = render::to_plot(&render::figure(&PlotConfig::default()));
  let json = plot.to_json();
  for needle in [
    "T = 3000 K", "T = 4000 K", "T = 5000 K",
    "Blackbody Spectral Radiance vs Frequency",
    "Frequency (Hz)",
    "2 × 10<sup>14</sup>",
    "1 × 10<sup>15</sup>",
    "#1f77b4",
    r#""borderwidth":0"#
  ] {
    assert!(json.contains(needle), "missing {}", needle);
  }
  let x_range = Regex::new(r#""range":\[0(\.0)?,(1e\+?15|1000000000000000(\.0)?)\]"#).unwrap();
  assert!(x_range.is_match(&json), "x range is not [0, 1e15]");
}

#[test] fn write_html() -> Result<()> {
  let path = temp_path("figure.html");
  render::write_html(&render::figure(&PlotConfig::default()), &path)?;
  let html = std::fs::read_to_string(&path)?;
  assert!(html.contains("T = 5000 K"));
  std::fs::remove_file(&path)?;
  Ok(())
}

#[test] fn write_html_bad_path() {
  let path = temp_path("missing_dir").join("figure.html");
  let error = render::write_html(&render::figure(&PlotConfig::default()), &path).unwrap_err();
  assert!(error.to_string().starts_with("unable to write"));
}

#[cfg(feature = "raster")]
#[test] fn save_png() -> Result<()> {
  let config = PlotConfig::default();
  let path = temp_path("figure.png");
  render::save_png(&render::figure(&config), &path, config.raster_size)?;
  let image = image::open(&path)?.to_rgba8();
  assert_eq!(image.dimensions(), config.raster_size);
  std::fs::remove_file(&path)?;
  Ok(())
}
