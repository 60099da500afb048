use planck_spectrum::{
  config::PlotConfig,
  error::{self, Result},
  render,
  util
};

fn run() -> Result<()> {
  let config = PlotConfig::default();
  util::init_logger(config.log_level)?;
  render::run(&config)
}

fn main() {
  if let Err(e) = run() {
    error::display(&e);
    std::process::exit(1);
  }
}
