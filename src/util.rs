use {
  crate::error::Result,
  log::LevelFilter,
  simple_logger::SimpleLogger
};

/// Time an expression, report it at debug level and pass its value through.
#[macro_export]
macro_rules! profile(
  ($title: literal, $expr: expr) => {{
    let t0 = std::time::Instant::now();
    let value = $expr;
    log::debug!("{} profile: {}ms", $title, t0.elapsed().as_millis());
    value
  }}
);

/// Install the process-wide logger. Fails if a logger is already set.
pub fn init_logger(level: LevelFilter) -> Result<()> {
  SimpleLogger::new()
    .with_level(level)
    .init()?;
  Ok(())
}
