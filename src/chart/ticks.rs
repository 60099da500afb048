//! Tick positions and labels.

/// Tick label callback: `(value, position) -> label`. The position is the tick's index on
/// its axis; formatters are free to ignore it.
pub type TickFormatter = fn(f64, usize) -> String;

/// `a × 10ⁿ` label with a single significant digit, superscript written as `<sup>` markup.
pub fn sci_notation(x: f64, _pos: usize) -> String {
  if x == 0.0 {
    return "0".to_string();
  }
  let formatted = format!("{:.0e}", x); // 1e14
  match formatted.split_once('e') {
    Some((base, exp)) => match exp.parse::<i32>() {
      Ok(exp) => format!("{base} × 10<sup>{exp}</sup>"),
      Err(_) => formatted
    },
    // inf, NaN
    None => formatted
  }
}

/// Plain decimal label, the fallback when no formatter is attached.
pub fn plain(x: f64, _pos: usize) -> String {
  format!("{}", x)
}

const STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Evenly spaced "round" tick positions inside `[min, max]`, with at most `max_bins` intervals
/// between the first and the last tick.
pub fn locate(min: f64, max: f64, max_bins: usize) -> Vec<f64> {
  if !(min.is_finite() && max.is_finite()) || max <= min || max_bins == 0 {
    return vec![];
  }
  let raw = (max - min) / max_bins as f64;
  let magnitude = 10f64.powi(raw.log10().floor() as i32);
  let step = STEPS.iter()
    .map(|m| m * magnitude)
    .find(|step| *step >= raw * (1.0 - 1e-9))
    .unwrap_or(10.0 * magnitude);

  let first = (min / step - 1e-9).ceil() as i64;
  let last = (max / step + 1e-9).floor() as i64;
  (first..=last)
    .map(|i| i as f64 * step)
    .map(|v| if v.abs() < step * 1e-9 { 0.0 } else { v })
    .collect()
}
