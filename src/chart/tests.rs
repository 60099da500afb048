use {
  super::*,
  approx::assert_relative_eq,
  ndarray::array,
  regex::Regex
};

#[test] fn formatter_zero() {
  assert_eq!(sci_notation(0.0, 0), "0");
  assert_eq!(sci_notation(-0.0, 3), "0");
}

#[test] fn formatter_template() {
  let re = Regex::new(r"^(-?\d) × 10<sup>(-?\d+)</sup>$").unwrap();
  let label = sci_notation(1.23e14, 0);
  let caps = re.captures(&label).unwrap();
  assert_eq!(&caps[1], "1");
  assert_eq!(&caps[2], "14");
  assert!(label.contains('1') && label.contains("14"));
}

#[test] fn formatter_rounds_to_one_digit() {
  assert_eq!(sci_notation(2e14, 1), "2 × 10<sup>14</sup>");
  assert_eq!(sci_notation(1e15, 5), "1 × 10<sup>15</sup>");
  assert_eq!(sci_notation(6.7e-3, 0), "7 × 10<sup>-3</sup>");
  assert_eq!(sci_notation(9.6e14, 0), "1 × 10<sup>15</sup>");
}

#[test] fn formatter_negative() {
  assert_eq!(sci_notation(-4e14, 0), "-4 × 10<sup>14</sup>");
}

#[test] fn formatter_non_finite() {
  assert_eq!(sci_notation(f64::INFINITY, 0), "inf");
  assert_eq!(sci_notation(f64::NAN, 0), "NaN");
}

#[test] fn locate_default_x_range() {
  let ticks = locate(0.0, 1e15, MAX_BINS);
  assert_eq!(ticks.len(), 6);
  ticks.iter()
    .zip([0.0, 2e14, 4e14, 6e14, 8e14, 1e15])
    .for_each(|(a, b)| assert_relative_eq!(*a, b, max_relative = 1e-9));
  assert_eq!(ticks[0], 0.0);
}

#[test] fn locate_unaligned_range() {
  let ticks = locate(0.13, 0.91, 4);
  ticks.iter()
    .zip([0.2, 0.4, 0.6, 0.8])
    .for_each(|(a, b)| assert_relative_eq!(*a, b, max_relative = 1e-9));
  assert_eq!(ticks.len(), 4);
}

#[test] fn locate_degenerate() {
  assert!(locate(1.0, 1.0, MAX_BINS).is_empty());
  assert!(locate(2.0, 1.0, MAX_BINS).is_empty());
  assert!(locate(0.0, f64::INFINITY, MAX_BINS).is_empty());
  assert!(locate(0.0, 1.0, 0).is_empty());
}

#[test] fn axes_ranges() {
  let mut axes = Axes::new();
  axes.plot(array![1.0, 2.0, 3.0], array![0.5, 2.0, f64::NAN], "a");
  assert_eq!(axes.x_range(), Some((1.0, 3.0)));
  let (ymin, ymax) = axes.y_range().unwrap();
  assert_eq!(ymin, 0.0);
  assert_relative_eq!(ymax, 2.1);

  axes.set_xlim(0.0, 10.0);
  assert_eq!(axes.x_range(), Some((0.0, 10.0)));
  assert!(Axes::new().x_range().is_none());
}

#[test] fn axes_color_cycle() {
  let mut axes = Axes::new();
  (0..11).for_each(|i| { axes.plot(array![0.0], array![0.0], format!("{i}")); });
  assert_eq!(axes.lines[0].color, COLOR_CYCLE[0]);
  assert_eq!(axes.lines[2].color, COLOR_CYCLE[2]);
  assert_eq!(axes.lines[10].color, COLOR_CYCLE[0]);
}

#[test] fn axes_formatter_slot() {
  let mut axes = Axes::new();
  axes.plot(array![0.0, 1e15], array![0.0, 1.0], "a")
    .set_xlim(0.0, 1e15);
  assert_eq!(axes.x_ticks()[1].1, "200000000000000");

  axes.set_major_formatter(sci_notation);
  let labels = axes.x_ticks()
    .into_iter()
    .map(|(_, label)| label)
    .collect::<Vec<_>>();
  assert_eq!(labels[0], "0");
  assert_eq!(labels[1], "2 × 10<sup>14</sup>");
  assert_eq!(labels[5], "1 × 10<sup>15</sup>");
}
