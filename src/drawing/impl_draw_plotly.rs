use {
  super::Draw,
  crate::chart::Axes,
  plotly::{
    common::{Line, Mode, Title},
    layout::{Axis, Legend, Margin},
    Layout, Plot, Scatter
  }
};

impl Draw<Plot> for Axes {
  fn draw(&self, plot: &mut Plot) {
    self.lines.iter().for_each(|line| {
      let [r, g, b] = line.color;
      let trace = Scatter::new(line.x.to_vec(), line.y.to_vec())
        .mode(Mode::Lines)
        .name(line.label.as_str())
        .line(Line::new().color(format!("#{r:02x}{g:02x}{b:02x}")));
      plot.add_trace(trace);
    });
    plot.set_layout(layout(self));
  }
}

fn layout(axes: &Axes) -> Layout {
  let mut x_axis = Axis::new().zero_line(false);
  if let Some(label) = &axes.x_label {
    x_axis = x_axis.title(Title::with_text(label.as_str()));
  }
  if let Some((min, max)) = axes.x_limits {
    x_axis = x_axis.range(vec![min, max]);
  }
  if axes.x_formatter.is_some() {
    let (values, labels): (Vec<f64>, Vec<String>) = axes.x_ticks().into_iter().unzip();
    x_axis = x_axis.tick_values(values).tick_text(labels);
  }

  let mut y_axis = Axis::new().zero_line(false);
  if let Some(label) = &axes.y_label {
    y_axis = y_axis.title(Title::with_text(label.as_str()));
  }
  if let Some((min, max)) = axes.y_limits {
    y_axis = y_axis.range(vec![min, max]);
  }

  let mut layout = Layout::new()
    .x_axis(x_axis)
    .y_axis(y_axis)
    .show_legend(axes.legend.is_some());
  if let Some(title) = &axes.title {
    layout = layout.title(Title::with_text(title.as_str()));
  }
  if let Some(legend) = axes.legend {
    layout = layout.legend(Legend::new().border_width(if legend.frame { 1 } else { 0 }));
  }
  if axes.tight {
    layout = layout.margin(Margin::new().left(70).right(20).top(50).bottom(60));
  }
  layout
}
