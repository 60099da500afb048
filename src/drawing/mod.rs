//! Figure backends.
//!
//! - [`plotly::Plot`]: interactive figure with every label, title and legend entry.
//! - [`image::RgbaImage`] (feature `raster`): anti-aliased geometry only. Axes frame, tick marks,
//!   curves and legend swatches are drawn as signed distance shapes; text is not rasterized.

mod impl_draw_plotly;
#[cfg(feature = "raster")] mod impl_draw_rgbaimage;
#[cfg(all(test, feature = "raster"))] mod tests;

#[cfg(feature = "raster")]
pub use impl_draw_rgbaimage::{rasterize, Margins, BACKGROUND, FOREGROUND};

pub trait Draw<Backend> {
  fn draw(&self, backend: &mut Backend);
}

/// A shape filled with a texture.
#[derive(Debug, Copy, Clone)]
pub struct Texture<S, T> {
  pub shape: S,
  pub texture: T
}
