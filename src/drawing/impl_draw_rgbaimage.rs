#![allow(non_snake_case)]
use {
  super::{Draw, Texture},
  crate::{
    chart::Axes,
    geometry::{Frame, PixelSpace, Segment, Shape, Viewport}
  },
  euclid::{Box2D, Point2D, Size2D, Vector2D as V2},
  image::{Pixel, Rgba, RgbaImage},
  itertools::Itertools
};

pub const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const FOREGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

const LINE_WIDTH: f32 = 1.5;
const AXIS_WIDTH: f32 = 1.0;
const TICK_LENGTH: f32 = 5.0;
const SWATCH_LENGTH: f32 = 24.0;
const LEGEND_ROW: f32 = 18.0;
const LEGEND_PAD: f32 = 10.0;

/// Space between the image border and the plotting area, in pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Margins {
  pub left: f32,
  pub right: f32,
  pub top: f32,
  pub bottom: f32
}

impl Margins {
  pub const DEFAULT: Margins = Margins { left: 100.0, right: 60.0, top: 70.0, bottom: 70.0 };
  pub const TIGHT: Margins = Margins { left: 70.0, right: 20.0, top: 40.0, bottom: 50.0 };

  fn plot_area(&self, resolution: Size2D<u32, PixelSpace>) -> Box2D<f32, PixelSpace> {
    let size = resolution.to_f32();
    Box2D::new(
      Point2D::new(self.left, self.top),
      Point2D::new(size.width - self.right, size.height - self.bottom)
    )
  }
}

impl <S> Draw<RgbaImage> for Texture<S, Rgba<u8>>
  where S: Shape
{
  fn draw(&self, image: &mut RgbaImage) {
    let screen = Box2D::from_size(Size2D::<_, PixelSpace>::from(image.dimensions()).to_f32());
    self.draw_clipped(image, screen);
  }
}

impl <S> Texture<S, Rgba<u8>>
  where S: Shape
{
  /// Draw only the pixels inside `clip`.
  pub fn draw_clipped(&self, image: &mut RgbaImage, clip: Box2D<f32, PixelSpace>) {
    let image_box = Box2D::from_size(Size2D::<_, PixelSpace>::from(image.dimensions()).to_f32());
    let bounding_box = match clip.intersection(&image_box)
      .and_then(|clip| pixel_box(self.shape.bounding_box(), clip))
    {
      Some(x) => x,
      None => return // nothing on screen
    };
    let Δp = 1.0;

    itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
      .map(|(y, x)| Point2D::<_, PixelSpace>::from([x, y]))
      .for_each(|pixel| {
        let center = pixel.to_f32() + V2::splat(0.5);
        let sdf = self.shape.sdf(center);
        let pixel = image.get_pixel_mut(pixel.x, pixel.y);
        *pixel = sdf_overlay_aa(sdf, Δp, *pixel, self.texture);
      });
  }
}

// pixels covered by a bounding box, restricted to `clip`
fn pixel_box(
  bounding_box: Box2D<f32, PixelSpace>,
  clip: Box2D<f32, PixelSpace>
) -> Option<Box2D<u32, PixelSpace>> {
  let finite = [bounding_box.min, bounding_box.max]
    .iter()
    .all(|p| p.x.is_finite() && p.y.is_finite());
  if !finite {
    return None;
  }
  bounding_box
    .round_out()
    .intersection(&clip.round_out())
    .map(|x| x.to_u32())
}

fn sdf_overlay_aa(sdf: f32, Δp: f32, mut col1: Rgba<u8>, mut col2: Rgba<u8>) -> Rgba<u8> {
  let Δf = (0.5 * Δp - sdf) // antialias
    .clamp(0.0, Δp);
  let alpha = Δf / Δp;
  // overlay blending with premultiplied alpha
  col2.0[3] = ((col2.0[3] as f32) * alpha) as u8;
  col1.blend(&col2);
  col1
}

fn rgba([r, g, b]: [u8; 3]) -> Rgba<u8> {
  Rgba([r, g, b, 255])
}

impl Draw<RgbaImage> for Axes {
  fn draw(&self, image: &mut RgbaImage) {
    let margins = if self.tight { Margins::TIGHT } else { Margins::DEFAULT };
    let screen = margins.plot_area(image.dimensions().into());
    let viewport = match (self.x_range(), self.y_range()) {
      (Some((x0, x1)), Some((y0, y1))) => Viewport::new(
        Box2D::new(Point2D::new(x0, y0), Point2D::new(x1, y1)),
        screen
      ),
      _ => None
    };
    let viewport = match viewport {
      Some(x) => x,
      None => return // no data, or the image is smaller than the margins
    };
    let (x0, y0) = (viewport.data.min.x, viewport.data.min.y);

    self.x_ticks()
      .into_iter()
      .map(|(x, _)| viewport.to_pixel(Point2D::new(x, y0)))
      .for_each(|p| Segment { a: p, b: p + V2::new(0.0, TICK_LENGTH), width: AXIS_WIDTH }
        .texture(FOREGROUND)
        .draw(image));
    self.y_ticks()
      .into_iter()
      .map(|y| viewport.to_pixel(Point2D::new(x0, y)))
      .for_each(|p| Segment { a: p, b: p - V2::new(TICK_LENGTH, 0.0), width: AXIS_WIDTH }
        .texture(FOREGROUND)
        .draw(image));

    // non-finite samples break the polyline
    self.lines.iter().for_each(|line| {
      let color = rgba(line.color);
      line.x.iter()
        .zip(line.y.iter())
        .map(|(&x, &y)| viewport.to_pixel(Point2D::new(x, y)))
        .tuple_windows()
        .for_each(|(a, b)| Segment { a, b, width: LINE_WIDTH }
          .texture(color)
          .draw_clipped(image, screen));
    });

    Frame { rect: screen, width: AXIS_WIDTH }
      .texture(FOREGROUND)
      .draw(image);

    if let Some(legend) = self.legend {
      let right = screen.max.x - LEGEND_PAD;
      let top = screen.min.y + LEGEND_PAD;
      self.lines.iter().enumerate().for_each(|(i, line)| {
        let y = top + LEGEND_ROW * (i as f32 + 0.5);
        Segment {
          a: Point2D::new(right - LEGEND_PAD - SWATCH_LENGTH, y),
          b: Point2D::new(right - LEGEND_PAD, y),
          width: LINE_WIDTH
        }.texture(rgba(line.color))
          .draw(image);
      });
      if legend.frame && !self.lines.is_empty() {
        let height = LEGEND_ROW * self.lines.len() as f32;
        Frame {
          rect: Box2D::new(
            Point2D::new(right - 2.0 * LEGEND_PAD - SWATCH_LENGTH, top),
            Point2D::new(right, top + height)
          ),
          width: AXIS_WIDTH
        }.texture(FOREGROUND)
          .draw(image);
      }
    }
  }
}

/// Render the axes onto a fresh white canvas.
pub fn rasterize(axes: &Axes, width: u32, height: u32) -> RgbaImage {
  let mut image = RgbaImage::from_pixel(width, height, BACKGROUND);
  axes.draw(&mut image);
  image
}
