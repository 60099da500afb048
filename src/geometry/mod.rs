//! .
//!
//! Raster geometry. The origin of the pixel basis is in the top-left corner of the image and `y`
//! grows downwards; the data basis has `y` growing upwards.

use euclid::{Box2D, Point2D, Vector2D as V2};

pub mod shapes;
pub use shapes::*;

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;
/// Data coordinate basis: frequency, radiance
#[derive(Debug, Copy, Clone)]
pub struct DataSpace;

/// Signed distance function, negative inside.
pub trait SDF<T> {
  fn sdf(&self, pixel: Point2D<T, PixelSpace>) -> T;
}

pub trait BoundingBox<T, S> {
  fn bounding_box(&self) -> Box2D<T, S>;
}

/// Something inside a rectangular area of the image.
pub trait Shape: SDF<f32> + BoundingBox<f32, PixelSpace> {
  fn texture<T>(self, texture: T) -> crate::drawing::Texture<Self, T> where Self: Sized {
    crate::drawing::Texture { shape: self, texture }
  }
}
impl <T> Shape for T where T: SDF<f32> + BoundingBox<f32, PixelSpace> {}

/// Maps the data rectangle onto a pixel rectangle.
#[derive(Debug, Copy, Clone)]
pub struct Viewport {
  pub data: Box2D<f64, DataSpace>,
  pub screen: Box2D<f32, PixelSpace>
}

impl Viewport {
  /// `None` if either rectangle is empty or not finite.
  pub fn new(data: Box2D<f64, DataSpace>, screen: Box2D<f32, PixelSpace>) -> Option<Self> {
    let finite = [data.min, data.max].iter().all(|p| p.x.is_finite() && p.y.is_finite());
    (finite && !data.is_empty() && !screen.is_empty()).then(|| Self { data, screen })
  }

  pub fn to_pixel(&self, point: Point2D<f64, DataSpace>) -> Point2D<f32, PixelSpace> {
    let t: V2<f64, DataSpace> = (point - self.data.min)
      .component_div(self.data.size().to_vector());
    Point2D::new(
      self.screen.min.x + t.x as f32 * self.screen.width(),
      self.screen.max.y - t.y as f32 * self.screen.height()
    )
  }
}
