use {
  super::{BoundingBox, PixelSpace, SDF},
  euclid::{Box2D, Point2D, Vector2D as V2}
};

/// Line segment of a given width, with round caps.
#[derive(Debug, Copy, Clone)]
pub struct Segment {
  pub a: Point2D<f32, PixelSpace>,
  pub b: Point2D<f32, PixelSpace>,
  pub width: f32
}

/// Outline of an axis-aligned rectangle.
#[derive(Debug, Copy, Clone)]
pub struct Frame {
  pub rect: Box2D<f32, PixelSpace>,
  pub width: f32
}

impl BoundingBox<f32, PixelSpace> for Segment {
  fn bounding_box(&self) -> Box2D<f32, PixelSpace> {
    let r = self.width / 2.0;
    Box2D::from_points([self.a, self.b]).inflate(r, r)
  }
}

impl BoundingBox<f32, PixelSpace> for Frame {
  fn bounding_box(&self) -> Box2D<f32, PixelSpace> {
    let r = self.width / 2.0;
    self.rect.inflate(r, r)
  }
}

impl SDF<f32> for Segment {
  fn sdf(&self, pixel: Point2D<f32, PixelSpace>) -> f32 {
    let pa = pixel - self.a;
    let ba = self.b - self.a;
    let len2 = ba.square_length();
    let h = if len2 > 0.0 {
      (pa.dot(ba) / len2).clamp(0.0, 1.0)
    } else {
      0.0
    };
    (pa - ba * h).length() - self.width / 2.0
  }
}

impl SDF<f32> for Frame {
  fn sdf(&self, pixel: Point2D<f32, PixelSpace>) -> f32 {
    let half = self.rect.size().to_vector() / 2.0;
    let dist = (pixel - self.rect.center()).abs() - half;
    let outside_dist = dist
      .max(V2::splat(0.0))
      .length();
    let inside_dist = dist.x
      .max(dist.y)
      .min(0.0);
    (outside_dist + inside_dist).abs() - self.width / 2.0
  }
}
