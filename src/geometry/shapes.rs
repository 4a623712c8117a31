use {
  super::{BoundingBox, WorldSpace},
  crate::sdf::SDF,
  euclid::{Box2D, Point2D, Vector2D as V2}
};

/// √3
pub(crate) const SQRT_3: f32 = 1.732_050_8;

/// Unit equilateral triangle pointing up: circumradius 1, centered in the origin.
/// Vertices are `(0, 1)`, `(√3/2, -1/2)` and `(-√3/2, -1/2)`.
#[derive(Debug, Copy, Clone)]
pub struct Triangle;

impl Triangle {
  pub fn vertices<S>(&self) -> [Point2D<f32, S>; 3] {
    [
      Point2D::new(0.0, 1.0),
      Point2D::new(SQRT_3 / 2.0, -0.5),
      Point2D::new(-SQRT_3 / 2.0, -0.5),
    ]
  }
}

impl<S> BoundingBox<f32, S> for Triangle {
  fn bounding_box(&self) -> Box2D<f32, S> {
    Box2D::new(
      Point2D::new(-SQRT_3 / 2.0, -0.5),
      Point2D::new(SQRT_3 / 2.0, 1.0)
    )}}

impl SDF<f32> for Triangle {
  fn sdf(&self, pixel: Point2D<f32, WorldSpace>) -> f32 {
    // half of the side length
    let h = SQRT_3 / 2.0;
    // fold onto the right half, base on y = -1/2
    let mut p = V2::<f32, WorldSpace>::new(pixel.x.abs() - h, pixel.y + h / SQRT_3);
    // reflect across the right edge
    if p.x + SQRT_3 * p.y > 0.0 {
      p = V2::new(p.x - SQRT_3 * p.y, -SQRT_3 * p.x - p.y) / 2.0;
    }
    p.x -= p.x.clamp(-2.0 * h, 0.0);
    -p.length() * p.y.signum()
  }
}
