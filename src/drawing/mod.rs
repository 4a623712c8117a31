use {
  crate::{
    geometry::{
      BoundingBox, Shape,
      PixelSpace, WorldSpace
    },
    sdf::SDF
  },
  euclid::{Box2D, Point2D, Size2D, Vector2D as V2},
  image::{Rgba, RgbaImage}
};

mod impl_draw_rgbaimage;
#[cfg(test)] mod tests;
pub use impl_draw_rgbaimage::draw_parallel;
#[cfg(test)] use impl_draw_rgbaimage::framebuffer_count;

pub trait Draw<Backend>: Shape {
  fn draw(&self, canvas: &mut Backend);
}

pub trait DrawSync<Backend>: Draw<Backend> + Send + Sync {}
impl <T, Backend> DrawSync<Backend> for T where T: Draw<Backend> + Send + Sync {}

#[derive(Debug, Copy, Clone)]
pub struct Texture<S, T> {
  pub shape: S,
  pub texture: T
}
impl <S, T> SDF<f32> for Texture<S, T> where S: SDF<f32> {
  fn sdf(&self, pixel: Point2D<f32, WorldSpace>) -> f32 { self.shape.sdf(pixel) } }
impl <S, T> BoundingBox<f32, WorldSpace> for Texture<S, T> where S: BoundingBox<f32, WorldSpace> {
  fn bounding_box(&self) -> Box2D<f32, WorldSpace> { self.shape.bounding_box() } }

/// Maps a rectangular region of world space onto an image, preserving aspect ratio.
/// The region is centered along the longer image side; world y axis points up.
#[derive(Debug, Copy, Clone)]
pub struct Viewport {
  world: Box2D<f32, WorldSpace>,
  resolution: Size2D<u32, PixelSpace>,
  /// pixels per world unit
  scale: f32,
  offset: V2<f32, PixelSpace>
}

impl Viewport {
  pub fn fit(world: Box2D<f32, WorldSpace>, resolution: Size2D<u32, PixelSpace>) -> Self {
    let size = resolution.to_f32();
    let scale = (size.width / world.width()).min(size.height / world.height());
    let offset = (size.to_vector() - V2::new(world.width(), world.height()) * scale) / 2.0;
    Self { world, resolution, scale, offset }
  }

  pub fn world(&self) -> Box2D<f32, WorldSpace> { self.world }
  pub fn resolution(&self) -> Size2D<u32, PixelSpace> { self.resolution }

  /// Width of one pixel, in world units.
  pub fn pixel_size(&self) -> f32 {
    1.0 / self.scale
  }

  pub fn to_pixel(&self, point: Point2D<f32, WorldSpace>) -> Point2D<f32, PixelSpace> {
    Point2D::new(
      (point.x - self.world.min.x) * self.scale,
      (self.world.max.y - point.y) * self.scale
    ) + self.offset
  }

  pub fn to_world(&self, pixel: Point2D<f32, PixelSpace>) -> Point2D<f32, WorldSpace> {
    let pixel = pixel - self.offset;
    Point2D::new(
      self.world.min.x + pixel.x / self.scale,
      self.world.max.y - pixel.y / self.scale
    )
  }

  /// Pixels covered by a world-space box, clipped to the image.
  /// `None` if the box has no intersection with the image at all.
  pub fn pixel_box(&self, bounding_box: Box2D<f32, WorldSpace>) -> Option<Box2D<u32, PixelSpace>> {
    let corners = [
      self.to_pixel(bounding_box.min),
      self.to_pixel(bounding_box.max)
    ];
    Box2D::from_points(corners)
      .round_out()
      .intersection(&Box2D::from_size(self.resolution.to_f32()))
      .map(|x| x.to_u32())
  }
}

/// An image together with the world region it displays.
#[derive(Debug, Clone)]
pub struct Canvas {
  pub image: RgbaImage,
  pub viewport: Viewport
}

impl Canvas {
  /// Transparent canvas
  pub fn new(viewport: Viewport) -> Self {
    Self::filled(viewport, Rgba([0, 0, 0, 0]))
  }

  pub fn filled(viewport: Viewport, background: Rgba<u8>) -> Self {
    let resolution = viewport.resolution();
    Self {
      image: RgbaImage::from_pixel(resolution.width, resolution.height, background),
      viewport
    }
  }

  pub fn into_image(self) -> RgbaImage {
    self.image
  }
}
