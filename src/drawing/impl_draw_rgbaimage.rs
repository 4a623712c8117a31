#![allow(non_snake_case)]
use {
  rayon::prelude::*,
  euclid::Point2D,
  image::{Pixel, Rgba, RgbaImage},
  crate::{
    drawing::{Canvas, Draw, DrawSync, Shape, Texture, Viewport},
    error::Result,
    geometry::{BoundingBox, PixelSpace},
    sdf::SDF
  }
};

/// Solid fill
impl <Cutie> Draw<Canvas> for Texture<Cutie, Rgba<u8>>
  where Cutie: Shape
{
  fn draw(&self, canvas: &mut Canvas) {
    let viewport = canvas.viewport;
    let bounding_box = match viewport.pixel_box(self.bounding_box()) {
      Some(x) => x,
      None => return // bounding box has no intersection with screen at all
    };
    let Δp = viewport.pixel_size();

    itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
      .map(|(y, x)| Point2D::<_, PixelSpace>::from([x, y]))
      .for_each(|pixel| {
        // sample in the middle of a pixel
        let pixel_world = viewport.to_world(pixel.to_f32() + euclid::vec2(0.5, 0.5));
        let sdf = self.sdf(pixel_world);
        let pixel = canvas.image.get_pixel_mut(pixel.x, pixel.y);
        *pixel = sdf_overlay_aa(sdf, Δp, *pixel, self.texture);
      });
  }
}

fn sdf_overlay_aa(sdf: f32, Δp: f32, mut col1: Rgba<u8>, mut col2: Rgba<u8>) -> Rgba<u8> {
  let Δf = (0.5 * Δp - sdf) // antialias
    .clamp(0.0, Δp);
  let alpha = Δf / Δp;
  if alpha <= 0.0 {
    return col1;
  }
  // overlay blending with premultiplied alpha
  col2.0[3] = ((col2.0[3] as f32) * alpha) as u8;
  col1.blend(&col2);
  col1
}

/// Number of framebuffers drawn by [`draw_parallel`]: one per worker, never more workers
/// than `available` threads nor more framebuffers than shapes.
pub(super) fn framebuffer_count(shapes: usize, requested: usize, available: usize) -> usize {
  let workers = match requested {
    0 => available,
    n => n.min(available)
  };
  workers.min(shapes).max(1)
}

/// Draw shapes, parallel.
/// Every worker draws its share of shapes onto a transparent framebuffer; framebuffers are
/// merged in order and overlaid onto `background`.
/// Runs on a dedicated pool of `num_threads` workers, capped at the size of the global rayon
/// pool (`0` uses all of it). Will use up to
/// `resolution.width * resolution.height * (num_threads + 1) * 4` bytes of memory.
pub fn draw_parallel<S>(
  shapes: &[S],
  viewport: Viewport,
  background: Rgba<u8>,
  num_threads: usize
) -> Result<RgbaImage>
  where S: DrawSync<Canvas>
{
  let framebuffers = framebuffer_count(shapes.len(), num_threads, rayon::current_num_threads());
  let chunk_size = shapes.len().div_ceil(framebuffers).max(1);
  let pool = rayon::ThreadPoolBuilder::new()
    .num_threads(framebuffers)
    .build()?;
  tracing::debug!(shapes = shapes.len(), framebuffers, "drawing");

  let merged = pool.install(|| shapes
    .par_chunks(chunk_size)
    .map(|chunk| {
      let mut framebuffer = Canvas::new(viewport);
      chunk.iter()
        .for_each(|shape| shape.draw(&mut framebuffer));
      framebuffer.into_image()
    })
    // neighbouring chunks are merged in order
    .reduce_with(|mut bottom, top| {
      image::imageops::overlay(&mut bottom, &top, 0, 0);
      bottom
    }));

  let mut final_buffer = Canvas::filled(viewport, background).into_image();
  if let Some(buffer) = merged {
    image::imageops::overlay(&mut final_buffer, &buffer, 0, 0);
  }
  Ok(final_buffer)
}
