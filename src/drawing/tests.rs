use {
  super::*,
  crate::{
    error::Result,
    gasket::Gasket,
    geometry::Triangle,
    render::view_box
  },
  image::{Luma, Pixel}
};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

fn pixel_at(canvas: &Canvas, point: Point2D<f32, WorldSpace>) -> Rgba<u8> {
  let pixel = canvas.viewport.to_pixel(point).floor().to_u32();
  *canvas.image.get_pixel(pixel.x, pixel.y)
}

#[test] fn viewport_fit() {
  let viewport = Viewport::fit(view_box(), Size2D::new(1024, 1024));
  let world = viewport.world();
  // wider than tall: touches left and right edges, centered vertically
  let top_left = viewport.to_pixel(Point2D::new(world.min.x, world.max.y));
  let bottom_right = viewport.to_pixel(Point2D::new(world.max.x, world.min.y));
  assert!(top_left.x.abs() < 1e-3);
  assert!((bottom_right.x - 1024.0).abs() < 1e-3);
  assert!((top_left.y - (1024.0 - bottom_right.y)).abs() < 1e-3);
  assert!(top_left.y > 0.0);
  // y axis is flipped
  assert!(viewport.to_pixel(Point2D::new(0.0, 1.0)).y < viewport.to_pixel(Point2D::new(0.0, 0.0)).y);
  assert!((viewport.pixel_size() * 1024.0 - world.width()).abs() < 1e-4);
}

#[test] fn viewport_round_trip() {
  let viewport = Viewport::fit(view_box(), Size2D::new(300, 200));
  for point in [Point2D::new(0.0, 0.0), Point2D::new(-0.5, 0.75), Point2D::new(0.8, -0.4)] {
    let back = viewport.to_world(viewport.to_pixel(point));
    assert!((back - point).length() < 1e-4, "{point:?} -> {back:?}");
  }
}

#[test] fn pixel_box_clipping() {
  let viewport = Viewport::fit(view_box(), Size2D::new(100, 100));
  let offscreen = Box2D::new(Point2D::new(5.0, 5.0), Point2D::new(6.0, 6.0));
  assert!(viewport.pixel_box(offscreen).is_none());

  let everything = Box2D::new(Point2D::splat(-10.0), Point2D::splat(10.0));
  let clipped = viewport.pixel_box(everything).unwrap();
  assert_eq!(clipped, Box2D::new(Point2D::zero(), Point2D::new(100, 100)));
}

#[test] fn solid_triangle() {
  let mut canvas = Canvas::new(Viewport::fit(view_box(), Size2D::new(128, 128)));
  Triangle
    .texture(Luma([255u8]).to_rgba())
    .draw(&mut canvas);

  assert_eq!(pixel_at(&canvas, Point2D::new(0.0, 0.0)), WHITE);
  assert_eq!(pixel_at(&canvas, Point2D::new(0.0, 0.9)), WHITE);
  // outside the triangle, next to its slanted edges
  assert_eq!(pixel_at(&canvas, Point2D::new(-0.7, 0.8)).0[3], 0);
  assert_eq!(pixel_at(&canvas, Point2D::new(0.7, 0.8)).0[3], 0);
  assert_eq!(canvas.image.get_pixel(0, 0).0[3], 0);
}

#[test] fn antialiased_edge() {
  let mut canvas = Canvas::new(Viewport::fit(view_box(), Size2D::new(128, 128)));
  Triangle
    .texture(WHITE)
    .draw(&mut canvas);
  // pixels crossing the base are partially covered
  let partial = canvas.image.pixels()
    .filter(|px| px.0[3] > 0 && px.0[3] < 255)
    .count();
  assert!(partial > 0);
}

#[test] fn parallel_matches_gasket() -> Result<()> {
  let gasket = Gasket::generate(3u32)?;
  let viewport = Viewport::fit(view_box(), Size2D::new(256, 256));
  let shapes = gasket.triangles()
    .map(|triangle| triangle.texture(WHITE))
    .collect::<Vec<_>>();

  for num_threads in [0, 1, 4, 1000] {
    let canvas = Canvas {
      image: draw_parallel(&shapes, viewport, BLACK, num_threads)?,
      viewport
    };
    for center in gasket.centers() {
      let px = pixel_at(&canvas, center.to_f32());
      assert!(px.0.iter().all(|&c| c >= 250), "{center:?}: {px:?}");
    }
    // removed middle of the seed triangle
    assert_eq!(pixel_at(&canvas, Point2D::new(0.0, -0.1)), BLACK);
    assert_eq!(*canvas.image.get_pixel(0, 0), BLACK);
  }
  Ok(())
}

#[test] fn parallel_without_shapes() -> Result<()> {
  let viewport = Viewport::fit(view_box(), Size2D::new(16, 16));
  let shapes: Vec<Texture<Triangle, Rgba<u8>>> = vec![];
  let image = draw_parallel(&shapes, viewport, BLACK, 0)?;
  assert!(image.pixels().all(|&px| px == BLACK));
  Ok(())
}

#[test] fn framebuffers_bounded_by_pool() {
  // order 8 with far more threads requested than available
  assert_eq!(framebuffer_count(6561, 1000, 8), 8);
  assert_eq!(framebuffer_count(6561, 0, 8), 8);
  assert_eq!(framebuffer_count(6561, 2, 8), 2);
  assert_eq!(framebuffer_count(3, 0, 8), 3);
  assert_eq!(framebuffer_count(0, 1000, 8), 1);
  assert!(framebuffer_count(6561, 1000, rayon::current_num_threads()) <= rayon::current_num_threads());
}
