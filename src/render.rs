//! Plots a [`Gasket`] onto an image and saves it as `gasket_<order>.png`.

use {
  std::{fs, path::{Path, PathBuf}, process::ExitStatus},
  euclid::{Box2D, Point2D, Size2D},
  humansize::{FileSize, file_size_opts as options},
  image::{Rgba, RgbaImage},
  crate::{
    config::RenderConfig,
    drawing::{draw_parallel, Viewport},
    error::Result,
    gasket::{Gasket, Order},
    geometry::{Shape, WorldSpace, shapes::SQRT_3}
  }
};

/// Region plotted by [`Renderer`]: the order-0 triangle, `x ∈ [-√3/2, √3/2]`, `y ∈ [-1/2, 1]`.
pub fn view_box() -> Box2D<f32, WorldSpace> {
  Box2D::new(
    Point2D::new(-SQRT_3 / 2.0, -0.5),
    Point2D::new(SQRT_3 / 2.0, 1.0)
  )
}

#[derive(Debug, Clone, Default)]
pub struct Renderer {
  config: RenderConfig
}

impl Renderer {
  pub fn new(config: RenderConfig) -> Result<Self> {
    config.validate()?;
    Ok(Self { config })
  }

  pub fn config(&self) -> &RenderConfig {
    &self.config
  }

  pub fn viewport(&self) -> Viewport {
    Viewport::fit(view_box(), Size2D::new(self.config.width, self.config.height))
  }

  /// One filled triangle per center of the gasket.
  pub fn render(&self, gasket: &Gasket) -> Result<RgbaImage> {
    let fill = Rgba(self.config.fill);
    let shapes = gasket.triangles()
      .map(|triangle| triangle.texture(fill))
      .collect::<Vec<_>>();
    crate::profile!("draw", {
      draw_parallel(&shapes, self.viewport(), Rgba(self.config.background), self.config.threads)
    })
  }

  pub fn output_path(&self, order: Order) -> PathBuf {
    self.config.output_dir.join(format!("gasket_{order}.png"))
  }

  /// Render and write the image, returning its path. Opens it afterwards if configured to.
  pub fn save(&self, order: Order, gasket: &Gasket) -> Result<PathBuf> {
    let path = self.output_path(order);
    fs::create_dir_all(&self.config.output_dir)?;
    self.render(gasket)?.save(&path)?;

    let size = fs::metadata(&path)?.len();
    tracing::info!(
      path = %path.display(),
      size = %size.file_size(options::BINARY).unwrap_or_default(),
      "saved gasket of order {order}"
    );
    if self.config.open {
      viewer_succeeded(&path, open::that(&path)?);
    }
    Ok(path)
  }
}

/// Logs a warning if the viewer exited unsuccessfully.
fn viewer_succeeded(path: &Path, status: ExitStatus) -> bool {
  if !status.success() {
    tracing::warn!(path = %path.display(), %status, "image viewer failed");
  }
  status.success()
}
