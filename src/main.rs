use {
  std::path::PathBuf,
  anyhow::{Context, Result},
  clap::Parser,
  tracing_subscriber::{fmt, prelude::*, EnvFilter},
  sierpinski_gasket::{
    config::RenderConfig,
    gasket::{Gasket, Order},
    render::Renderer
  }
};

/// Past this order, the 3^order triangles take noticeable time and memory.
const LARGE_ORDER: u32 = 12;

/// Plot an approximation of the Sierpiński gasket and save it as `gasket_<ORDER>.png`.
#[derive(Debug, Parser)]
#[command(name = "gasket", version, about)]
struct Cli {
  /// Number of subdivisions, a non-negative whole number
  #[arg(allow_hyphen_values = true)]
  order: String,

  /// TOML file with rendering options
  #[arg(short, long)]
  config: Option<PathBuf>,

  /// Directory receiving the image
  #[arg(short, long)]
  output_dir: Option<PathBuf>,

  /// Image width in pixels
  #[arg(long)]
  width: Option<u32>,

  /// Image height in pixels
  #[arg(long)]
  height: Option<u32>,

  /// Drawing threads, at most the number of cores; 0 for all of them
  #[arg(short, long)]
  threads: Option<usize>,

  /// Open the image once saved
  #[arg(long)]
  open: bool
}

impl Cli {
  fn render_config(&self) -> Result<RenderConfig> {
    let mut config = match &self.config {
      Some(path) => RenderConfig::load(path)
        .with_context(|| format!("reading config {}", path.display()))?,
      None => RenderConfig::default()
    };
    if let Some(dir) = &self.output_dir { config.output_dir = dir.clone(); }
    if let Some(width) = self.width { config.width = width; }
    if let Some(height) = self.height { config.height = height; }
    if let Some(threads) = self.threads { config.threads = threads; }
    config.open |= self.open;
    Ok(config)
  }
}

fn init_tracing() {
  let env_filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new("info"));
  tracing_subscriber::registry()
    .with(fmt::layer().with_target(false))
    .with(env_filter)
    .init();
}

fn main() -> Result<()> {
  init_tracing();
  let cli = Cli::parse();

  let order: Order = cli.order.parse()?;
  if order.get() > LARGE_ORDER {
    tracing::warn!("order {order} yields 3^{order} triangles, this may take a while");
  }
  let renderer = Renderer::new(cli.render_config()?)?;

  let gasket = Gasket::generate(order)?;
  renderer.save(order, &gasket)?;
  Ok(())
}
