//! Rendering options, read from a TOML file. Every key is optional:
//! ```toml
//! width = 2048
//! height = 2048
//! fill = [31, 119, 180, 255]
//! background = [255, 255, 255, 255]
//! output_dir = "out"
//! threads = 4
//! open = true
//! ```

use {
  std::{fs, path::{Path, PathBuf}},
  serde::Deserialize,
  crate::error::{Error, Result}
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
  /// Image width in pixels
  pub width: u32,
  /// Image height in pixels
  pub height: u32,
  /// RGBA color of the triangles
  pub fill: [u8; 4],
  /// RGBA color behind the triangles
  pub background: [u8; 4],
  /// Directory receiving `gasket_<order>.png`
  pub output_dir: PathBuf,
  /// Drawing threads, at most the number of cores; 0 for all of them
  pub threads: usize,
  /// Open the saved image in the default viewer
  pub open: bool
}

impl Default for RenderConfig {
  fn default() -> Self {
    Self {
      width: 1024,
      height: 1024,
      fill: [31, 119, 180, 255],
      background: [0, 0, 0, 0],
      output_dir: PathBuf::from("."),
      threads: 0,
      open: false
    }
  }
}

impl RenderConfig {
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let config = Self::from_toml(&content)?;
    tracing::debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
  }

  pub fn from_toml(content: &str) -> Result<Self> {
    let config: Self = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
  }

  pub fn validate(&self) -> Result<()> {
    if self.width == 0 || self.height == 0 {
      return Err(Error::invalid_argument(format!(
        "image resolution must be positive, got {}x{}", self.width, self.height
      )));
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn defaults() -> Result<()> {
    assert_eq!(RenderConfig::from_toml("")?, RenderConfig::default());
    Ok(())
  }

  #[test] fn partial() -> Result<()> {
    let config = RenderConfig::from_toml(r#"
      width = 640
      background = [255, 255, 255, 255]
      output_dir = "renders"
      open = true
    "#)?;
    assert_eq!(config.width, 640);
    assert_eq!(config.height, 1024);
    assert_eq!(config.background, [255; 4]);
    assert_eq!(config.output_dir, PathBuf::from("renders"));
    assert!(config.open);
    Ok(())
  }

  #[test] fn rejects_bad_values() {
    assert!(matches!(RenderConfig::from_toml("width = 0"), Err(Error::InvalidArgument(_))));
    assert!(matches!(RenderConfig::from_toml("width = -3"), Err(Error::Config(_))));
    assert!(matches!(RenderConfig::from_toml("colour = 1"), Err(Error::Config(_))));
    assert!(matches!(RenderConfig::from_toml("fill = [1, 2, 3]"), Err(Error::Config(_))));
  }

  #[test] fn load_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("gasket.toml");
    fs::write(&path, "height = 300\nthreads = 2\n")?;
    let config = RenderConfig::load(&path)?;
    assert_eq!((config.width, config.height, config.threads), (1024, 300, 2));
    assert!(RenderConfig::load(dir.path().join("missing.toml")).is_err());
    Ok(())
  }
}
