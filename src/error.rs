//! Crate-wide error type.
//!
//! Only [`Error::InvalidArgument`] can be produced by the generator itself; the remaining
//! variants come from configuration loading, drawing, and writing rendered images.

use std::convert::Infallible;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// A value that should have been a non-negative integer (e.g. the order), or an
  /// otherwise unusable argument.
  #[error("invalid argument: {0}")]
  InvalidArgument(String),

  #[error(transparent)]
  Io(#[from] std::io::Error),

  #[cfg(feature = "drawing")]
  #[cfg_attr(docsrs, doc(cfg(feature = "drawing")))]
  #[error(transparent)]
  Image(#[from] image::ImageError),

  #[error("cannot start drawing threads: {0}")]
  ThreadPool(#[from] rayon::ThreadPoolBuildError),

  #[error("malformed config: {0}")]
  Config(#[from] toml::de::Error),
}

impl Error {
  pub fn invalid_argument(msg: impl Into<String>) -> Self {
    Error::InvalidArgument(msg.into())
  }

  pub fn is_invalid_argument(&self) -> bool {
    matches!(self, Error::InvalidArgument(_))
  }
}

// lossless conversions into `Order` go through `TryFrom` too
impl From<Infallible> for Error {
  fn from(never: Infallible) -> Self {
    match never {}
  }
}

pub type Result<T> = std::result::Result<T, Error>;
