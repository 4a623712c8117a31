//! Sierpiński gasket generator.
//!
//! The zeroth-order gasket is a single upward equilateral triangle of radius 1, centered in the
//! origin. Each further order splits every triangle into four equally sized ones and drops the
//! central (inverted) one, so a gasket of order `n` holds `3^n` triangles of radius `2^-n`.
//!
//! ```
//! # use sierpinski_gasket::{gasket::Gasket, error::Result};
//! # fn main() -> Result<()> {
//! let gasket = Gasket::generate(3u32)?;
//! assert_eq!(gasket.len(), 27);
//! assert_eq!(gasket.radius(), 0.125);
//! assert!(Gasket::generate(-1i32).is_err());
//! # Ok(())
//! # }
//! ```

use {
  std::{fmt, iter, str::FromStr},
  euclid::{Point2D, Vector2D as V2},
  crate::{
    error::{Error, Result},
    geometry::{Shape, Scale, Translation, Triangle, WorldSpace}
  }
};


/// √3
const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Recursion depth: number of subdivisions applied to the seed gasket.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Order(u32);

impl Order {
  pub const fn new(order: u32) -> Self { Self(order) }
  pub const fn get(self) -> u32 { self.0 }
}

impl fmt::Display for Order {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

fn not_an_order(value: impl fmt::Display) -> Error {
  Error::invalid_argument(format!("order must be a non-negative integer, got `{value}`"))
}

macro_rules! order_from_unsigned {
  ($($t: ty),*) => {$(
    impl From<$t> for Order {
      fn from(order: $t) -> Self { Self(order.into()) }
    }
  )*}
}
order_from_unsigned!(u8, u16, u32);

macro_rules! order_try_from_int {
  ($($t: ty),*) => {$(
    impl TryFrom<$t> for Order {
      type Error = Error;
      fn try_from(order: $t) -> Result<Self> {
        u32::try_from(order)
          .map(Self)
          .map_err(|_| not_an_order(order))
      }
    }
  )*}
}
order_try_from_int!(i8, i16, i32, i64, isize, u64, usize);

// Only integers are orders, even when a float happens to hold a whole number.
macro_rules! order_try_from_float {
  ($($t: ty),*) => {$(
    impl TryFrom<$t> for Order {
      type Error = Error;
      fn try_from(order: $t) -> Result<Self> {
        Err(not_an_order(order))
      }
    }
  )*}
}
order_try_from_float!(f32, f64);

impl FromStr for Order {
  type Err = Error;
  fn from_str(s: &str) -> Result<Self> {
    s.trim()
      .parse::<u32>()
      .map(Self)
      .map_err(|_| not_an_order(s))
  }
}

/// Text is never an order by itself; parse it with [`FromStr`] at the input boundary.
impl TryFrom<&str> for Order {
  type Error = Error;
  fn try_from(s: &str) -> Result<Self> {
    Err(not_an_order(s))
  }
}

/// Triangle centers of one approximation order, sharing a single radius.
///
/// The radius is the circumradius: distance from a center to each vertex of its triangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Gasket {
  centers: Vec<Point2D<f64, WorldSpace>>,
  radius: f64
}

impl Gasket {
  /// Order 0: one triangle of radius 1 in the origin.
  pub fn seed() -> Self {
    Self {
      centers: vec![Point2D::origin()],
      radius: 1.0
    }
  }

  /// Gasket of given order. Fails with [`Error::InvalidArgument`] unless `order` is a
  /// non-negative integer; floats and strings are always rejected.
  pub fn generate<O>(order: O) -> Result<Self>
    where O: TryInto<Order>,
          Error: From<O::Error>
  {
    let order = order.try_into()?;
    let gasket = crate::profile!("generate", {
      (0..order.get()).fold(Self::seed(), |gasket, _| gasket.subdivide())
    });
    tracing::debug!(%order, triangles = gasket.len(), radius = gasket.radius, "generated gasket");
    Ok(gasket)
  }

  /// Approximation of the next order: every triangle is replaced with its top, bottom-right and
  /// bottom-left quarter, in that order. Each of them shares a vertex with the parent.
  pub fn subdivide(&self) -> Self {
    let r = self.radius;
    let offsets: [V2<f64, WorldSpace>; 3] = [
      V2::new(0.0, r / 2.0),
      V2::new(SQRT_3 * r / 4.0, -r / 4.0),
      V2::new(-SQRT_3 * r / 4.0, -r / 4.0),
    ];
    let centers = self.centers.iter()
      .flat_map(|&center| offsets.iter().map(move |&offset| center + offset))
      .collect();
    Self { centers, radius: r / 2.0 }
  }

  /// `self` followed by all of its subsequent subdivisions.
  pub fn refinements(self) -> impl Iterator<Item = Gasket> {
    iter::successors(Some(self), |gasket| Some(gasket.subdivide()))
  }

  pub fn centers(&self) -> &[Point2D<f64, WorldSpace>] {
    &self.centers
  }

  pub fn radius(&self) -> f64 {
    self.radius
  }

  pub fn len(&self) -> usize {
    self.centers.len()
  }

  pub fn is_empty(&self) -> bool {
    self.centers.is_empty()
  }

  /// One drawable unit [`Triangle`], scaled and moved in place, per center.
  pub fn triangles(&self) -> impl Iterator<Item = Translation<Scale<Triangle, f32>, f32>> + '_ {
    let radius = self.radius as f32;
    self.centers.iter()
      .map(move |center| Triangle
        .scale(radius)
        .translate(center.to_vector().to_f32()))
  }
}

impl Default for Gasket {
  fn default() -> Self { Self::seed() }
}

/// See [`Gasket::generate`].
pub fn generate<O>(order: O) -> Result<Gasket>
  where O: TryInto<Order>,
        Error: From<O::Error>
{
  Gasket::generate(order)
}

/// See [`Gasket::subdivide`].
pub fn subdivide(gasket: &Gasket) -> Gasket {
  gasket.subdivide()
}
