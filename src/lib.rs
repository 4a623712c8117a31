//! Approximations of the Sierpiński gasket.
//!
//! The crate is split into [`gasket`], which computes the triangles remaining after a given
//! number of subdivisions, and [`render`] with [`drawing`] for plotting them
//! (requires `drawing` feature, enabled by default).
//!
//! # Basic usage
//! ```no_run
//! # use sierpinski_gasket::{
//! #   config::RenderConfig,
//! #   error::Result,
//! #   gasket::{Gasket, Order},
//! #   render::Renderer
//! # };
//! # fn main() -> Result<()> {
//! let order: Order = "5".parse()?; // negative or fractional orders are rejected
//! let gasket = Gasket::generate(order)?; // 3^5 triangles of radius 2^-5
//!
//! let renderer = Renderer::new(RenderConfig::default())?;
//! let path = renderer.save(order, &gasket)?; // ./gasket_5.png
//! # Ok(())
//! # }
//! ```
//! Each triangle is a [`Shape`](geometry::Shape): the unit [`Triangle`](geometry::Triangle),
//! scaled by the gasket radius and moved to its center. Shapes are drawn through their signed
//! distance function, which gives anti-aliased edges for free:
//! ```
//! # use {
//! #   sierpinski_gasket::{
//! #     drawing::{Canvas, Draw, Viewport},
//! #     gasket::Gasket,
//! #     geometry::Shape,
//! #     render::view_box,
//! #   },
//! #   euclid::Size2D,
//! #   image::Rgba
//! # };
//! let mut canvas = Canvas::new(Viewport::fit(view_box(), Size2D::new(256, 256)));
//! Gasket::seed()
//!   .subdivide()
//!   .triangles()
//!   .for_each(|triangle| triangle
//!     .texture(Rgba([255, 255, 255, 255]))
//!     .draw(&mut canvas));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod util;
pub mod sdf;
pub mod geometry;
pub mod gasket;
pub mod config;
#[cfg(feature = "drawing")]
#[cfg_attr(docsrs, doc(cfg(feature = "drawing")))]
pub mod drawing;
#[cfg(feature = "drawing")]
#[cfg_attr(docsrs, doc(cfg(feature = "drawing")))]
pub mod render;
