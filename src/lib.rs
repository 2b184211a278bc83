//! # IFU fiber bundle
//!
//! Geometry of the hexagonal fiber bundles of an Integral Field Unit:
//! the fiber centers of a bundle are laid out on a staggered hexagonal grid
//! and classified as inside or outside a circular aperture centered on the bundle.
//!
//! ```
//! use ifu_bundle::{lattice, ApertureRadius, BundleGeometry};
//!
//! let geometry = BundleGeometry::new(0.24, 0.0, 8, 9)?;
//! let positions = lattice::generate(&geometry)?;
//! let classification = lattice::classify(&positions, ApertureRadius::new(0.34)?);
//! assert_eq!(classification.inside.len(), 7);
//! # Ok::<(), ifu_bundle::lattice::LatticeError>(())
//! ```
//!
//! Figures are rendered with [plotters](https://docs.rs/plotters) if the `plot` feature is enabled.

pub mod error;
pub mod figure;
pub mod ifu;
pub mod lattice;
#[cfg(feature = "plot")]
pub mod plot;
pub mod series;

pub use error::{Error, Result};
pub use figure::{Figure, Render, RenderError};
pub use ifu::Ifu;
pub use lattice::{ApertureRadius, BundleGeometry, Classification, FiberPosition};
pub use series::Series;
