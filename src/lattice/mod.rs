//! Hexagonal fiber lattice
//!
//! Fiber centers of an IFU bundle packed on a staggered hexagonal grid and
//! their classification against a circular aperture centered on the origin.

use itertools::Itertools;

mod aperture;
mod geometry;
pub use aperture::{classify, ApertureRadius, Classification};
pub use geometry::{BundleGeometry, FiberPosition};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum LatticeError {
    #[error("invalid bundle geometry: {0}")]
    InvalidGeometry(String),
    #[error("aperture radius {0} is not recognized, expected a positive value")]
    InvalidAperture(f64),
}
pub type Result<T> = std::result::Result<T, LatticeError>;

/// Returns the centers of the `grid_width` x `grid_height` fibers of the bundle
///
/// Positions are ordered row by row, the row index `i` spanning the width and
/// the column index `j` spanning the height.
/// Odd rows are shifted by half a vertical pitch with respect to even rows.
pub fn generate(geometry: &BundleGeometry) -> Result<Vec<FiberPosition>> {
    geometry.validate()?;
    let (dist_x, dist_y) = geometry.pitches();
    let half_width = geometry.grid_width as f64 / 2f64;
    let height = geometry.grid_height as f64;
    let positions: Vec<_> = (0..geometry.grid_width)
        .cartesian_product(0..geometry.grid_height)
        .map(|(i, j)| {
            let parity = (i % 2) as f64;
            FiberPosition {
                x: (i as f64 - half_width) * dist_x,
                y: (2f64 * j as f64 - height + parity - 1f64) * dist_y,
                index: (i, j),
            }
        })
        .collect();
    log::debug!(
        "generated {} fibers from {}x{} grid",
        positions.len(),
        geometry.grid_width,
        geometry.grid_height
    );
    Ok(positions)
}
