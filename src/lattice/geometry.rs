use super::{LatticeError, Result};
use std::fmt;

/// IFU fiber bundle geometry
///
/// Lengths are given in arcsecond (or any unit as long as it is the same for
/// the diameter, the spacing and the aperture radius)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BundleGeometry {
    /// Fiber diameter
    pub fiber_diameter: f64,
    /// Gap between adjacent fibers
    pub fiber_spacing: f64,
    /// Number of rows
    pub grid_width: usize,
    /// Number of fibers per row
    pub grid_height: usize,
}
impl BundleGeometry {
    /// Creates a new bundle geometry, checking its validity
    pub fn new(
        fiber_diameter: f64,
        fiber_spacing: f64,
        grid_width: usize,
        grid_height: usize,
    ) -> Result<Self> {
        let geometry = Self {
            fiber_diameter,
            fiber_spacing,
            grid_width,
            grid_height,
        };
        geometry.validate()?;
        Ok(geometry)
    }
    pub fn validate(&self) -> Result<()> {
        if !(self.fiber_diameter.is_finite() && self.fiber_diameter > 0f64) {
            return Err(LatticeError::InvalidGeometry(format!(
                "fiber diameter must be positive, found {}",
                self.fiber_diameter
            )));
        }
        if !(self.fiber_spacing.is_finite() && self.fiber_spacing >= 0f64) {
            return Err(LatticeError::InvalidGeometry(format!(
                "fiber spacing must be positive or zero, found {}",
                self.fiber_spacing
            )));
        }
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(LatticeError::InvalidGeometry(format!(
                "grid dimensions must be positive, found {}x{}",
                self.grid_width, self.grid_height
            )));
        }
        Ok(())
    }
    /// Center to center distance between adjacent fibers
    pub fn pitch(&self) -> f64 {
        self.fiber_diameter + self.fiber_spacing
    }
    /// Horizontal and vertical lattice pitches
    pub fn pitches(&self) -> (f64, f64) {
        let pitch = self.pitch();
        (0.5 * 3f64.sqrt() * pitch, 0.5 * pitch)
    }
    /// Number of fibers in the bundle
    pub fn len(&self) -> usize {
        self.grid_width * self.grid_height
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
impl fmt::Display for BundleGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} fibers of {:.3} diameter with {:.3} spacing",
            self.grid_width, self.grid_height, self.fiber_diameter, self.fiber_spacing
        )
    }
}

/// Fiber center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiberPosition {
    pub x: f64,
    pub y: f64,
    /// (row, column) index in the bundle grid
    pub index: (usize, usize),
}
impl FiberPosition {
    /// Distance to the lattice center
    pub fn radius(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
    pub fn xy(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pitches() {
        let geometry = BundleGeometry::new(0.24, 0.0, 8, 9).unwrap();
        let (dist_x, dist_y) = geometry.pitches();
        assert!((dist_x - 0.207846).abs() < 1e-6);
        assert!((dist_y - 0.12).abs() < 1e-12);
        assert_eq!(geometry.len(), 72);
        assert!(!geometry.is_empty());
    }

    #[test]
    fn invalid_geometries() {
        for (diameter, spacing, width, height) in [
            (0f64, 0f64, 8, 9),
            (-0.24, 0f64, 8, 9),
            (f64::NAN, 0f64, 8, 9),
            (0.24, -0.01, 8, 9),
            (0.24, 0f64, 0, 9),
            (0.24, 0f64, 8, 0),
        ] {
            assert!(matches!(
                BundleGeometry::new(diameter, spacing, width, height),
                Err(LatticeError::InvalidGeometry(_))
            ));
        }
    }

    #[test]
    fn fiber_radius() {
        let fiber = FiberPosition {
            x: 3.,
            y: -4.,
            index: (0, 0),
        };
        assert_eq!(fiber.radius(), 5.);
    }
}
