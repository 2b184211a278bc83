use super::{FiberPosition, LatticeError, Result};
use serde::Serialize;
use std::{fmt, io};

/// Radius of the circular aperture centered on the lattice
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ApertureRadius(pub(crate) f64);
impl ApertureRadius {
    pub fn new(radius: f64) -> Result<Self> {
        if radius.is_finite() && radius > 0f64 {
            Ok(Self(radius))
        } else {
            Err(LatticeError::InvalidAperture(radius))
        }
    }
    pub fn value(&self) -> f64 {
        self.0
    }
    /// Checks if a fiber lies within the aperture, the aperture edge included
    pub fn contains(&self, fiber: &FiberPosition) -> bool {
        fiber.radius() <= self.0
    }
}
impl fmt::Display for ApertureRadius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

#[derive(Serialize)]
struct FiberRecord {
    row: usize,
    column: usize,
    x: f64,
    y: f64,
    radius: f64,
    inside: bool,
}
impl FiberRecord {
    fn new(fiber: &FiberPosition, inside: bool) -> Self {
        Self {
            row: fiber.index.0,
            column: fiber.index.1,
            x: fiber.x,
            y: fiber.y,
            radius: fiber.radius(),
            inside,
        }
    }
}

/// Fibers split between the fibers inside and outside the aperture
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    radius: ApertureRadius,
    pub inside: Vec<FiberPosition>,
    pub outside: Vec<FiberPosition>,
}
impl Classification {
    pub fn radius(&self) -> ApertureRadius {
        self.radius
    }
    pub fn len(&self) -> usize {
        self.inside.len() + self.outside.len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Fraction of the fibers inside the aperture
    pub fn fill_factor(&self) -> f64 {
        if self.is_empty() {
            0f64
        } else {
            self.inside.len() as f64 / self.len() as f64
        }
    }
    /// Writes the fibers as CSV records, the fibers inside the aperture first
    pub fn to_csv<W: io::Write>(&self, writer: W) -> std::result::Result<(), csv::Error> {
        let mut wtr = csv::Writer::from_writer(writer);
        for record in self
            .inside
            .iter()
            .map(|fiber| FiberRecord::new(fiber, true))
            .chain(
                self.outside
                    .iter()
                    .map(|fiber| FiberRecord::new(fiber, false)),
            )
        {
            wtr.serialize(record)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " - aperture radius: {}", self.radius)?;
        writeln!(f, " - # of fibers: {}", self.len())?;
        writeln!(f, " - # of fibers inside: {}", self.inside.len())?;
        writeln!(f, " - # of fibers outside: {}", self.outside.len())?;
        write!(f, " - fill factor: {:.1}%", 1e2 * self.fill_factor())
    }
}

/// Partitions the fibers according to their distance to the lattice center
///
/// A fiber exactly on the aperture edge is inside.
pub fn classify(positions: &[FiberPosition], radius: ApertureRadius) -> Classification {
    let (inside, outside): (Vec<FiberPosition>, Vec<FiberPosition>) =
        positions.iter().partition(|fiber| radius.contains(fiber));
    Classification {
        radius,
        inside,
        outside,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::{generate, BundleGeometry};

    fn fiber(x: f64, y: f64) -> FiberPosition {
        FiberPosition { x, y, index: (0, 0) }
    }

    #[test]
    fn edge_is_inside() {
        let positions = [fiber(3., 4.), fiber(0., -5.), fiber(5., 0.1)];
        let classification = classify(&positions, ApertureRadius::new(5.).unwrap());
        assert_eq!(classification.inside.len(), 2);
        assert_eq!(classification.outside, vec![fiber(5., 0.1)]);
    }

    #[test]
    fn standard_resolution() {
        let geometry = BundleGeometry::new(0.24, 0.0, 8, 9).unwrap();
        let positions = generate(&geometry).unwrap();
        let classification = classify(&positions, ApertureRadius::new(0.34).unwrap());
        assert_eq!(classification.inside.len(), 7);
        assert_eq!(classification.outside.len(), 65);
        assert!((classification.fill_factor() - 7. / 72.).abs() < 1e-12);
    }

    #[test]
    fn order_is_preserved() {
        let geometry = BundleGeometry::new(0.24, 0.0, 8, 9).unwrap();
        let positions = generate(&geometry).unwrap();
        let classification = classify(&positions, ApertureRadius::new(0.5).unwrap());
        assert!(classification
            .inside
            .windows(2)
            .all(|w| w[0].index < w[1].index));
    }

    #[test]
    fn csv_records() {
        let positions = [fiber(3., 4.), fiber(6., 8.)];
        let classification = classify(&positions, ApertureRadius::new(5.).unwrap());
        let mut buffer = vec![];
        classification.to_csv(&mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], "row,column,x,y,radius,inside");
        assert_eq!(lines[1], "0,0,3.0,4.0,5.0,true");
        assert_eq!(lines[2], "0,0,6.0,8.0,10.0,false");
    }

    #[test]
    fn edge_tie_uses_squared_sum() {
        let positions = [fiber(0.1, 0.2), fiber(0.3, 0.7)];
        for p in &positions {
            let radius = ApertureRadius::new((p.x * p.x + p.y * p.y).sqrt()).unwrap();
            assert!(radius.contains(p));
        }
    }

    #[test]
    fn empty() {
        let classification = classify(&[], ApertureRadius::new(1.).unwrap());
        assert!(classification.is_empty());
        assert_eq!(classification.fill_factor(), 0.);
    }

    #[test]
    fn invalid_aperture() {
        assert_eq!(
            ApertureRadius::new(0.),
            Err(LatticeError::InvalidAperture(0.))
        );
        assert!(ApertureRadius::new(-1.).is_err());
        assert!(ApertureRadius::new(f64::INFINITY).is_err());
    }
}
