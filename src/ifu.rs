//! IFU bundle presets

use crate::lattice::{self, classify, ApertureRadius, BundleGeometry, Classification};
use strum_macros::{Display, EnumIter, EnumString};

/// IFU fiber bundles
#[derive(EnumIter, EnumString, Display, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Ifu {
    /// Standard resolution IFU
    #[strum(serialize = "sr", to_string = "standard")]
    StandardResolution,
    /// High resolution IFU
    #[strum(serialize = "hr", to_string = "high")]
    HighResolution,
    /// Exploratory bundle with gaps between the fibers
    #[strum(to_string = "exploratory")]
    Exploratory,
}
impl Ifu {
    pub fn geometry(&self) -> BundleGeometry {
        use Ifu::*;
        let (fiber_diameter, fiber_spacing, grid_width, grid_height) = match self {
            StandardResolution => (0.24, 0f64, 8, 9),
            HighResolution => (0.144, 0f64, 8, 9),
            Exploratory => (0.2, 0.02, 10, 11),
        };
        BundleGeometry {
            fiber_diameter,
            fiber_spacing,
            grid_width,
            grid_height,
        }
    }
    pub fn aperture(&self) -> ApertureRadius {
        use Ifu::*;
        match self {
            StandardResolution => ApertureRadius(0.34),
            HighResolution => ApertureRadius(0.30),
            Exploratory => ApertureRadius(0.5),
        }
    }
    /// Bundle fibers classified against the bundle aperture
    pub fn classify(&self) -> lattice::Result<Classification> {
        let positions = lattice::generate(&self.geometry())?;
        Ok(classify(&positions, self.aperture()))
    }
    pub fn title(&self) -> String {
        use Ifu::*;
        match self {
            StandardResolution => "Standard Resolution IFU".into(),
            HighResolution => "High Resolution IFU".into(),
            Exploratory => "Exploratory IFU".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn presets_are_valid() {
        for ifu in Ifu::iter() {
            let classification = ifu.classify().unwrap();
            assert_eq!(classification.len(), ifu.geometry().len());
            assert!(!classification.inside.is_empty(), "{ifu}");
        }
    }

    #[test]
    fn fiber_counts() {
        assert_eq!(Ifu::StandardResolution.classify().unwrap().inside.len(), 7);
        assert_eq!(Ifu::HighResolution.classify().unwrap().inside.len(), 19);
    }

    #[test]
    fn parse() {
        assert_eq!(Ifu::from_str("standard").unwrap(), Ifu::StandardResolution);
        assert_eq!(Ifu::from_str("hr").unwrap(), Ifu::HighResolution);
        assert_eq!(Ifu::Exploratory.to_string(), "exploratory");
        assert!(Ifu::from_str("medium").is_err());
    }
}
