//! Figure description handed to a rendering sink

use crate::{
    lattice::{BundleGeometry, Classification, FiberPosition},
    series::Series,
};
use itertools::{Itertools, MinMaxResult};
use std::ops::Range;

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("nothing to draw")]
    EmptyFigure,
    #[error("failed to draw the figure: {0}")]
    Backend(String),
    #[error("failed to create the figure")]
    Io(#[from] std::io::Error),
}

/// How the points of a layer are drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Style {
    /// Disks of `size` diameter in data units or of a default pixel size
    Marker { size: Option<f64>, filled: bool },
    Line,
}

/// A set of points sharing the same label and style
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub label: String,
    pub style: Style,
    /// Index in the color palette
    pub color: usize,
    pub points: Vec<(f64, f64)>,
}
impl Layer {
    /// Half extent of a point in data units
    fn extent(&self) -> f64 {
        match self.style {
            Style::Marker {
                size: Some(size), ..
            } => 0.5 * size,
            _ => 0f64,
        }
    }
}

/// Circle overlaid on the figure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleOverlay {
    pub center: (f64, f64),
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Figure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub layers: Vec<Layer>,
    pub circle: Option<CircleOverlay>,
    pub equal_aspect: bool,
    pub grid: bool,
}
impl Figure {
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
    pub fn title<S: Into<String>>(self, title: S) -> Self {
        Self {
            title: title.into(),
            ..self
        }
    }
    pub fn x_label<S: Into<String>>(self, x_label: S) -> Self {
        Self {
            x_label: x_label.into(),
            ..self
        }
    }
    pub fn y_label<S: Into<String>>(self, y_label: S) -> Self {
        Self {
            y_label: y_label.into(),
            ..self
        }
    }
    pub fn layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }
    pub fn circle(self, center: (f64, f64), radius: f64) -> Self {
        Self {
            circle: Some(CircleOverlay { center, radius }),
            ..self
        }
    }
    pub fn equal_aspect(self) -> Self {
        Self {
            equal_aspect: true,
            ..self
        }
    }
    pub fn grid(self) -> Self {
        Self { grid: true, ..self }
    }
    /// Fiber bundle figure
    ///
    /// Fibers inside the aperture are drawn as filled disks and fibers outside
    /// as open disks, both with the fiber diameter, and the aperture as a circle
    pub fn lattice(classification: &Classification, geometry: &BundleGeometry) -> Self {
        let size = Some(geometry.fiber_diameter);
        let layer = |label: &str, filled: bool, color: usize, fibers: &[FiberPosition]| Layer {
            label: format!("{} ({})", label, fibers.len()),
            style: Style::Marker { size, filled },
            color,
            points: fibers.iter().map(FiberPosition::xy).collect(),
        };
        Figure::new(format!("IFU: {}", geometry))
            .x_label("X")
            .y_label("Y")
            .layer(layer("inside", true, 0, &classification.inside))
            .layer(layer("outside", false, 1, &classification.outside))
            .circle((0f64, 0f64), classification.radius().value())
            .equal_aspect()
            .grid()
    }
    /// Line plot with one legend entry per series
    pub fn series(series: &[Series]) -> Self {
        series
            .iter()
            .enumerate()
            .fold(Figure::new("").grid(), |figure, (k, series)| {
                figure.layer(Layer {
                    label: series.label.clone(),
                    style: Style::Line,
                    color: k,
                    points: series.points.clone(),
                })
            })
    }
    /// Ranges covering all the points, the markers and the circle overlay
    ///
    /// Both ranges are given the same span if the aspect ratio is equal.
    pub fn bounds(&self) -> Option<(Range<f64>, Range<f64>)> {
        let (mut xs, mut ys): (Vec<f64>, Vec<f64>) = (vec![], vec![]);
        for layer in &self.layers {
            let e = layer.extent();
            for &(x, y) in &layer.points {
                xs.extend([x - e, x + e]);
                ys.extend([y - e, y + e]);
            }
        }
        if let Some(CircleOverlay {
            center: (x, y),
            radius,
        }) = self.circle
        {
            xs.extend([x - radius, x + radius]);
            ys.extend([y - radius, y + radius]);
        }
        let range = |values: Vec<f64>| match values.into_iter().minmax() {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(value) => Some(value..value),
            MinMaxResult::MinMax(min, max) => Some(min..max),
        };
        let (x_range, y_range) = (range(xs)?, range(ys)?);
        if self.equal_aspect {
            let span = (x_range.end - x_range.start).max(y_range.end - y_range.start);
            let centered = |r: Range<f64>| {
                let c = 0.5 * (r.start + r.end);
                c - 0.5 * span..c + 0.5 * span
            };
            Some((centered(x_range), centered(y_range)))
        } else {
            Some((x_range, y_range))
        }
    }
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(|layer| layer.points.is_empty()) && self.circle.is_none()
    }
}

/// Rendering sink
pub trait Render {
    fn render(&mut self, figure: &Figure) -> Result<(), RenderError>;
}
