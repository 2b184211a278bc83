//! Figure rendering with [plotters](https://docs.rs/plotters)

use crate::{
    figure::{Figure, Layer, Render, RenderError, Style},
    lattice::{self, ApertureRadius, BundleGeometry, Classification},
    series::Series,
};
use plotters::{coord::Shift, prelude::*};
use std::{
    ops::Range,
    path::{Path, PathBuf},
};

const MARGIN: u32 = 10;
const LEFT_LABEL_AREA: u32 = 60;
const BOTTOM_LABEL_AREA: u32 = 40;

fn backend<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Backend(e.to_string())
}

fn palette(index: usize) -> RGBColor {
    let color = colorous::TABLEAU10[index % colorous::TABLEAU10.len()];
    RGBColor(color.r, color.g, color.b)
}

/// Widens a range by 5% on each side, an empty range gets a unit span
fn pad(range: Range<f64>) -> Range<f64> {
    let span = range.end - range.start;
    let delta = if span > 0f64 { 0.05 * span } else { 0.5 };
    range.start - delta..range.end + delta
}

/// PNG or SVG figure file
///
/// The SVG backend is used if the file extension is `svg`, the bitmap backend otherwise.
pub struct Plotters {
    path: PathBuf,
    size: u32,
}
impl Plotters {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            size: 800,
        }
    }
    /// Figure height in pixels
    pub fn size(self, size: u32) -> Self {
        Self { size, ..self }
    }
    pub fn path(&self) -> &Path {
        &self.path
    }
    fn dimensions(&self, figure: &Figure) -> (u32, u32) {
        if figure.equal_aspect {
            (self.size, self.size)
        } else {
            (self.size * 3 / 2, self.size)
        }
    }
}
impl Render for Plotters {
    fn render(&mut self, figure: &Figure) -> Result<(), RenderError> {
        let (x_range, y_range) = figure.bounds().ok_or(RenderError::EmptyFigure)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let dims = self.dimensions(figure);
        let ranges = (pad(x_range), pad(y_range));
        match self.path.extension().and_then(|ext| ext.to_str()) {
            Some("svg") => draw(
                SVGBackend::new(&self.path, dims).into_drawing_area(),
                figure,
                ranges,
            ),
            _ => draw(
                BitMapBackend::new(&self.path, dims).into_drawing_area(),
                figure,
                ranges,
            ),
        }?;
        log::info!("figure written to {:?}", self.path);
        Ok(())
    }
}

fn draw<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    figure: &Figure,
    (mut x_range, mut y_range): (Range<f64>, Range<f64>),
) -> Result<(), RenderError> {
    root.fill(&WHITE).map_err(backend)?;
    let area = if figure.title.is_empty() {
        root.clone()
    } else {
        root.titled(&figure.title, ("sans-serif", 20))
            .map_err(backend)?
    };

    let (width, height) = area.dim_in_pixel();
    let plot_width = width.saturating_sub(2 * MARGIN + LEFT_LABEL_AREA).max(1) as f64;
    let plot_height = height.saturating_sub(2 * MARGIN + BOTTOM_LABEL_AREA).max(1) as f64;
    if figure.equal_aspect {
        // same number of pixels per data unit along both axis
        let scale = ((x_range.end - x_range.start) / plot_width)
            .max((y_range.end - y_range.start) / plot_height);
        let rescale = |r: Range<f64>, pixels: f64| {
            let c = 0.5 * (r.start + r.end);
            c - 0.5 * scale * pixels..c + 0.5 * scale * pixels
        };
        x_range = rescale(x_range, plot_width);
        y_range = rescale(y_range, plot_height);
    }
    let pixels_per_unit = plot_width / (x_range.end - x_range.start);

    let mut chart = ChartBuilder::on(&area)
        .set_label_area_size(LabelAreaPosition::Left, LEFT_LABEL_AREA)
        .set_label_area_size(LabelAreaPosition::Bottom, BOTTOM_LABEL_AREA)
        .margin(MARGIN)
        .build_cartesian_2d(x_range, y_range)
        .map_err(backend)?;
    {
        let mut mesh = chart.configure_mesh();
        mesh.x_desc(figure.x_label.as_str())
            .y_desc(figure.y_label.as_str());
        if !figure.grid {
            mesh.disable_mesh();
        }
        mesh.draw().map_err(backend)?;
    }

    for Layer {
        label,
        style,
        color,
        points,
    } in &figure.layers
    {
        let rgb = palette(*color);
        let anno = match *style {
            Style::Marker { size, filled } => {
                let radius = size
                    .map(|size| (0.5 * size * pixels_per_unit).round().max(1f64) as i32)
                    .unwrap_or(4);
                let marker_style = if filled {
                    rgb.filled()
                } else {
                    rgb.stroke_width(2)
                };
                chart
                    .draw_series(
                        points
                            .iter()
                            .map(|&(x, y)| Circle::new((x, y), radius, marker_style)),
                    )
                    .map_err(backend)?
                    .legend(move |(x, y)| Circle::new((x, y), 5, marker_style))
            }
            Style::Line => chart
                .draw_series(LineSeries::new(points.iter().cloned(), &rgb))
                .map_err(backend)?
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], rgb)),
        };
        if !label.is_empty() {
            anno.label(label.as_str());
        }
    }

    if let Some(circle) = figure.circle {
        let (cx, cy) = circle.center;
        chart
            .draw_series(LineSeries::new(
                (0..=360).map(|k| {
                    let (s, c) = (k as f64).to_radians().sin_cos();
                    (cx + circle.radius * c, cy + circle.radius * s)
                }),
                &BLACK,
            ))
            .map_err(backend)?
            .label(format!("R = {:.3}", circle.radius))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK));
    }

    if figure.circle.is_some() || figure.layers.iter().any(|layer| !layer.label.is_empty()) {
        chart
            .configure_series_labels()
            .border_style(BLACK)
            .background_style(WHITE.mix(0.8))
            .position(SeriesLabelPosition::UpperRight)
            .draw()
            .map_err(backend)?;
    }
    root.present().map_err(backend)?;
    Ok(())
}

/// Generates, classifies and plots the fiber bundle
pub fn plot_lattice<R: Render>(
    title: &str,
    geometry: &BundleGeometry,
    radius: ApertureRadius,
    sink: &mut R,
) -> crate::Result<Classification> {
    let positions = lattice::generate(geometry)?;
    let classification = lattice::classify(&positions, radius);
    sink.render(&Figure::lattice(&classification, geometry).title(title))?;
    Ok(classification)
}

/// Loads and plots the data series of a list of files
///
/// The title and the axis labels are taken from `figure`
pub fn plot_series<P: AsRef<Path>, R: Render>(
    files: &[P],
    figure: Figure,
    sink: &mut R,
) -> crate::Result<Vec<Series>> {
    let series = files
        .iter()
        .map(Series::load)
        .collect::<Result<Vec<_>, _>>()?;
    let Figure {
        title,
        x_label,
        y_label,
        ..
    } = figure;
    let figure = Figure::series(&series)
        .title(title)
        .x_label(x_label)
        .y_label(y_label);
    sink.render(&figure)?;
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ifu;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("ifu-bundle-{}-{}", std::process::id(), name))
    }

    #[test]
    fn lattice_svg() {
        let mut sink = Plotters::new(temp_path("lattice.svg")).size(400);
        let ifu = Ifu::HighResolution;
        let classification =
            plot_lattice(&ifu.title(), &ifu.geometry(), ifu.aperture(), &mut sink).unwrap();
        assert_eq!(classification.inside.len(), 19);
        let svg = std::fs::read_to_string(sink.path()).unwrap();
        std::fs::remove_file(sink.path()).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains(r#"width="400""#));
        assert!(svg.contains("<circle"));
        assert!(svg.contains("High Resolution IFU"));
    }

    #[test]
    fn series_svg() {
        let data = temp_path("data.txt");
        std::fs::write(&data, "0\t0\n1\t1\n2\t4\n").unwrap();
        let mut sink = Plotters::new(temp_path("series.svg"));
        let series = plot_series(&[&data], Figure::new("squares"), &mut sink).unwrap();
        std::fs::remove_file(&data).unwrap();
        std::fs::remove_file(sink.path()).unwrap();
        assert_eq!(series[0].len(), 3);
    }

    #[test]
    fn malformed_series() {
        let bytes = "0\t1\n1\tabc\n";
        let data = temp_path("malformed.txt");
        std::fs::write(&data, bytes).unwrap();
        let mut sink = Plotters::new(temp_path("malformed.svg"));
        let err = plot_series(&[&data], Figure::new(""), &mut sink).unwrap_err();
        std::fs::remove_file(&data).unwrap();
        let csv_message = Series::from_reader("malformed.txt", bytes.as_bytes())
            .unwrap_err()
            .to_string();
        assert_eq!(err.to_string(), csv_message);
        assert!(!sink.path().exists());
    }

    #[test]
    fn empty_figure() {
        let mut sink = Plotters::new(temp_path("empty.svg"));
        assert!(matches!(
            sink.render(&Figure::new("empty")),
            Err(RenderError::EmptyFigure)
        ));
    }
}
