use ifu_bundle::{
    plot::{plot_lattice, Plotters},
    ApertureRadius, BundleGeometry, Ifu,
};
use std::{fs::File, path::PathBuf};
use strum::IntoEnumIterator;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "ifu-bundle", about = "IFU hexagonal fiber bundle")]
struct Opt {
    /// IFU preset: standard, high or exploratory
    #[structopt(short, long, default_value = "standard")]
    preset: Ifu,
    /// Fiber diameter
    #[structopt(short, long)]
    diameter: Option<f64>,
    /// Gap between fibers
    #[structopt(short, long)]
    spacing: Option<f64>,
    /// Number of rows
    #[structopt(long)]
    width: Option<usize>,
    /// Number of fibers per row
    #[structopt(long)]
    height: Option<usize>,
    /// Aperture radius
    #[structopt(short, long)]
    radius: Option<f64>,
    /// Figure file name (png or svg)
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,
    /// Figure height in pixels
    #[structopt(long, default_value = "800")]
    size: u32,
    /// Writes the fiber positions to a CSV file
    #[structopt(long, parse(from_os_str))]
    csv: Option<PathBuf>,
    /// List the IFU presets
    #[structopt(short, long)]
    list: bool,
}
impl Opt {
    /// Checks if any of the preset parameters is overridden
    fn is_custom(&self) -> bool {
        self.diameter.is_some()
            || self.spacing.is_some()
            || self.width.is_some()
            || self.height.is_some()
            || self.radius.is_some()
    }
    fn title(&self) -> String {
        if self.is_custom() {
            "Custom IFU".into()
        } else {
            self.preset.title()
        }
    }
    fn output(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            if self.is_custom() {
                PathBuf::from("ifu_custom.png")
            } else {
                PathBuf::from(format!("ifu_{}.png", self.preset))
            }
        })
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    if opt.list {
        for ifu in Ifu::iter() {
            println!("{:<12}: {} within R={}", ifu, ifu.geometry(), ifu.aperture());
        }
        return Ok(());
    }

    let preset = opt.preset.geometry();
    let geometry = BundleGeometry::new(
        opt.diameter.unwrap_or(preset.fiber_diameter),
        opt.spacing.unwrap_or(preset.fiber_spacing),
        opt.width.unwrap_or(preset.grid_width),
        opt.height.unwrap_or(preset.grid_height),
    )?;
    let radius = match opt.radius {
        Some(radius) => ApertureRadius::new(radius)?,
        None => opt.preset.aperture(),
    };

    let title = opt.title();
    let mut sink = Plotters::new(opt.output()).size(opt.size);
    let classification = plot_lattice(&title, &geometry, radius, &mut sink)?;
    if let Some(path) = &opt.csv {
        classification.to_csv(File::create(path)?)?;
        log::info!("fibers written to {:?}", path);
    }
    println!("SUMMARY: {}", title);
    println!(" - bundle: {}", geometry);
    println!("{}", classification);
    println!(" - figure: {:?}", sink.path());

    Ok(())
}
