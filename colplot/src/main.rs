//! Column plot
//!
//! Overlays the (x,y) series of two-column tab-delimited text files on a single plot

use ifu_bundle::{
    plot::{plot_series, Plotters},
    Figure,
};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "colplot",
    about = "Plots the columns of tab-delimited text files"
)]
struct Opt {
    /// Two-column tab-delimited data files
    #[structopt(required = true, parse(from_os_str))]
    files: Vec<PathBuf>,
    /// Figure file name (png or svg)
    #[structopt(short, long, default_value = "colplot.png", parse(from_os_str))]
    output: PathBuf,
    /// Figure height in pixels
    #[structopt(long, default_value = "600")]
    size: u32,
    /// Figure title
    #[structopt(short, long, default_value = "")]
    title: String,
    /// X axis label
    #[structopt(short, long, default_value = "")]
    xlabel: String,
    /// Y axis label
    #[structopt(short, long, default_value = "")]
    ylabel: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    let figure = Figure::new(opt.title)
        .x_label(opt.xlabel)
        .y_label(opt.ylabel);
    let mut sink = Plotters::new(&opt.output).size(opt.size);
    let series = plot_series(&opt.files, figure, &mut sink)?;
    for s in &series {
        log::info!("{}: {} points", s.label, s.len());
    }
    println!("figure: {:?}", sink.path());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use structopt::clap::ErrorKind;

    #[test]
    fn no_files() {
        let err = Opt::from_iter_safe(["colplot"]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn files() {
        let opt = Opt::from_iter_safe(["colplot", "a.txt", "b.txt", "-o", "ab.svg"]).unwrap();
        assert_eq!(opt.files, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        assert_eq!(opt.output, PathBuf::from("ab.svg"));
        assert_eq!(opt.size, 600);
    }
}
