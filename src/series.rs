//! Two-column data series
//!
//! Series are read from text files with one `x<TAB>y` pair per line.

use std::{fs::File, io::Read, path::Path};

#[derive(thiserror::Error, Debug)]
pub enum SeriesError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}
type Result<T> = std::result::Result<T, SeriesError>;

/// Labeled (x,y) series
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}
impl Series {
    /// Reads tab separated (x,y) pairs
    pub fn from_reader<S: Into<String>, R: Read>(label: S, reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let points = rdr
            .deserialize::<(f64, f64)>()
            .collect::<std::result::Result<Vec<_>, csv::Error>>()?;
        Ok(Self {
            label: label.into(),
            points,
        })
    }
    /// Loads a series from a file, the series label is the file name
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Loading {:?}...", path);
        let label = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::from_reader(label, File::open(path)?)
    }
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
