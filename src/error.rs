use crate::{figure::RenderError, lattice::LatticeError, series::SeriesError};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Error in the `lattice` module")]
    Lattice(#[from] LatticeError),
    #[error(transparent)]
    Series(#[from] SeriesError),
    #[error("Error in the `figure` module")]
    Render(#[from] RenderError),
}
pub type Result<T> = std::result::Result<T, Error>;
