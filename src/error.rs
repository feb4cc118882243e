use std::path::PathBuf;

use thiserror::Error;

use crate::interpolation::CurveError;

#[derive(Debug, Error)]
pub enum ParallaxError {
    #[error("Invalid animation curve: {0}")]
    InvalidCurve(#[from] CurveError),

    #[error("Failed to read header image {path:?}: {source}")]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid header height {0}: expected a finite number of units, 0 or more")]
    InvalidHeight(f64),

    #[error("Header image {0:?} is empty")]
    EmptyImage(PathBuf),

    #[error("Failed to read body text {path:?}: {source}")]
    BodyRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
