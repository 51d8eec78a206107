//! Error types for cp-landmarks.

use std::path::PathBuf;

use thiserror::Error;

use cp_core::CoreError;
use cp_nodes::NodesError;

/// Errors that end a landmark session.
///
/// A geocoder finding no match is not an error; see
/// [`Step::NotFound`](crate::Step::NotFound).
#[derive(Debug, Error)]
pub enum LandmarkError {
    #[error("node table: {0}")]
    Nodes(#[from] NodesError),

    #[error("geocoding {query:?} failed: {reason}")]
    Geocode { query: String, reason: String },

    #[error("geocoder returned a bad coordinate: {0}")]
    Coordinate(#[from] CoreError),

    #[error("operator input closed before \"done\"")]
    InputClosed,

    #[error("cannot create {}: {source}", path.display())]
    Create {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, LandmarkError>`.
pub type LandmarkResult<T> = Result<T, LandmarkError>;
