use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NodesError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("node table is empty")]
    EmptyTable,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NodesResult<T> = Result<T, NodesError>;
