//! Data-directory configuration.
//!
//! Both tools work on a flat data directory:
//!
//! ```text
//! data/
//!   city_edges.csv       from,to,x1,y1,x2,y2      (input)
//!   node_locations.csv   node_id,lat,lon          (extract_nodes → add_landmarks)
//!   landmarks.csv        name,node_id,lat,lon     (add_landmarks output)
//! ```

use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR:   &str = "data";
pub const EDGES_FILE:         &str = "city_edges.csv";
pub const NODES_FILE:         &str = "node_locations.csv";
pub const LANDMARKS_FILE:     &str = "landmarks.csv";

/// Locations of the three tables shared by the data tools.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataPaths {
    /// Edge list read by the node extractor.
    pub edges: PathBuf,
    /// Node table written by the extractor and read by the landmark locator.
    pub nodes: PathBuf,
    /// Landmark table written by the landmark locator.
    pub landmarks: PathBuf,
}

impl DataPaths {
    /// All three tables under `dir`, with their standard file names.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            edges:     dir.join(EDGES_FILE),
            nodes:     dir.join(NODES_FILE),
            landmarks: dir.join(LANDMARKS_FILE),
        }
    }
}

impl Default for DataPaths {
    /// Relative to the working directory: `data/<file>.csv`.
    fn default() -> Self {
        Self::in_dir(DEFAULT_DATA_DIR)
    }
}
