//! CSV row types.
//!
//! # Edge list
//!
//! ```csv
//! from,to,x1,y1,x2,y2
//! 101,102,-88.0431,30.6941,-88.0412,30.6950
//! ```
//!
//! `x` is longitude and `y` is latitude.  Extra columns (`cost`,
//! `road_closed`, `traffic`, …) are ignored, so the traffic-annotated export
//! loads as well.  Coordinates stay as text: the extractor copies them to the
//! node table byte-for-byte.
//!
//! # Node table
//!
//! ```csv
//! node_id,lat,lon
//! 101,30.6941,-88.0431
//! ```

use serde::Deserialize;

/// One directed edge of the exported road network.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to:   String,
    pub x1:   String,
    pub y1:   String,
    pub x2:   String,
    pub y2:   String,
}

/// One end of an edge: node id with its coordinate text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint<'a> {
    pub node_id: &'a str,
    pub lon:     &'a str,
    pub lat:     &'a str,
}

impl EdgeRecord {
    /// `(from, x1, y1)` followed by `(to, x2, y2)`.
    pub fn endpoints(&self) -> [Endpoint<'_>; 2] {
        [
            Endpoint { node_id: &self.from, lon: &self.x1, lat: &self.y1 },
            Endpoint { node_id: &self.to,   lon: &self.x2, lat: &self.y2 },
        ]
    }
}

/// A parsed row of the node table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NodeRecord {
    pub node_id: String,
    pub lat:     f64,
    pub lon:     f64,
}
