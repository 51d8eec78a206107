//! Plain data row written to the landmark table.

use serde::{Deserialize, Serialize};

/// One landmark snapped to a road node.
///
/// `lat`/`lon` are the **node's** coordinates, not the geocoded position of
/// the landmark itself, so downstream routing can use the row directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandmarkRecord {
    pub name:    String,
    pub node_id: String,
    pub lat:     f64,
    pub lon:     f64,
}
