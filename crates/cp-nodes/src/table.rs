//! In-memory node table and nearest-node search.
//!
//! The table is a plain `Vec<Node>` in file order.  Nearest-node queries are
//! a linear scan with ellipsoidal distance: node tables for a single city are
//! small, and a scan gives a deterministic tie-break (first minimum in table
//! order) that a spatial index would not.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::info;

use cp_core::{GeoPoint, NodeId};

use crate::record::NodeRecord;
use crate::{NodesError, NodesResult};

/// A road-network node with its position.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id:  NodeId,
    pub pos: GeoPoint,
}

impl From<NodeRecord> for Node {
    fn from(r: NodeRecord) -> Self {
        Self { id: NodeId(r.node_id), pos: GeoPoint::new(r.lat, r.lon) }
    }
}

/// Node table loaded from `node_locations.csv`.
///
/// Never empty when produced by [`load_nodes_csv`] / [`load_nodes_reader`].
#[derive(Debug, Clone, Default)]
pub struct NodeTable {
    nodes: Vec<Node>,
}

impl NodeTable {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// The node closest to `pos` by geodesic distance, with that distance in
    /// metres.
    ///
    /// Ties go to the earliest node in table order: a candidate replaces the
    /// current best only when strictly closer.  Returns `None` only for an
    /// empty table.
    pub fn nearest(&self, pos: GeoPoint) -> Option<(&Node, f64)> {
        let mut best: Option<(&Node, f64)> = None;
        for node in &self.nodes {
            let d = node.pos.distance_m(pos);
            let closer = match best {
                None              => true,
                Some((_, best_d)) => d < best_d,
            };
            if closer {
                best = Some((node, d));
            }
        }
        best
    }
}

impl<'a> IntoIterator for &'a NodeTable {
    type Item     = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Load the node table from a CSV file.
///
/// Fails if the file is missing, any row does not parse as
/// `node_id,lat,lon`, or the table has no rows.
pub fn load_nodes_csv(path: &Path) -> NodesResult<NodeTable> {
    let file = File::open(path).map_err(|source| NodesError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let table = load_nodes_reader(file)?;
    info!("loaded {} nodes from {}", table.len(), path.display());
    Ok(table)
}

/// Like [`load_nodes_csv`] but accepts any `Read` source.
pub fn load_nodes_reader<R: Read>(reader: R) -> NodesResult<NodeTable> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let nodes = csv_reader
        .deserialize::<NodeRecord>()
        .map(|row| row.map(Node::from))
        .collect::<Result<Vec<_>, _>>()?;

    if nodes.is_empty() {
        return Err(NodesError::EmptyTable);
    }
    Ok(NodeTable::new(nodes))
}
