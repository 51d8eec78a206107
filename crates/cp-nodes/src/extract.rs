//! Node extraction: edge list → unique node coordinate table.
//!
//! Endpoints are visited in file order, `from` before `to`.  The first row
//! that mentions a node id fixes its coordinates; later occurrences are
//! skipped without comparing coordinates.  Output order is therefore the
//! order of first occurrence, and re-running on the same input produces a
//! byte-identical file.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use log::{debug, info};

use crate::record::EdgeRecord;
use crate::{NodesError, NodesResult};

#[cfg(feature = "fx-hash")]
type SeenSet = rustc_hash::FxHashSet<String>;
#[cfg(not(feature = "fx-hash"))]
type SeenSet = std::collections::HashSet<String>;

/// Header row of the node table.
pub const NODE_TABLE_HEADER: [&str; 3] = ["node_id", "lat", "lon"];

/// Log a progress line every this many edges.
const PROGRESS_INTERVAL: u64 = 10_000;

/// Counters reported after an extraction run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    pub edges_read:    u64,
    pub nodes_written: u64,
}

/// Read the edge list at `input` and write the node table to `output`.
///
/// `input` is opened before `output` is created, so a missing edge list
/// leaves no empty node table behind.  `output` is truncated.
pub fn extract_nodes_csv(input: &Path, output: &Path) -> NodesResult<ExtractStats> {
    let reader = File::open(input).map_err(|source| NodesError::Open {
        path: input.to_path_buf(),
        source,
    })?;
    let writer = File::create(output).map_err(|source| NodesError::Open {
        path: output.to_path_buf(),
        source,
    })?;

    let stats = extract_nodes_reader(reader, writer)?;
    info!(
        "extracted {} nodes from {} edges: {} -> {}",
        stats.nodes_written,
        stats.edges_read,
        input.display(),
        output.display()
    );
    Ok(stats)
}

/// Like [`extract_nodes_csv`] but over arbitrary `Read` / `Write` streams.
///
/// The header row is written before the first edge is read.  A row missing
/// a required column aborts with [`NodesError::Csv`]; rows already written
/// are flushed first.
pub fn extract_nodes_reader<R: Read, W: Write>(reader: R, writer: W) -> NodesResult<ExtractStats> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(NODE_TABLE_HEADER)?;

    let mut seen  = SeenSet::default();
    let mut stats = ExtractStats::default();

    for result in csv_reader.deserialize::<EdgeRecord>() {
        let edge = match result {
            Ok(edge) => edge,
            Err(e) => {
                csv_writer.flush()?;
                return Err(NodesError::Csv(e));
            }
        };

        stats.edges_read += 1;
        if stats.edges_read % PROGRESS_INTERVAL == 0 {
            info!("read {} edges ({} unique nodes so far)", stats.edges_read, seen.len());
        }

        for ep in edge.endpoints() {
            if seen.contains(ep.node_id) {
                continue;
            }
            seen.insert(ep.node_id.to_owned());
            // Column order is lat, lon; the edge list stores lon (x) first.
            csv_writer.write_record([ep.node_id, ep.lat, ep.lon])?;
            stats.nodes_written += 1;
        }
    }

    csv_writer.flush()?;
    debug!("node extraction done: {stats:?}");
    Ok(stats)
}
