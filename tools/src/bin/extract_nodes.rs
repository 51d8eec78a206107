//! Extract the unique nodes of the city edge list into the node table.
//!
//! Reads  `data/city_edges.csv`      (`from,to,x1,y1,x2,y2`)
//! Writes `data/node_locations.csv`  (`node_id,lat,lon`)
//!
//! Run with: `cargo run -p cp-tools --bin extract_nodes`
//! Set `RUST_LOG=info` for progress lines on large edge lists.

use anyhow::{Context, Result};

use cp_core::DataPaths;
use cp_nodes::extract_nodes_csv;

fn main() -> Result<()> {
    env_logger::init();

    let paths = DataPaths::default();
    let stats = extract_nodes_csv(&paths.edges, &paths.nodes)
        .with_context(|| format!("extracting nodes from {}", paths.edges.display()))?;

    println!(
        "Wrote {} ({} nodes from {} edges)",
        paths.nodes.display(),
        stats.nodes_written,
        stats.edges_read
    );
    Ok(())
}
