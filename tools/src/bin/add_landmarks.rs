//! Interactively snap named landmarks to their nearest road node.
//!
//! Reads  `data/node_locations.csv`  (`node_id,lat,lon`)
//! Writes `data/landmarks.csv`       (`name,node_id,lat,lon`)
//!
//! Each name typed at the prompt is geocoded through OpenStreetMap
//! Nominatim.  Type `done` to finish.
//!
//! Run with: `cargo run -p cp-tools --bin add_landmarks`

use std::io;

use anyhow::{Context, Result};

use cp_core::DataPaths;
use cp_landmarks::{LandmarkLocator, LandmarkWriter, NominatimGeocoder};
use cp_nodes::load_nodes_csv;

fn main() -> Result<()> {
    env_logger::init();

    let paths = DataPaths::default();
    let nodes = load_nodes_csv(&paths.nodes)
        .with_context(|| format!("loading node table {}", paths.nodes.display()))?;
    let writer = LandmarkWriter::create(&paths.landmarks)?;

    let mut locator = LandmarkLocator::new(&nodes, NominatimGeocoder::default(), writer);
    let summary = locator.run(io::stdin().lock(), io::stdout())?;

    println!(
        "Wrote {} ({} landmarks, {} not found)",
        paths.landmarks.display(),
        summary.located,
        summary.not_found
    );
    Ok(())
}
