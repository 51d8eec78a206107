//! `cp-landmarks` — resolve operator-named landmarks to road-network nodes.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`geocoder`]  | `Geocoder` trait (name → optional coordinate)               |
//! | [`nominatim`] | `NominatimGeocoder`, `NominatimConfig` (feature `nominatim`)|
//! | [`row`]       | `LandmarkRecord`                                            |
//! | [`writer`]    | `LandmarkWriter` (CSV, flushed per row)                     |
//! | [`locator`]   | `LandmarkLocator`, `LocatorState`, `Step`, `RunSummary`     |
//! | [`error`]     | `LandmarkError`, `LandmarkResult<T>`                        |
//!
//! # Usage
//!
//! ```rust,ignore
//! use cp_landmarks::{LandmarkLocator, LandmarkWriter, NominatimGeocoder};
//!
//! let nodes = cp_nodes::load_nodes_csv(&paths.nodes)?;
//! let writer = LandmarkWriter::create(&paths.landmarks)?;
//! let mut locator = LandmarkLocator::new(&nodes, NominatimGeocoder::default(), writer);
//! locator.run(std::io::stdin().lock(), std::io::stdout())?;
//! ```
//!
//! # Feature flags
//!
//! | Flag        | Effect                                                  |
//! |-------------|---------------------------------------------------------|
//! | `nominatim` | Enables `NominatimGeocoder` (`ureq` + `serde_json`).    |

pub mod error;
pub mod geocoder;
pub mod locator;
pub mod row;
pub mod writer;

#[cfg(feature = "nominatim")]
pub mod nominatim;

#[cfg(test)]
mod tests;

pub use error::{LandmarkError, LandmarkResult};
pub use geocoder::Geocoder;
pub use locator::{Landmark, LandmarkLocator, LocatorState, RunSummary, Step, is_done_sentinel};
pub use row::LandmarkRecord;
pub use writer::LandmarkWriter;

#[cfg(feature = "nominatim")]
pub use nominatim::{NominatimConfig, NominatimGeocoder};
