//! `cp-core` — foundational types for the city-pathfinder data tools.
//!
//! This crate is a dependency of every other `cp-*` crate.  It has no
//! `cp-*` dependencies and few external ones (`geo` and `thiserror`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`ids`]      | `NodeId` (opaque road-network vertex identifier)      |
//! | [`geo`]      | `GeoPoint`, WGS-84 geodesic distance                  |
//! | [`config`]   | `DataPaths` (edge, node, and landmark table paths)    |
//! | [`error`]    | `CoreError`, `CoreResult`                             |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::DataPaths;
pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::NodeId;
