//! `cp-nodes` — node extraction from an edge list, node table loading, and
//! nearest-node search.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`record`]  | `EdgeRecord`, `Endpoint`, `NodeRecord` (CSV rows)          |
//! | [`extract`] | `extract_nodes_csv`, `extract_nodes_reader`, `ExtractStats`|
//! | [`table`]   | `NodeTable`, `Node`, `load_nodes_csv`, `load_nodes_reader` |
//! | [`error`]   | `NodesError`, `NodesResult<T>`                             |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | FxHash instead of SipHash for the extraction seen-set.   |

pub mod error;
pub mod extract;
pub mod record;
pub mod table;


pub use error::{NodesError, NodesResult};
pub use extract::{ExtractStats, extract_nodes_csv, extract_nodes_reader};
pub use record::{EdgeRecord, Endpoint, NodeRecord};
pub use table::{Node, NodeTable, load_nodes_csv, load_nodes_reader};
