//! Crate to answer single pair shortest path queries on directed graphs with
//! Dijkstra's algorithm.
//!
//! # Basic usage
//! ```
//! use dijkstra_core::prelude::*;
//!
//! // Nodes are stored in the given order, position 0 holds id 1
//! let mut g = Graph::from_ids([1, 2, 3, 4, 5]);
//! g.attach_edges([(1, 2, 2), (1, 3, 4), (2, 3, 1), (2, 4, 7), (3, 5, 3), (4, 5, 1)])
//!     .expect("Edge references unknown node");
//!
//! let sp = find_shortest_path(&g, node_index(0), node_index(4)).unwrap();
//!
//! assert_eq!(sp.ids(&g), vec![1, 2, 3, 5]);
//! assert_eq!(sp.weight, Some(6));
//!```
pub mod constants;
pub mod error;
pub mod graph;
pub mod input;
pub mod prelude;
pub mod priority_queue;
pub mod search;
pub mod statistics;
pub mod util;
