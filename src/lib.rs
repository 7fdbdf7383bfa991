//! TriSearch - goal-directed search over dense cost-matrix graphs
//!
//! Provides depth-first search, uniform-cost search and A* over a 1-indexed
//! (n+1)×(n+1) cost matrix. Each strategy returns a path from a single start
//! node to any node of a goal set; [`tri_traversal`] runs all three on the
//! same input.
//!
//! ```
//! use trisearch::tri_traversal;
//!
//! let cost = vec![
//!     vec![0, 0, 0, 0],
//!     vec![0, 0, 1, 5],
//!     vec![0, -1, 0, 1],
//!     vec![0, -1, -1, 0],
//! ];
//! let (dfs, ucs, astar) = tri_traversal(cost, None, 1, &[3]).unwrap();
//! assert_eq!(ucs, vec![1, 2, 3]);
//! assert_eq!(astar, vec![1, 2, 3]);
//! assert_eq!(dfs.last(), Some(&3));
//! ```

pub mod config;
pub mod core;
pub mod services;
pub mod utils;

pub use crate::core::{GoalSet, NodeId, Path, SearchError, SearchProblem, SearchResult};
pub use crate::services::algorithm::{
    tri_traversal, AStar, CostGraph, Dfs, SearchOutcome, SearchStrategy, TraversalResult,
    TriTraversal, Ucs,
};
