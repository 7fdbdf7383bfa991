//! 算法模块
//!
//! 基于代价矩阵的目标导向搜索：DFS、UCS 与 A*

mod best_first;

pub mod astar;
pub mod dfs;
pub mod explored;
pub mod frontier;
pub mod graph;
pub mod traits;
pub mod traversal;
pub mod types;
pub mod ucs;

// 重新导出常用算法结构体
pub use astar::AStar;
pub use dfs::Dfs;
pub use explored::ExploredSet;
pub use frontier::{Frontier, FrontierUpdate, SearchNode};
pub use graph::{CostGraph, NO_EDGE_SENTINEL};
pub use traits::SearchStrategy;
pub use traversal::{tri_traversal, TraversalResult, TriTraversal};
pub use types::{SearchOutcome, SearchStats, SearchStatus};
pub use ucs::Ucs;
