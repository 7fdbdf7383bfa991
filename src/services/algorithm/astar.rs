//! A*算法模块
//!
//! 控制流程与 UCS 相同，出队优先级为 f = g + h。
//! decrease-key 比较的是累计代价 g 而非 f，代价相同时同样比较路径字典序。
//!
//! 启发式必须可采纳（从不高估剩余代价）才能保证最优，这一点由调用方保证，
//! 算法本身不做检测：不可采纳的启发式仍会正常终止，但返回的路径可能不是最优。

use crate::core::types::{GoalSet, NodeId, StrategyKind};

use super::best_first::best_first_search;
use super::graph::CostGraph;
use super::traits::SearchStrategy;
use super::types::SearchOutcome;

/// A*算法结构体
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar;

impl SearchStrategy for AStar {
    fn kind(&self) -> StrategyKind {
        StrategyKind::AStar
    }

    fn search_unchecked(&self, graph: &CostGraph, start: NodeId, goals: &GoalSet) -> SearchOutcome {
        best_first_search(StrategyKind::AStar, graph, start, goals, |node| {
            graph.heuristic(node)
        })
    }
}
