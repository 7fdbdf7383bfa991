//! 一致代价搜索（UCS）模块
//!
//! 按累计代价出队，代价相同时选择字典序更小的路径。
//! 边权均为正，因此首个出队的目标节点即为最优解。

use crate::core::types::{GoalSet, NodeId, StrategyKind};

use super::best_first::best_first_search;
use super::graph::CostGraph;
use super::traits::SearchStrategy;
use super::types::SearchOutcome;

/// UCS算法结构体
#[derive(Debug, Clone, Copy, Default)]
pub struct Ucs;

impl SearchStrategy for Ucs {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Ucs
    }

    fn search_unchecked(&self, graph: &CostGraph, start: NodeId, goals: &GoalSet) -> SearchOutcome {
        best_first_search(StrategyKind::Ucs, graph, start, goals, |_| 0)
    }
}
