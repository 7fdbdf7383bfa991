//! 最佳优先搜索骨架
//!
//! UCS 与 A* 共享同一控制流程，区别只在优先级中是否加入启发式估计

use crate::core::types::{Cost, GoalSet, NodeId, StrategyKind};

use super::explored::ExploredSet;
use super::frontier::{Frontier, FrontierUpdate, SearchNode};
use super::graph::CostGraph;
use super::types::{SearchOutcome, SearchStats};

/// 执行最佳优先搜索
///
/// `estimate` 返回节点的启发式估计，UCS 传入恒为0的函数。
/// 目标测试发生在节点出队之后、加入探索集合之前。
pub(crate) fn best_first_search<H>(
    strategy: StrategyKind,
    graph: &CostGraph,
    start: NodeId,
    goals: &GoalSet,
    estimate: H,
) -> SearchOutcome
where
    H: Fn(NodeId) -> Cost,
{
    let mut stats = SearchStats::new();
    let mut explored = ExploredSet::with_node_count(graph.node_count());
    let mut frontier = Frontier::new();

    frontier.insert(SearchNode::root(start, estimate(start)));
    stats.increment_generated();
    stats.observe_frontier(frontier.len());

    while let Some(current) = frontier.pop_min() {
        if goals.contains(current.node) {
            return SearchOutcome::found(strategy, current.path, current.cost, stats);
        }

        explored.insert(current.node);
        stats.increment_expanded();

        for &(neighbor, weight) in graph.neighbors(current.node) {
            if explored.contains(neighbor) {
                continue;
            }
            let candidate = current.successor(neighbor, weight, estimate(neighbor));
            if frontier.insert(candidate) == FrontierUpdate::Inserted {
                stats.increment_generated();
            }
        }
        stats.observe_frontier(frontier.len());
    }

    SearchOutcome::not_found(strategy, stats)
}
