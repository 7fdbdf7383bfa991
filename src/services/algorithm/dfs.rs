//! DFS算法模块
//!
//! 使用显式栈的深度优先目标搜索。子节点按ID升序扩展。
//!
//! 与 UCS/A* 的即时 decrease-key 不同，DFS 采用惰性去重：同一节点可能被多次压栈，
//! 出栈时若已探索则直接丢弃。

use crate::core::types::{Cost, GoalSet, NodeId, Path, StrategyKind};

use super::explored::ExploredSet;
use super::graph::CostGraph;
use super::traits::SearchStrategy;
use super::types::{SearchOutcome, SearchStats};

/// DFS算法结构体
#[derive(Debug, Clone, Copy, Default)]
pub struct Dfs;

/// 栈帧：节点、到达该节点的路径及其代价
#[derive(Debug, Clone)]
struct StackFrame {
    node: NodeId,
    path: Path,
    cost: Cost,
}

impl SearchStrategy for Dfs {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Dfs
    }

    fn search_unchecked(&self, graph: &CostGraph, start: NodeId, goals: &GoalSet) -> SearchOutcome {
        let mut stats = SearchStats::new();
        let mut explored = ExploredSet::with_node_count(graph.node_count());
        let mut stack = vec![StackFrame {
            node: start,
            path: vec![start],
            cost: 0,
        }];
        stats.increment_generated();
        stats.observe_frontier(stack.len());

        while let Some(frame) = stack.pop() {
            if !explored.insert(frame.node) {
                continue;
            }

            if goals.contains(frame.node) {
                return SearchOutcome::found(StrategyKind::Dfs, frame.path, frame.cost, stats);
            }

            stats.increment_expanded();

            // 逆序压栈，出栈时即为升序
            for &(neighbor, weight) in graph.neighbors(frame.node).iter().rev() {
                if explored.contains(neighbor) {
                    continue;
                }
                let mut path = frame.path.clone();
                path.push(neighbor);
                stack.push(StackFrame {
                    node: neighbor,
                    path,
                    cost: frame.cost.saturating_add(weight),
                });
                stats.increment_generated();
            }
            stats.observe_frontier(stack.len());
        }

        SearchOutcome::not_found(StrategyKind::Dfs, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_graph() -> CostGraph {
        // 1 -> 2 -> 4, 1 -> 3 -> 4, 4 -> 5
        CostGraph::new(vec![
            vec![0, 0, 0, 0, 0, 0],
            vec![0, 0, 1, 1, -1, -1],
            vec![0, -1, 0, -1, 7, -1],
            vec![0, -1, -1, 0, 1, -1],
            vec![0, -1, -1, -1, 0, 2],
            vec![0, -1, -1, -1, -1, 0],
        ])
        .expect("Graph should build in test")
    }

    #[test]
    fn test_ascending_child_order() {
        let graph = create_graph();
        let outcome = Dfs.search(&graph, 1, &GoalSet::from([5])).expect("Valid request");
        // 先深入节点2，即使经过节点3的路径更便宜
        assert_eq!(outcome.path, vec![1, 2, 4, 5]);
        assert_eq!(outcome.cost, Some(10));
    }

    #[test]
    fn test_start_is_goal() {
        let graph = create_graph();
        let outcome = Dfs.search(&graph, 3, &GoalSet::from([3, 5])).expect("Valid request");
        assert_eq!(outcome.path, vec![3]);
        assert_eq!(outcome.cost, Some(0));
        assert_eq!(outcome.stats.nodes_expanded, 0);
    }

    #[test]
    fn test_unreachable() {
        let graph = create_graph();
        let outcome = Dfs.search(&graph, 5, &GoalSet::from([1])).expect("Valid request");
        assert!(!outcome.is_found());
        assert!(outcome.path.is_empty());
        assert_eq!(outcome.cost, None);
    }

    #[test]
    fn test_stale_duplicates_skipped() {
        // 节点3同时被1和2压栈，第二次出栈时应被丢弃
        let graph = CostGraph::new(vec![
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 1, 1, -1],
            vec![0, -1, 0, 1, -1],
            vec![0, -1, -1, 0, -1],
            vec![0, -1, -1, -1, 0],
        ])
        .expect("Graph should build in test");
        let outcome = Dfs.search(&graph, 1, &GoalSet::from([4])).expect("Valid request");
        assert!(!outcome.is_found());
        assert_eq!(outcome.stats.nodes_expanded, 3);
    }

    #[test]
    fn test_invalid_request() {
        let graph = create_graph();
        assert!(Dfs.search(&graph, 6, &GoalSet::from([1])).is_err());
        assert!(Dfs.search(&graph, 1, &GoalSet::new()).is_err());
    }
}
