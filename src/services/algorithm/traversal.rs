//! 三路遍历编排模块
//!
//! 在同一输入上依次执行 DFS、UCS、A*，三者之间不共享任何可变状态

use std::collections::BTreeSet;

use serde::Serialize;

use crate::core::error::SearchResult;
use crate::core::types::{Cost, GoalSet, NodeId, Path, StrategyKind};

use super::astar::AStar;
use super::dfs::Dfs;
use super::graph::CostGraph;
use super::traits::SearchStrategy;
use super::types::SearchOutcome;
use super::ucs::Ucs;

/// 三种策略的结果，顺序固定为 (DFS, UCS, A*)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalResult {
    pub dfs: SearchOutcome,
    pub ucs: SearchOutcome,
    pub astar: SearchOutcome,
}

impl TraversalResult {
    pub fn get(&self, kind: StrategyKind) -> &SearchOutcome {
        match kind {
            StrategyKind::Dfs => &self.dfs,
            StrategyKind::Ucs => &self.ucs,
            StrategyKind::AStar => &self.astar,
        }
    }

    /// 按 (DFS, UCS, A*) 顺序返回路径
    pub fn paths(&self) -> (Path, Path, Path) {
        (self.dfs.path.clone(), self.ucs.path.clone(), self.astar.path.clone())
    }

    pub fn into_paths(self) -> (Path, Path, Path) {
        (self.dfs.path, self.ucs.path, self.astar.path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchOutcome> {
        [&self.dfs, &self.ucs, &self.astar].into_iter()
    }
}

/// 遍历编排器
///
/// 默认启用全部三种策略；被禁用的策略返回 `Skipped` 状态的空结果
#[derive(Debug, Clone)]
pub struct TriTraversal {
    enabled: BTreeSet<StrategyKind>,
}

impl Default for TriTraversal {
    fn default() -> Self {
        Self {
            enabled: StrategyKind::ALL.into_iter().collect(),
        }
    }
}

impl TriTraversal {
    pub fn new() -> Self {
        Self::default()
    }

    /// 只启用给定的策略，执行顺序仍为 DFS → UCS → A*
    pub fn with_strategies<I: IntoIterator<Item = StrategyKind>>(strategies: I) -> Self {
        Self {
            enabled: strategies.into_iter().collect(),
        }
    }

    pub fn is_enabled(&self, kind: StrategyKind) -> bool {
        self.enabled.contains(&kind)
    }

    /// 校验请求后依次执行各策略
    pub fn run(
        &self,
        graph: &CostGraph,
        start: NodeId,
        goals: &GoalSet,
    ) -> SearchResult<TraversalResult> {
        graph.validate_request(start, goals)?;

        let result = TraversalResult {
            dfs: self.run_one(&Dfs, graph, start, goals),
            ucs: self.run_one(&Ucs, graph, start, goals),
            astar: self.run_one(&AStar, graph, start, goals),
        };

        for outcome in result.iter() {
            log::debug!(
                "{} 搜索结束: status={:?}, path={:?}, expanded={}",
                outcome.strategy,
                outcome.status,
                outcome.path,
                outcome.stats.nodes_expanded
            );
        }

        Ok(result)
    }

    fn run_one<S: SearchStrategy>(
        &self,
        strategy: &S,
        graph: &CostGraph,
        start: NodeId,
        goals: &GoalSet,
    ) -> SearchOutcome {
        if self.is_enabled(strategy.kind()) {
            strategy.search_unchecked(graph, start, goals)
        } else {
            SearchOutcome::skipped(strategy.kind())
        }
    }
}

/// 便捷入口：由原始代价矩阵构建图并执行三种搜索
///
/// `heuristic` 为 None 时使用恒为0的启发式。返回 (DFS, UCS, A*) 三条路径，
/// 某个策略找不到路径时对应位置为空序列
pub fn tri_traversal(
    cost: Vec<Vec<Cost>>,
    heuristic: Option<Vec<Cost>>,
    start: NodeId,
    goals: &[NodeId],
) -> SearchResult<(Path, Path, Path)> {
    let mut graph = CostGraph::new(cost)?;
    if let Some(heuristic) = heuristic {
        graph = graph.with_heuristic(heuristic)?;
    }
    let goals = GoalSet::from(goals);
    Ok(TriTraversal::new().run(&graph, start, &goals)?.into_paths())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{SearchError, SearchRequestError};
    use crate::services::algorithm::types::SearchStatus;

    fn create_triangle() -> Vec<Vec<Cost>> {
        vec![
            vec![0, 0, 0, 0],
            vec![0, 0, 1, 5],
            vec![0, -1, 0, 1],
            vec![0, -1, -1, 0],
        ]
    }

    #[test]
    fn test_tri_traversal() {
        let (dfs, ucs, astar) =
            tri_traversal(create_triangle(), None, 1, &[3]).expect("Traversal should succeed");
        assert_eq!(dfs, vec![1, 2, 3]);
        assert_eq!(ucs, vec![1, 2, 3]);
        assert_eq!(astar, vec![1, 2, 3]);
    }

    #[test]
    fn test_disabled_strategy_skipped() {
        let graph = CostGraph::new(create_triangle()).expect("Graph should build in test");
        let traversal = TriTraversal::with_strategies([StrategyKind::Ucs]);
        let result = traversal
            .run(&graph, 1, &GoalSet::from([3]))
            .expect("Traversal should succeed");

        assert_eq!(result.dfs.status, SearchStatus::Skipped);
        assert_eq!(result.astar.status, SearchStatus::Skipped);
        assert_eq!(result.ucs.path, vec![1, 2, 3]);
        assert_eq!(result.get(StrategyKind::Ucs).cost, Some(2));
    }

    #[test]
    fn test_empty_goals_rejected() {
        let err = tri_traversal(create_triangle(), None, 1, &[]).unwrap_err();
        assert!(matches!(
            err,
            SearchError::Request(SearchRequestError::EmptyGoals)
        ));
    }

    #[test]
    fn test_bad_heuristic_rejected() {
        let err = tri_traversal(create_triangle(), Some(vec![0, 0]), 1, &[3]).unwrap_err();
        assert!(matches!(err, SearchError::Graph(_)));
    }
}
