//! 图模型模块
//!
//! 将稠密代价矩阵包装为带权有向图，提供邻居枚举、边权查询和启发式查询。
//! 节点从1开始编号，矩阵第0行与第0列不参与计算。

use crate::core::error::{GraphError, GraphResult, SearchRequestError};
use crate::core::types::{Cost, GoalSet, NodeId};

/// 默认的"无边"哨兵值
pub const NO_EDGE_SENTINEL: Cost = -1;

/// 基于代价矩阵的带权有向图
///
/// 构建时预先计算每个节点按ID升序排列的出边列表，搜索期间图不可变
#[derive(Debug, Clone)]
pub struct CostGraph {
    costs: Vec<Vec<Cost>>,
    adjacency: Vec<Vec<(NodeId, Cost)>>,
    heuristic: Vec<Cost>,
    sentinel: Cost,
}

impl CostGraph {
    /// 使用默认哨兵值 -1 构建图
    pub fn new(costs: Vec<Vec<Cost>>) -> GraphResult<Self> {
        Self::with_sentinel(costs, NO_EDGE_SENTINEL)
    }

    /// 使用指定的哨兵值构建图
    ///
    /// 0 和哨兵值都表示无边；对角线忽略；其余负值视为非法输入
    pub fn with_sentinel(costs: Vec<Vec<Cost>>, sentinel: Cost) -> GraphResult<Self> {
        let size = costs.len();
        if size < 2 {
            return Err(GraphError::Empty);
        }

        for (row, line) in costs.iter().enumerate() {
            if line.len() != size {
                return Err(GraphError::NotSquare {
                    row,
                    actual: line.len(),
                    expected: size,
                });
            }
        }

        let mut adjacency = vec![Vec::new(); size];
        for from in 1..size {
            for to in 1..size {
                let cost = costs[from][to];
                if from == to || cost == 0 || cost == sentinel {
                    continue;
                }
                if cost < 0 {
                    return Err(GraphError::NegativeCost { from, to, cost });
                }
                adjacency[from].push((to, cost));
            }
        }

        Ok(Self {
            costs,
            adjacency,
            heuristic: vec![0; size],
            sentinel,
        })
    }

    /// 附加启发式表（仅A*使用）
    ///
    /// 表长度必须为 n+1，第0项忽略。可采纳性由调用方保证，这里不做检查
    pub fn with_heuristic(mut self, heuristic: Vec<Cost>) -> GraphResult<Self> {
        if heuristic.len() != self.costs.len() {
            return Err(GraphError::HeuristicLength {
                actual: heuristic.len(),
                expected: self.costs.len(),
            });
        }
        if let Some((node, &value)) = heuristic
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, value)| **value < 0)
        {
            return Err(GraphError::NegativeHeuristic { node, value });
        }
        self.heuristic = heuristic;
        Ok(self)
    }

    /// 节点数 n
    pub fn node_count(&self) -> usize {
        self.costs.len() - 1
    }

    /// 有效边数
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn sentinel(&self) -> Cost {
        self.sentinel
    }

    pub fn contains_node(&self, node: NodeId) -> bool {
        node >= 1 && node <= self.node_count()
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        1..=self.node_count()
    }

    /// 按ID升序返回节点的出边 (邻居, 边权)
    ///
    /// 节点0返回空列表；超出 n 的ID属于调用错误，会触发越界panic
    pub fn neighbors(&self, node: NodeId) -> &[(NodeId, Cost)] {
        &self.adjacency[node]
    }

    /// 查询边权，不存在的边返回 None
    pub fn edge_cost(&self, from: NodeId, to: NodeId) -> Option<Cost> {
        if !self.contains_node(from) || !self.contains_node(to) {
            return None;
        }
        self.adjacency[from]
            .binary_search_by_key(&to, |(neighbor, _)| *neighbor)
            .ok()
            .map(|index| self.adjacency[from][index].1)
    }

    /// 节点的启发式估计
    pub fn heuristic(&self, node: NodeId) -> Cost {
        self.heuristic[node]
    }

    /// 计算路径总代价
    ///
    /// 空路径或包含不存在的边时返回 None，单节点路径代价为 0
    pub fn path_cost(&self, path: &[NodeId]) -> Option<Cost> {
        let first = *path.first()?;
        if !self.contains_node(first) {
            return None;
        }
        path.windows(2).try_fold(0, |total: Cost, hop| {
            self.edge_cost(hop[0], hop[1])
                .map(|cost| total.saturating_add(cost))
        })
    }

    /// 检查路径是否从 start 出发、终止于目标且每一跳都是有效边
    pub fn is_valid_path(&self, path: &[NodeId], start: NodeId, goals: &GoalSet) -> bool {
        match (path.first(), path.last()) {
            (Some(&first), Some(&last)) => {
                first == start && goals.contains(last) && self.path_cost(path).is_some()
            }
            _ => false,
        }
    }

    /// 校验搜索请求：目标集合非空，起点与所有目标都在 1..=n 范围内
    pub fn validate_request(
        &self,
        start: NodeId,
        goals: &GoalSet,
    ) -> Result<(), SearchRequestError> {
        let max = self.node_count();
        if goals.is_empty() {
            return Err(SearchRequestError::EmptyGoals);
        }
        if !self.contains_node(start) {
            return Err(SearchRequestError::start_out_of_range(start, max));
        }
        if let Some(goal) = goals.iter().find(|goal| !self.contains_node(*goal)) {
            return Err(SearchRequestError::goal_out_of_range(goal, max));
        }
        Ok(())
    }
}
