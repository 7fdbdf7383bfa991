//! 核心类型定义
//!
//! 搜索子系统共享的基础类型

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// 节点ID，从1开始编号，0号位置保留不用
pub type NodeId = usize;

/// 边权与路径代价，使用有符号整数以便表达"无边"哨兵值
pub type Cost = i64;

/// 从起点到目标的节点序列，空序列表示未找到路径
pub type Path = Vec<NodeId>;

/// 目标节点集合
///
/// 输入中的重复目标会被合并
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalSet {
    goals: BTreeSet<NodeId>,
}

impl GoalSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 目标测试
    pub fn contains(&self, node: NodeId) -> bool {
        self.goals.contains(&node)
    }

    pub fn insert(&mut self, node: NodeId) -> bool {
        self.goals.insert(node)
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.goals.iter().copied()
    }
}

impl FromIterator<NodeId> for GoalSet {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self {
            goals: iter.into_iter().collect(),
        }
    }
}

impl From<&[NodeId]> for GoalSet {
    fn from(goals: &[NodeId]) -> Self {
        goals.iter().copied().collect()
    }
}

impl<const N: usize> From<[NodeId; N]> for GoalSet {
    fn from(goals: [NodeId; N]) -> Self {
        goals.into_iter().collect()
    }
}

/// 搜索策略类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Dfs,
    Ucs,
    #[serde(alias = "a*", alias = "a_star")]
    AStar,
}

impl StrategyKind {
    /// 编排器的固定执行顺序
    pub const ALL: [StrategyKind; 3] = [StrategyKind::Dfs, StrategyKind::Ucs, StrategyKind::AStar];

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Dfs => "dfs",
            StrategyKind::Ucs => "ucs",
            StrategyKind::AStar => "astar",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" => Ok(StrategyKind::Dfs),
            "ucs" => Ok(StrategyKind::Ucs),
            "astar" | "a*" | "a_star" => Ok(StrategyKind::AStar),
            other => Err(format!("未知的搜索策略: {}", other)),
        }
    }
}
