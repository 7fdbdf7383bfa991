//! 搜索算法共享类型定义
//!
//! 搜索统计以返回值的形式给出，不使用全局计数器

use serde::Serialize;

use crate::core::types::{Cost, Path, StrategyKind};

/// 搜索统计信息
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// 被扩展（枚举邻居）的节点数
    pub nodes_expanded: usize,
    /// 入栈或入队的候选节点数
    pub nodes_generated: usize,
    /// 栈或队列的峰值长度
    pub max_frontier: usize,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_expanded(&mut self) {
        self.nodes_expanded += 1;
    }

    pub fn increment_generated(&mut self) {
        self.nodes_generated += 1;
    }

    pub fn observe_frontier(&mut self, len: usize) {
        self.max_frontier = self.max_frontier.max(len);
    }
}

/// 搜索结束状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    Found,
    NotFound,
    /// 策略在编排器中被禁用，未执行
    Skipped,
}

/// 单个策略的搜索结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    pub strategy: StrategyKind,
    pub status: SearchStatus,
    /// 未找到路径时为空
    pub path: Path,
    /// 路径总代价，仅在找到路径时存在
    pub cost: Option<Cost>,
    pub stats: SearchStats,
}

impl SearchOutcome {
    pub fn found(strategy: StrategyKind, path: Path, cost: Cost, stats: SearchStats) -> Self {
        Self {
            strategy,
            status: SearchStatus::Found,
            path,
            cost: Some(cost),
            stats,
        }
    }

    pub fn not_found(strategy: StrategyKind, stats: SearchStats) -> Self {
        Self {
            strategy,
            status: SearchStatus::NotFound,
            path: Vec::new(),
            cost: None,
            stats,
        }
    }

    pub fn skipped(strategy: StrategyKind) -> Self {
        Self {
            strategy,
            status: SearchStatus::Skipped,
            path: Vec::new(),
            cost: None,
            stats: SearchStats::new(),
        }
    }

    pub fn is_found(&self) -> bool {
        self.status == SearchStatus::Found
    }

    pub fn into_path(self) -> Path {
        self.path
    }
}
