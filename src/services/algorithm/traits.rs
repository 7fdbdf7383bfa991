//! 搜索策略 trait 定义

use crate::core::error::SearchRequestError;
use crate::core::types::{GoalSet, NodeId, StrategyKind};

use super::graph::CostGraph;
use super::types::SearchOutcome;

/// 目标导向搜索策略的统一接口
///
/// 每次调用都创建全新的探索集合与栈/队列，调用之间不保留状态
pub trait SearchStrategy {
    fn kind(&self) -> StrategyKind;

    /// 在已校验的请求上执行搜索
    ///
    /// 调用方需保证 start 与 goals 均在 1..=n 范围内
    fn search_unchecked(&self, graph: &CostGraph, start: NodeId, goals: &GoalSet) -> SearchOutcome;

    /// 校验请求后执行搜索
    ///
    /// 找不到路径不是错误，返回状态为 `NotFound` 的结果
    fn search(
        &self,
        graph: &CostGraph,
        start: NodeId,
        goals: &GoalSet,
    ) -> Result<SearchOutcome, SearchRequestError> {
        graph.validate_request(start, goals)?;
        Ok(self.search_unchecked(graph, start, goals))
    }
}
