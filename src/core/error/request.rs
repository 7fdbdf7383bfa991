//! 搜索请求错误类型

use thiserror::Error;

use crate::core::types::NodeId;

/// 起点或目标集合不满足调用约定
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchRequestError {
    #[error("目标集合为空")]
    EmptyGoals,

    #[error("{role}节点 {node} 超出范围 1..={max}")]
    NodeOutOfRange {
        role: &'static str,
        node: NodeId,
        max: NodeId,
    },
}

impl SearchRequestError {
    pub fn start_out_of_range(node: NodeId, max: NodeId) -> Self {
        SearchRequestError::NodeOutOfRange {
            role: "起始",
            node,
            max,
        }
    }

    pub fn goal_out_of_range(node: NodeId, max: NodeId) -> Self {
        SearchRequestError::NodeOutOfRange {
            role: "目标",
            node,
            max,
        }
    }
}
