//! 图模型错误类型
//!
//! 涵盖代价矩阵和启发式表构建时的校验错误

use thiserror::Error;

use crate::core::types::{Cost, NodeId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("代价矩阵为空，至少需要一个节点")]
    Empty,

    #[error("代价矩阵不是方阵: 第{row}行长度为{actual}，期望{expected}")]
    NotSquare {
        row: usize,
        actual: usize,
        expected: usize,
    },

    #[error("边 {from}->{to} 的代价 {cost} 为负且不是哨兵值")]
    NegativeCost { from: NodeId, to: NodeId, cost: Cost },

    #[error("启发式表长度为{actual}，期望{expected}")]
    HeuristicLength { actual: usize, expected: usize },

    #[error("节点 {node} 的启发式估计 {value} 为负")]
    NegativeHeuristic { node: NodeId, value: Cost },
}

pub type GraphResult<T> = Result<T, GraphError>;
