//! 搜索问题定义
//!
//! 将代价矩阵、启发式表、起点和目标打包为可从 TOML/JSON 文件加载的结构

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path as FsPath;

use crate::core::error::{GraphResult, ProblemError};
use crate::core::types::{Cost, GoalSet, NodeId};
use crate::services::algorithm::CostGraph;

/// 一次搜索的完整输入
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchProblem {
    /// (n+1)×(n+1) 代价矩阵，第0行与第0列不使用
    pub cost: Vec<Vec<Cost>>,
    /// 长度 n+1 的启发式表，缺省时使用恒为0的启发式
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heuristic: Option<Vec<Cost>>,
    pub start: NodeId,
    pub goals: Vec<NodeId>,
}

impl SearchProblem {
    pub fn from_toml_str(content: &str) -> Result<Self, ProblemError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ProblemError> {
        Ok(serde_json::from_str(content)?)
    }

    /// 按扩展名（`.toml` / `.json`）加载问题文件
    pub fn load<P: AsRef<FsPath>>(path: P) -> Result<Self, ProblemError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ProblemError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            other => Err(ProblemError::UnsupportedFormat(
                other.unwrap_or_default().to_string(),
            )),
        }
    }

    /// 使用给定哨兵值构建图，并附加启发式表（若存在）
    pub fn build_graph(&self, sentinel: Cost) -> GraphResult<CostGraph> {
        let graph = CostGraph::with_sentinel(self.cost.clone(), sentinel)?;
        match &self.heuristic {
            Some(heuristic) => graph.with_heuristic(heuristic.clone()),
            None => Ok(graph),
        }
    }

    pub fn goal_set(&self) -> GoalSet {
        GoalSet::from(self.goals.as_slice())
    }
}
