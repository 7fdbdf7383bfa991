//! 统一错误处理系统 for TriSearch
//!
//! 按关注点拆分错误类型：
//! - `GraphError`：代价矩阵与启发式表校验
//! - `SearchRequestError`：起点与目标集合校验
//! - `ProblemError` / `ConfigError`：文件加载与解析
//!
//! `SearchError` 使用 `#[from]` 汇总以上错误，`SearchResult<T>` 为统一返回类型

use thiserror::Error;

pub mod graph;
pub mod other;
pub mod request;

pub use graph::{GraphError, GraphResult};
pub use other::{ConfigError, ProblemError};
pub use request::SearchRequestError;

/// 统一的搜索错误类型
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("图错误: {0}")]
    Graph(#[from] GraphError),

    #[error("请求错误: {0}")]
    Request(#[from] SearchRequestError),

    #[error("问题文件错误: {0}")]
    Problem(#[from] ProblemError),

    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 统一的结果类型
pub type SearchResult<T> = Result<T, SearchError>;
