pub mod error;
pub mod problem;
pub mod types;

// 错误和结果类型
pub use error::{
    ConfigError, GraphError, ProblemError, SearchError, SearchRequestError, SearchResult,
};

pub use problem::SearchProblem;
pub use types::{Cost, GoalSet, NodeId, Path, StrategyKind};
