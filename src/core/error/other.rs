//! 其他错误类型
//!
//! 文件加载相关的错误，内容较少，集中放在此处

use std::path::PathBuf;
use thiserror::Error;

/// 搜索问题文件加载错误
#[derive(Error, Debug)]
pub enum ProblemError {
    #[error("读取问题文件 {path} 失败: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML解析失败: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON解析失败: {0}")]
    Json(#[from] serde_json::Error),

    #[error("不支持的问题文件格式: {0}")]
    UnsupportedFormat(String),
}

/// 配置文件错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置解析失败: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("配置序列化失败: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("无效的日志级别: {0}")]
    InvalidLogLevel(String),
}
