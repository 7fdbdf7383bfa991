use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::ConfigError;
use crate::core::types::{Cost, StrategyKind};
use crate::services::algorithm::NO_EDGE_SENTINEL;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub search: SearchConfig,
}

/// 日志配置，对应 `[log]` 段
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "trisearch".to_string(),
            max_file_size: 10 * 1024 * 1024, // 10MB
            max_files: 5,
        }
    }
}

/// 搜索配置，对应 `[search]` 段
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    /// 代价矩阵中表示"无边"的哨兵值，0 始终表示无边
    pub no_edge_sentinel: Cost,
    /// 启用的策略
    pub strategies: Vec<StrategyKind>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            no_edge_sentinel: NO_EDGE_SENTINEL,
            strategies: StrategyKind::ALL.to_vec(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        flexi_logger::LogSpecification::parse(&self.log.level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log.level.clone()))?;
        Ok(())
    }
}
