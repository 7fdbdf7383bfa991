//! 服务层模块

pub mod algorithm;

pub use algorithm::*;
