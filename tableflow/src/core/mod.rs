//! 核心模块 - 运行配置
//!
//! - [`Config`] - 存储与日志配置

pub mod config;

pub use config::Config;
