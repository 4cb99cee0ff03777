//! 核心错误处理模块

use thiserror::Error;

use crate::infrastructure::config::ConfigError;

/// 核心错误类型
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
    #[error("请求商品服务失败: {0}")]
    Client(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
