//! Taskdeck 统一错误类型定义
//!
//! 使用 `thiserror` 库提供统一的错误处理，支持错误链式传播。

use std::io;
use thiserror::Error;

/// Taskdeck 错误类型
#[derive(Debug, Error)]
pub enum TaskdeckError {
    /// I/O 错误（响应体读取、JSON 解析等）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// HTTP 请求错误（网络失败或非 2xx 状态码）
    #[error("HTTP error: {0}")]
    Http(Box<ureq::Error>),
}

/// Taskdeck Result 类型别名
pub type Result<T> = std::result::Result<T, TaskdeckError>;

// ureq::Error 体积较大，装箱后再进入枚举
impl From<ureq::Error> for TaskdeckError {
    fn from(err: ureq::Error) -> Self {
        Self::Http(Box::new(err))
    }
}
