//! Todo 统一错误类型定义
//!
//! 使用 `thiserror` 库提供统一的错误处理，支持错误链式传播。

use std::io;
use thiserror::Error;

/// Todo 错误类型
#[derive(Debug, Error)]
pub enum TodoError {
    /// I/O 错误（文件读写、stdin 读取等）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML 解析错误
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML 序列化错误
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Todo Result 类型别名
pub type Result<T> = std::result::Result<T, TodoError>;
