//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("无效参数: {0}")]
    InvalidArgument(String),

    #[error("容器为空")]
    EmptyContainer,

    #[error("元素未注册: {0}")]
    UnknownElement(String),

    #[error("元素已存在: {0}")]
    DuplicateElement(String),

    #[error("元素已在同一集合中: {0}")]
    SameSet(String),

    #[error("路径不存在: {from} -> {to}")]
    NoPathExists { from: String, to: String },

    #[error("无效状态: {0}")]
    InvalidState(String),
}
