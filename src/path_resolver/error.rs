//! 路径规范化错误
//!
//! 每个变体都是输入不存在规范路径的一种原因

use super::dialect::Dialect;

/// 路径规范化错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("路径为空")]
    Empty,

    #[error("无效的 {dialect} 路径: {path:?}")]
    InvalidSyntax { path: String, dialect: Dialect },

    #[error("路径越过根目录: {path:?}")]
    EscapesRoot { path: String },

    #[error("基准目录没有根: {0:?}")]
    BaseDirNotRooted(String),

    #[error("不是规范化的 {dialect} 路径: {path:?}")]
    NotNormalized { path: String, dialect: Dialect },
}

impl PathError {
    /// 输入是否在解析开始前就被拒绝
    pub fn is_syntax_error(&self) -> bool {
        matches!(self, Self::Empty | Self::InvalidSyntax { .. })
    }
}
