//! 路径解析模块
//!
//! POSIX 与 Windows 路径字符串的词法规范化：先分词、再校验，
//! 最后基于基准目录折叠 `.` 与 `..`。

pub mod classifier;
pub mod dialect;
pub mod error;
pub mod filename;
pub mod normalizer;
pub mod resolver;
pub mod segment;

pub use classifier::{
    check_normalized_with,
    is_normalized_path,
    is_root_segment,
    is_valid_path,
    validate_with,
};
pub use dialect::Dialect;
pub use error::PathError;
pub use filename::{is_reserved_device_name, FilenameRules, PortableRules};
pub use normalizer::{normalize_path, to_internal_path, BaseDir, PathNormalizer};
pub use resolver::{resolve, ResolvedPath};
pub use segment::{split_path, tokenize, Segment, ROOT_MARKER};

/// 重新导出常用类型
pub type Result<T> = std::result::Result<T, PathError>;
