//! POSIX 与 Windows 路径字符串的词法规范化
//!
//! 不访问文件系统：路径经分词、按方言的文件名规则校验，
//! 再相对基准目录解析。
//!
//! ```
//! use resolve_path::{normalize_path, to_internal_path};
//!
//! let base = to_internal_path("Z:/data", true);
//! assert_eq!(normalize_path("/a/b/c", &base).as_deref(), Some("Z:/a/b/c"));
//! assert_eq!(normalize_path("../..", &base), None);
//! ```

pub mod config;
pub mod path_resolver;

pub use config::NormalizerConfig;
pub use path_resolver::{
    is_normalized_path,
    is_valid_path,
    normalize_path,
    split_path,
    to_internal_path,
    BaseDir,
    Dialect,
    FilenameRules,
    PathError,
    PathNormalizer,
    PortableRules,
    ResolvedPath,
    Segment,
};
