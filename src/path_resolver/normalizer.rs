//! 路径规范化器
//!
//! 将任意输入路径与基准目录合成为规范化的绝对路径
//!
//! 示例（基准目录 `/data`）：
//! - `a//b//c//` → `/data/a/b/c`
//! - `..` → `/`
//! - `/./..` → 无结果
//!
//! 示例（基准目录 `Z:/data`）：
//! - `/a/b/c` → `Z:/a/b/c`
//! - `C:\a\b` → `C:/a/b`

use super::classifier::{check_normalized_with, is_normalized_path, validate_with};
use super::dialect::Dialect;
use super::error::PathError;
use super::filename::{FilenameRules, PortableRules};
use super::resolver::{resolve, ResolvedPath};
use super::segment::{classify_sequence, split_path, Segment};

/// 相对路径的基准目录
///
/// 总是严格有根：Windows 下为驱动器标记，POSIX 下为 `/`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseDir {
    dialect: Dialect,
    segments: Vec<Segment>,
}

impl BaseDir {
    /// 解析规范化的绝对路径字符串
    pub fn parse(normalized: &str, dialect: Dialect) -> Result<Self, PathError> {
        let segments = check_normalized_with(normalized, dialect, &PortableRules::new())?;
        Ok(Self { dialect, segments })
    }

    /// 由段序列构造，序列形式同 [`to_internal_path`] 的输出
    ///
    /// 当且仅当首段为驱动器标记时方言为 Windows。
    pub fn from_segments(segments: Vec<String>) -> Result<Self, PathError> {
        let first = segments.first().cloned().unwrap_or_default();
        let dialect = Dialect::of_root(&first);
        let segments = classify_sequence(segments, dialect, true);

        match segments.first() {
            Some(root) if root.is_rooted() => Ok(Self { dialect, segments }),
            _ => Err(PathError::BaseDirNotRooted(first)),
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// 根或驱动器标记
    pub fn root(&self) -> &Segment {
        &self.segments[0]
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.segments.iter().cloned().map(String::from).collect()
    }
}

impl From<ResolvedPath> for BaseDir {
    fn from(path: ResolvedPath) -> Self {
        Self {
            dialect: path.dialect(),
            segments: path.to_typed_segments(),
        }
    }
}

/// 绑定一个基准目录与一套文件名规则的规范化器
#[derive(Debug, Clone)]
pub struct PathNormalizer<R = PortableRules> {
    base_dir: BaseDir,
    rules: R,
}

impl PathNormalizer<PortableRules> {
    pub fn new(base_dir: BaseDir) -> Self {
        Self::with_rules(base_dir, PortableRules::new())
    }
}

impl<R: FilenameRules> PathNormalizer<R> {
    pub fn with_rules(base_dir: BaseDir, rules: R) -> Self {
        Self { base_dir, rules }
    }

    pub fn base_dir(&self) -> &BaseDir {
        &self.base_dir
    }

    pub fn dialect(&self) -> Dialect {
        self.base_dir.dialect()
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// 规范化 `path`，无结果时给出原因
    pub fn try_normalize(&self, path: &str) -> Result<ResolvedPath, PathError> {
        let dialect = self.dialect();
        let mut segments = validate_with(path, dialect, &self.rules)?;

        let first = segments[0].clone();
        let rooted = match first {
            // Windows 下的裸分隔符：取基准目录所在驱动器的根
            Segment::Root if dialect.is_windows() => {
                segments[0] = self.base_dir.root().clone();
                segments
            }
            Segment::Root | Segment::Drive(_) => segments,
            Segment::Name(_) => {
                let capacity = self.base_dir.segments.len() + segments.len();
                let mut merged = Vec::with_capacity(capacity);
                merged.extend_from_slice(&self.base_dir.segments);
                merged.append(&mut segments);
                merged
            }
        };

        resolve(&rooted).ok_or_else(|| {
            log::debug!("{:?} 越过了基准目录的根", path);
            PathError::EscapesRoot {
                path: path.to_string(),
            }
        })
    }

    /// 规范化 `path`，不存在规范路径时返回 `None`
    pub fn normalize(&self, path: &str) -> Option<ResolvedPath> {
        self.try_normalize(path).ok()
    }
}

/// 以段序列形式的 `base_dir` 为基准规范化 `path`
///
/// 输入为空、非法，或其 `..` 越过根时返回 `None`。
///
/// # Panics
/// `base_dir` 为空，或不以根（`/`）或驱动器标记（`C:`）开头时 panic。
pub fn normalize_path(path: &str, base_dir: &[String]) -> Option<String> {
    let base_dir = match BaseDir::from_segments(base_dir.to_vec()) {
        Ok(base_dir) => base_dir,
        Err(err) => panic!("normalize_path: {}", err),
    };

    PathNormalizer::new(base_dir)
        .normalize(path)
        .map(|resolved| resolved.to_string())
}

/// 将已规范化的路径拆回段序列
///
/// # Panics
/// `normalized_path` 在给定方言下不是规范形式时 panic。
pub fn to_internal_path(normalized_path: &str, is_windows: bool) -> Vec<String> {
    assert!(
        is_normalized_path(normalized_path, is_windows),
        "to_internal_path: {:?} 不是规范化的 {} 路径",
        normalized_path,
        Dialect::from_is_windows(is_windows)
    );
    split_path(normalized_path)
}
