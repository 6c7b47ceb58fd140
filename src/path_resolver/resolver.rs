//! `.` / `..` 解析器
//!
//! 将有根的路径段序列折叠为 [`ResolvedPath`]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::classifier::check_normalized_with;
use super::dialect::Dialect;
use super::error::PathError;
use super::filename::PortableRules;
use super::segment::{Segment, ROOT_MARKER};

/// 规范化的绝对路径
///
/// 保存根标识与保留下来的名称，其中不含 `.` 或 `..`。
/// 序列化为 `/a/b` 或 `C:/a/b`。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResolvedPath {
    /// 裸 `/` 根时为 `None`
    drive: Option<char>,
    names: Vec<String>,
}

impl ResolvedPath {
    pub fn drive(&self) -> Option<char> {
        self.drive
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn dialect(&self) -> Dialect {
        Dialect::from_is_windows(self.drive.is_some())
    }

    pub fn is_root(&self) -> bool {
        self.names.is_empty()
    }

    /// 根标识对应的路径段
    pub fn root(&self) -> Segment {
        match self.drive {
            Some(letter) => Segment::Drive(letter),
            None => Segment::Root,
        }
    }

    /// 内部段序列形式，与 `split_path` 的输出一致
    pub fn to_segments(&self) -> Vec<String> {
        let mut segments = Vec::with_capacity(self.names.len() + 1);
        segments.push(self.root().into());
        segments.extend(self.names.iter().cloned());
        segments
    }

    /// 带类型的段序列形式
    pub fn to_typed_segments(&self) -> Vec<Segment> {
        let mut segments = Vec::with_capacity(self.names.len() + 1);
        segments.push(self.root());
        segments.extend(self.names.iter().cloned().map(Segment::Name));
        segments
    }

    /// 父目录，位于根时为 `None`
    pub fn parent(&self) -> Option<Self> {
        let (_, ancestors) = self.names.split_last()?;
        Some(Self {
            drive: self.drive,
            names: ancestors.to_vec(),
        })
    }

    /// 最后一个名称，位于根时为 `None`
    pub fn file_name(&self) -> Option<&str> {
        self.names.last().map(String::as_str)
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(letter) = self.drive {
            write!(f, "{}:", letter)?;
        }
        write!(f, "{}{}", ROOT_MARKER, self.names.join("/"))
    }
}

impl From<ResolvedPath> for String {
    fn from(path: ResolvedPath) -> Self {
        path.to_string()
    }
}

impl FromStr for ResolvedPath {
    type Err = PathError;

    /// 解析已规范化的路径，方言由根决定
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let first = s.split(['/', '\\']).next().unwrap_or_default();
        let dialect = Dialect::of_root(first);
        let segments = check_normalized_with(s, dialect, &PortableRules::new())?;

        resolve(&segments).ok_or_else(|| PathError::EscapesRoot { path: s.to_string() })
    }
}

impl TryFrom<String> for ResolvedPath {
    type Error = PathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// 解析有根段序列中的 `.` 与 `..`
///
/// 从末尾向第 0 段反向扫描，维护待消耗的父目录计数：遇到 `..` 计数加一；
/// 普通名称在计数为零时保留，否则被其后的 `..` 消耗。扫描结束时计数仍大于零，
/// 说明路径越过了根，返回 `None`。
///
/// # Panics
/// `segments[0]` 不是根或驱动器标记时 panic。
pub fn resolve(segments: &[Segment]) -> Option<ResolvedPath> {
    let (root, rest) = match segments.split_first() {
        Some((root, rest)) if root.is_rooted() => (root, rest),
        _ => panic!("resolve: 段序列必须以根开头: {:?}", segments),
    };

    let mut pending_parents = 0usize;
    let mut survivors = Vec::with_capacity(rest.len());

    for segment in rest.iter().rev() {
        if segment.is_current_dir() {
            continue;
        }

        if segment.is_parent_dir() {
            pending_parents += 1;
        } else if pending_parents == 0 {
            survivors.push(String::from(segment.clone()));
        } else {
            pending_parents -= 1;
        }
    }

    if pending_parents > 0 {
        log::debug!("根之上还有 {} 个未解析的 `..`", pending_parents);
        return None;
    }

    survivors.reverse();
    let drive = match root {
        Segment::Drive(letter) => Some(*letter),
        _ => None,
    };

    let resolved = ResolvedPath {
        drive,
        names: survivors,
    };
    log::trace!("解析 {:?} -> {}", segments, resolved);
    Some(resolved)
}
