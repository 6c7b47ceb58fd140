//! 路径分词器
//!
//! 将原始路径字符串切分为路径段。无论哪种方言，`/` 与 `\` 都视为分隔符；
//! POSIX 下拒绝 `\` 由分类器负责。
//!
//! 示例：
//! - `//a//b` → `["/", "a", "b"]`
//! - `C:\a\` → `["C:", "a"]`
//! - `` → `[]`

use std::borrow::Cow;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use super::dialect::{is_drive_marker, Dialect};

/// 根标记段的文本
pub const ROOT_MARKER: &str = "/";

/// 任意分隔符的最长连续序列
static SEPARATOR_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[/\\]+").expect("分隔符正则无效"));

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// 将原始路径切分为路径段
///
/// 开头的分隔符合并为唯一的根标记 `"/"`；其余每段连续分隔符都是一个边界，
/// 末尾分隔符不会产生空段。
pub fn split_path(path: &str) -> Vec<String> {
    let rest = path.trim_start_matches(is_separator);
    let mut segments = Vec::new();

    if rest.len() < path.len() {
        segments.push(ROOT_MARKER.to_string());
    }

    segments.extend(
        SEPARATOR_RUN
            .split(rest)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    );

    log::trace!("split_path({:?}) -> {:?}", path, segments);
    segments
}

/// 单个路径段
///
/// 根与驱动器两种类型只会出现在序列的第 0 位。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// 裸 `/` 根标记
    Root,
    /// Windows 驱动器标记，保存大写驱动器字母
    Drive(char),
    /// 其他任意段，包括 `.` 和 `..`
    Name(String),
}

impl Segment {
    /// 判定首段的类型
    ///
    /// 非严格模式下，或严格模式的非 Windows 方言下，`"/"` 为根；
    /// Windows 方言下驱动器标记在两种模式中都为根。
    pub fn classify(text: &str, dialect: Dialect, strict: bool) -> Self {
        if text == ROOT_MARKER && (!strict || !dialect.is_windows()) {
            return Self::Root;
        }

        if dialect.is_windows() && is_drive_marker(text) {
            if let Some(letter) = text.chars().next() {
                return Self::Drive(letter);
            }
        }

        Self::Name(text.to_string())
    }

    pub fn name(text: impl Into<String>) -> Self {
        Self::Name(text.into())
    }

    /// 原始文本：`"/"`、`"C:"` 或名称本身
    pub fn as_str(&self) -> Cow<'_, str> {
        match self {
            Self::Root => Cow::Borrowed(ROOT_MARKER),
            Self::Drive(letter) => Cow::Owned(format!("{}:", letter)),
            Self::Name(name) => Cow::Borrowed(name.as_str()),
        }
    }

    pub fn is_rooted(&self) -> bool {
        !matches!(self, Self::Name(_))
    }

    pub fn is_current_dir(&self) -> bool {
        matches!(self, Self::Name(n) if n == ".")
    }

    pub fn is_parent_dir(&self) -> bool {
        matches!(self, Self::Name(n) if n == "..")
    }

    /// `.` 或 `..`
    pub fn is_dot_entry(&self) -> bool {
        self.is_current_dir() || self.is_parent_dir()
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str())
    }
}

impl From<Segment> for String {
    fn from(segment: Segment) -> Self {
        match segment {
            Segment::Name(name) => name,
            other => other.as_str().into_owned(),
        }
    }
}

/// 将原始路径分词为带类型的路径段
///
/// 第 0 段按非严格规则分类，因此以裸分隔符开头的 Windows 路径得到
/// [`Segment::Root`]；其后各段均为 [`Segment::Name`]。
pub fn tokenize(path: &str, dialect: Dialect) -> Vec<Segment> {
    classify_sequence(split_path(path), dialect, false)
}

/// 只对首段分类，把切分结果转为带类型的段
pub(crate) fn classify_sequence(raw: Vec<String>, dialect: Dialect, strict: bool) -> Vec<Segment> {
    let mut raw = raw.into_iter();
    let mut segments = Vec::with_capacity(raw.len());

    if let Some(first) = raw.next() {
        segments.push(Segment::classify(&first, dialect, strict));
    }
    segments.extend(raw.map(Segment::Name));

    segments
}
