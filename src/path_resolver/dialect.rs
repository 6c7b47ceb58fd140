//! 路径语法方言

use std::fmt;

use serde::{Deserialize, Serialize};

/// 路径语法方言，单次操作内固定不变
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// `/` 分隔，无驱动器字母
    Posix,
    /// `/` 或 `\` 分隔，可带 `X:` 驱动器前缀
    Windows,
}

impl Dialect {
    pub fn from_is_windows(is_windows: bool) -> Self {
        if is_windows {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    pub fn is_windows(&self) -> bool {
        matches!(self, Self::Windows)
    }

    /// 根据首段推断有根序列的方言
    ///
    /// 驱动器标记（`C:`）为 Windows，其余为 POSIX
    pub fn of_root(first_segment: &str) -> Self {
        Self::from_is_windows(is_drive_marker(first_segment))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Posix => "posix",
            Self::Windows => "windows",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 一个 ASCII 大写字母后跟 `:`
pub(crate) fn is_drive_marker(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_uppercase() && bytes[1] == b':'
}
