//! 文件名规则
//!
//! 校验阶段对每个普通名称段做合法性检查；`.` 和 `..` 在两种方言下都合法

use once_cell::sync::Lazy;
use regex::Regex;

use super::dialect::Dialect;

/// 除控制字符外，Windows 文件名中禁止出现的字符
const WINDOWS_INVALID_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Windows 设备名，可带扩展名
static RESERVED_DEVICE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(CON|PRN|AUX|NUL|COM[1-9]|LPT[1-9])(\..*)?$")
        .expect("设备名正则无效")
});

/// 文件名规则提供者 Trait
pub trait FilenameRules {
    /// 仅由 POSIX 可移植文件名字符集组成
    fn is_portable_posix_name(&self, name: &str) -> bool;

    /// Windows 接受的单个路径组件名
    fn is_windows_name(&self, name: &str) -> bool;

    /// 按方言分派
    fn is_valid_name(&self, name: &str, dialect: Dialect) -> bool {
        match dialect {
            Dialect::Posix => self.is_portable_posix_name(name),
            Dialect::Windows => self.is_windows_name(name),
        }
    }
}

/// 内置文件名规则
///
/// POSIX 名称仅限 `[A-Za-z0-9._-]`。Windows 名称不得包含控制字符与 `<>:"/\|?*`，
/// 不得以空格开头或结尾，除 `.` 和 `..` 外不得以 `.` 结尾。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PortableRules {
    /// Windows 方言下同时拒绝 `CON`、`NUL`、`COM1` 等设备名
    pub reject_reserved_names: bool,
}

impl PortableRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting_reserved_names() -> Self {
        Self {
            reject_reserved_names: true,
        }
    }
}

impl FilenameRules for PortableRules {
    fn is_portable_posix_name(&self, name: &str) -> bool {
        !name.is_empty()
            && name
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-'))
    }

    fn is_windows_name(&self, name: &str) -> bool {
        if name.is_empty() || name.starts_with(' ') || name.ends_with(' ') {
            return false;
        }

        if name.chars().any(|c| c < ' ' || WINDOWS_INVALID_CHARS.contains(&c)) {
            return false;
        }

        if name.ends_with('.') && name != "." && name != ".." {
            return false;
        }

        !(self.reject_reserved_names && is_reserved_device_name(name))
    }
}

/// `CON`、`aux.txt`、`LPT1` 等
pub fn is_reserved_device_name(name: &str) -> bool {
    RESERVED_DEVICE_NAME.is_match(name)
}
