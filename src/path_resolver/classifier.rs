//! 路径分类器
//!
//! 对分词后的路径做根判定与方言校验

use super::dialect::Dialect;
use super::error::PathError;
use super::filename::{FilenameRules, PortableRules};
use super::segment::{tokenize, Segment};

/// `segment` 是否表示根
///
/// 严格模式用于"已规范化"检查，此时 Windows 路径必须带驱动器，裸 `/` 不够；
/// 非严格模式只关心路径是否有根。
pub fn is_root_segment(segment: &str, dialect: Dialect, strict: bool) -> bool {
    Segment::classify(segment, dialect, strict).is_rooted()
}

/// 按 `dialect` 校验 `path`，返回带类型的路径段
///
/// 第 0 段按非严格规则分类；根之后的每个名称（相对路径则为全部段）
/// 都必须满足 `rules`。
pub fn validate_with<R>(
    path: &str,
    dialect: Dialect,
    rules: &R,
) -> Result<Vec<Segment>, PathError>
where
    R: FilenameRules + ?Sized,
{
    let invalid = || PathError::InvalidSyntax {
        path: path.to_string(),
        dialect,
    };

    if !dialect.is_windows() && path.contains('\\') {
        return Err(invalid());
    }

    let segments = tokenize(path, dialect);
    if segments.is_empty() {
        return Err(PathError::Empty);
    }

    let all_names_valid = segments.iter().all(|segment| match segment {
        Segment::Name(name) => rules.is_valid_name(name, dialect),
        Segment::Root | Segment::Drive(_) => true,
    });

    if !all_names_valid {
        log::debug!("拒绝 {} 路径 {:?}: 含非法路径段", dialect, path);
        return Err(invalid());
    }

    Ok(segments)
}

/// 检查 `path` 在 `dialect` 与 `rules` 下是否已是规范形式
pub fn check_normalized_with<R>(
    path: &str,
    dialect: Dialect,
    rules: &R,
) -> Result<Vec<Segment>, PathError>
where
    R: FilenameRules + ?Sized,
{
    let segments = validate_with(path, dialect, rules)?;

    let strictly_rooted = match &segments[0] {
        Segment::Drive(_) => true,
        Segment::Root => !dialect.is_windows(),
        Segment::Name(_) => false,
    };

    if !strictly_rooted || segments.iter().any(Segment::is_dot_entry) {
        return Err(PathError::NotNormalized {
            path: path.to_string(),
            dialect,
        });
    }

    Ok(segments)
}

/// 使用内置文件名规则的语法检查
pub fn is_valid_path(path: &str, is_windows: bool) -> bool {
    let dialect = Dialect::from_is_windows(is_windows);
    validate_with(path, dialect, &PortableRules::new()).is_ok()
}

/// 使用内置文件名规则的规范形式检查
///
/// 合法、严格有根，且不含 `.` 与 `..` 段。
pub fn is_normalized_path(path: &str, is_windows: bool) -> bool {
    let dialect = Dialect::from_is_windows(is_windows);
    check_normalized_with(path, dialect, &PortableRules::new()).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_root_segment() {
        assert!(is_root_segment("/", Dialect::Posix, true));
        assert!(is_root_segment("/", Dialect::Posix, false));
        assert!(is_root_segment("/", Dialect::Windows, false));
        assert!(!is_root_segment("/", Dialect::Windows, true));

        assert!(is_root_segment("C:", Dialect::Windows, true));
        assert!(is_root_segment("C:", Dialect::Windows, false));
        assert!(!is_root_segment("C:", Dialect::Posix, false));
        assert!(!is_root_segment("c:", Dialect::Windows, false));
        assert!(!is_root_segment("a", Dialect::Posix, false));
    }

    #[test]
    fn test_posix_rejections() {
        assert!(!is_valid_path("", false));
        assert!(!is_valid_path("\\", false));
        assert!(!is_valid_path("a\\b", false));
        assert!(!is_valid_path("C:", false));
        assert!(!is_valid_path("C:/", false));
        assert!(!is_valid_path("C:/a", false));
        assert!(!is_valid_path("/my file", false));
    }

    #[test]
    fn test_posix_valid_paths() {
        for path in [
            "/", "//", "///", "a", "/a", "a/b", "/a/b/c", ".", "/.", "/./..", "/./../..",
            "a/", "/a/b/", "./", "/./../../", "a//b//c//", "//a//b//c",
        ] {
            assert!(is_valid_path(path, false), "{:?} should be valid", path);
        }
    }

    #[test]
    fn test_windows_valid_paths() {
        for path in [
            "/", "//", "a", "/a/b/c", "/./../..", "a/b/", "C:", "C:/", "C:/a/b/c", "C:/.",
            "C:/./..", "//a/b//c//", "C:\\", "C:\\a\\b", "C:\\.\\..", "\\\\a/b\\\\c\\\\",
            "a\\\\b\\\\", "C:\\My Documents\\v2.0",
        ] {
            assert!(is_valid_path(path, true), "{:?} should be valid", path);
        }
    }

    #[test]
    fn test_windows_rejections() {
        assert!(!is_valid_path("", true));
        assert!(!is_valid_path("c:\\", true));
        assert!(!is_valid_path("C:/a/D:", true));
        assert!(!is_valid_path("C:/a?", true));
        assert!(!is_valid_path("C:/dir./file", true));
    }

    #[test]
    fn test_validate_reports_error_kind() {
        let rules = PortableRules::new();
        assert_eq!(validate_with("", Dialect::Posix, &rules), Err(PathError::Empty));
        assert!(matches!(
            validate_with("a\\b", Dialect::Posix, &rules),
            Err(PathError::InvalidSyntax { dialect: Dialect::Posix, .. })
        ));
        assert_eq!(
            validate_with("C:/a", Dialect::Windows, &rules),
            Ok(vec![Segment::Drive('C'), Segment::name("a")])
        );
    }

    #[test]
    fn test_reserved_names_need_opt_in() {
        let strict = PortableRules::rejecting_reserved_names();
        assert!(is_valid_path("C:/CON", true));
        assert!(validate_with("C:/CON", Dialect::Windows, &strict).is_err());
    }

    #[test]
    fn test_posix_normalized() {
        for path in ["/", "//", "///", "/a", "/a/b", "/a/b/c", "/a/", "/a/b/", "//a//b//c"] {
            assert!(is_normalized_path(path, false), "{:?} should be normalized", path);
        }
        for path in ["a", "a/b", ".", "/.", "/./..", "a/", "./", "/./", "a//b//c//"] {
            assert!(!is_normalized_path(path, false), "{:?} should not be normalized", path);
        }
    }

    #[test]
    fn test_windows_normalized() {
        for path in ["C:", "C:/", "C:/a", "C:/a/b/c", "C:/a/", "C:\\", "C:\\a\\b", "C:\\a\\"] {
            assert!(is_normalized_path(path, true), "{:?} should be normalized", path);
        }
        for path in [
            "/", "//", "/a", "/a/b/c", "a", "a/b", ".", "/./..", "C:/.", "C:/./..", "C:\\.",
            "//a/b//c//", "a//b//", "\\\\a/b\\\\c\\\\",
        ] {
            assert!(!is_normalized_path(path, true), "{:?} should not be normalized", path);
        }
    }

    #[test]
    fn test_not_normalized_error() {
        let rules = PortableRules::new();
        assert!(matches!(
            check_normalized_with("/a", Dialect::Windows, &rules),
            Err(PathError::NotNormalized { .. })
        ));
        assert!(matches!(
            check_normalized_with("", Dialect::Windows, &rules),
            Err(PathError::Empty)
        ));
    }
}
