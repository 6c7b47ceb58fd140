//! 规范化器配置
//!
//! 从 TOML 文件（扩展名为 `.json` 时按 JSON）加载基准目录与文件名规则选项
//!
//! ```toml
//! base_dir = "Z:/data"
//! reject_reserved_names = true
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::path_resolver::{BaseDir, PathNormalizer, PortableRules, ResolvedPath};

// ==================== 数据结构 ====================

/// 规范化器配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// 规范化的绝对基准目录，带驱动器前缀时使用 Windows 方言
    pub base_dir: String,

    /// 拒绝 Windows 设备名（`CON`、`NUL`、`COM1` 等）
    pub reject_reserved_names: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            base_dir: "/".to_string(),
            reject_reserved_names: false,
        }
    }
}

// ==================== 加载 ====================

impl NormalizerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("解析规范化器配置失败")
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("解析规范化器配置失败")
    }

    /// 从 `path` 加载，`.json` 文件按 JSON 读取，其余按 TOML
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("无法读取配置文件: {}", path.display()))?;

        let is_json = path.extension().and_then(|ext| ext.to_str()) == Some("json");
        let config = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
        .with_context(|| format!("配置文件无效: {}", path.display()))?;

        log::info!("已从 {} 加载规范化器配置", path.display());
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("序列化规范化器配置失败")
    }

    pub fn rules(&self) -> PortableRules {
        PortableRules {
            reject_reserved_names: self.reject_reserved_names,
        }
    }

    /// 解析基准目录
    pub fn base_dir(&self) -> Result<BaseDir> {
        let resolved: ResolvedPath = self.base_dir.parse().with_context(|| {
            format!("base_dir 必须是规范化的绝对路径: {:?}", self.base_dir)
        })?;
        Ok(BaseDir::from(resolved))
    }

    /// 按此配置构造规范化器
    pub fn build(&self) -> Result<PathNormalizer<PortableRules>> {
        let base_dir = self.base_dir()?;
        log::debug!(
            "构造 {} 规范化器，根为 {}",
            base_dir.dialect(),
            self.base_dir
        );
        Ok(PathNormalizer::with_rules(base_dir, self.rules()))
    }
}
