//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载图标导出链路中的所有致命错误，调用侧可按分支匹配。
//! “源图尺寸不足”不是错误，只影响 `.icns` 一项输出，见 [`ExportWarning`]。

use std::fmt;
use std::path::PathBuf;

/// 图标导出统一错误类型。
///
/// 任一分支都会中止整次导出。
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("找不到源文件：{}", .0.display())]
    MissingSource(PathBuf),

    #[error("解码错误：{0}")]
    DecodeFailure(String),

    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("编码错误：{0}")]
    Encode(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),

    #[error("配置错误：{0}")]
    InvalidConfig(String),
}

/// 非致命告警：跳过单项输出，其余输出照常生成。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportWarning {
    /// 源图小于 `.icns` 建议的最小尺寸。
    UndersizedSource { width: u32, height: u32, min: u32 },
}

impl fmt::Display for ExportWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndersizedSource { width, height, min } => write!(
                f,
                "源图片 {}x{} 小于 {}px，已跳过 .icns（建议使用 1024x1024 的源图）",
                width, height, min
            ),
        }
    }
}
