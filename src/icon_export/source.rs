//! # 数据源与结果模型
//!
//! - `SourceImage`：已解码并统一为 RGBA8 的源图，整次导出只读
//! - `ExportReport`：一次导出的产物清单与告警

use std::path::PathBuf;

use image::{ImageFormat, RgbaImage};

use super::ExportWarning;

/// 已加载的源图片。
pub struct SourceImage {
    pub(crate) pixels: RgbaImage,
    /// 探测到的输入格式（用于日志与诊断）。
    pub(crate) format: ImageFormat,
}

impl SourceImage {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

/// 产物类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Png,
    Ico,
    Icns,
}

/// 单个已写入的文件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenIcon {
    pub path: PathBuf,
    pub kind: OutputKind,
    /// PNG 为边长；容器为内嵌的最大边长。
    pub size: u32,
}

/// 一次导出的结果。
#[derive(Debug, Clone, Default)]
pub struct ExportReport {
    pub output_dir: PathBuf,
    pub written: Vec<WrittenIcon>,
    pub warnings: Vec<ExportWarning>,
}

impl ExportReport {
    pub fn count_of(&self, kind: OutputKind) -> usize {
        self.written.iter().filter(|icon| icon.kind == kind).count()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
