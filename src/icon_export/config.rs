//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有“可调策略”集中到 `ExportConfig`，保证导出行为可观测、可测试。
//! 缩放质量档位（quality / balanced / speed）作为高层语义，映射到具体滤镜。
//!
//! ## 实现思路
//!
//! - `Default` 提供与打包流程一致的高质量配置（Lanczos3）。
//! - `ResizeQuality` 负责档位字符串解析与反向输出。
//! - `apply_resize_quality` / `infer_resize_quality` 在档位与滤镜之间互转。

use std::path::PathBuf;

use image::imageops::FilterType;

use super::IconError;
use super::table::ICNS_MIN_SOURCE_DIMENSION;

pub const DEFAULT_OUTPUT_DIR: &str = "icons";

/// 图标导出配置。
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// 未显式指定时使用的输出目录。
    pub output_dir: PathBuf,
    /// 缩放滤镜。
    pub resize_filter: FilterType,
    /// 生成 `.icns` 所需的源图最小边长。
    pub icns_min_dimension: u32,
    /// 源文件允许的最大体积（字节）。
    pub max_file_size: u64,
    /// 解码后的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            resize_filter: FilterType::Lanczos3,
            icns_min_dimension: ICNS_MIN_SOURCE_DIMENSION,
            max_file_size: 100 * 1024 * 1024,
            max_decoded_pixels: 100_000_000,
        }
    }
}

/// 缩放质量档位。
///
/// - `Quality`：Lanczos3，图标打包默认值
/// - `Balanced`：CatmullRom
/// - `Speed`：Triangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeQuality {
    Quality,
    Balanced,
    Speed,
}

impl ResizeQuality {
    /// 从外部字符串解析档位。
    ///
    /// # 示例
    /// ```rust
    /// use tauri_icon_export::icon_export::ResizeQuality;
    ///
    /// let q = ResizeQuality::parse(" Balanced ")?;
    /// assert_eq!(q.as_str(), "balanced");
    /// # Ok::<(), tauri_icon_export::icon_export::IconError>(())
    /// ```
    pub fn parse(quality: &str) -> Result<Self, IconError> {
        match quality.trim().to_lowercase().as_str() {
            "quality" => Ok(Self::Quality),
            "balanced" => Ok(Self::Balanced),
            "speed" => Ok(Self::Speed),
            other => Err(IconError::InvalidConfig(format!(
                "未知缩放档位：{}（可选：quality / balanced / speed）",
                other
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Quality => "quality",
            Self::Balanced => "balanced",
            Self::Speed => "speed",
        }
    }

    fn filter(self) -> FilterType {
        match self {
            Self::Quality => FilterType::Lanczos3,
            Self::Balanced => FilterType::CatmullRom,
            Self::Speed => FilterType::Triangle,
        }
    }
}

impl ExportConfig {
    /// 以指定输出目录构建默认配置。
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    pub fn apply_resize_quality(&mut self, quality: ResizeQuality) {
        self.resize_filter = quality.filter();
    }

    /// 基于当前滤镜反推档位；`Nearest` / `Gaussian` 归入最接近的档位。
    pub fn infer_resize_quality(&self) -> ResizeQuality {
        match self.resize_filter {
            FilterType::Lanczos3 => ResizeQuality::Quality,
            FilterType::CatmullRom | FilterType::Gaussian => ResizeQuality::Balanced,
            FilterType::Triangle | FilterType::Nearest => ResizeQuality::Speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_lanczos_and_icons_dir() {
        let config = ExportConfig::default();
        assert_eq!(config.resize_filter, FilterType::Lanczos3);
        assert_eq!(config.output_dir, PathBuf::from("icons"));
        assert_eq!(config.icns_min_dimension, 512);
        assert_eq!(config.infer_resize_quality(), ResizeQuality::Quality);
    }

    #[test]
    fn resize_quality_roundtrips_through_config() {
        let mut config = ExportConfig::default();
        for quality in [ResizeQuality::Speed, ResizeQuality::Balanced, ResizeQuality::Quality] {
            config.apply_resize_quality(quality);
            assert_eq!(config.infer_resize_quality(), quality);
            assert_eq!(ResizeQuality::parse(quality.as_str()).unwrap(), quality);
        }
    }

    #[test]
    fn unknown_resize_quality_is_rejected() {
        assert!(matches!(
            ResizeQuality::parse("ultra"),
            Err(IconError::InvalidConfig(_))
        ));
    }
}
