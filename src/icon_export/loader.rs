//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 在“尽可能早”的阶段执行输入校验，校验失败时不产生任何输出文件。
//!
//! ## 实现思路
//!
//! 1. 存在性检查（`MissingSource`）
//! 2. metadata 体积限制
//! 3. 读取字节、猜测格式、读取 header 尺寸
//! 4. 按像素上限快速拒绝
//! 5. 完整解码并统一转换为 RGBA8

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, ImageReader};

use super::source::SourceImage;
use super::{ExportConfig, IconError};

/// 从本地路径加载并解码源图片。
pub fn load_source(path: &Path, config: &ExportConfig) -> Result<SourceImage, IconError> {
    log::info!("📁 开始读取源图片 - 路径: {}", path.display());

    if !path.exists() {
        return Err(IconError::MissingSource(path.to_path_buf()));
    }

    let metadata = std::fs::metadata(path)
        .map_err(|e| IconError::FileSystem(format!("无法读取文件信息：{}", e)))?;

    if !metadata.is_file() {
        return Err(IconError::DecodeFailure(format!(
            "源路径不是文件：{}",
            path.display()
        )));
    }

    if metadata.len() > config.max_file_size {
        return Err(IconError::ResourceLimit(format!(
            "文件过大：{:.2} MB（限制：{:.2} MB）",
            metadata.len() as f64 / 1024.0 / 1024.0,
            config.max_file_size as f64 / 1024.0 / 1024.0
        )));
    }

    let bytes = std::fs::read(path)
        .map_err(|e| IconError::FileSystem(format!("无法读取图片文件：{}", e)))?;

    // TGA 等格式没有文件签名，签名识别失败时按扩展名判断
    let format = image::guess_format(&bytes)
        .or_else(|_| ImageFormat::from_path(path))
        .map_err(|e| IconError::DecodeFailure(format!("不支持的图片格式：{}", e)))?;

    decode_with_format(&bytes, format, config)
}

/// 将内存中的图片字节解码为 RGBA8 源图（仅按文件签名识别格式）。
pub(crate) fn decode_source(bytes: &[u8], config: &ExportConfig) -> Result<SourceImage, IconError> {
    let format: ImageFormat = image::guess_format(bytes)
        .map_err(|e| IconError::DecodeFailure(format!("不支持的图片格式：{}", e)))?;

    decode_with_format(bytes, format, config)
}

fn decode_with_format(
    bytes: &[u8],
    format: ImageFormat,
    config: &ExportConfig,
) -> Result<SourceImage, IconError> {
    let (header_width, header_height) = inspect_dimensions(bytes, format)?;
    validate_dimensions(config, header_width, header_height)?;

    let decoded = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| IconError::DecodeFailure(format!("图片解码失败：{}", e)))?;

    // 统一像素格式，调色板 / 灰度 / 16 位图都在这里归一
    let pixels = decoded.into_rgba8();
    validate_dimensions(config, pixels.width(), pixels.height())?;

    log::info!(
        "✅ 已加载源图片 - 格式: {:?} 尺寸: {}x{}",
        format,
        pixels.width(),
        pixels.height()
    );

    Ok(SourceImage { pixels, format })
}

/// 仅通过图片头信息读取宽高，用于在完整解码前做像素限制检查。
fn inspect_dimensions(bytes: &[u8], format: ImageFormat) -> Result<(u32, u32), IconError> {
    ImageReader::with_format(Cursor::new(bytes), format)
        .into_dimensions()
        .map_err(|e| IconError::DecodeFailure(format!("无法读取图片尺寸：{}", e)))
}

fn validate_dimensions(config: &ExportConfig, width: u32, height: u32) -> Result<(), IconError> {
    if width == 0 || height == 0 {
        return Err(IconError::DecodeFailure(format!(
            "图片尺寸无效：{}x{}",
            width, height
        )));
    }

    let pixels = (width as u64)
        .checked_mul(height as u64)
        .ok_or_else(|| IconError::ResourceLimit("图片像素数溢出".to_string()))?;

    if pixels > config.max_decoded_pixels {
        return Err(IconError::ResourceLimit(format!(
            "图片像素过大：{} 像素（限制：{} 像素）",
            pixels, config.max_decoded_pixels
        )));
    }

    Ok(())
}
