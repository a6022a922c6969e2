//! # 输出写入模块
//!
//! ## 设计思路
//!
//! 三种输出格式各自一个入口，每个文件独立写入并在返回前关闭。
//! 已存在的同名文件直接覆盖。
//!
//! ## 实现思路
//!
//! - PNG：委托 `image` crate 编码。
//! - ICO：`ico` crate，每个尺寸一个 `IconDirEntry`。
//! - ICNS：`icns` crate，每个 `IconType` 一个 RGBA 元素。

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use icns::{IconFamily, IconType, PixelFormat};
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::imageops::FilterType;
use image::{ImageFormat, RgbaImage};

use super::IconError;
use super::pipeline::resize_square;
use super::source::SourceImage;

/// 将 RGBA 图像保存为 PNG。
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<(), IconError> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| IconError::Encode(format!("保存 PNG 失败 {}：{}", path.display(), e)))
}

/// 生成包含多个尺寸的 Windows `.ico`。
pub fn write_ico(
    source: &SourceImage,
    sizes: &[u32],
    filter: FilterType,
    path: &Path,
) -> Result<(), IconError> {
    let mut icon_dir = IconDir::new(ResourceType::Icon);

    for &size in sizes {
        let rgba = resize_square(source, size, filter)?;
        let icon_image = IconImage::from_rgba_data(size, size, rgba.into_raw());
        let entry = IconDirEntry::encode(&icon_image)
            .map_err(|e| IconError::Encode(format!("编码 {}x{} ICO 层失败：{}", size, size, e)))?;
        icon_dir.add_entry(entry);
        log::debug!("ICO 层：{}x{}", size, size);
    }

    let mut file = create_output(path)?;
    icon_dir
        .write(&mut file)
        .map_err(|e| IconError::Encode(format!("写入 ICO 失败：{}", e)))?;
    finish_output(file, path)
}

/// 生成包含多个 RGBA 元素的 macOS `.icns`。
pub fn write_icns(
    source: &SourceImage,
    elements: &[IconType],
    filter: FilterType,
    path: &Path,
) -> Result<(), IconError> {
    let mut family = IconFamily::new();

    for &icon_type in elements {
        let size = icon_type.pixel_width();
        let rgba = resize_square(source, size, filter)?;
        let image = icns::Image::from_data(PixelFormat::RGBA, size, size, rgba.into_raw())
            .map_err(|e| IconError::Encode(format!("构建 {}x{} ICNS 图像失败：{}", size, size, e)))?;
        family
            .add_icon_with_type(&image, icon_type)
            .map_err(|e| IconError::Encode(format!("编码 ICNS 元素 {:?} 失败：{}", icon_type, e)))?;
        log::debug!("ICNS 元素：{:?} ({}x{})", icon_type, size, size);
    }

    let mut file = create_output(path)?;
    family
        .write(&mut file)
        .map_err(|e| IconError::Encode(format!("写入 ICNS 失败：{}", e)))?;
    finish_output(file, path)
}

fn create_output(path: &Path) -> Result<BufWriter<File>, IconError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| IconError::FileSystem(format!("无法创建文件 {}：{}", path.display(), e)))
}

fn finish_output(mut file: BufWriter<File>, path: &Path) -> Result<(), IconError> {
    file.flush()
        .map_err(|e| IconError::FileSystem(format!("无法写入文件 {}：{}", path.display(), e)))
}
