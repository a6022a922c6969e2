//! # 图标规格表
//!
//! 文件名 → 目标边长（像素）的静态映射，对应 Tauri v2 `icons/` 目录布局。
//! 所有条目均为正方形输出。

use icns::IconType;

/// 单个 PNG 输出条目。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub file_name: &'static str,
    pub size: u32,
}

const fn spec(file_name: &'static str, size: u32) -> IconSpec {
    IconSpec { file_name, size }
}

/// 通用 PNG 图标（Linux 与基础资源）。
pub const GENERIC_PNG_ICONS: &[IconSpec] = &[
    spec("32x32.png", 32),
    spec("128x128.png", 128),
    // @2x 为两倍分辨率
    spec("128x128@2x.png", 256),
    spec("icon.png", 512),
];

/// Windows 磁贴 / Store 图标（MSIX 打包使用）。
pub const WINDOWS_TILE_ICONS: &[IconSpec] = &[
    spec("Square30x30Logo.png", 30),
    spec("Square44x44Logo.png", 44),
    spec("Square71x71Logo.png", 71),
    spec("Square89x89Logo.png", 89),
    spec("Square107x107Logo.png", 107),
    spec("Square142x142Logo.png", 142),
    spec("Square150x150Logo.png", 150),
    spec("Square284x284Logo.png", 284),
    spec("Square310x310Logo.png", 310),
    spec("StoreLogo.png", 50),
];

pub const ICO_FILE_NAME: &str = "icon.ico";

/// `.ico` 内嵌的标准尺寸。
pub const ICO_SIZES: &[u32] = &[16, 32, 48, 64, 128, 256];

pub const ICNS_FILE_NAME: &str = "icon.icns";

/// `.icns` 要求源图宽高均不小于该值。
pub const ICNS_MIN_SOURCE_DIMENSION: u32 = 512;

/// `.icns` 内嵌的 RGBA 元素（ic07 ~ ic14）。
pub const ICNS_ELEMENTS: &[IconType] = &[
    IconType::RGBA32_16x16_2x,
    IconType::RGBA32_32x32_2x,
    IconType::RGBA32_128x128,
    IconType::RGBA32_128x128_2x,
    IconType::RGBA32_256x256,
    IconType::RGBA32_256x256_2x,
    IconType::RGBA32_512x512,
    IconType::RGBA32_512x512_2x,
];

/// 全部 PNG 条目（通用在前，磁贴在后）。
pub fn png_icons() -> impl Iterator<Item = &'static IconSpec> {
    GENERIC_PNG_ICONS.iter().chain(WINDOWS_TILE_ICONS.iter())
}
