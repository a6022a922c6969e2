//! # 缩放流水线模块
//!
//! ## 设计思路
//!
//! 所有输出（PNG / ICO 层 / ICNS 元素）都由同一个源图缩放得到，
//! 缩放集中在这里，保证每个输出的边长与规格表严格一致。
//!
//! ## 实现思路
//!
//! 1. 目标尺寸与源图一致时直接复制，不重采样
//! 2. 优先使用 `fast_image_resize` 卷积缩放（自动处理 alpha 预乘）
//! 3. 失败时回退 `image::imageops::resize`，并记录告警

use fast_image_resize as fr;
use image::imageops::FilterType;
use image::RgbaImage;

use super::IconError;
use super::source::SourceImage;

/// 将源图缩放为 `size x size` 的正方形 RGBA 图像。
///
/// 非正方形源图会被拉伸到正方形。
pub fn resize_square(
    source: &SourceImage,
    size: u32,
    filter: FilterType,
) -> Result<RgbaImage, IconError> {
    if size == 0 {
        return Err(IconError::Encode("目标尺寸不能为 0".to_string()));
    }

    let pixels = source.pixels();
    if pixels.width() == size && pixels.height() == size {
        return Ok(pixels.clone());
    }

    match resize_with_fast_image_resize(pixels, size, size, filter) {
        Ok(resized) => Ok(resized),
        Err(err) => {
            log::warn!(
                "⚠️ fast_image_resize 缩放失败，回退 image::imageops::resize：{}",
                err
            );
            Ok(image::imageops::resize(pixels, size, size, filter))
        }
    }
}

fn resize_with_fast_image_resize(
    src: &RgbaImage,
    target_width: u32,
    target_height: u32,
    filter: FilterType,
) -> Result<RgbaImage, IconError> {
    let (src_width, src_height) = src.dimensions();

    let src_image = fr::images::Image::from_vec_u8(
        src_width,
        src_height,
        src.as_raw().clone(),
        fr::PixelType::U8x4,
    )
    .map_err(|e| IconError::Encode(format!("构建源图像缓冲失败：{}", e)))?;

    let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

    let mut resizer = fr::Resizer::new();
    let options = fr::ResizeOptions::new()
        .resize_alg(fr::ResizeAlg::Convolution(to_fast_filter(filter)));

    resizer
        .resize(&src_image, &mut dst_image, Some(&options))
        .map_err(|e| IconError::Encode(format!("fast_image_resize 执行失败：{}", e)))?;

    RgbaImage::from_raw(target_width, target_height, dst_image.into_vec())
        .ok_or_else(|| IconError::Encode("fast_image_resize 输出缓冲长度异常".to_string()))
}

fn to_fast_filter(filter: FilterType) -> fr::FilterType {
    match filter {
        FilterType::Nearest => fr::FilterType::Box,
        FilterType::Triangle => fr::FilterType::Bilinear,
        FilterType::CatmullRom => fr::FilterType::CatmullRom,
        FilterType::Gaussian => fr::FilterType::Mitchell,
        FilterType::Lanczos3 => fr::FilterType::Lanczos3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, ImageFormat, Rgba};
    use proptest::prelude::*;

    fn solid_source(width: u32, height: u32, color: [u8; 4]) -> SourceImage {
        SourceImage {
            pixels: ImageBuffer::from_pixel(width, height, Rgba(color)),
            format: ImageFormat::Png,
        }
    }

    #[test]
    fn same_size_is_copied_verbatim() {
        let source = solid_source(32, 32, [10, 20, 30, 40]);
        let resized = resize_square(&source, 32, FilterType::Lanczos3).expect("resize");
        assert_eq!(resized.as_raw(), source.pixels().as_raw());
    }

    #[test]
    fn solid_color_survives_downscale() {
        let source = solid_source(300, 300, [200, 100, 50, 255]);
        let resized = resize_square(&source, 71, FilterType::Lanczos3).expect("resize");
        assert_eq!(resized.dimensions(), (71, 71));
        for pixel in resized.pixels() {
            for (actual, expected) in pixel.0.iter().zip([200u8, 100, 50, 255]) {
                assert!(actual.abs_diff(expected) <= 1, "{:?}", pixel.0);
            }
        }
    }

    #[test]
    fn non_square_source_is_stretched() {
        let source = solid_source(400, 100, [0, 0, 0, 255]);
        let resized = resize_square(&source, 64, FilterType::Triangle).expect("resize");
        assert_eq!(resized.dimensions(), (64, 64));
    }

    #[test]
    fn zero_size_is_rejected() {
        let source = solid_source(8, 8, [0, 0, 0, 0]);
        assert!(resize_square(&source, 0, FilterType::Nearest).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn output_is_always_the_requested_square(
            width in 1u32..96,
            height in 1u32..96,
            size in 1u32..128,
        ) {
            let source = solid_source(width, height, [1, 2, 3, 255]);
            let resized = resize_square(&source, size, FilterType::Lanczos3).unwrap();
            prop_assert_eq!(resized.dimensions(), (size, size));
            prop_assert_eq!(resized.as_raw().len(), (size * size * 4) as usize);
        }
    }
}
