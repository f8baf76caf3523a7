//! # 图像读写模块
//!
//! 把无损格式图像 (PNG, BMP, TIFF, WebP, QOI) 解码为 8 位 RGBA 平铺缓冲区，
//! 并在隐写后重新编码写回磁盘。

use crate::error::{Result, StegoError};
use crate::steganography::{decode, encode};
use image::RgbaImage;
use std::path::Path;

/// 读取图像并转换为 RGBA8 像素缓冲区。
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let image = image::open(path).map_err(|source| StegoError::ContainerLoad {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "loaded '{}' ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image.to_rgba8())
}

/// 将 RGBA8 图像写入 `path`，格式由扩展名决定。
pub fn save_rgba(image: &RgbaImage, path: &Path) -> Result<()> {
    image.save(path).map_err(|source| StegoError::ContainerSave {
        path: path.to_path_buf(),
        source,
    })
}

/// 将 `payload` 隐藏到图像的像素数据中。
pub fn hide_in_image(image: &mut RgbaImage, payload: &[u8]) -> Result<()> {
    encode(image, payload)
}

/// 从图像的像素数据中恢复隐藏的字节。
pub fn reveal_from_image(image: &RgbaImage) -> Vec<u8> {
    decode(image)
}
