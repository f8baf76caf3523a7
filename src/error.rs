//! # 错误类型模块
//!
//! 隐写核心与图像 I/O 可能产生的全部错误。

use std::path::PathBuf;
use thiserror::Error;

/// 本库统一使用的 `Result` 别名。
pub type Result<T> = std::result::Result<T, StegoError>;

#[derive(Error, Debug)]
pub enum StegoError {
    /// 图像文件无法读取或解码 (文件缺失、损坏或格式不受支持)。
    #[error("unable to load image '{}'", path.display())]
    ContainerLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// 图像无法编码或写入目标路径。
    #[error("unable to save image '{}'", path.display())]
    ContainerSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// 载荷文件无法读取。
    #[error("unable to read payload file '{}'", path.display())]
    PayloadRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 恢复出的数据无法写入目标文件或标准输出。
    #[error("unable to write output '{}'", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 目标文件已存在，且未要求强制覆盖。
    #[error("Output file already exists: '{}' (use --force to overwrite)", path.display())]
    OutputExists { path: PathBuf },

    /// 像素缓冲区的非 alpha 字节不足以容纳载荷。
    #[error(
        "Not enough space in the image: payload needs {required} carrier bytes but only {available} are available"
    )]
    Capacity { required: usize, available: usize },

    /// 帧格式无法表示零长度的载荷。
    #[error("payload is empty; at least one byte is required")]
    EmptyPayload,
}
