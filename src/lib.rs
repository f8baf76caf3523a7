//! # steggo 库
//!
//! 本库包含奇偶 (LSB) 隐写工具的核心逻辑：
//! 把任意字节序列隐藏在 RGBA 像素缓冲区的最低位中，并无损地恢复。

// 声明库包含的所有模块。

pub mod channel;
pub mod cli;
pub mod constants;
pub mod cursor;
pub mod error;
pub mod handler;
pub mod image_io;
pub mod steganography;

pub use error::{Result, StegoError};
pub use steganography::{capacity, decode, encode};
