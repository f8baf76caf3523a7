//! # 通道选择模块
//!
//! 判断像素缓冲区中的某个线性下标是否属于 alpha 通道。
//! 编码器与解码器都只通过这里的函数判断通道布局，以保证两者步调一致。

use crate::constants::{ALPHA_OFFSET, CHANNELS_PER_PIXEL};

/// 下标 `index` 处的字节是否为 alpha 通道字节 (`index % 4 == 3`)。
#[inline]
pub fn is_alpha_channel(index: usize) -> bool {
    index % CHANNELS_PER_PIXEL == ALPHA_OFFSET
}

/// 长度为 `len` 的缓冲区中可承载数据位的非 alpha 字节数量。
pub fn carrier_positions(len: usize) -> usize {
    len - len / CHANNELS_PER_PIXEL
}
