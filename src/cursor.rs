//! # 位光标模块
//!
//! 在像素缓冲区中单调向前移动的读/写位置。
//! 写路径会把经过的 alpha 字节规范化为不透明，读路径只跳过它们。
//! 两条路径对编码单元的全部 9 个位置都执行同样的跳过规则。

use crate::channel::is_alpha_channel;
use crate::constants::OPAQUE_ALPHA;

/// 缓冲区中的读/写位置，只增不减。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BitCursor {
    position: usize,
}

impl BitCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// 光标下一次将要检查的下标。
    pub fn position(&self) -> usize {
        self.position
    }

    /// 返回下一个可写入数据位的下标，并将光标移过它。
    ///
    /// 途经的每个 alpha 字节都会被设为 255。缓冲区耗尽时返回 `None`。
    pub fn next_writable(&mut self, pixels: &mut [u8]) -> Option<usize> {
        while self.position < pixels.len() && is_alpha_channel(self.position) {
            pixels[self.position] = OPAQUE_ALPHA;
            self.position += 1;
        }
        self.take(pixels.len())
    }

    /// 返回下一个可读取数据位的下标，并将光标移过它。缓冲区耗尽时返回 `None`。
    pub fn next_readable(&mut self, pixels: &[u8]) -> Option<usize> {
        while self.position < pixels.len() && is_alpha_channel(self.position) {
            self.position += 1;
        }
        self.take(pixels.len())
    }

    fn take(&mut self, len: usize) -> Option<usize> {
        if self.position >= len {
            return None;
        }
        let index = self.position;
        self.position += 1;
        Some(index)
    }
}
