//! # 奇偶隐写核心
//!
//! 每个载荷字节被编码为一个编码单元：连续 9 个非 alpha 字节，
//! 前 8 个字节的奇偶性按最高位优先保存数据位，第 9 个字节是帧信号位
//! (偶数 = 后面还有字节，奇数 = 最后一个字节)。没有长度前缀，也没有魔数。

use crate::channel::carrier_positions;
use crate::constants::{BITS_PER_UNIT, DATA_BITS_PER_UNIT};
use crate::cursor::BitCursor;
use crate::error::{Result, StegoError};

/// 清除最低位。已是偶数时不做任何修改。
#[inline]
pub fn set_even(byte: &mut u8) {
    *byte &= !1;
}

/// 置位最低位。已是奇数时不做任何修改。
#[inline]
pub fn set_odd(byte: &mut u8) {
    *byte |= 1;
}

/// 让 `byte` 的奇偶性与 `bit` (0 或 1) 一致，其余位保持不变。
#[inline]
pub fn set_parity(byte: &mut u8, bit: u8) {
    if bit & 1 == 0 {
        set_even(byte)
    } else {
        set_odd(byte)
    }
}

/// 字节的奇偶性：奇数返回 1，偶数返回 0。
#[inline]
pub fn parity(byte: u8) -> u8 {
    byte & 1
}

/// 长度为 `len` 的 RGBA 缓冲区最多能隐藏多少个载荷字节。
pub fn capacity(len: usize) -> usize {
    carrier_positions(len) / BITS_PER_UNIT
}

/// 将 `payload` 隐藏到 `pixels` 中。
///
/// 光标经过的 alpha 字节被设为 255；承载数据的字节只改动最低位。
/// 容量在写入任何字节之前校验，失败时缓冲区保持原样。
///
/// # Errors
///
/// * [`StegoError::EmptyPayload`] - 载荷为空。
/// * [`StegoError::Capacity`] - 非 alpha 字节不足 `payload.len() * 9` 个。
pub fn encode(pixels: &mut [u8], payload: &[u8]) -> Result<()> {
    if payload.is_empty() {
        return Err(StegoError::EmptyPayload);
    }

    let available = carrier_positions(pixels.len());
    let required = payload
        .len()
        .checked_mul(BITS_PER_UNIT)
        .ok_or(StegoError::Capacity {
            required: usize::MAX,
            available,
        })?;
    if required > available {
        return Err(StegoError::Capacity {
            required,
            available,
        });
    }

    let exhausted = || StegoError::Capacity {
        required,
        available,
    };

    let mut cursor = BitCursor::new();
    let mut signal = 0;
    for &value in payload {
        for shift in (0..DATA_BITS_PER_UNIT).rev() {
            let index = cursor.next_writable(pixels).ok_or_else(exhausted)?;
            set_parity(&mut pixels[index], value >> shift);
        }
        signal = cursor.next_writable(pixels).ok_or_else(exhausted)?;
        set_even(&mut pixels[signal]);
    }
    set_odd(&mut pixels[signal]);

    log::debug!(
        "embedded {} byte(s) using {} of {} carrier bytes; stop signal at index {}",
        payload.len(),
        required,
        available,
        signal
    );

    Ok(())
}

/// 从 `pixels` 中恢复隐藏的字节序列。
///
/// 遇到奇数信号位时停止。缓冲区在此之前耗尽时，返回已恢复的部分，
/// 不足 8 位的残余字节被丢弃。对于并非由 [`encode`] 生成的缓冲区，结果没有意义。
pub fn decode(pixels: &[u8]) -> Vec<u8> {
    let mut cursor = BitCursor::new();
    let mut message = Vec::new();

    'units: loop {
        let mut value: u8 = 0;
        for _ in 0..DATA_BITS_PER_UNIT {
            let Some(index) = cursor.next_readable(pixels) else {
                break 'units;
            };
            value = (value << 1) | parity(pixels[index]);
        }
        message.push(value);

        let Some(signal) = cursor.next_readable(pixels) else {
            break;
        };
        if parity(pixels[signal]) == 1 {
            log::debug!(
                "stop signal at index {} after {} byte(s)",
                signal,
                message.len()
            );
            return message;
        }
    }

    log::debug!(
        "buffer exhausted without stop signal; returning {} byte(s)",
        message.len()
    );
    message
}
