use rand::{Rng, RngCore};
use steggo::channel::is_alpha_channel;
use steggo::constants::BITS_PER_UNIT;
use steggo::steganography::{capacity, decode, encode, parity, set_even, set_odd, set_parity};
use steggo::StegoError;

/// 第 `k` 个非 alpha 字节在缓冲区中的线性下标
fn carrier_index(k: usize) -> usize {
    k + k / 3
}

/// 第 `unit` 个编码单元的信号位下标
fn signal_index(unit: usize) -> usize {
    carrier_index(unit * BITS_PER_UNIT + BITS_PER_UNIT - 1)
}

fn random_buffer(len: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; len];
    rand::rng().fill_bytes(&mut pixels);
    pixels
}

/// 文档中的示例：在 40 字节的全零缓冲区中隐藏 'm' (0x6D)
#[test]
fn test_single_byte_worked_example() {
    let mut pixels = vec![0u8; 40];
    encode(&mut pixels, &[0x6D]).unwrap();

    let mut expected = vec![0u8; 40];
    expected[..11].copy_from_slice(&[0, 1, 1, 255, 0, 1, 1, 255, 0, 1, 1]);
    assert_eq!(pixels, expected);

    assert_eq!(decode(&pixels), vec![0x6D]);
}

#[test]
fn test_round_trip_random_buffers() {
    let mut rng = rand::rng();
    for _ in 0..200 {
        let payload_len = rng.random_range(1..=64);
        let mut payload = vec![0u8; payload_len];
        rng.fill_bytes(&mut payload);

        let extra_pixels = rng.random_range(0..32);
        let len = (payload_len * BITS_PER_UNIT).div_ceil(3) * 4 + extra_pixels * 4;
        let mut pixels = random_buffer(len);

        encode(&mut pixels, &payload).unwrap();
        assert_eq!(decode(&pixels), payload);
    }
}

#[test]
fn test_round_trip_zero_buffer_text() {
    let payload = "Hello, 隐写术! \u{1F980}".as_bytes();
    let mut pixels = vec![0u8; 4 * 200];
    encode(&mut pixels, payload).unwrap();
    assert_eq!(decode(&pixels), payload);
}

/// 光标经过的 alpha 字节都变为 255，之后的 alpha 字节保持原样
#[test]
fn test_touched_alpha_bytes_are_opaque() {
    let original = random_buffer(400);
    let mut pixels = original.clone();
    let payload = b"alpha check";
    encode(&mut pixels, payload).unwrap();

    let last = signal_index(payload.len() - 1);
    for i in (0..pixels.len()).filter(|&i| is_alpha_channel(i)) {
        if i < last {
            assert_eq!(pixels[i], 255, "alpha byte {i} was not normalized");
        } else {
            assert_eq!(pixels[i], original[i], "alpha byte {i} was touched");
        }
    }
}

/// 非 alpha 字节最多只改动最低位，未使用的字节完全不变
#[test]
fn test_carrier_bytes_change_only_low_bit() {
    let original = random_buffer(400);
    let mut pixels = original.clone();
    let payload = b"low bits only";
    encode(&mut pixels, payload).unwrap();

    let last = signal_index(payload.len() - 1);
    for i in (0..pixels.len()).filter(|&i| !is_alpha_channel(i)) {
        assert_eq!(pixels[i] & !1, original[i] & !1, "high bits changed at {i}");
        if i > last {
            assert_eq!(pixels[i], original[i], "unused byte {i} changed");
        }
    }
}

/// 只有最后一个编码单元的信号位是奇数
#[test]
fn test_single_stop_signal() {
    let mut pixels = random_buffer(1000);
    let payload = b"exactly one stop";
    encode(&mut pixels, payload).unwrap();

    let signals: Vec<u8> = (0..payload.len())
        .map(|unit| parity(pixels[signal_index(unit)]))
        .collect();
    let (last, earlier) = signals.split_last().unwrap();
    assert_eq!(*last, 1);
    assert!(earlier.iter().all(|&s| s == 0), "signals: {signals:?}");
}

#[test]
fn test_parity_setters_are_idempotent() {
    for value in 0..=u8::MAX {
        let mut byte = value;
        set_even(&mut byte);
        let even = byte;
        set_even(&mut byte);
        assert_eq!(byte, even);
        assert_eq!(parity(byte), 0);
        assert_eq!(byte | 1, value | 1);

        let mut byte = value;
        set_odd(&mut byte);
        let odd = byte;
        set_odd(&mut byte);
        assert_eq!(byte, odd);
        assert_eq!(parity(byte), 1);

        let mut byte = value;
        set_parity(&mut byte, value & 1);
        assert_eq!(byte, value, "matching parity must be a no-op");
    }
}

#[test]
fn test_empty_payload_is_rejected_without_mutation() {
    let original = random_buffer(64);
    let mut pixels = original.clone();
    let result = encode(&mut pixels, &[]);
    assert!(matches!(result, Err(StegoError::EmptyPayload)));
    assert_eq!(pixels, original);
}

#[test]
fn test_capacity_exhaustion_leaves_buffer_untouched() {
    let original = random_buffer(40);
    let mut pixels = original.clone();
    assert_eq!(capacity(pixels.len()), 3);

    let result = encode(&mut pixels, b"four");
    match result {
        Err(StegoError::Capacity {
            required,
            available,
        }) => {
            assert_eq!(required, 36);
            assert_eq!(available, 30);
        }
        other => panic!("expected capacity error, got {other:?}"),
    }
    assert_eq!(pixels, original);

    encode(&mut pixels, b"two").unwrap();
    assert_eq!(decode(&pixels), b"two");
}

/// 缓冲区在出现奇数信号位之前耗尽时，返回已恢复的字节，不足 8 位的残余被丢弃
#[test]
fn test_decode_truncates_silently() {
    let pixels = vec![0u8; 40];
    assert_eq!(decode(&pixels), vec![0, 0, 0]);

    assert!(decode(&[]).is_empty());
    assert!(decode(&[1, 1, 1, 255, 1, 1]).is_empty());
}

/// 信号位紧邻 alpha 字节 (像素内偏移 2) 时，编码与解码仍然同步
#[test]
fn test_signal_slot_next_to_alpha_stays_in_sync() {
    for payload_len in 1..=24 {
        let payload: Vec<u8> = (0..payload_len as u8).map(|b| b.wrapping_mul(37) ^ 0xA5).collect();

        // 缓冲区恰好结束在最后一个信号位上，之后的 alpha 字节不存在
        let len = signal_index(payload_len - 1) + 1;
        let mut pixels = random_buffer(len);
        encode(&mut pixels, &payload).unwrap();
        assert_eq!(decode(&pixels), payload, "payload_len = {payload_len}");

        for unit in 0..payload_len {
            let signal = signal_index(unit);
            assert!(!is_alpha_channel(signal));
            assert!(is_alpha_channel(signal + 1), "unit {unit}: signal at {signal}");
        }
    }
}

#[test]
fn test_capacity_counts_whole_units() {
    assert_eq!(capacity(0), 0);
    assert_eq!(capacity(11), 1);
    assert_eq!(capacity(10), 0);
    assert_eq!(capacity(40), 3);
    assert_eq!(capacity(100 * 100 * 4), 100 * 100 * 3 / 9);
}
