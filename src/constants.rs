/// 每个 RGBA 像素占用的字节数。
pub const CHANNELS_PER_PIXEL: usize = 4;

/// Alpha 通道在像素内的偏移量 (R=0, G=1, B=2, A=3)。
/// 满足 `index % CHANNELS_PER_PIXEL == ALPHA_OFFSET` 的字节永远不承载数据。
pub const ALPHA_OFFSET: usize = 3;

/// 每个载荷字节的数据位数，按最高位优先写入。
pub const DATA_BITS_PER_UNIT: usize = 8;

/// 一个编码单元占用的非 alpha 字节数：8 个数据位加 1 个帧信号位。
/// 信号位为偶数表示后面还有字节，为奇数表示这是最后一个字节。
pub const BITS_PER_UNIT: usize = DATA_BITS_PER_UNIT + 1;

/// 编码时光标经过的 alpha 字节会被强制设为完全不透明。
pub const OPAQUE_ALPHA: u8 = 255;

/// 未指定输出路径时，隐写结果图像文件名的前缀。
pub const DOCTORED_PREFIX: &str = "doctored_";
