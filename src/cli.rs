//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// 一款基于奇偶 (最低有效位) 隐写术的命令行工具，用于在 RGBA 图像的像素数据中隐藏或恢复任意字节。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于奇偶 (最低有效位) 隐写术的命令行工具，用于在 RGBA 图像的像素数据中隐藏或恢复任意字节。\n\
                  数据不加密，只做位级隐藏。输出请使用无损格式 (如 PNG, BMP)。"
)]
pub struct Cli {
    /// 提高日志详细程度 (-v 为 info，-vv 为 debug)。`RUST_LOG` 优先。
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：encode (隐藏)、decode (恢复) 和 capacity (查询容量)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 将文本或文件内容隐藏到图像中。
    Encode(EncodeArgs),

    /// 从经过隐写的图像中恢复隐藏的数据。
    Decode(DecodeArgs),

    /// 显示图像最多能隐藏多少字节。
    Capacity(CapacityArgs),
}

/// 'encode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct EncodeArgs {
    /// 用于隐写的输入图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 隐写完成后保存结果图像的路径。默认为输入图像旁的 `doctored_<名称>.png`。
    #[arg(short = 'o', long)]
    pub dest: Option<PathBuf>,

    /// 要隐藏的文件路径，按原始字节读取。
    #[arg(short, long, conflicts_with = "text", required_unless_present = "text")]
    pub data: Option<PathBuf>,

    /// 要隐藏的文本内容。
    #[arg(short, long)]
    pub text: Option<String>,

    /// 目标文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'decode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct DecodeArgs {
    /// 已隐藏数据的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 保存恢复数据的路径。省略时输出到标准输出。
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 目标文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'capacity' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct CapacityArgs {
    /// 要检查的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,
}
