//! # 命令处理逻辑模块
//!
//! 包含处理 `encode`、`decode` 和 `capacity` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心隐写算法以及向用户报告结果。

use crate::cli::{CapacityArgs, DecodeArgs, EncodeArgs};
use crate::constants::DOCTORED_PREFIX;
use crate::error::StegoError;
use crate::image_io::{hide_in_image, load_rgba, reveal_from_image, save_rgba};
use crate::steganography::capacity;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// 未指定输出路径时，隐写图像的默认路径：与输入图像同目录的 `doctored_<名称>.png`。
pub fn default_dest(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    image.with_file_name(format!("{DOCTORED_PREFIX}{stem}.png"))
}

/// 目标文件已存在且未指定 `--force` 时拒绝继续。
fn ensure_writable(path: &Path, force: bool) -> Result<(), StegoError> {
    if path.exists() && !force {
        return Err(StegoError::OutputExists {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// 根据参数取得要隐藏的载荷：`--text` 的字面文本，或 `--data` 文件的全部字节。
fn read_payload(args: &EncodeArgs) -> Result<Vec<u8>, StegoError> {
    match (&args.text, &args.data) {
        (Some(text), _) => Ok(text.as_bytes().to_vec()),
        (None, Some(path)) => fs::read(path).map_err(|source| StegoError::PayloadRead {
            path: path.clone(),
            source,
        }),
        (None, None) => Err(StegoError::EmptyPayload),
    }
}

/// 处理 'Encode' 命令的执行逻辑。
///
/// 负责读取载荷与图像、检查容量、调用隐写核心函数，最后将结果写入目标图像文件。
/// 载荷读取失败时不会加载图像；任何失败都不会写出图像。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径与载荷来源的 `EncodeArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 目标文件已存在且未指定 `--force`。
/// * 无法读取载荷文件或输入图像。
/// * 载荷为空，或图像没有足够的空间容纳载荷。
/// * 无法写入到目标图像文件。
pub fn handle_encode(args: EncodeArgs) -> Result<()> {
    let dest = args.dest.clone().unwrap_or_else(|| default_dest(&args.image));
    ensure_writable(&dest, args.force)?;

    let payload = read_payload(&args).with_context(|| {
        format!(
            "Unable to read the data to hide for image: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;
    log::info!("read {} payload byte(s)", payload.len());

    let mut picture = load_rgba(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    hide_in_image(&mut picture, &payload).with_context(|| {
        format!(
            "Failed to hide {} byte(s) in the image. \nThe image can hold at most {} byte(s).",
            payload.len().to_string().red().bold(),
            capacity(picture.len()).to_string().green().bold()
        )
    })?;

    save_rgba(&picture, &dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;
    log::info!("wrote '{}'", dest.display());

    println!(
        "The data has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Decode' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、恢复隐藏的字节，
/// 并将其写入目标文件，或在未指定输出路径时打印到标准输出。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `DecodeArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 目标文件已存在且未指定 `--force`。
/// * 无法读取输入的图像文件。
/// * 无法写入到目标文件或标准输出。
pub fn handle_decode(args: DecodeArgs) -> Result<()> {
    if let Some(output) = &args.output {
        ensure_writable(output, args.force)?;
    }

    let picture = load_rgba(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let message = reveal_from_image(&picture);
    log::info!("recovered {} byte(s)", message.len());

    match &args.output {
        Some(output) => {
            fs::write(output, &message)
                .map_err(|source| StegoError::OutputWrite {
                    path: output.clone(),
                    source,
                })
                .with_context(|| {
                    format!(
                        "Unable to write to target file: {}",
                        output.to_string_lossy().red().bold()
                    )
                })?;

            println!(
                "The data has been successfully recovered and saved: {}",
                output.to_string_lossy().green().bold()
            );
        }
        None => {
            let print = |out: &mut dyn Write| -> io::Result<()> {
                out.write_all(&message)?;
                out.write_all(b"\n")?;
                out.flush()
            };
            print(&mut io::stdout().lock())
                .map_err(|source| StegoError::OutputWrite {
                    path: PathBuf::from("<stdout>"),
                    source,
                })?;
        }
    }

    Ok(())
}

/// 处理 'Capacity' 命令的执行逻辑：报告图像最多能隐藏的字节数。
///
/// # Errors
///
/// 无法读取输入的图像文件时返回错误。
pub fn handle_capacity(args: CapacityArgs) -> Result<()> {
    let picture = load_rgba(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "{} ({}x{}) can hide up to {} byte(s).",
        args.image.to_string_lossy().green().bold(),
        picture.width(),
        picture.height(),
        capacity(picture.len()).to_string().green().bold()
    );

    Ok(())
}
