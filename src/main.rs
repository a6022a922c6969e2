//! # Tauri 图标导出工具 — 命令行入口
//!
//! 本文件仅负责日志初始化与参数解析，业务逻辑见 `icon_export`。

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tauri_icon_export::error::AppError;
use tauri_icon_export::icon_export::{ExportConfig, IconExporter};

const DEFAULT_SOURCE_IMAGE: &str = "app-icon.png";

/// 输入一张高清图片，生成 Tauri 所需的 PNG / ICO / ICNS 图标集合。
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// 源图片路径（建议 1024x1024 PNG）
    #[arg(default_value = DEFAULT_SOURCE_IMAGE)]
    source: PathBuf,

    /// 输出目录，不存在时自动创建
    output_dir: Option<PathBuf>,
}

fn run(cli: Cli) -> Result<(), AppError> {
    let exporter = IconExporter::new(ExportConfig::default());
    let report = exporter.export(&cli.source, cli.output_dir.as_deref())?;

    for warning in &report.warnings {
        eprintln!("警告: {}", warning);
    }
    println!(
        "所有图标已生成完毕！请查看 '{}' 文件夹（{} 个文件）。",
        report.output_dir.display(),
        report.written.len()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if err.is_input_error() {
                log::error!("输入无效，未生成任何文件: {err}");
            } else {
                log::error!("图标导出失败: {err}");
            }
            eprintln!("错误: {err}");
            ExitCode::FAILURE
        }
    }
}
