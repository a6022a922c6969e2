//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconExporter` 只负责流程编排，处理链路固定为：
//! 1. 加载并校验源图（失败则不产生任何输出，也不创建目录）
//! 2. 创建输出目录
//! 3. 按规格表生成 PNG
//! 4. 生成 `.ico`
//! 5. 源图足够大时生成 `.icns`，否则记录告警并跳过
//!
//! ## 实现思路
//!
//! 单线程同步执行，每个文件写完再处理下一个。
//! 记录 `load/png/ico/icns/total` 阶段耗时，便于诊断。

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use super::loader::load_source;
use super::pipeline::resize_square;
use super::source::{ExportReport, OutputKind, SourceImage, WrittenIcon};
use super::table::{ICNS_ELEMENTS, ICNS_FILE_NAME, ICO_FILE_NAME, ICO_SIZES, png_icons};
use super::writer::{write_icns, write_ico, write_png};
use super::{ExportConfig, ExportWarning, IconError};

/// 图标导出器。
pub struct IconExporter {
    config: ExportConfig,
}

impl IconExporter {
    /// # 示例
    /// ```rust,no_run
    /// use std::path::Path;
    /// use tauri_icon_export::icon_export::{ExportConfig, IconExporter};
    ///
    /// let exporter = IconExporter::new(ExportConfig::default());
    /// let report = exporter.export(Path::new("app-icon.png"), None)?;
    /// println!("{} files", report.written.len());
    /// # Ok::<(), tauri_icon_export::icon_export::IconError>(())
    /// ```
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// 执行完整导出。`output_dir` 为 `None` 时使用配置中的默认目录。
    pub fn export(
        &self,
        source_path: &Path,
        output_dir: Option<&Path>,
    ) -> Result<ExportReport, IconError> {
        let total_start = Instant::now();
        let output_dir = output_dir.unwrap_or(self.config.output_dir.as_path());

        let load_start = Instant::now();
        let source = load_source(source_path, &self.config)?;
        let load_ms = load_start.elapsed().as_millis();

        ensure_output_dir(output_dir)?;

        let mut report = ExportReport {
            output_dir: output_dir.to_path_buf(),
            ..ExportReport::default()
        };

        let png_start = Instant::now();
        self.export_pngs(&source, output_dir, &mut report)?;
        let png_ms = png_start.elapsed().as_millis();

        let ico_start = Instant::now();
        self.export_ico(&source, output_dir, &mut report)?;
        let ico_ms = ico_start.elapsed().as_millis();

        let icns_start = Instant::now();
        self.export_icns(&source, output_dir, &mut report)?;
        let icns_ms = icns_start.elapsed().as_millis();

        log::info!(
            "⏱️ 阶段耗时 - load: {}ms, png: {}ms, ico: {}ms, icns: {}ms, total: {}ms",
            load_ms,
            png_ms,
            ico_ms,
            icns_ms,
            total_start.elapsed().as_millis()
        );
        log::info!(
            "✅ 所有图标已生成完毕：{} 个文件，{} 条告警，目录 '{}'",
            report.written.len(),
            report.warnings.len(),
            output_dir.display()
        );

        Ok(report)
    }

    fn export_pngs(
        &self,
        source: &SourceImage,
        output_dir: &Path,
        report: &mut ExportReport,
    ) -> Result<(), IconError> {
        log::info!("🖼️ 正在生成 PNG 图标...");
        for spec in png_icons() {
            let resized = resize_square(source, spec.size, self.config.resize_filter)?;
            let path = output_dir.join(spec.file_name);
            write_png(&resized, &path)?;
            log::info!(" -> 已生成: {} ({}x{})", spec.file_name, spec.size, spec.size);
            report.written.push(WrittenIcon {
                path,
                kind: OutputKind::Png,
                size: spec.size,
            });
        }
        Ok(())
    }

    fn export_ico(
        &self,
        source: &SourceImage,
        output_dir: &Path,
        report: &mut ExportReport,
    ) -> Result<(), IconError> {
        let path = output_dir.join(ICO_FILE_NAME);
        write_ico(source, ICO_SIZES, self.config.resize_filter, &path)?;
        log::info!(" -> 已生成: {} (包含层级: {:?})", ICO_FILE_NAME, ICO_SIZES);
        report.written.push(WrittenIcon {
            path,
            kind: OutputKind::Ico,
            size: ICO_SIZES.iter().copied().max().unwrap_or_default(),
        });
        Ok(())
    }

    fn export_icns(
        &self,
        source: &SourceImage,
        output_dir: &Path,
        report: &mut ExportReport,
    ) -> Result<(), IconError> {
        let min = self.config.icns_min_dimension;
        if source.width() < min || source.height() < min {
            let warning = ExportWarning::UndersizedSource {
                width: source.width(),
                height: source.height(),
                min,
            };
            log::warn!("⚠️ {}", warning);
            report.warnings.push(warning);
            return Ok(());
        }

        let path = output_dir.join(ICNS_FILE_NAME);
        write_icns(source, ICNS_ELEMENTS, self.config.resize_filter, &path)?;
        log::info!(" -> 已生成: {} ({} 个元素)", ICNS_FILE_NAME, ICNS_ELEMENTS.len());
        report.written.push(WrittenIcon {
            path,
            kind: OutputKind::Icns,
            size: ICNS_ELEMENTS
                .iter()
                .map(|t| t.pixel_width())
                .max()
                .unwrap_or_default(),
        });
        Ok(())
    }
}

/// 使用默认配置导出到 `output_dir`（`None` 时为 `icons`）。
pub fn export_icons(
    source_path: impl AsRef<Path>,
    output_dir: Option<PathBuf>,
) -> Result<ExportReport, IconError> {
    IconExporter::new(ExportConfig::default()).export(source_path.as_ref(), output_dir.as_deref())
}

fn ensure_output_dir(dir: &Path) -> Result<(), IconError> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|e| {
        IconError::FileSystem(format!("创建输出目录 '{}' 失败：{}", dir.display(), e))
    })?;
    log::info!("📂 创建目录: {}", dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    fn unique_temp_dir() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock error")
            .as_nanos();
        let seq = COUNTER.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir().join(format!("tauri-icon-export-exporter-{nanos}-{seq}"))
    }

    #[test]
    fn ensure_output_dir_creates_nested_dirs() {
        let root = unique_temp_dir();
        let nested = root.join("a").join("b");

        ensure_output_dir(&nested).expect("create dirs");
        assert!(nested.is_dir());
        ensure_output_dir(&nested).expect("existing dir is fine");

        let _ = std::fs::remove_dir_all(root);
    }

    #[test]
    fn ensure_output_dir_fails_when_path_is_a_file() {
        let root = unique_temp_dir();
        std::fs::create_dir_all(&root).expect("create root");
        let file = root.join("occupied");
        std::fs::write(&file, b"x").expect("write file");

        let result = ensure_output_dir(&file);
        assert!(matches!(result, Err(IconError::FileSystem(_))));

        let _ = std::fs::remove_dir_all(root);
    }

    #[test]
    fn missing_source_does_not_create_output_dir() {
        let root = unique_temp_dir();
        let out = root.join("icons");
        let exporter = IconExporter::new(ExportConfig::default());

        let result = exporter.export(&root.join("missing.png"), Some(&out));
        assert!(matches!(result, Err(IconError::MissingSource(_))));
        assert!(!out.exists());
    }
}
