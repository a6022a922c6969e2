//! # 图标导出模块（icon_export）
//!
//! ## 设计思路
//!
//! 将“源图加载校验 → 缩放 → 写入 PNG / ICO / ICNS”按职责拆分为多个子模块。
//!
//! - `table`：文件名 → 尺寸的静态规格表
//! - `config/error/source`：配置、错误、中间数据模型
//! - `loader`：源图存在性、体积、像素上限校验与解码
//! - `pipeline`：正方形缩放
//! - `writer`：三种输出格式的编码与落盘
//! - `exporter`：编排整条流程
//!
//! ## 调用链
//!
//! ```text
//! main.rs（命令行参数）
//!    ↓
//! exporter.rs（统一编排 + 阶段耗时日志）
//!    ├─ loader.rs（加载 + 校验 + RGBA 归一）
//!    ├─ pipeline.rs（缩放）
//!    └─ writer.rs（PNG / ICO / ICNS）
//!    ↓
//! ExportReport（产物清单 + 告警）
//! ```

mod config;
mod error;
mod exporter;
mod loader;
mod pipeline;
mod source;
pub mod table;
mod writer;

pub use config::{DEFAULT_OUTPUT_DIR, ExportConfig, ResizeQuality};
pub use error::{ExportWarning, IconError};
pub use exporter::{IconExporter, export_icons};
pub use loader::load_source;
pub use pipeline::resize_square;
pub use source::{ExportReport, OutputKind, SourceImage, WrittenIcon};
