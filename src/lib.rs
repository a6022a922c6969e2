//! # Tauri 图标导出工具 — 库入口
//!
//! 输入一张高清源图，生成 Tauri v2 打包所需的 Windows、Linux、macOS 图标集合。
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 应用级错误类型 `AppError`，命令行入口的返回类型 |
//! | [`icon_export`] | 源图加载校验、缩放、PNG / ICO / ICNS 写入 |
//!
//! ## 产物
//!
//! ```text
//! icons/
//! ├─ 32x32.png  128x128.png  128x128@2x.png  icon.png
//! ├─ Square30x30Logo.png … Square310x310Logo.png  StoreLogo.png
//! ├─ icon.ico   (16/32/48/64/128/256)
//! └─ icon.icns  (源图 ≥ 512x512 时生成)
//! ```

pub mod error;
pub mod icon_export;
