//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 命令行入口统一返回 `Result<T, AppError>`，库内错误通过 `From` 自动上转，
//! 最终以人类可读的消息输出给用户。

use crate::icon_export::IconError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 图标导出流水线错误（加载 / 解码 / 编码 / 写入）
    #[error("{0}")]
    Icon(#[from] IconError),
}

impl AppError {
    /// 源文件缺失与解码失败属于用户输入问题，其余为环境问题。
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Icon(IconError::MissingSource(_) | IconError::DecodeFailure(_))
        )
    }
}
