//! 统一错误处理模块
//!
//! 提供调试面板范围内的统一错误类型定义
//!
//! ## 错误类型分层
//!
//! - **发现错误** (`DiscoveryError`): 设置源缺失或不可读，就地恢复为空注册表
//! - **绑定错误** (`BindingError`): 设置源拒绝写入或读取失败，视觉状态保持不变
//! - **焦点错误** (`FocusError`): 面板不存在或状态转换不合法
//!
//! `BoardError` 可以同时承载以上所有错误，供错误聚合器统计。
//! 手势超时不是错误，而是正常的复位转换。

use thiserror::Error;

/// 调试面板核心错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoardError {
    #[error("Discovery error: {0}")]
    Discovery(#[from] DiscoveryError),

    #[error("Binding error: {0}")]
    Binding(#[from] BindingError),

    #[error("Focus error: {0}")]
    Focus(#[from] FocusError),

    #[error("General error: {0}")]
    General(String),
}

impl BoardError {
    /// 错误类型名称（用于聚合统计）
    pub fn type_name(&self) -> &'static str {
        match self {
            BoardError::Discovery(_) => "Discovery",
            BoardError::Binding(_) => "Binding",
            BoardError::Focus(_) => "Focus",
            BoardError::General(_) => "General",
        }
    }
}

/// 选项发现错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryError {
    #[error("Settings source is missing")]
    SourceMissing,

    #[error("Option is not readable: {key}")]
    Unreadable { key: String },

    #[error("Duplicate option key: {key}")]
    DuplicateKey { key: String },
}

/// 开关绑定错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Write rejected for {key}: {reason}")]
    WriteRejected { key: String, reason: String },

    #[error("Value for {key} did not change after write")]
    WriteNotApplied { key: String },
}

/// 面板焦点错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FocusError {
    #[error("Unknown panel: {0}")]
    UnknownPanel(u32),

    #[error("Invalid focus transition for panel {panel}: {from} -> {to}")]
    InvalidTransition {
        panel: u32,
        from: &'static str,
        to: &'static str,
    },
}

/// 结果类型别名
pub type BoardResult<T> = Result<T, BoardError>;
pub type DiscoveryResult<T> = Result<T, DiscoveryError>;
pub type BindingResult<T> = Result<T, BindingError>;
pub type FocusResult<T> = Result<T, FocusError>;
