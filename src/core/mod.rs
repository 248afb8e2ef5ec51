//! 核心模块
//!
//! 包含面板的基础设施：
//! - `error` - 错误类型定义
//! - `error_aggregator` - 可恢复错误的统计
//! - `macros` - `impl_default!` 与 `declare_settings!`
//! - `utils` - 时间戳与标签工具

pub mod error;
pub mod error_aggregator;
pub mod utils;
#[macro_use]
pub mod macros;

// 重新导出错误类型
pub use error::{
    BindingError, BindingResult, BoardError, BoardResult, DiscoveryError, DiscoveryResult,
    FocusError, FocusResult,
};

// 重新导出错误聚合器
pub use error_aggregator::{ErrorAggregator, ErrorRecord, ErrorStats, ErrorSummary};

pub use utils::{current_timestamp_ms, nicify_key};
