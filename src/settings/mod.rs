//! 调试设置
//!
//! 选项注册表 → 开关绑定 → 类别聚合。设置源由调用方显式传入，没有全局单例。

pub mod aggregator;
pub mod binding;
pub mod registry;
pub mod source;

pub use aggregator::{majority_on, AggregationReport, CategoryAggregator};
pub use binding::{SourceAccessor, ToggleBinding, ToggleBindingState, ToggleVisual, ValueAccessor};
pub use registry::{CategoryGroup, OptionDescriptor, OptionRegistry, UNCATEGORIZED};
pub use source::{OptionSpec, SettingsSource};
