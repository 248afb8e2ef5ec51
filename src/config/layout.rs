use super::{ConfigError, ConfigResult};
use crate::impl_default;
use serde::{Deserialize, Serialize};

/// 面板布局配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// 展开面板与视点的水平距离（米）
    pub expanded_distance: f32,

    /// 展开面板相对视点的高度偏移（米）
    pub expanded_height_offset: f32,

    /// 展开/收起动画时长（秒），0 表示完全由外部通知完成
    pub transition_seconds: f32,

    /// 紧凑面板在面板架上的间距（米）
    pub compact_spacing: f32,
}

impl_default!(LayoutConfig {
    expanded_distance: 0.6,
    expanded_height_offset: -0.1,
    transition_seconds: 0.25,
    compact_spacing: 0.35,
});

impl LayoutConfig {
    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.expanded_distance > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "layout.expanded_distance must be positive, got {}",
                self.expanded_distance
            )));
        }
        if !(self.transition_seconds >= 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "layout.transition_seconds must not be negative, got {}",
                self.transition_seconds
            )));
        }
        if !self.expanded_height_offset.is_finite() || !self.compact_spacing.is_finite() {
            return Err(ConfigError::ValidationError(
                "layout offsets must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
