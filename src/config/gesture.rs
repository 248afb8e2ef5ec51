use super::{ConfigError, ConfigResult};
use crate::impl_default;
use crate::xr::InputSymbol;
use serde::{Deserialize, Serialize};

/// 隐藏手势配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// 解锁序列
    pub sequence: Vec<InputSymbol>,

    /// 每一步的超时（秒）
    pub step_timeout_secs: f32,

    /// 摇杆方向判定死区
    pub thumbstick_deadzone: f32,
}

impl_default!(GestureConfig {
    sequence: vec![
        InputSymbol::Up,
        InputSymbol::Up,
        InputSymbol::Down,
        InputSymbol::Down,
        InputSymbol::Left,
        InputSymbol::Right,
        InputSymbol::Left,
        InputSymbol::Right,
        InputSymbol::B,
        InputSymbol::A,
    ],
    step_timeout_secs: 1.5,
    thumbstick_deadzone: 0.5,
});

impl GestureConfig {
    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.sequence.is_empty() {
            return Err(ConfigError::ValidationError(
                "gesture.sequence must not be empty".to_string(),
            ));
        }
        if !(self.step_timeout_secs > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "gesture.step_timeout_secs must be positive, got {}",
                self.step_timeout_secs
            )));
        }
        if !(self.thumbstick_deadzone > 0.0 && self.thumbstick_deadzone < 1.0) {
            return Err(ConfigError::ValidationError(format!(
                "gesture.thumbstick_deadzone must be in (0, 1), got {}",
                self.thumbstick_deadzone
            )));
        }
        Ok(())
    }
}
