//! 隐藏手势识别
//!
//! 把输入符号流与固定序列匹配。完整匹配后锁存为已解锁，本次进程内不会再复位，
//! 也不会重复触发解锁通知；锁存状态不做持久化。

use super::InputSymbol;
use crate::config::GestureConfig;

/// 单次 `feed` 之后的识别进度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureProgress {
    /// 没有部分匹配
    Idle,
    /// 已匹配前若干个符号
    Progressing,
    /// 已解锁（永久）
    Unlocked,
}

/// 手势识别器
#[derive(Debug, Clone)]
pub struct GestureRecognizer {
    sequence: Vec<InputSymbol>,
    step_timeout: f32,
    /// 已匹配的符号数
    position: usize,
    /// 距上一次匹配成功的时间（秒），没有部分匹配时为 `None`
    step_elapsed: Option<f32>,
    unlocked: bool,
    unlock_pending: bool,
}

impl GestureRecognizer {
    /// 创建识别器
    ///
    /// 空序列永远不会解锁。
    pub fn new(sequence: Vec<InputSymbol>, step_timeout: f32) -> Self {
        Self {
            sequence,
            step_timeout: step_timeout.max(0.0),
            position: 0,
            step_elapsed: None,
            unlocked: false,
            unlock_pending: false,
        }
    }

    pub fn from_config(config: &GestureConfig) -> Self {
        Self::new(config.sequence.clone(), config.step_timeout_secs)
    }

    /// 推进步骤计时并检查超时
    pub fn tick(&mut self, delta_time: f32) {
        if self.unlocked {
            return;
        }
        if let Some(elapsed) = self.step_elapsed.as_mut() {
            *elapsed += delta_time.max(0.0);
        }
        self.expire_if_due();
    }

    /// 输入一个符号
    pub fn feed(&mut self, symbol: InputSymbol) -> GestureProgress {
        if self.unlocked {
            return GestureProgress::Unlocked;
        }
        if self.sequence.is_empty() {
            return GestureProgress::Idle;
        }
        // 发现超时的这次调用只负责复位，不作为新的起始符号
        if self.expire_if_due() {
            return GestureProgress::Idle;
        }

        if self.sequence[self.position] == symbol {
            self.position += 1;
        } else if self.sequence[0] == symbol {
            self.position = 1;
        } else {
            if self.position > 0 {
                tracing::trace!(target: "gesture", "Mismatch at step {}, resetting", self.position);
            }
            self.position = 0;
            self.step_elapsed = None;
            return GestureProgress::Idle;
        }

        if self.position == self.sequence.len() {
            self.unlocked = true;
            self.unlock_pending = true;
            self.step_elapsed = None;
            tracing::info!(target: "gesture", "Secret gesture matched, hidden options unlocked");
            return GestureProgress::Unlocked;
        }

        self.step_elapsed = Some(0.0);
        GestureProgress::Progressing
    }

    /// 取走一次性的解锁通知
    ///
    /// 解锁后第一次调用返回 `true`，之后永远返回 `false`。
    pub fn take_unlock(&mut self) -> bool {
        std::mem::take(&mut self.unlock_pending)
    }

    /// 当前状态
    pub fn progress(&self) -> GestureProgress {
        if self.unlocked {
            GestureProgress::Unlocked
        } else if self.position > 0 {
            GestureProgress::Progressing
        } else {
            GestureProgress::Idle
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// 已匹配的符号数
    pub fn position(&self) -> usize {
        self.position
    }

    fn expire_if_due(&mut self) -> bool {
        match self.step_elapsed {
            Some(elapsed) if elapsed > self.step_timeout => {
                tracing::debug!(
                    target: "gesture",
                    "Gesture timed out after {} of {} steps",
                    self.position,
                    self.sequence.len()
                );
                self.position = 0;
                self.step_elapsed = None;
                true
            }
            _ => false,
        }
    }
}
