//! 面板事件
//!
//! 每一帧 `DebugBoard::tick` 返回的状态变化记录，由呈现层（渲染、音效、触觉）消费。

use crate::ui::{FocusState, PanelId};

/// 状态变化记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    /// 开关的渲染值发生变化（用户激活、批量切换或外部修改）
    ToggleChanged { key: String, value: bool },
    /// 类别批量切换完成，`failed` 为写入失败的成员数
    CategoryToggled {
        category: String,
        target: bool,
        failed: usize,
    },
    /// 隐藏手势匹配成功，每个进程只出现一次
    Unlocked,
    /// 面板焦点状态变化
    FocusChanged { panel: PanelId, state: FocusState },
}

/// 用户在面板上的操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardCommand {
    /// 激活一个开关
    Toggle(String),
    /// 类别一键全开/全关
    ToggleCategory(String),
    /// 聚焦面板
    Focus(PanelId),
    /// 取消聚焦
    Unfocus(PanelId),
    /// 外部动画完成通知
    TransitionFinished(PanelId),
}
