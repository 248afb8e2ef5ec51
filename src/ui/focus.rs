//! 面板焦点状态机
//!
//! 状态：Compact（初始）→ Expanding → Expanded → Collapsing → Compact。
//! 整个面板架上同一时刻最多只有一个面板处于 Expanding 或 Expanded。

use super::layout::{compact_placement, compact_slot, expanded_placement};
use crate::config::LayoutConfig;
use crate::core::error::{FocusError, FocusResult};
use crate::xr::Pose;
use glam::Vec3;

/// 面板标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelId(pub u32);

/// 焦点状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusState {
    Compact,
    Expanding,
    Expanded,
    Collapsing,
}

impl FocusState {
    pub fn name(&self) -> &'static str {
        match self {
            FocusState::Compact => "Compact",
            FocusState::Expanding => "Expanding",
            FocusState::Expanded => "Expanded",
            FocusState::Collapsing => "Collapsing",
        }
    }

    /// 处于 Expanding 或 Expanded
    pub fn is_focused(&self) -> bool {
        matches!(self, FocusState::Expanding | FocusState::Expanded)
    }
}

/// 状态变化记录
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusChange {
    pub panel: PanelId,
    pub state: FocusState,
}

/// 面板
#[derive(Debug, Clone)]
pub struct Panel {
    pub id: PanelId,
    pub state: FocusState,
    /// 面板架上的局部槽位
    pub slot: Vec3,
    /// 当前过渡已经持续的时间（秒）
    pub transition_elapsed: f32,
    /// 最近一次计算的世界姿态
    pub placement: Pose,
}

/// 面板架的焦点管理
#[derive(Debug)]
pub struct FocusBoard {
    panels: Vec<Panel>,
    focused: Option<PanelId>,
    board_pose: Pose,
    layout: LayoutConfig,
    changes: Vec<FocusChange>,
}

impl FocusBoard {
    pub fn new(layout: LayoutConfig) -> Self {
        Self {
            panels: Vec::new(),
            focused: None,
            board_pose: Pose::default(),
            layout,
            changes: Vec::new(),
        }
    }

    /// 添加一个紧凑面板
    pub fn add_panel(&mut self) -> PanelId {
        let id = PanelId(self.panels.len() as u32);
        let slot = compact_slot(self.panels.len(), &self.layout);
        self.panels.push(Panel {
            id,
            state: FocusState::Compact,
            slot,
            transition_elapsed: 0.0,
            placement: compact_placement(&self.board_pose, slot),
        });
        id
    }

    /// 设置面板架在世界中的姿态
    pub fn set_board_pose(&mut self, pose: Pose) {
        self.board_pose = pose;
    }

    /// 请求聚焦
    ///
    /// 已经聚焦的面板不做任何事；其他聚焦中的面板开始收起。
    pub fn request_focus(&mut self, id: PanelId) -> FocusResult<()> {
        let index = self.index_of(id)?;
        if self.panels[index].state.is_focused() {
            return Ok(());
        }

        let duration = self.layout.transition_seconds;
        for i in 0..self.panels.len() {
            if i != index && self.panels[i].state.is_focused() {
                self.begin(i, FocusState::Collapsing, duration);
            }
        }
        self.begin(index, FocusState::Expanding, duration);
        self.focused = Some(id);
        tracing::debug!(target: "focus", "Panel {} focused", id.0);
        Ok(())
    }

    /// 请求取消聚焦，只允许从 Expanded 开始
    pub fn request_unfocus(&mut self, id: PanelId) -> FocusResult<()> {
        let index = self.index_of(id)?;
        let state = self.panels[index].state;
        if state != FocusState::Expanded {
            return Err(FocusError::InvalidTransition {
                panel: id.0,
                from: state.name(),
                to: FocusState::Collapsing.name(),
            });
        }
        self.begin(index, FocusState::Collapsing, self.layout.transition_seconds);
        if self.focused == Some(id) {
            self.focused = None;
        }
        Ok(())
    }

    /// 外部通知动画完成
    ///
    /// 没有进行中的过渡时返回 `false`（迟到的通知是正常的）。
    pub fn finish_transition(&mut self, id: PanelId) -> FocusResult<bool> {
        let index = self.index_of(id)?;
        Ok(self.complete(index))
    }

    /// 推进过渡计时并根据视点更新所有面板的姿态
    pub fn tick(&mut self, delta_time: f32, viewpoint: &Pose) {
        let duration = self.layout.transition_seconds;
        if duration > 0.0 {
            for index in 0..self.panels.len() {
                let panel = &mut self.panels[index];
                if matches!(panel.state, FocusState::Expanding | FocusState::Collapsing) {
                    panel.transition_elapsed += delta_time.max(0.0);
                    if panel.transition_elapsed >= duration {
                        self.complete(index);
                    }
                }
            }
        }

        let expanded = expanded_placement(viewpoint, &self.layout);
        for panel in &mut self.panels {
            let compact = compact_placement(&self.board_pose, panel.slot);
            let progress = if duration > 0.0 {
                (panel.transition_elapsed / duration).clamp(0.0, 1.0)
            } else {
                0.0
            };
            panel.placement = match panel.state {
                FocusState::Compact => compact,
                FocusState::Expanded => expanded,
                FocusState::Expanding => compact.lerp(&expanded, progress),
                FocusState::Collapsing => expanded.lerp(&compact, progress),
            };
        }
    }

    /// 取走自上次调用以来的状态变化
    pub fn drain_changes(&mut self) -> Vec<FocusChange> {
        std::mem::take(&mut self.changes)
    }

    pub fn state(&self, id: PanelId) -> Option<FocusState> {
        self.panel(id).map(|panel| panel.state)
    }

    pub fn placement(&self, id: PanelId) -> Option<Pose> {
        self.panel(id).map(|panel| panel.placement)
    }

    pub fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.panels.iter().find(|panel| panel.id == id)
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// 当前聚焦的面板
    pub fn focused(&self) -> Option<PanelId> {
        self.focused
    }

    fn index_of(&self, id: PanelId) -> FocusResult<usize> {
        self.panels
            .iter()
            .position(|panel| panel.id == id)
            .ok_or(FocusError::UnknownPanel(id.0))
    }

    /// 进入过渡状态；从相反方向的过渡中途折返时保持当前位置
    fn begin(&mut self, index: usize, state: FocusState, duration: f32) {
        let panel = &mut self.panels[index];
        let reversing = matches!(
            (panel.state, state),
            (FocusState::Expanding, FocusState::Collapsing)
                | (FocusState::Collapsing, FocusState::Expanding)
        );
        panel.transition_elapsed = if reversing {
            (duration - panel.transition_elapsed).max(0.0)
        } else {
            0.0
        };
        panel.state = state;
        self.changes.push(FocusChange {
            panel: panel.id,
            state,
        });
    }

    fn complete(&mut self, index: usize) -> bool {
        let panel = &mut self.panels[index];
        let next = match panel.state {
            FocusState::Expanding => FocusState::Expanded,
            FocusState::Collapsing => FocusState::Compact,
            _ => return false,
        };
        panel.state = next;
        panel.transition_elapsed = 0.0;
        self.changes.push(FocusChange {
            panel: panel.id,
            state: next,
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;

    fn board(transition_seconds: f32) -> (FocusBoard, PanelId, PanelId) {
        let layout = LayoutConfig {
            transition_seconds,
            ..LayoutConfig::default()
        };
        let mut board = FocusBoard::new(layout);
        let p1 = board.add_panel();
        let p2 = board.add_panel();
        (board, p1, p2)
    }

    fn focused_count(board: &FocusBoard) -> usize {
        board
            .panels()
            .iter()
            .filter(|panel| panel.state.is_focused())
            .count()
    }

    #[test]
    fn test_focus_and_unfocus_cycle() {
        let (mut board, p1, _) = board(0.0);
        board.request_focus(p1).unwrap();
        assert_eq!(board.state(p1), Some(FocusState::Expanding));
        assert!(board.finish_transition(p1).unwrap());
        assert_eq!(board.state(p1), Some(FocusState::Expanded));

        board.request_unfocus(p1).unwrap();
        assert_eq!(board.state(p1), Some(FocusState::Collapsing));
        assert_eq!(board.focused(), None);
        board.finish_transition(p1).unwrap();
        assert_eq!(board.state(p1), Some(FocusState::Compact));
        assert!(!board.finish_transition(p1).unwrap());

        let states: Vec<FocusState> = board.drain_changes().iter().map(|c| c.state).collect();
        assert_eq!(
            states,
            vec![
                FocusState::Expanding,
                FocusState::Expanded,
                FocusState::Collapsing,
                FocusState::Compact
            ]
        );
    }

    #[test]
    fn test_switching_focus_never_double_expands() {
        let (mut board, p1, p2) = board(0.0);
        board.request_focus(p1).unwrap();
        board.finish_transition(p1).unwrap();

        board.request_focus(p2).unwrap();
        assert_eq!(focused_count(&board), 1);
        assert_eq!(board.state(p1), Some(FocusState::Collapsing));
        assert_eq!(board.state(p2), Some(FocusState::Expanding));
        assert_eq!(board.focused(), Some(p2));

        board.finish_transition(p2).unwrap();
        assert_eq!(focused_count(&board), 1);
        board.finish_transition(p1).unwrap();
        assert_eq!(board.state(p1), Some(FocusState::Compact));
        assert_eq!(board.state(p2), Some(FocusState::Expanded));
    }

    #[test]
    fn test_focus_on_expanded_is_noop() {
        let (mut board, p1, _) = board(0.0);
        board.request_focus(p1).unwrap();
        board.finish_transition(p1).unwrap();
        board.drain_changes();

        board.request_focus(p1).unwrap();
        assert_eq!(board.state(p1), Some(FocusState::Expanded));
        assert!(board.drain_changes().is_empty());
    }

    #[test]
    fn test_unfocus_requires_expanded() {
        let (mut board, p1, _) = board(0.0);
        assert_eq!(
            board.request_unfocus(p1),
            Err(FocusError::InvalidTransition {
                panel: 0,
                from: "Compact",
                to: "Collapsing"
            })
        );
        board.request_focus(p1).unwrap();
        assert!(board.request_unfocus(p1).is_err());
        assert_eq!(board.state(p1), Some(FocusState::Expanding));
        assert_eq!(
            board.request_focus(PanelId(7)),
            Err(FocusError::UnknownPanel(7))
        );
    }

    #[test]
    fn test_tick_completes_transitions() {
        let (mut board, p1, p2) = board(0.2);
        let viewpoint = Pose::default();
        board.request_focus(p1).unwrap();
        board.tick(0.1, &viewpoint);
        assert_eq!(board.state(p1), Some(FocusState::Expanding));
        board.tick(0.15, &viewpoint);
        assert_eq!(board.state(p1), Some(FocusState::Expanded));

        board.request_focus(p2).unwrap();
        for _ in 0..10 {
            board.tick(0.05, &viewpoint);
            assert!(focused_count(&board) <= 1);
        }
        assert_eq!(board.state(p1), Some(FocusState::Compact));
        assert_eq!(board.state(p2), Some(FocusState::Expanded));
    }

    #[test]
    fn test_reversing_midway_keeps_position() {
        let (mut board, p1, p2) = board(1.0);
        let viewpoint = Pose::default();
        board.request_focus(p1).unwrap();
        board.tick(0.3, &viewpoint);
        board.request_focus(p2).unwrap();
        // 展开了 30% 的面板收起时还剩 30% 的路程
        let p1_panel = board.panel(p1).unwrap();
        assert_eq!(p1_panel.state, FocusState::Collapsing);
        assert!((p1_panel.transition_elapsed - 0.7).abs() < 1e-5);
    }

    #[test]
    fn test_expanded_panel_tracks_viewpoint() {
        let (mut board, p1, p2) = board(0.0);
        board.request_focus(p1).unwrap();
        board.finish_transition(p1).unwrap();

        let mut viewpoint = Pose::default();
        board.tick(0.016, &viewpoint);
        let first = board.placement(p1).unwrap();
        let compact_before = board.placement(p2).unwrap();

        viewpoint.position = Vec3::new(1.0, 0.0, 0.0);
        viewpoint.orientation = Quat::from_rotation_y(0.5);
        board.tick(0.016, &viewpoint);
        let second = board.placement(p1).unwrap();
        assert!((first.position - second.position).length() > 0.5);
        // 紧凑面板只跟随面板架
        assert_eq!(board.placement(p2).unwrap(), compact_before);
    }
}
