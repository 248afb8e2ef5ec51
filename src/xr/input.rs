//! XR 输入符号
//!
//! 把控制器每帧的连续状态转换为离散符号流：只在按下或方向改变的那一帧产生符号，
//! 空闲时不产生任何符号。

use super::Hand;
use crate::impl_default;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 离散输入符号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputSymbol {
    Up,
    Down,
    Left,
    Right,
    A,
    B,
    X,
    Y,
    Menu,
    Trigger,
    Grip,
}

/// 控制器按钮状态
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControllerButtons {
    pub a: bool,
    pub b: bool,
    pub x: bool,
    pub y: bool,
    pub menu: bool,
}

/// 控制器单帧状态
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerState {
    pub buttons: ControllerButtons,
    /// 扳机值 (0.0 - 1.0)
    pub trigger: f32,
    /// 握力值 (0.0 - 1.0)
    pub squeeze: f32,
    /// 摇杆值，+Y 向上
    pub thumbstick: [f32; 2],
}

impl_default!(ControllerState {
    buttons: ControllerButtons::default(),
    trigger: 0.0,
    squeeze: 0.0,
    thumbstick: [0.0, 0.0],
});

/// 扳机/握把视为"按下"的阈值
const ANALOG_PRESS_THRESHOLD: f32 = 0.5;

/// 每只手上一帧的已解码状态
#[derive(Debug, Clone, Copy, Default)]
struct DecodedState {
    buttons: ControllerButtons,
    trigger_down: bool,
    grip_down: bool,
    direction: Option<InputSymbol>,
}

/// 符号解码器
#[derive(Debug)]
pub struct SymbolDecoder {
    deadzone: f32,
    previous: HashMap<Hand, DecodedState>,
}

impl SymbolDecoder {
    pub fn new(deadzone: f32) -> Self {
        Self {
            deadzone: deadzone.clamp(0.0, 0.99),
            previous: HashMap::new(),
        }
    }

    /// 解码一只手的当前帧状态
    pub fn decode(&mut self, hand: Hand, state: &ControllerState) -> Vec<InputSymbol> {
        let prev = self.previous.get(&hand).copied().unwrap_or_default();
        let mut symbols = Vec::new();

        let direction = self.direction_of(state.thumbstick);
        if direction.is_some() && direction != prev.direction {
            symbols.extend(direction);
        }

        let edges = [
            (state.buttons.a, prev.buttons.a, InputSymbol::A),
            (state.buttons.b, prev.buttons.b, InputSymbol::B),
            (state.buttons.x, prev.buttons.x, InputSymbol::X),
            (state.buttons.y, prev.buttons.y, InputSymbol::Y),
            (state.buttons.menu, prev.buttons.menu, InputSymbol::Menu),
        ];
        for (now, before, symbol) in edges {
            if now && !before {
                symbols.push(symbol);
            }
        }

        let trigger_down = state.trigger >= ANALOG_PRESS_THRESHOLD;
        if trigger_down && !prev.trigger_down {
            symbols.push(InputSymbol::Trigger);
        }
        let grip_down = state.squeeze >= ANALOG_PRESS_THRESHOLD;
        if grip_down && !prev.grip_down {
            symbols.push(InputSymbol::Grip);
        }

        self.previous.insert(
            hand,
            DecodedState {
                buttons: state.buttons,
                trigger_down,
                grip_down,
                direction,
            },
        );

        symbols
    }

    /// 控制器断开时丢弃该手的历史，重连后的第一次按下能被识别
    pub fn reset(&mut self, hand: Hand) {
        self.previous.remove(&hand);
    }

    fn direction_of(&self, stick: [f32; 2]) -> Option<InputSymbol> {
        let [x, y] = stick;
        let magnitude = x.abs().max(y.abs());
        // 死区为 0 时居中的摇杆也不算推动
        if magnitude <= 0.0 || magnitude < self.deadzone {
            return None;
        }
        if x.abs() > y.abs() {
            Some(if x > 0.0 {
                InputSymbol::Right
            } else {
                InputSymbol::Left
            })
        } else {
            Some(if y > 0.0 {
                InputSymbol::Up
            } else {
                InputSymbol::Down
            })
        }
    }
}
