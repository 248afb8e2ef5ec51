//! UI 系统模块
//!
//! 面板架上的面板焦点与摆放。
//!
//! ## 功能特性
//!
//! - 紧凑/展开两种呈现，带过渡状态
//! - 展开的面板持续跟随视点
//! - 紧凑的面板固定在面板架上

pub mod focus;
pub mod layout;

pub use focus::{FocusBoard, FocusChange, FocusState, Panel, PanelId};
pub use layout::{compact_placement, compact_slot, expanded_placement};
