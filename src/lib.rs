//! # Debug Board
//!
//! VR 街机游戏内置调试/设置面板的核心逻辑，与游戏引擎无关。
//!
//! ## Features
//!
//! - **Option Registry**: 从声明表发现布尔设置，按类别分组排序
//! - **Toggle Binding**: 开关与设置值双向绑定，外部修改在下一帧同步
//! - **Category Toggle**: 一键把整个类别切换到多数状态的反面
//! - **Secret Gesture**: 输入序列匹配后解锁隐藏选项，每个进程只触发一次
//! - **Panel Focus**: 面板紧凑/展开状态机，展开的面板跟随视点
//!
//! ## Architecture Design
//!
//! 所有组件都是单线程、帧驱动的：宿主每帧调用一次 [`DebugBoard::tick`]，
//! 得到一组状态变化记录 ([`BoardEvent`])，交给呈现层处理。没有回调，也没有全局单例。
//!
//! ### Example
//!
//! ```
//! use debug_board::config::BoardConfig;
//! use debug_board::{declare_settings, BoardCommand, DebugBoard, FrameInput};
//!
//! declare_settings! {
//!     pub struct DuckSettings {
//!         [category = "Ducks", tooltip = "Draw each duck's flight path"]
//!         show_flight_paths = false,
//!     }
//! }
//!
//! let mut board = DebugBoard::new(DuckSettings::default(), &BoardConfig::default());
//! let input = FrameInput {
//!     commands: vec![BoardCommand::Toggle("show_flight_paths".into())],
//!     ..FrameInput::default()
//! };
//! board.tick(0.016, &input);
//! assert!(board.settings().show_flight_paths);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: 错误类型、错误聚合、宏
//! - [`config`]: 配置文件与环境变量
//! - [`settings`]: 注册表、绑定、类别聚合
//! - [`xr`]: 姿态、输入符号、隐藏手势
//! - [`ui`]: 面板焦点与摆放
//! - [`board`]: 每帧驱动器

/// Core error handling and macros
pub mod core;
/// Configuration system
pub mod config;
/// Option registry, toggle bindings and category aggregation
pub mod settings;
/// XR poses, input symbols and the secret gesture
pub mod xr;
/// Panel focus and layout
pub mod ui;
/// State-change records and user commands
pub mod events;
/// Per-frame driver
pub mod board;

pub use board::{DebugBoard, FrameInput};
pub use events::{BoardCommand, BoardEvent};
